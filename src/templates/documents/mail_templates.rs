use super::{footnote, paper, DocumentContext, DocumentRenderer};
use crate::templates::print_layout;
use maud::{html, Markup};

pub struct MailTemplates;

const DOCUMENT_REQUEST: &str = "Betreff: Anfrage für Besichtigungstermin: [Titel der Immobilie]

Sehr geehrte(r) Frau/Herr [Name des Maklers],

mit großem Interesse habe ich Ihr Immobilienangebot auf Ihrer Website gelesen. Das Objekt und die Lage entsprechen sehr gut meinen Suchkriterien.

Bevor wir einen Besichtigungstermin vereinbaren, möchte ich gerne noch einige Details klären, um meine Finanzierung und Kaufentscheidung bestmöglich vorzubereiten. Ich wäre Ihnen daher sehr dankbar, wenn Sie mir vorab folgende Unterlagen (sofern vorhanden) per E-Mail zukommen lassen könnten:

* Grundrisse
* Wohnflächenberechnung
* Energieausweis
* Aktueller Grundbuchauszug
* Abrechnungen der Nebenkosten der letzten 2 Jahre
* Protokolle der letzten Eigentümerversammlungen (bei Eigentumswohnung)

Sobald ich die Unterlagen gesichtet habe, würde ich mich gerne kurzfristig wegen eines Termins bei Ihnen melden.

Für Rückfragen erreichen Sie mich am besten [z. B. werktags zwischen 16:00 und 18:00 Uhr] unter meiner unten angegebenen Nummer.

Meine Kontaktdaten:
Name: [Dein Vor- und Nachname]
Telefon: [Deine Telefonnummer]
E-Mail: [Deine E-Mail-Adresse]

Vielen Dank im Voraus für Ihre Mühe.

Mit freundlichen Grüßen
[Dein Vor- und Nachname]";

const VIEWING_REQUEST: &str = "Betreff: Anfrage für einen Besichtigungstermin: [Titel der Immobilie]

Sehr geehrte(r) Frau/Herr [Name des Maklers],

mit großem Interesse habe ich Ihr Immobilienangebot auf Ihrer Website gelesen. Da die Beschreibung und die Lage der Immobilie genau meinen Vorstellungen entsprechen, habe ich ernsthaftes Kaufinteresse.

Gerne würde ich mir vor Ort einen persönlichen Eindruck verschaffen. Für einen Besichtigungstermin passt es mir zeitlich am besten an folgenden Tagen:

* [z. B. Montag bis Freitag ab 17:00 Uhr]
* [z. B. am kommenden Wochenende ganztägig]

Für die Terminabsprache oder Rückfragen erreichen Sie mich am besten [z. B. werktags zwischen 12:00 und 13:00 Uhr] unter meiner Mobilnummer.

Hier meine Kontaktdaten im Überblick:
Name: [Dein Vor- und Nachname]
Telefon: [Deine Telefonnummer]
E-Mail: [Deine E-Mail-Adresse]

Ich freue mich auf Ihre Rückmeldung und einen Terminvorschlag.

Mit freundlichen Grüßen
[Dein Vor- und Nachname]";

const TIPS: [(&str, &str); 3] = [
    (
        "„Finanzierung vorbereiten“:",
        "Der Satz „...um meine Finanzierung [...] vorzubereiten“ ist das Zauberwort. Er \
         signalisiert dem Makler: „Dieser Käufer kümmert sich um das Geld und verschwendet \
         nicht meine Zeit.“",
    ),
    (
        "Gezielte Auswahl:",
        "Lösche die Punkte in der Liste, die für dich noch nicht relevant sind, aber Grundrisse \
         und Energieausweis sind Standardanforderungen, die jeder ernsthafte Käufer sehen will.",
    ),
    (
        "Verbindlichkeit:",
        "Du sagst zu, dich nach der Prüfung wieder zu melden. Das hält den Kommunikationskanal offen.",
    ),
];

impl DocumentRenderer for MailTemplates {
    fn title(&self) -> &'static str {
        "Mailvorlagen Maklerkommunikation"
    }

    fn render(&self, _ctx: &DocumentContext) -> Markup {
        print_layout(
            self.title(),
            "mail",
            paper(
                "Mailvorlagen: Maklerkommunikation",
                "Professionelle Mustertexte für maximale Antwortraten",
                html! {
                    (mail_section(
                        "1. Mustermail für Maklermail (Unterlagen- und Informationsanforderung)",
                        DOCUMENT_REQUEST,
                    ))
                    (mail_section(
                        "2. Mustermail für Maklermail (Anfrage Besichtigungstermin)",
                        VIEWING_REQUEST,
                    ))

                    section class="doc-section" {
                        h2 class="doc-section-title" { "3. Warum diese Formulierungen gut funktionieren" }
                        ol class="tips" {
                            @for (lead, text) in TIPS {
                                li { strong { (lead) } " " (text) }
                            }
                        }
                    }

                    (footnote("Diese Vorlagen dienen der allgemeinen Information. \
                               Erstellt durch PropertyMind ExposeCheck Premium Service."))
                },
            ),
        )
    }
}

fn mail_section(title: &str, body: &str) -> Markup {
    html! {
        section class="doc-section" {
            h2 class="doc-section-title" { (title) }
            div class="mail-box" { (body) }
        }
    }
}
