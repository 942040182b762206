use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn legal_page() -> Markup {
    desktop_layout(
        "Impressum & Datenschutz",
        false,
        html! {
            section class="center-head" {
                div class="eyebrow" { "Rechtliches" }
                h1 { "Impressum & Datenschutz" }
            }

            section class="card legal" {
                h2 { "Impressum" }
                p { strong { "Angaben gemäß § 5 TMG:" } }
                p {
                    "fundus crescat GmbH" br;
                    "Königsallee 60 F" br;
                    "40212 Düsseldorf" br;
                    "Deutschland"
                }
                p {
                    strong { "Vertreten durch:" } br;
                    "Geschäftsführer: Dr. Patrick J. G. Steiner"
                }
                p {
                    strong { "Kontakt:" } br;
                    "E-Mail: info@funduscrescat.de"
                }
                p {
                    strong { "Registereintrag:" } br;
                    "Eintragung im Handelsregister." br;
                    "Registergericht: Amtsgericht Düsseldorf" br;
                    "Registernummer: HRB 92147"
                }
                p {
                    strong { "Umsatzsteuer-ID:" } br;
                    "Umsatzsteuer-Identifikationsnummer gemäß §27 a Umsatzsteuergesetz:" br;
                    "DE340251781"
                }
            }

            section class="card legal" {
                h2 { "Datenschutzerklärung" }
                h3 { "1. Datenschutz auf einen Blick" }
                p {
                    "Die fundus crescat GmbH nimmt den Schutz Ihrer persönlichen Daten sehr ernst. \
                     Wir behandeln Ihre personenbezogenen Daten vertraulich und entsprechend der \
                     gesetzlichen Datenschutzvorschriften sowie dieser Datenschutzerklärung."
                }
                h3 { "2. Datenerfassung in dieser Anwendung" }
                p {
                    "Diese Anwendung verarbeitet die von Ihnen eingegebenen Objektdaten ausschließlich \
                     zur Erstellung der Analyseberichte. Wir speichern keine Ihrer persönlichen Daten \
                     auf unseren Servern, sofern Sie dies nicht explizit veranlassen."
                }
                h3 { "3. Analyse & Drittanbieter" }
                p {
                    "Für die Analyse wird die Google Gemini API genutzt. Dabei werden die von Ihnen \
                     eingegebenen Objektdaten (Headline, Ort, Maklername) an Google übermittelt, um eine \
                     fundierte Bewertung zu generieren. Es werden keine privaten Nutzer-Metadaten für \
                     das Training der KI-Modelle verwendet."
                }
            }
        },
    )
}
