use super::{checklist, footnote, paper, DocumentContext, DocumentRenderer};
use crate::templates::print_layout;
use maud::{html, Markup};

pub struct VisitChecklist;

type Section = (&'static str, &'static [(&'static str, Option<&'static str>)]);

const SECTIONS: [Section; 7] = [
    (
        "1. Vorbereitung & Werkzeuge",
        &[
            (
                "Taschenlampe",
                Some("Handylicht reicht oft nicht für dunkle Ecken im Keller/Dachboden"),
            ),
            ("Zollstock / Maßband", None),
            ("Smartphone", Some("Fotos von Mängeln, Typenschildern, Zählern")),
            ("Notizblock & Stift", None),
        ],
    ),
    (
        "2. Bausubstanz & Außenbereich",
        &[
            ("Dach: Ziegel fest? Moosbewuchs? Kamin gerade?", None),
            ("Dachrinne/Fallrohre: Verstopft, rostig oder undicht? Wasserflecken an der Fassade?", None),
            ("Fassade: Risse im Putz? Abblätternde Farbe? Verfärbungen?", None),
            ("Fundament/Sockel: Risse oder Salzausblühungen (weiße Ränder)?", None),
            ("Fenster (Außen): Zustand der Rahmen. Rollläden intakt?", None),
        ],
    ),
    (
        "3. Keller & Dachboden (Kritische Zonen)",
        &[
            ("Geruch: Riecht es muffig/modrig? (Hinweis auf Schimmel)", None),
            ("Wände (Keller): Feuchtigkeit fühlbar? Stockflecken?", None),
            ("Dachboden: Dämmung vorhanden? Wespennester/Marder-Spuren?", None),
            ("Holzgebälk: Wurmlöcher oder Holzmehl (Holzwurm) sichtbar?", None),
        ],
    ),
    (
        "4. Innenausstattung (Wohnräume)",
        &[
            ("Fenster (Innen): Baujahr prüfen. Dichtungen porös? Leichtgängig?", None),
            ("Wände & Decken: Setzrisse? Schimmel in Ecken/Fensternischen?", None),
            ("Böden: Knarrt das Parkett? Fliesen gesprungen?", None),
        ],
    ),
    (
        "5. Haustechnik",
        &[
            ("Heizung: Energieträger? Alter des Kessels (Aufkleber)?", None),
            ("Elektrik: Alter des Sicherungskastens? FI-Schalter vorhanden?", None),
            ("Wasser/Sanitär: Wasserdruck okay? Ablaufgeräusche? Alter der Rohre?", None),
        ],
    ),
    (
        "6. Lage & Umfeld",
        &[
            ("Lärm: Straßen-, Flug-, Bahnlärm (Fenster öffnen!)", None),
            ("Nachbarschaft: Gepflegter Eindruck?", None),
            ("Infrastruktur & Internet: Handyempfang prüfen (Speedtest)", None),
        ],
    ),
    (
        "7. Dokumente & Fragen",
        &[
            ("Wohnflächenberechnung nach WoFlV", None),
            ("Genehmigungen für Anbauten/Dachausbau vorhanden?", None),
            ("Wann wurden Heizung/Fenster/Bad zuletzt saniert?", None),
        ],
    ),
];

impl DocumentRenderer for VisitChecklist {
    fn title(&self) -> &'static str {
        "Checkliste Ortsbesichtigung"
    }

    fn render(&self, _ctx: &DocumentContext) -> Markup {
        print_layout(
            self.title(),
            "visit",
            paper(
                "Checkliste: Ortsbesichtigung",
                "Systematische Prüfung vor Ort für Kauf- & Investitionsentscheidungen",
                html! {
                    @for (title, items) in SECTIONS {
                        (checklist(title, items))
                    }
                    (footnote("Diese Checkliste dient der allgemeinen Information. \
                               Erstellt durch PropertyMind ExposeCheck Premium Service."))
                },
            ),
        )
    }
}
