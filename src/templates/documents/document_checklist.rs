use super::{checklist, paper, DocumentContext, DocumentRenderer};
use crate::templates::print_layout;
use maud::{html, Markup};

pub struct DocumentChecklist;

const BASIC: [(&str, Option<&str>); 5] = [
    ("Aktueller Grundbuchauszug (nicht älter als 3 Monate)", None),
    ("Amtliche Flurkarte / Lageplan", None),
    ("Wohnflächenberechnung", None),
    ("Energieausweis (Gültigkeit prüfen)", None),
    ("Bauzeichnungen & Grundrisse 1:100", None),
];

const CONDOMINIUM: [(&str, Option<&str>); 3] = [
    ("Teilungserklärung & Gemeinschaftsordnung", None),
    ("Protokolle der Eigentümerversammlungen (3 Jahre)", None),
    ("Hausgeldabrechnungen & Wirtschaftsplan", None),
];

const RENTAL: [(&str, Option<&str>); 4] = [
    ("Mietvertrag", None),
    ("Nachträge zum Mietvertrag", None),
    ("Unterlagen zur Mieterhöhung", None),
    ("Nebenkostenabrechnungen", None),
];

impl DocumentRenderer for DocumentChecklist {
    fn title(&self) -> &'static str {
        "Checkliste Objektunterlagen"
    }

    fn render(&self, _ctx: &DocumentContext) -> Markup {
        print_layout(
            self.title(),
            "documents",
            paper(
                "Checkliste: Objektunterlagen",
                "Vollständige Dokumentation für Prüfung & Finanzierung",
                html! {
                    (checklist("1. Basis-Unterlagen (Für alle Immobilien)", &BASIC))
                    (checklist("2. Sonderfall: Eigentumswohnung", &CONDOMINIUM))
                    (checklist("3. Sonderfall: Vermietung", &RENTAL))
                },
            ),
        )
    }
}
