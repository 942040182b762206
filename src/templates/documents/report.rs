use super::{DocumentContext, DocumentRenderer};
use crate::domain::{Rating, ScoreCategory};
use crate::templates::components::{rich_text, score_bar};
use crate::templates::print_layout;
use maud::{html, Markup};

/// The seven-page A4 dossier: cover, one page per category, conclusion.
pub struct AnalysisReport;

// (section subtitle, footer name), in ScoreCategory::ALL order
const SECTIONS: [(&str, &str); 5] = [
    ("Sektion 01 - Ökonomische Bewertung", "Marktanalyse"),
    ("Sektion 02 - Regionale Strukturdaten", "Makrolage"),
    ("Sektion 03 - Nachbarschaft & Infrastruktur", "Mikrolage"),
    ("Sektion 04 - Substanzbewertung", "Bauzustand"),
    ("Sektion 05 - Nachhaltigkeit & Sanierung", "Energieeffizienz"),
];

const SOURCES: [&str; 3] = [
    "Regionale Miet- und Kaufpreisspiegel & Bodenrichtwert-System (BORIS)",
    "Statistisches Bundesamt & Kommunale Datenberichte",
    "GEG (Gebäudeenergiegesetz) & Lage-Infrastrukturdaten",
];

const DISCLAIMER: &str = "Die Analyse wurde auf Basis der online verfügbaren Daten und \
    Informationen erstellt. Es wurde keine Objektbesichtigung durchgeführt. Es wird dringend \
    empfohlen, die Richtigkeit der Daten vor Ort zu überprüfen. Jegliche Haftung ist \
    ausgeschlossen. Alle Rechte vorbehalten.";

impl DocumentRenderer for AnalysisReport {
    fn title(&self) -> &'static str {
        "Premium Analysebericht"
    }

    fn render(&self, ctx: &DocumentContext) -> Markup {
        let title = format!("{} - {}", self.title(), ctx.analysis.headline);

        print_layout(
            &title,
            "report",
            html! {
                (cover(ctx))
                @for (i, category) in ScoreCategory::ALL.into_iter().enumerate() {
                    (category_page(ctx, category, i))
                }
                (conclusion(ctx))
            },
        )
    }
}

fn page_footer(number: usize, name: &str) -> Markup {
    html! {
        div class="page-footer" { (format!("Seite {number:02} - {name}")) }
    }
}

fn cover(ctx: &DocumentContext) -> Markup {
    let a = ctx.analysis;
    let rating = Rating::from_score(a.total_score);

    html! {
        article class="page" {
            div class="paper-brand" {
                div { "PropertyMind " span { "ExposeCheck" } }
                div class="badge" { "Premium Analyse" }
            }

            div class="cover-title" {
                h1 { (a.headline) }
                p { (a.location) " | " (a.property_type) " | " (a.living_space) " | " (a.price) }
            }

            div class="cover-score" {
                div class="score-circle" {
                    span class="total-value" { (format!("{:.1}", a.total_score)) }
                    span class="muted" { "von 7.0" }
                }
                div class={ "rating " (rating.css_class()) } { (rating.label()) }
                h2 { "Gesamtbewertung" }
                @if !a.total_score_explanation.is_empty() {
                    p class="quote" { "„" (a.total_score_explanation) "“" }
                }
            }

            div class="cover-summary" {
                h3 { "Zusammenfassung der Expertenprüfung" }
                p {
                    "Dieser Bericht fasst die Ergebnisse einer detaillierten KI-gestützten Analyse \
                     zusammen. Auf den folgenden Seiten finden Sie die Aufschlüsselung der fünf \
                     Kernkategorien Markt, Makrolage, Mikrolage, Bausubstanz und Energieeffizienz."
                }
            }

            (page_footer(1, "Executive Summary"))
        }
    }
}

fn category_page(ctx: &DocumentContext, category: ScoreCategory, index: usize) -> Markup {
    let (subtitle, footer) = SECTIONS[index];

    html! {
        article class="page" {
            header class={ "page-header accent-border-" (category.accent()) } {
                h2 { (category.heading()) }
                p { (subtitle) }
            }

            (score_bar(ctx.analysis.score(category)))

            div class="prose" {
                (rich_text(ctx.analysis.details.get(category)))
            }

            div class="sources" {
                h4 { "Quellenverzeichnis" }
                ul {
                    @for source in SOURCES {
                        li { (source) }
                    }
                }
            }

            (page_footer(index + 2, footer))
        }
    }
}

fn conclusion(ctx: &DocumentContext) -> Markup {
    html! {
        article class="page" {
            header class="page-header" {
                h2 { "Abschließendes Experten-Fazit" }
                p { "Sektion 06 - Handlungsempfehlung" }
            }

            div class="conclusion-box" {
                (rich_text(&ctx.analysis.conclusion))
            }

            div class="disclaimer" {
                h3 { "Rechtlicher Hinweis & Disclaimer" }
                p { (DISCLAIMER) }
            }

            div class="report-meta" {
                span { "Berichts-ID: " (ctx.report_id) }
                span { "Datum: " (ctx.issued_on_label()) }
            }

            (page_footer(7, "Fazit & Disclaimer"))
        }
    }
}
