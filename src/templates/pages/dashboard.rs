use crate::domain::{AnalysisResult, Rating, ScoreCategory};
use crate::templates::components::{info_notice, rich_text, score_bar};
use crate::templates::desktop_layout;
use maud::{html, Markup};

const PREMIUM_ITEMS: [(&str, &str); 4] = [
    ("Analysebericht", "Ausführliche Version"),
    ("Checkliste", "Erforderliche Unterlagen"),
    ("Checkliste", "Durchführung Ortsbesichtigung"),
    ("Mustermail", "Optimale Maklerkommunikation"),
];

pub fn dashboard_page(analysis: &AnalysisResult) -> Markup {
    let rating = Rating::from_score(analysis.total_score);

    desktop_layout(
        &analysis.headline,
        true,
        html! {
            section class="center-head" {
                div class="eyebrow" { "Analysebericht (Kurzfassung)" }
                h1 { (analysis.headline) }
                p class="meta" {
                    span { (analysis.location) }
                    span { (analysis.property_type) }
                    span class="living-space" { (analysis.living_space) }
                    span class="price" { (analysis.price) }
                }
                @if analysis.repaired {
                    (info_notice("Die KI-Antwort war unvollständig und wurde automatisch ergänzt. \
                                  Einzelne Abschnitte können gekürzt sein."))
                }
            }

            (premium_teaser())

            section class="card score-card" {
                div class="total" {
                    div class="score-circle" {
                        span class="total-value" { (format!("{:.1}", analysis.total_score)) }
                        span class="muted" { "von 7.0" }
                    }
                    div {
                        div class={ "rating " (rating.css_class()) } { (rating.label()) }
                        h4 { "PropertyMind " span class="brand-accent" { "Expert-Score" } }
                        @if !analysis.total_score_explanation.is_empty() {
                            p class="quote" { "„" (analysis.total_score_explanation) "“" }
                        }
                    }
                }

                div class="scores" {
                    @for score in &analysis.scores {
                        (score_bar(score))
                    }
                }
            }

            section class="narratives" {
                @for category in ScoreCategory::ALL {
                    article class={ "card narrative accent-border-" (category.accent()) } {
                        h3 { (category.heading()) }
                        (rich_text(analysis.summaries.get(category)))
                    }
                }
                article class="card narrative conclusion" {
                    h3 { "Fazit" }
                    (rich_text(&analysis.conclusion))
                }
            }
        },
    )
}

fn premium_teaser() -> Markup {
    html! {
        section class="card premium-teaser" {
            div class="eyebrow" { "Keine Registrierung erforderlich" }
            h2 { "Jetzt vollständige " span class="brand-accent" { "Premium-Analyse" } " freischalten" }
            p {
                "Erhalten Sie eine umfangreiche Auswertung für Ihre Zwecke und zur Vorlage bei \
                 der Bank für erste Finanzierungsgespräche"
            }
            ul class="checks" {
                @for (title, text) in PREMIUM_ITEMS {
                    li { strong { (title) } span { (text) } }
                }
            }
            form method="post" action="/premium" {
                button type="submit" class="primary" { "Premium freischalten →" }
            }
        }
    }
}
