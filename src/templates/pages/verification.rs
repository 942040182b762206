use crate::domain::{ListingQuery, PreScanResult};
use crate::templates::{components::error_notice, desktop_layout};
use maud::{html, Markup};

pub fn verification_page(
    query: &ListingQuery,
    prescan: &PreScanResult,
    error: Option<&str>,
) -> Markup {
    let excerpt = prescan.description_excerpt();

    desktop_layout(
        "Verifizierung",
        true,
        html! {
            section class="center-head" {
                div class="eyebrow" { "Verifizierung" }
                h2 { "Objekt gefunden. Bitte bestätigen:" }
                @if let Some(message) = error {
                    (error_notice(message))
                }
            }

            section class="card verify-card" {
                div class="source" {
                    span class="muted" { "Datenquelle" }
                    a href=(prescan.broker_link) target="_blank" rel="noopener noreferrer" {
                        "Exposé-Verbindung hergestellt"
                    }
                }

                span class="muted" { "Analysierte Anzeige:" }
                h4 { (prescan.headline) }

                dl class="facts" {
                    dt { "Anbieter/Makler" } dd { (query.broker_name) }
                    dt { "Angebotspreis" } dd { (prescan.price.as_deref().unwrap_or("Auf Anfrage")) }
                    dt { "Typ" } dd { (prescan.property_type.as_deref().unwrap_or("Nicht angegeben")) }
                    dt { "Ort" } dd { (query.location) }
                }

                @if !excerpt.is_empty() {
                    div class="excerpt" {
                        span class="muted" { "Auszug aus der Beschreibung" }
                        p { "„" (excerpt) "“" }
                    }
                }
            }

            div class="actions" {
                form method="post" action="/analysis" {
                    button type="submit" class="primary"
                        data-busy="Detaillierte Expertenanalyse wird erstellt..." {
                        "Ja, Analyse starten"
                    }
                }
                form method="post" action="/reset" {
                    button type="submit" class="secondary" { "Nein, zurück" }
                }
            }

            p class="muted center" {
                "Die Analyse ist sehr aufwendig. Bitte geben Sie uns einige Sekunden Zeit."
            }
        },
    )
}
