// templates/pages/home.rs

use crate::domain::ListingQuery;
use crate::templates::{components::error_notice, desktop_layout};
use maud::{html, Markup};

const FEATURES: [(&str, &str); 8] = [
    ("Marktwert-Check", "Realistische Einschätzung"),
    ("Makrolage", "Kommunale Struktur"),
    ("Mikrolage", "Umfeldanalyse"),
    ("Bausubstanz", "Qualitäts-Check"),
    ("Marktentwicklung", "Angebot & Nachfrage"),
    ("Unterlagen", "Checkliste"),
    ("Besichtigung", "Checkliste"),
    ("Makleranfrage", "Mailvorlage"),
];

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("KI-Modelle", "Modernste Analysemodelle und Algorithmen"),
    ("Expertenwissen", "Langjährige Praxiserfahrung vom Profi-Gutachter"),
    ("Live-Daten", "Echtzeit-Scans via Google Search Engine & KI-Power"),
];

/// Landing page with the listing form. A previous query prefills the fields.
pub fn home_page(query: Option<&ListingQuery>, error: Option<&str>) -> Markup {
    let headline = query.map(|q| q.headline.as_str());
    let address = query.and_then(|q| q.address.as_deref());
    let location = query.map(|q| q.location.as_str());
    let broker = query.map(|q| q.broker_name.as_str());

    desktop_layout(
        "Immobilienanzeigen analysieren",
        false,
        html! {
            section class="hero" {
                div class="eyebrow" { "Echtzeit KI-Objektanalyse" }
                h1 {
                    span class="hero-kicker" { "Optimieren Sie Ihre Immobiliensuche" }
                    "Analysieren Sie Online-Immobilienanzeigen "
                    span class="hero-accent" { "professionell & schnell" }
                }
                p class="hero-sub" { "Schnäppchen oder überteuertes Angebot? Finden Sie es heraus!" }

                ul class="highlights" {
                    @for (title, text) in HIGHLIGHTS {
                        li {
                            strong { (title) }
                            span { (text) }
                        }
                    }
                }
            }

            section class="card form-card" {
                p class="form-intro" {
                    "Kopieren Sie drei Felder aus der Portalanzeige in die nachfolgenden Eingabefelder"
                }

                @if let Some(message) = error {
                    (error_notice(message))
                }

                form id="listing-form" method="post" action="/prescan" {
                    label for="headline" { "Objektbezeichnung" }
                    input type="text" id="headline" name="headline"
                        placeholder="z.B. Kernsanierte 3-Zimmer-Wohnung..."
                        value=[headline];

                    label for="address" { "Genaue Adresse (Optional)" }
                    input type="text" id="address" name="address"
                        placeholder="Straße und Hausnummer"
                        value=[address];
                    p class="tip" {
                        strong { "Pro-Analyse Tipp: " }
                        "Die genaue Adresse verbessert die Präzision der Lageanalyse massiv."
                    }

                    label for="location" { "Postleitzahl & Ort" }
                    input type="text" id="location" name="location"
                        placeholder="z.B. 80331 München"
                        value=[location];

                    label for="broker" { "Name des Anbieters" }
                    input type="text" id="broker" name="broker"
                        placeholder="z.B. Mustermann Immobilien"
                        value=[broker];

                    div class="warning" {
                        strong { "WICHTIGER HINWEIS: " }
                        "Die Eingaben für die drei vorstehenden Feldern müssen 100 % mit den Angaben \
                         im Portalangebot übereinstimmen. Am besten Sie kopieren die Felder und fügen \
                         sie dann hier in das Formular ein."
                    }

                    button type="submit" class="primary wide"
                        data-busy="Externe Quelle wird verifiziert..." {
                        "Deep-Scan Analyse starten →"
                    }
                }
            }

            section class="feature-grid" {
                @for (title, text) in FEATURES {
                    div class="feature" {
                        h3 { (title) }
                        p { (text) }
                    }
                }
            }
        },
    )
}
