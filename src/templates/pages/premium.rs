use crate::domain::AnalysisResult;
use crate::templates::desktop_layout;
use crate::templates::documents::DocumentKind;
use maud::{html, Markup};

pub fn premium_page(analysis: &AnalysisResult) -> Markup {
    desktop_layout(
        &analysis.headline,
        true,
        html! {
            section class="center-head" {
                div class="trophy" { "★" }
                h1 {
                    "Gratulation!"
                    br;
                    span class="brand-accent" { "PropertyMind Premium aktiviert." }
                }
                p { "Wählen Sie einen Bericht/Checkliste zur Anzeige/Ausdruck in einem neuen Fenster." }
            }

            section class="document-grid" {
                @for kind in DocumentKind::ALL {
                    a class="card document-link"
                        href={ "/documents/" (kind.slug()) }
                        target="_blank"
                        rel="noopener"
                    {
                        h3 { (kind.button_title()) }
                        p { (kind.button_text()) }
                    }
                }
            }

            div class="actions" {
                form method="post" action="/dashboard" {
                    button type="submit" class="secondary" { "‹ Dashboard" }
                }
            }
        },
    )
}
