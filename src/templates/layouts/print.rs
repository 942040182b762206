use maud::{html, Markup, DOCTYPE};

/// Shell for the standalone printable documents. The toolbar is hidden by
/// the print stylesheet.
pub fn print_layout(title: &str, theme: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="de" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - PropertyMind ExposeCheck Premium" }
                link rel="stylesheet" href="/static/main.css";
            }
            body class={ "print-doc theme-" (theme) } {
                header class="print-toolbar no-print" {
                    button type="button" class="primary" onclick="window.print()" {
                        "Drucken / als PDF speichern"
                    }
                    button type="button" class="secondary" onclick="window.close()" {
                        "Fenster schließen"
                    }
                }
                (content)
            }
        }
    }
}
