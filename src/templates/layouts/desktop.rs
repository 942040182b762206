use maud::{html, Markup, PreEscaped, DOCTYPE};

// Swaps a submit button's label for its `data-busy` text and disables it,
// so a slow AI call is not submitted twice.
const BUSY_SCRIPT: &str = r#"
document.addEventListener("submit", function (ev) {
  var btn = ev.target.querySelector("button[data-busy]");
  if (!btn) return;
  btn.disabled = true;
  btn.textContent = btn.getAttribute("data-busy");
  document.body.classList.add("is-busy");
});
"#;

pub fn desktop_layout(title: &str, show_back: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="de" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | PropertyMind ExposeCheck" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="topbar" {
                    a class="brand" href="/" {
                        span class="brand-mark" { "PM" }
                        span { "PropertyMind " span class="brand-accent" { "ExposeCheck" } }
                    }
                    @if show_back {
                        form method="post" action="/reset" {
                            button type="submit" class="ghost" { "‹ zurück" }
                        }
                    }
                }

                main class="container" {
                    (content)
                }

                footer class="footer" {
                    p { "© 2025 PropertyMind • Powered by AI Intelligence" }
                    a href="/legal" { "Impressum & Datenschutz" }
                }

                script { (PreEscaped(BUSY_SCRIPT)) }
            }
        }
    }
}
