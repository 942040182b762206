use crate::domain::Score;
use maud::{html, Markup};

pub fn score_bar(score: &Score) -> Markup {
    let accent = score.category.accent();

    html! {
        div class="score" {
            div class="score-head" {
                div {
                    span class="score-label" { (score.label()) }
                    p class="score-desc" { (score.description) }
                }
                div class="score-value" {
                    span { (format!("{:.1}", score.value)) }
                    small { " / 7.0" }
                }
            }
            div class="score-track" {
                div
                    class={ "score-fill accent-" (accent) }
                    style=(format!("width: {:.1}%", score.percent()))
                {}
            }
        }
    }
}
