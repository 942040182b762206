use maud::{html, Markup};

pub fn error_notice(message: &str) -> Markup {
    html! {
        div class="notice notice-error" role="alert" {
            span class="notice-icon" { "!" }
            span { (message) }
        }
    }
}

pub fn info_notice(message: &str) -> Markup {
    html! {
        div class="notice notice-info" {
            span class="notice-icon" { "i" }
            span { (message) }
        }
    }
}
