pub mod components;
pub mod documents;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::html_error_response;
pub use layouts::desktop::desktop_layout;
pub use layouts::print::print_layout;

pub const MAIN_CSS: &str = include_str!("../../static/main.css");
