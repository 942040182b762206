pub mod error;
pub mod notice;
pub mod rich_text;
pub mod score_bar;

pub use error::html_error_response;
pub use notice::{error_notice, info_notice};
pub use rich_text::rich_text;
pub use score_bar::score_bar;
