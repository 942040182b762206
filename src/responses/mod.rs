pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;

pub use html::{css_response, html_response};
pub use redirect::{see_other, with_session_cookie};
