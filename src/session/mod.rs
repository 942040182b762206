mod store;
pub mod token;

pub use store::{now_unix, SessionHandle, SessionStore};
