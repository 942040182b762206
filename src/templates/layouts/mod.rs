pub mod desktop;
pub mod print;
