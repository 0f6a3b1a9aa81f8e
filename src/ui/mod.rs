pub mod reply;
pub mod style;
