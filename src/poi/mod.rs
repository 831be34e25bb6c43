pub mod formatter;
pub mod place;
