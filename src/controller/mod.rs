pub mod mode;
pub mod status;
