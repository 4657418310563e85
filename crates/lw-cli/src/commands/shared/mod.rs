pub mod limit;
pub mod source;
