pub mod csv;
pub mod parse;
pub mod validate;
