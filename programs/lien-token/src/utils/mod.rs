pub mod accounts;
pub mod custody;
pub mod term;
