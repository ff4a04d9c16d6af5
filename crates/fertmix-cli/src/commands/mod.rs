pub mod catalog;
pub mod solve;
