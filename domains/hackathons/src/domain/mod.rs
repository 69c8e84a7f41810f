pub mod catalog;
pub mod entities;
