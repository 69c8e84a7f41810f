pub mod entities;
pub mod sync;
