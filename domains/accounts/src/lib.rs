//! Accounts domain: registration and profile sync on login

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::*;
pub use domain::sync::AuthSync;
pub use repository::ProfileRepository;

pub use api::routes;
pub use api::AccountsState;
