//! Hackathons domain: catalog and recommendations

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::catalog::recommend;
pub use domain::entities::*;
pub use repository::HackathonRepository;

pub use api::routes;
pub use api::HackathonsState;
