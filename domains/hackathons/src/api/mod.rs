//! API layer for the hackathons domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::HackathonsState;
pub use routes::routes;
