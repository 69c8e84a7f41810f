//! Repository layer for the hackathons domain

pub mod hackathons;

pub use hackathons::HackathonRepository;
