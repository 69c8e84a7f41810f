//! Repository layer for the accounts domain

pub mod profiles;

pub use profiles::ProfileRepository;
