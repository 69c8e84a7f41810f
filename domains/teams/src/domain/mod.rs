//! Teams domain layer: entities, membership workflow, enrichment

pub mod enrichment;
pub mod entities;
pub mod workflow;
