//! Core data models for the cortex engine.

mod improvement;
mod match_record;
mod stats;
mod summoner;

pub use improvement::*;
pub use match_record::*;
pub use stats::*;
pub use summoner::*;
