//! # Cortex Engine
//!
//! Player performance analysis for League of Legends match histories.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (summoners, matches, stats, findings)
//! - **calculate**: Stats aggregation and benchmark-based recommendation rules
//! - **analysis**: The analyzer that ties both together
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod analysis;
pub mod api;
pub mod calculate;
pub mod config;
pub mod models;

pub use analysis::{AnalysisService, PlayerAnalyzer};
pub use models::*;
