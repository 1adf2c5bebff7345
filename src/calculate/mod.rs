//! Statistics calculation engine.
//!
//! Turns a player's match history into derived metrics and findings:
//! - Per-game averages, KDA, CS per minute, win rate
//! - Champion pool and role distribution
//! - Benchmark comparison and improvement recommendations

mod benchmarks;
mod improvement;
mod player_stats;

pub use benchmarks::Benchmarks;
pub use improvement::identify_improvement_areas;
pub use player_stats::compute_player_stats;

/// Calculate the KDA ratio from per-game averages.
///
/// With zero deaths the ratio is kills + assists.
pub fn calculate_kda(kills: f64, deaths: f64, assists: f64) -> f64 {
    if deaths == 0.0 {
        kills + assists
    } else {
        (kills + assists) / deaths
    }
}

/// Express `count` as a percentage of `total` (0 when `total` is 0).
pub fn calculate_percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
