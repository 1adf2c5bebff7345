//! Aggregated player statistics.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Summoner;

/// Per-player summary over a batch of matches.
///
/// Averages are per supplied match, so a match the player does not appear in
/// still counts toward `total_matches` and lowers every average.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub puuid: String,
    pub summoner_name: String,

    /// Number of matches supplied
    pub total_matches: u32,

    /// Win rate as a percentage (0 to 100)
    pub win_rate: f64,

    pub average_kills: f64,
    pub average_deaths: f64,
    pub average_assists: f64,

    /// (kills + assists) / deaths over the per-game averages
    pub kda: f64,

    /// Average creep score per game
    pub average_cs: f64,

    /// Average creep score per minute of game time
    pub cs_per_minute: f64,

    pub average_vision_score: f64,

    /// Average damage dealt to champions
    pub average_damage: f64,

    pub average_gold: f64,

    /// Games played per champion
    pub champion_pool: HashMap<String, u32>,

    /// Percentage of games played in each position
    pub role_distribution: HashMap<String, f64>,
}

impl PlayerStats {
    /// Stats for a player with no match history.
    pub fn empty(summoner: &Summoner) -> Self {
        Self {
            puuid: summoner.puuid.clone(),
            summoner_name: summoner.name.clone(),
            ..Default::default()
        }
    }

    /// Champion with the most games, ties broken alphabetically.
    pub fn most_played_champion(&self) -> Option<(&str, u32)> {
        self.champion_pool
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, &games)| (name.as_str(), games))
    }

    /// Position with the largest share of games, ties broken alphabetically.
    pub fn main_role(&self) -> Option<(&str, f64)> {
        self.role_distribution
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(role, &share)| (role.as_str(), share))
    }
}
