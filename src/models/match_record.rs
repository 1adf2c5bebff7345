//! Match history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single match and everyone who played in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    /// Unique match identifier (e.g. "NA1_4821339572")
    pub match_id: String,

    /// When the match started
    pub game_creation: Option<DateTime<Utc>>,

    /// Total duration of the match in seconds
    pub game_duration: i64,

    /// Game mode (CLASSIC, ARAM, ...)
    pub game_mode: String,

    /// Game type (MATCHED_GAME, ...)
    pub game_type: String,

    pub participants: Vec<Participant>,
}

impl Match {
    /// Find the first participant record belonging to `puuid`.
    pub fn participant(&self, puuid: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.puuid == puuid)
    }
}

/// One player's performance in a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    pub puuid: String,

    /// Summoner name at the time of the match
    pub summoner_name: String,

    pub champion_id: i32,
    pub champion_name: String,

    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,

    pub gold_earned: i64,
    pub total_damage_dealt_to_champions: i64,
    pub total_damage_taken: i64,

    /// Wards placed, destroyed, etc.
    pub vision_score: i64,

    /// Creep score (minions and monsters killed)
    pub total_minions_killed: i64,

    /// Whether this player's team won
    pub win: bool,

    /// Position label (TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY); empty when unset
    pub team_position: String,
}
