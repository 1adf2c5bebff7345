//! Player identity as supplied by the caller.

use serde::{Deserialize, Serialize};

/// A League of Legends account.
///
/// Only `puuid` and `name` are required on the wire; the remaining fields are
/// passed through from the Riot summoner payload and default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    /// Encrypted summoner ID
    #[serde(default)]
    pub id: String,

    /// Encrypted account ID
    #[serde(default)]
    pub account_id: String,

    /// Player universally unique identifier
    pub puuid: String,

    /// Summoner name visible in game
    pub name: String,

    #[serde(default)]
    pub profile_icon_id: i32,

    #[serde(default)]
    pub summoner_level: i64,
}

impl Summoner {
    /// Create a summoner from the two fields the analysis needs.
    pub fn new(puuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            account_id: String::new(),
            puuid: puuid.into(),
            name: name.into(),
            profile_icon_id: 0,
            summoner_level: 0,
        }
    }
}
