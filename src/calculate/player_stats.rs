use std::collections::HashMap;

use crate::models::{Match, Participant, PlayerStats, Summoner};

use super::{calculate_kda, calculate_percentage};

/// Running sums over the matches the player was found in.
#[derive(Debug, Default)]
struct MatchTotals {
    kills: i64,
    deaths: i64,
    assists: i64,
    creep_score: i64,
    vision_score: i64,
    damage: i64,
    gold: i64,
    game_duration: i64,
    wins: u32,
    champion_pool: HashMap<String, u32>,
    role_counts: HashMap<String, u32>,
}

impl MatchTotals {
    fn add(&mut self, game_duration: i64, participant: &Participant) {
        self.kills += participant.kills;
        self.deaths += participant.deaths;
        self.assists += participant.assists;
        self.creep_score += participant.total_minions_killed;
        self.vision_score += participant.vision_score;
        self.damage += participant.total_damage_dealt_to_champions;
        self.gold += participant.gold_earned;
        self.game_duration += game_duration;

        if participant.win {
            self.wins += 1;
        }

        *self
            .champion_pool
            .entry(participant.champion_name.clone())
            .or_insert(0) += 1;

        if !participant.team_position.is_empty() {
            *self
                .role_counts
                .entry(participant.team_position.clone())
                .or_insert(0) += 1;
        }
    }
}

/// Aggregate a player's match history into [`PlayerStats`].
///
/// Every supplied match counts toward `total_matches` and the averages'
/// denominator, including matches the player is missing from.
pub fn compute_player_stats(summoner: &Summoner, matches: &[Match]) -> PlayerStats {
    if matches.is_empty() {
        return PlayerStats::empty(summoner);
    }

    let mut totals = MatchTotals::default();
    for game in matches {
        if let Some(participant) = game.participant(&summoner.puuid) {
            totals.add(game.game_duration, participant);
        }
    }

    let match_count = u32::try_from(matches.len()).unwrap_or(u32::MAX);
    let n = match_count as f64;

    let average_kills = totals.kills as f64 / n;
    let average_deaths = totals.deaths as f64 / n;
    let average_assists = totals.assists as f64 / n;
    let average_cs = totals.creep_score as f64 / n;

    // Not guarded: zero total duration gives a non-finite rate.
    let average_game_minutes = totals.game_duration as f64 / n / 60.0;
    let cs_per_minute = average_cs / average_game_minutes;

    let role_distribution = totals
        .role_counts
        .iter()
        .map(|(role, &count)| (role.clone(), calculate_percentage(count, match_count)))
        .collect();

    PlayerStats {
        puuid: summoner.puuid.clone(),
        summoner_name: summoner.name.clone(),
        total_matches: match_count,
        win_rate: calculate_percentage(totals.wins, match_count),
        average_kills,
        average_deaths,
        average_assists,
        kda: calculate_kda(average_kills, average_deaths, average_assists),
        average_cs,
        cs_per_minute,
        average_vision_score: totals.vision_score as f64 / n,
        average_damage: totals.damage as f64 / n,
        average_gold: totals.gold as f64 / n,
        champion_pool: totals.champion_pool,
        role_distribution,
    }
}
