//! Player analysis entry point.
//!
//! Combines the stats aggregator and the recommendation rules into one
//! stateless operation that the HTTP layer and the CLI both call.

use chrono::Utc;

use crate::calculate::{compute_player_stats, identify_improvement_areas, Benchmarks};
use crate::models::{AnalysisResult, Match, Summoner};

/// Anything that can turn a match history into an [`AnalysisResult`].
///
/// The HTTP layer holds a `dyn PlayerAnalyzer` so tests can substitute a
/// canned implementation.
pub trait PlayerAnalyzer: Send + Sync {
    fn analyze_player(&self, summoner: &Summoner, matches: &[Match]) -> AnalysisResult;
}

/// Benchmark-driven analyzer.
#[derive(Debug, Clone, Default)]
pub struct AnalysisService {
    benchmarks: Benchmarks,
}

impl AnalysisService {
    pub fn new(benchmarks: Benchmarks) -> Self {
        Self { benchmarks }
    }

    pub fn benchmarks(&self) -> &Benchmarks {
        &self.benchmarks
    }
}

impl PlayerAnalyzer for AnalysisService {
    fn analyze_player(&self, summoner: &Summoner, matches: &[Match]) -> AnalysisResult {
        let player_stats = compute_player_stats(summoner, matches);
        let improvement_areas = identify_improvement_areas(&player_stats, &self.benchmarks);

        tracing::debug!(
            puuid = %summoner.puuid,
            total_matches = player_stats.total_matches,
            findings = improvement_areas.len(),
            main_champion = ?player_stats.most_played_champion(),
            main_role = ?player_stats.main_role(),
            "Player analysis complete"
        );

        AnalysisResult {
            player_stats,
            improvement_areas,
            analyzed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Participant, Priority};

    fn participant(
        kills: i64,
        deaths: i64,
        assists: i64,
        cs: i64,
        vision: i64,
        win: bool,
    ) -> Participant {
        Participant {
            puuid: "test-puuid".to_string(),
            champion_name: "Ahri".to_string(),
            kills,
            deaths,
            assists,
            total_minions_killed: cs,
            vision_score: vision,
            win,
            team_position: "MIDDLE".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_analyze_empty_history() {
        let service = AnalysisService::default();
        let summoner = Summoner::new("test-puuid", "TestPlayer");

        let before = Utc::now();
        let result = service.analyze_player(&summoner, &[]);

        assert_eq!(result.player_stats.puuid, "test-puuid");
        assert_eq!(result.player_stats.summoner_name, "TestPlayer");
        assert_eq!(result.player_stats.total_matches, 0);
        assert!(result.analyzed_at >= before);
        assert!(result
            .improvement_areas
            .iter()
            .any(|a| a.category == Category::WinRate));
        assert!(result
            .improvement_areas
            .iter()
            .all(|a| a.category != Category::Overall));
    }

    #[test]
    fn test_analyze_strong_player() {
        let service = AnalysisService::default();
        let summoner = Summoner::new("test-puuid", "TestPlayer");
        let matches = vec![
            Match {
                match_id: "NA1_1".into(),
                game_duration: 1800,
                participants: vec![participant(10, 2, 8, 220, 50, true)],
                ..Default::default()
            },
            Match {
                match_id: "NA1_2".into(),
                game_duration: 1500,
                participants: vec![participant(8, 4, 5, 180, 35, false)],
                ..Default::default()
            },
        ];

        let result = service.analyze_player(&summoner, &matches);

        assert_eq!(result.improvement_areas.len(), 1);
        assert_eq!(result.improvement_areas[0].category, Category::Overall);
        assert_eq!(result.areas_with_priority(Priority::Low).count(), 1);
    }

    #[test]
    fn test_analyze_uses_injected_benchmarks() {
        let service = AnalysisService::new(Benchmarks {
            vision_score: 80.0,
            ..Benchmarks::default()
        });
        let summoner = Summoner::new("test-puuid", "TestPlayer");
        let matches = vec![Match {
            game_duration: 1800,
            participants: vec![participant(6, 2, 6, 240, 45, true)],
            ..Default::default()
        }];

        let result = service.analyze_player(&summoner, &matches);

        assert_eq!(service.benchmarks().vision_score, 80.0);
        assert_eq!(result.improvement_areas.len(), 1);
        assert_eq!(result.improvement_areas[0].category, Category::Vision);
        assert_eq!(result.improvement_areas[0].priority, Priority::High);
        assert_eq!(result.improvement_areas[0].expected_value, 80.0);
    }
}
