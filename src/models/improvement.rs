//! Improvement findings and the combined analysis result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerStats;

/// How urgently a finding should be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "HIGH"),
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::Low => write!(f, "LOW"),
        }
    }
}

/// Area of play a finding is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CS (Creep Score)")]
    CreepScore,
    #[serde(rename = "Vision Control")]
    Vision,
    #[serde(rename = "KDA Ratio")]
    Kda,
    #[serde(rename = "Deaths")]
    Deaths,
    #[serde(rename = "Win Rate")]
    WinRate,
    #[serde(rename = "Overall Performance")]
    Overall,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::CreepScore => "CS (Creep Score)",
            Category::Vision => "Vision Control",
            Category::Kda => "KDA Ratio",
            Category::Deaths => "Deaths",
            Category::WinRate => "Win Rate",
            Category::Overall => "Overall Performance",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A metric where the player sits away from the benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementArea {
    pub category: Category,

    /// Player's value, rounded for display
    pub current_value: f64,

    /// Benchmark value
    pub expected_value: f64,

    /// current - expected; negative means below the benchmark
    pub gap: f64,

    pub priority: Priority,

    pub recommendation: String,
}

/// Stats plus findings for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub player_stats: PlayerStats,
    pub improvement_areas: Vec<ImprovementArea>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Findings with the given priority, in rule order.
    pub fn areas_with_priority(
        &self,
        priority: Priority,
    ) -> impl Iterator<Item = &ImprovementArea> {
        self.improvement_areas
            .iter()
            .filter(move |a| a.priority == priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_serialization() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"HIGH\"");
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"MEDIUM\"");
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"LOW\"");

        let parsed: Priority = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::High.to_string(), "HIGH");
        assert_eq!(Priority::Low.to_string(), "LOW");
    }

    #[test]
    fn test_category_serializes_as_label() {
        for category in [
            Category::CreepScore,
            Category::Vision,
            Category::Kda,
            Category::Deaths,
            Category::WinRate,
            Category::Overall,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_analysis_result_keys() {
        let result = AnalysisResult {
            player_stats: PlayerStats::default(),
            improvement_areas: vec![ImprovementArea {
                category: Category::Deaths,
                current_value: 7.5,
                expected_value: 5.0,
                gap: 2.5,
                priority: Priority::High,
                recommendation: "Die less.".to_string(),
            }],
            analyzed_at: Utc::now(),
        };
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["playerStats"].is_object());
        assert!(json["analyzedAt"].is_string());
        let area = &json["improvementAreas"][0];
        assert_eq!(area["category"], "Deaths");
        assert_eq!(area["currentValue"], 7.5);
        assert_eq!(area["expectedValue"], 5.0);
        assert_eq!(area["gap"], 2.5);
        assert_eq!(area["priority"], "HIGH");
    }
}
