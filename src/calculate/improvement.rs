use crate::models::{Category, ImprovementArea, PlayerStats, Priority};

use super::{round_to, Benchmarks};

const CS_RECOMMENDATION: &str = "Focus on last-hitting minions more consistently. Practice farming in \
     training mode and aim to maintain CS during mid-game teamfights.";

const VISION_RECOMMENDATION: &str = "Purchase more control wards and place wards in key objectives \
     (Dragon, Baron). Clear enemy wards when possible to increase vision score.";

const KDA_RECOMMENDATION: &str = "Focus on safer positioning in teamfights. Prioritize assists over \
     risky kills and avoid unnecessary deaths.";

const DEATHS_RECOMMENDATION: &str = "Review your deaths to identify patterns. Common causes: \
     overextending without vision, poor positioning in fights, or staying too long with low HP.";

const WIN_RATE_RECOMMENDATION: &str = "Focus on macro gameplay: objective control, wave management, \
     and better decision-making in mid-late game. Consider your champion pool and role effectiveness.";

const OVERALL_RECOMMENDATION: &str = "Your performance is above average! Continue maintaining good CS, \
     vision control, and KDA. Focus on consistency and adapting to different team compositions.";

type Rule = fn(&PlayerStats, &Benchmarks) -> Option<ImprovementArea>;

/// Rules in output order. Each one is independent of the others.
const RULES: [Rule; 5] = [
    creep_score_rule,
    vision_rule,
    kda_rule,
    deaths_rule,
    win_rate_rule,
];

/// Compare stats against benchmarks and list what the player should work on.
///
/// Never empty: when no rule fires a single low-priority
/// "Overall Performance" entry is returned instead.
pub fn identify_improvement_areas(
    stats: &PlayerStats,
    benchmarks: &Benchmarks,
) -> Vec<ImprovementArea> {
    let areas: Vec<ImprovementArea> = RULES
        .iter()
        .filter_map(|rule| rule(stats, benchmarks))
        .collect();

    if areas.is_empty() {
        return vec![positive_feedback()];
    }

    areas
}

fn finding(
    category: Category,
    current: f64,
    expected: f64,
    gap: f64,
    decimals: i32,
    priority: Priority,
    recommendation: &str,
) -> ImprovementArea {
    ImprovementArea {
        category,
        current_value: round_to(current, decimals),
        expected_value: expected,
        gap: round_to(gap, decimals),
        priority,
        recommendation: recommendation.to_string(),
    }
}

fn creep_score_rule(stats: &PlayerStats, benchmarks: &Benchmarks) -> Option<ImprovementArea> {
    let gap = stats.cs_per_minute - benchmarks.cs_per_minute;
    (gap < -1.0).then(|| {
        let priority = if gap <= -2.0 {
            Priority::High
        } else {
            Priority::Medium
        };

        finding(
            Category::CreepScore,
            stats.cs_per_minute,
            benchmarks.cs_per_minute,
            gap,
            1,
            priority,
            CS_RECOMMENDATION,
        )
    })
}

fn vision_rule(stats: &PlayerStats, benchmarks: &Benchmarks) -> Option<ImprovementArea> {
    let gap = stats.average_vision_score - benchmarks.vision_score;
    (gap < -10.0).then(|| {
        let priority = if gap <= -20.0 {
            Priority::High
        } else {
            Priority::Medium
        };

        finding(
            Category::Vision,
            stats.average_vision_score,
            benchmarks.vision_score,
            gap,
            1,
            priority,
            VISION_RECOMMENDATION,
        )
    })
}

fn kda_rule(stats: &PlayerStats, benchmarks: &Benchmarks) -> Option<ImprovementArea> {
    let gap = stats.kda - benchmarks.kda;
    (gap < -0.5).then(|| {
        let priority = if gap < -1.0 {
            Priority::High
        } else {
            Priority::Medium
        };

        finding(
            Category::Kda,
            stats.kda,
            benchmarks.kda,
            gap,
            2,
            priority,
            KDA_RECOMMENDATION,
        )
    })
}

fn deaths_rule(stats: &PlayerStats, benchmarks: &Benchmarks) -> Option<ImprovementArea> {
    let gap = stats.average_deaths - benchmarks.deaths;
    (gap > 1.0).then(|| {
        let priority = if gap > 2.0 {
            Priority::High
        } else {
            Priority::Medium
        };

        finding(
            Category::Deaths,
            stats.average_deaths,
            benchmarks.deaths,
            gap,
            1,
            priority,
            DEATHS_RECOMMENDATION,
        )
    })
}

fn win_rate_rule(stats: &PlayerStats, benchmarks: &Benchmarks) -> Option<ImprovementArea> {
    (stats.win_rate < benchmarks.win_rate_floor).then(|| {
        finding(
            Category::WinRate,
            stats.win_rate,
            benchmarks.win_rate,
            stats.win_rate - benchmarks.win_rate,
            1,
            Priority::High,
            WIN_RATE_RECOMMENDATION,
        )
    })
}

fn positive_feedback() -> ImprovementArea {
    ImprovementArea {
        category: Category::Overall,
        current_value: 0.0,
        expected_value: 0.0,
        gap: 0.0,
        priority: Priority::Low,
        recommendation: OVERALL_RECOMMENDATION.to_string(),
    }
}
