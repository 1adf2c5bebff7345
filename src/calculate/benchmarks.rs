use serde::{Deserialize, Serialize};

/// Reference values an average player is expected to hit.
///
/// The defaults are the fixed benchmarks every recommendation rule was tuned
/// against. A different set (say, per rank) can be supplied via config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmarks {
    /// Creep score per minute
    #[serde(default = "default_cs_per_minute")]
    pub cs_per_minute: f64,

    /// Vision score per game
    #[serde(default = "default_vision_score")]
    pub vision_score: f64,

    #[serde(default = "default_kda")]
    pub kda: f64,

    /// Deaths per game
    #[serde(default = "default_deaths")]
    pub deaths: f64,

    /// Win rate (%) reported as the expected value
    #[serde(default = "default_win_rate")]
    pub win_rate: f64,

    /// Win rate (%) below which the win rate rule fires
    #[serde(default = "default_win_rate_floor")]
    pub win_rate_floor: f64,
}

fn default_cs_per_minute() -> f64 {
    6.0
}

fn default_vision_score() -> f64 {
    40.0
}

fn default_kda() -> f64 {
    3.0
}

fn default_deaths() -> f64 {
    5.0
}

fn default_win_rate() -> f64 {
    50.0
}

fn default_win_rate_floor() -> f64 {
    45.0
}

impl Default for Benchmarks {
    fn default() -> Self {
        Self {
            cs_per_minute: default_cs_per_minute(),
            vision_score: default_vision_score(),
            kda: default_kda(),
            deaths: default_deaths(),
            win_rate: default_win_rate(),
            win_rate_floor: default_win_rate_floor(),
        }
    }
}

impl Benchmarks {
    /// Name/value pairs in rule order.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("cs_per_minute", self.cs_per_minute),
            ("vision_score", self.vision_score),
            ("kda", self.kda),
            ("deaths", self.deaths),
            ("win_rate", self.win_rate),
            ("win_rate_floor", self.win_rate_floor),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_benchmarks() {
        let b = Benchmarks::default();

        assert_eq!(b.cs_per_minute, 6.0);
        assert_eq!(b.vision_score, 40.0);
        assert_eq!(b.kda, 3.0);
        assert_eq!(b.deaths, 5.0);
        assert_eq!(b.win_rate, 50.0);
        assert_eq!(b.win_rate_floor, 45.0);
    }

    #[test]
    fn test_partial_override() {
        let b: Benchmarks = toml::from_str("cs_per_minute = 7.5").unwrap();

        assert_eq!(b.cs_per_minute, 7.5);
        assert_eq!(b.vision_score, 40.0);
    }
}
