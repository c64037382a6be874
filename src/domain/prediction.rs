use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal strength label attached to every prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceLevel {
    Execution,
    Demolition,
    Meat,
    Scrap,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Execution => "EXECUTION",
            ConfidenceLevel::Demolition => "DEMOLITION",
            ConfidenceLevel::Meat => "MEAT",
            ConfidenceLevel::Scrap => "SCRAP",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfidenceLevel {
    type Err = String;

    /// Maps the lowercase query-string labels (`execution`, `meat`, ...).
    /// Anything else, including the uppercase wire form, is unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "execution" => Ok(ConfidenceLevel::Execution),
            "demolition" => Ok(ConfidenceLevel::Demolition),
            "meat" => Ok(ConfidenceLevel::Meat),
            "scrap" => Ok(ConfidenceLevel::Scrap),
            other => Err(format!("unknown confidence level: {other}")),
        }
    }
}

/// Over/under call on a stat line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Over,
    Under,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Over => write!(f, "OVER"),
            Recommendation::Under => write!(f, "UNDER"),
        }
    }
}

/// A single analytic call on a player statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction_id: String,
    pub player_name: String,
    pub team: String,
    /// Lowercase sport tag (e.g., "nba", "nfl")
    pub sport: String,
    pub stat_type: String,
    pub line_value: f64,
    pub recommendation: Recommendation,
    /// Model confidence in [0, 1]
    pub confidence: f64,
    pub analysis: String,
    pub reasoning: String,
    pub edge_percentage: f64,
    pub confidence_level: ConfidenceLevel,
    pub posted_at: DateTime<Utc>,
}

impl Prediction {
    pub fn is_sport(&self, sport: &str) -> bool {
        self.sport.eq_ignore_ascii_case(sport)
    }

    /// Project into the client-facing live prop shape
    pub fn to_prop(&self) -> Prop {
        Prop {
            prop_id: self.prediction_id.clone(),
            event_id: format!("event-{}", self.prediction_id),
            player_name: self.player_name.clone(),
            sport: self.sport.clone(),
            stat_type: self.stat_type.clone(),
            line_value: self.line_value,
            recommendation: self.recommendation,
            confidence: self.confidence,
            reasoning: self.reasoning.clone(),
            edge_percentage: self.edge_percentage,
            posted_at: self.posted_at,
        }
    }
}

/// Read-model projection of a `Prediction` for the live odds board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub prop_id: String,
    pub event_id: String,
    pub player_name: String,
    pub sport: String,
    pub stat_type: String,
    pub line_value: f64,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub reasoning: String,
    pub edge_percentage: f64,
    pub posted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_level_parses_lowercase_labels_only() {
        assert_eq!("execution".parse(), Ok(ConfidenceLevel::Execution));
        assert_eq!("demolition".parse(), Ok(ConfidenceLevel::Demolition));
        assert_eq!("meat".parse(), Ok(ConfidenceLevel::Meat));
        assert_eq!("scrap".parse(), Ok(ConfidenceLevel::Scrap));
        assert!("DEMOLITION".parse::<ConfidenceLevel>().is_err());
        assert!(" meat ".parse::<ConfidenceLevel>().is_err());
        assert!("prime".parse::<ConfidenceLevel>().is_err());
    }

    #[test]
    fn test_wire_format_uses_uppercase_labels() {
        let json = serde_json::to_string(&ConfidenceLevel::Demolition).unwrap();
        assert_eq!(json, "\"DEMOLITION\"");
        let json = serde_json::to_string(&Recommendation::Under).unwrap();
        assert_eq!(json, "\"UNDER\"");
    }
}
