use serde::{Deserialize, Serialize};

use super::Recommendation;

/// Sport bucket a parlay list is published under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParlaySport {
    Nfl,
    Nba,
}

/// One leg of a six-times parlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SixPick {
    pub id: String,
    pub player: String,
    pub position: String,
    pub stat_type: String,
    /// Line as published by the book (kept as text, e.g. "85.5")
    pub line: String,
    pub selection: Recommendation,
    pub confidence: f64,
    /// Expected value of the leg
    pub ev: f64,
    pub reasoning: Vec<String>,
}

/// A bundle of picks priced as a single combined bet
///
/// Aggregate fields are supplied alongside the picks, not derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SixParlay {
    pub id: String,
    pub sport: ParlaySport,
    pub confidence: f64,
    pub multiplier: f64,
    pub picks: Vec<SixPick>,
    pub bankroll_risk: f64,
    pub expected_profit: f64,
}

/// Day-level rollup of every published parlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyParlays {
    /// Slate date (YYYY-MM-DD)
    pub date: String,
    pub total_daily_risk: f64,
    pub expected_profit: f64,
    /// Percent, published as a whole number
    pub win_rate: u32,
    pub games_tonight: u32,
    pub nfl_parlays: Vec<SixParlay>,
    pub nba_parlays: Vec<SixParlay>,
}
