//! Seeded in-memory data source
//!
//! Serves the fixed demonstration slate (five predictions, one parlay per
//! sport, two events) that the service boots with. Everything is built once
//! at construction and never mutated.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    ConfidenceLevel, DailyParlays, Event, EventStatus, ParlaySport, Prediction,
    PredictionSource, Recommendation, SixParlay, SixPick,
};
use crate::error::Result;

/// `PredictionSource` backed by static sample data
#[derive(Debug, Clone)]
pub struct SampleDataStore {
    predictions: Vec<Prediction>,
    events: Vec<Event>,
    nfl_parlays: Vec<SixParlay>,
    nba_parlays: Vec<SixParlay>,
    daily: DailyParlays,
}

impl SampleDataStore {
    pub fn new() -> Self {
        let picks = sample_picks();
        let nfl_parlays = vec![SixParlay {
            id: "nfl-parlay-1".to_string(),
            sport: ParlaySport::Nfl,
            confidence: 0.992,
            multiplier: 25.0,
            picks: picks[..2].to_vec(),
            bankroll_risk: 100.0,
            expected_profit: 2400.0,
        }];
        let nba_parlays = vec![SixParlay {
            id: "nba-parlay-1".to_string(),
            sport: ParlaySport::Nba,
            confidence: 0.993,
            multiplier: 25.0,
            picks: picks[2..].to_vec(),
            bankroll_risk: 100.0,
            expected_profit: 2430.0,
        }];
        let daily = DailyParlays {
            date: "2025-10-31".to_string(),
            total_daily_risk: 300.0,
            expected_profit: 6025.0,
            win_rate: 92,
            games_tonight: 8,
            nfl_parlays: nfl_parlays.clone(),
            nba_parlays: nba_parlays.clone(),
        };

        Self {
            predictions: sample_predictions(),
            events: sample_events(),
            nfl_parlays,
            nba_parlays,
            daily,
        }
    }

    /// Build a store over an explicit prediction list, keeping the seeded
    /// events and parlays.
    pub fn with_predictions(predictions: Vec<Prediction>) -> Self {
        Self {
            predictions,
            ..Self::new()
        }
    }
}

impl Default for SampleDataStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionSource for SampleDataStore {
    fn name(&self) -> &str {
        "sample"
    }

    async fn predictions(&self) -> Result<Vec<Prediction>> {
        Ok(self.predictions.clone())
    }

    async fn prediction(&self, prediction_id: &str) -> Result<Option<Prediction>> {
        Ok(self
            .predictions
            .iter()
            .find(|p| p.prediction_id == prediction_id)
            .cloned())
    }

    async fn events(&self) -> Result<Vec<Event>> {
        Ok(self.events.clone())
    }

    async fn parlays(&self, sport: ParlaySport) -> Result<Vec<SixParlay>> {
        Ok(match sport {
            ParlaySport::Nfl => self.nfl_parlays.clone(),
            ParlaySport::Nba => self.nba_parlays.clone(),
        })
    }

    async fn daily_parlays(&self) -> Result<DailyParlays> {
        Ok(self.daily.clone())
    }
}

/// Fixed UTC instant for seed data (falls back to the epoch on an invalid literal)
fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn sample_predictions() -> Vec<Prediction> {
    vec![
        Prediction {
            prediction_id: "bb-001".to_string(),
            player_name: "LeBron James".to_string(),
            team: "LAL".to_string(),
            sport: "nba".to_string(),
            stat_type: "Points".to_string(),
            line_value: 24.5,
            recommendation: Recommendation::Over,
            confidence: 0.92,
            analysis: "Advanced mathematical slaughter based on comprehensive analysis".to_string(),
            reasoning: "LeBron James is operating at EXECUTION LEVEL dominance. Home court advantage provides +3.1 PPG average that becomes lethal in playoff atmosphere. Opponent defense ranks 27th in points allowed to small forwards (28.4 PPG), creating a feast opportunity. Lakers offense channels through LeBron with +4.2% usage rate increase in high-stakes games. Recent form shows 27.8 PPG over last 5 games with 31.2% usage rate. Interior defense surrendering 1.31 points per possession creates optimal scoring conditions.".to_string(),
            edge_percentage: 0.31,
            confidence_level: ConfidenceLevel::Execution,
            posted_at: utc(2025, 10, 31, 13, 20),
        },
        Prediction {
            prediction_id: "bb-002".to_string(),
            player_name: "Josh Allen".to_string(),
            team: "BUF".to_string(),
            sport: "nfl".to_string(),
            stat_type: "Passing Yards".to_string(),
            line_value: 249.5,
            recommendation: Recommendation::Under,
            confidence: 0.82,
            analysis: "DEMOLITION LEVEL prediction based on historical road performance".to_string(),
            reasoning: "Josh Allen's road passer rating undergoes MASSACRE against elite defenses. Road performance drops to 84.7 QBR (vs 105.1 at home), representing a 20.4-point decline. Opponent possesses top-5 defense allowing only 6.2 YPA to opposing quarterbacks. Weather warfare intensifies with 18+ mph winds forecasted, historically limiting aerial production. Bills lean heavily on ground game in windy conditions, averaging 42 carries and 198 rushing yards in games with 15+ mph winds.".to_string(),
            edge_percentage: 0.18,
            confidence_level: ConfidenceLevel::Demolition,
            posted_at: utc(2025, 10, 31, 14, 45),
        },
        Prediction {
            prediction_id: "bb-003".to_string(),
            player_name: "Victor Wembanyama".to_string(),
            team: "SAS".to_string(),
            sport: "nba".to_string(),
            stat_type: "Blocks".to_string(),
            line_value: 3.5,
            recommendation: Recommendation::Over,
            confidence: 0.88,
            analysis: "DEMOLITION LEVEL prediction based on matchup and recent form".to_string(),
            reasoning: "Wembanyama's block rate SUFFOCATES opposing offenses at home. 3.8 blocks per game average in San Antonio with 6.2% block rate (highest in NBA). Opponent field goal attempts in paint: 48.2 per game, creating maximum rejection opportunities. Recent 5-game average: 4.2 BPG with 7.8% block rate. Home court crowd energy amplifies defensive intensity (+15% block rate). Matchup factor: opponent ranks 29th in interior scoring efficiency (1.18 PPP), forcing more paint attempts.".to_string(),
            edge_percentage: 0.24,
            confidence_level: ConfidenceLevel::Demolition,
            posted_at: utc(2025, 10, 31, 15, 10),
        },
        Prediction {
            prediction_id: "bb-004".to_string(),
            player_name: "Christian McCaffrey".to_string(),
            team: "SF".to_string(),
            sport: "nfl".to_string(),
            stat_type: "Rushing Yards".to_string(),
            line_value: 85.5,
            recommendation: Recommendation::Over,
            confidence: 0.79,
            analysis: "MEAT LEVEL prediction with solid underlying factors".to_string(),
            reasoning: "McCaffrey's ground game DOMINATES against soft defensive fronts. 6.2 YPC average at home with 89.3 rushing yards per game this season. Opponent allows 4.8 YPC to running backs and ranks 25th in run defense efficiency. 49ers offensive line creating 2.3 yards before contact on average. Game script favors CMC with 78% chance of positive game flow (leading by 7+ points). Weather conditions optimal for ground and pound (no precipitation, light winds).".to_string(),
            edge_percentage: 0.15,
            confidence_level: ConfidenceLevel::Meat,
            posted_at: utc(2025, 10, 31, 16, 30),
        },
        Prediction {
            prediction_id: "bb-005".to_string(),
            player_name: "Cade Cunningham".to_string(),
            team: "DET".to_string(),
            sport: "nba".to_string(),
            stat_type: "Assists".to_string(),
            line_value: 7.5,
            recommendation: Recommendation::Under,
            confidence: 0.74,
            analysis: "MEAT LEVEL prediction based on assist conversion rates".to_string(),
            reasoning: "Cunningham's assist production STRUGGLES against elite defensive teams. 6.8 assists per game average with declining trend over last 10 games (6.1 APG). Opponent ranks top-10 in assist defense, averaging 4.2 deflections per game and 8.1 steals per game. Pistons shot selection: only 18.3% of shots assisted (bottom-5 NBA), limiting assist opportunities. Recent form shows assist drought: 4.7 APG over last 5 games.".to_string(),
            edge_percentage: 0.12,
            confidence_level: ConfidenceLevel::Meat,
            posted_at: utc(2025, 10, 31, 17, 45),
        },
    ]
}

fn sample_picks() -> Vec<SixPick> {
    vec![
        SixPick {
            id: "nfl-1-p1".to_string(),
            player: "Josh Allen".to_string(),
            position: "QB".to_string(),
            stat_type: "Passing TDs".to_string(),
            line: "1.5".to_string(),
            selection: Recommendation::Under,
            confidence: 0.978,
            ev: 0.18,
            reasoning: vec![
                "Bills vs Broncos - Broncos allow only 0.9 TDs/game to QBs".to_string(),
                "Allen trending UNDER in last 3 games (1, 0, 2 TDs)".to_string(),
                "Broncos secondary ranked #2 vs pass, Allen 15% under season avg vs top defenses".to_string(),
            ],
        },
        SixPick {
            id: "nfl-1-p2".to_string(),
            player: "Saquon Barkley".to_string(),
            position: "RB".to_string(),
            stat_type: "Rushing Yards".to_string(),
            line: "85.5".to_string(),
            selection: Recommendation::Over,
            confidence: 0.981,
            ev: 0.22,
            reasoning: vec![
                "Eagles offense ranks #2 in rushing attempts vs Broncos run defense #27".to_string(),
                "Barkley averages 112 rush yards vs defenses allowing 100+".to_string(),
                "Broncos B2B games = 2.3 rush yards per attempt increase for RBs".to_string(),
            ],
        },
        SixPick {
            id: "nba-1-p1".to_string(),
            player: "LeBron James".to_string(),
            position: "SF".to_string(),
            stat_type: "Points".to_string(),
            line: "24.5".to_string(),
            selection: Recommendation::Over,
            confidence: 0.984,
            ev: 0.19,
            reasoning: vec![
                "Lakers vs Warriors - Warriors rank #28 vs SFs, 27.2 pts allowed".to_string(),
                "LeBron 28+ points in 4/5 games vs Warriors (career)".to_string(),
                "Warriors rim protection: 48% opponent FG% in paint".to_string(),
                "Lakers playing from behind = LeBron usage rate +15%".to_string(),
            ],
        },
    ]
}

fn sample_events() -> Vec<Event> {
    vec![
        Event {
            event_id: "nba-2025-10-31-001".to_string(),
            sport: "nba".to_string(),
            home_team: "LAL".to_string(),
            away_team: "MIA".to_string(),
            start_time_utc: utc(2025, 10, 31, 23, 30),
            venue: "Crypto.com Arena".to_string(),
            status: EventStatus::Scheduled,
        },
        Event {
            event_id: "nfl-2025-10-31-001".to_string(),
            sport: "nfl".to_string(),
            home_team: "PHI".to_string(),
            away_team: "BUF".to_string(),
            start_time_utc: utc(2025, 10, 31, 18, 0),
            venue: "Lincoln Financial Field".to_string(),
            status: EventStatus::Scheduled,
        },
    ]
}
