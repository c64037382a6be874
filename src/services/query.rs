//! Prediction filtering and prop projection
//!
//! Pure functions over a prediction slice. Handlers fetch the current list
//! from the `PredictionSource` and pass it through here.

use tracing::debug;

use crate::domain::{ConfidenceLevel, Prediction, Prop};

/// Conjunctive filter over the prediction list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionFilter {
    /// Case-insensitive exact sport match
    pub sport: Option<String>,
    pub confidence: Option<ConfidenceLevel>,
    /// Inclusive lower bound on edge; values <= 0 disable the check
    pub min_edge: f64,
}

impl PredictionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw query parameters.
    ///
    /// `sport=all` (or an empty value) means every sport. The confidence label
    /// must be one of the four lowercase keys; anything else is ignored rather
    /// than rejected.
    pub fn from_params(sport: Option<&str>, confidence: Option<&str>, min_edge: Option<f64>) -> Self {
        let sport = sport
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
            .map(str::to_string);

        let confidence = confidence.and_then(|label| match label.parse::<ConfidenceLevel>() {
            Ok(level) => Some(level),
            Err(e) => {
                debug!(label, error = %e, "ignoring confidence filter");
                None
            }
        });

        Self {
            sport,
            confidence,
            min_edge: min_edge.unwrap_or(0.0),
        }
    }

    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    pub fn with_confidence(mut self, level: ConfidenceLevel) -> Self {
        self.confidence = Some(level);
        self
    }

    pub fn with_min_edge(mut self, min_edge: f64) -> Self {
        self.min_edge = min_edge;
        self
    }

    pub fn matches(&self, prediction: &Prediction) -> bool {
        if let Some(ref sport) = self.sport {
            if !prediction.is_sport(sport) {
                return false;
            }
        }

        if let Some(level) = self.confidence {
            if prediction.confidence_level != level {
                return false;
            }
        }

        if self.min_edge > 0.0 && prediction.edge_percentage < self.min_edge {
            return false;
        }

        true
    }

    /// Keep the predictions that satisfy every predicate, preserving order
    pub fn apply(&self, predictions: &[Prediction]) -> Vec<Prediction> {
        predictions
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// Project every prediction into its live prop, one-to-one and in order
pub fn project_props(predictions: &[Prediction]) -> Vec<Prop> {
    predictions.iter().map(Prediction::to_prop).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SampleDataStore;
    use crate::domain::PredictionSource;

    async fn sample() -> Vec<Prediction> {
        SampleDataStore::new().predictions().await.unwrap()
    }

    fn ids(predictions: &[Prediction]) -> Vec<&str> {
        predictions.iter().map(|p| p.prediction_id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_empty_filter_returns_everything() {
        let all = sample().await;
        let result = PredictionFilter::new().apply(&all);
        assert_eq!(result, all);
    }

    #[tokio::test]
    async fn test_sport_and_confidence_compose() {
        let all = sample().await;
        let filter = PredictionFilter::from_params(Some("nba"), Some("demolition"), None);
        assert_eq!(ids(&filter.apply(&all)), vec!["bb-003"]);
    }

    #[tokio::test]
    async fn test_sport_match_is_case_insensitive() {
        let all = sample().await;
        let filter = PredictionFilter::new().with_sport("NFL");
        assert_eq!(ids(&filter.apply(&all)), vec!["bb-002", "bb-004"]);
    }

    #[tokio::test]
    async fn test_sport_all_disables_sport_filter() {
        let all = sample().await;
        let filter = PredictionFilter::from_params(Some("ALL"), None, None);
        assert_eq!(filter.sport, None);
        assert_eq!(filter.apply(&all).len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_confidence_is_ignored() {
        let all = sample().await;
        let filter = PredictionFilter::from_params(None, Some("prime-cut"), None);
        assert_eq!(filter.confidence, None);
        assert_eq!(filter.apply(&all).len(), 5);
    }

    #[tokio::test]
    async fn test_confidence_label_must_match_exactly() {
        let all = sample().await;
        for label in ["EXECUTION", "Execution", " execution"] {
            let filter = PredictionFilter::from_params(None, Some(label), None);
            assert_eq!(filter.confidence, None, "{label:?}");
            assert_eq!(filter.apply(&all).len(), 5, "{label:?}");
        }
        let filter = PredictionFilter::from_params(None, Some("execution"), None);
        assert_eq!(ids(&filter.apply(&all)), vec!["bb-001"]);
    }

    #[tokio::test]
    async fn test_min_edge_is_inclusive() {
        let all = sample().await;
        let filter = PredictionFilter::new().with_min_edge(0.18);
        assert_eq!(ids(&filter.apply(&all)), vec!["bb-001", "bb-002", "bb-003"]);
    }

    #[tokio::test]
    async fn test_non_positive_min_edge_is_no_op() {
        let all = sample().await;
        assert_eq!(PredictionFilter::new().with_min_edge(-1.0).apply(&all).len(), 5);
    }

    #[tokio::test]
    async fn test_filter_equals_conjunction_of_predicates() {
        let all = sample().await;
        let sports = [None, Some("nba"), Some("nfl"), Some("mlb")];
        let levels = [None, Some("execution"), Some("demolition"), Some("meat"), Some("scrap")];
        let edges = [None, Some(0.0), Some(0.15), Some(0.25), Some(0.5)];

        for sport in sports {
            for level in levels {
                for edge in edges {
                    let filter = PredictionFilter::from_params(sport, level, edge);
                    let expected: Vec<_> = all
                        .iter()
                        .filter(|p| sport.map_or(true, |s| p.sport == s))
                        .filter(|p| {
                            level.map_or(true, |l| p.confidence_level.as_str().to_lowercase() == l)
                        })
                        .filter(|p| edge.map_or(true, |e| e <= 0.0 || p.edge_percentage >= e))
                        .cloned()
                        .collect();
                    assert_eq!(filter.apply(&all), expected, "{sport:?} {level:?} {edge:?}");
                }
            }
        }
    }

    #[tokio::test]
    async fn test_props_are_shape_preserving() {
        let all = sample().await;
        let props = project_props(&all);
        assert_eq!(props.len(), all.len());

        for (prop, prediction) in props.iter().zip(&all) {
            assert_eq!(prop.prop_id, prediction.prediction_id);
            assert_eq!(prop.event_id, format!("event-{}", prediction.prediction_id));
            assert_eq!(prop.player_name, prediction.player_name);
            assert_eq!(prop.sport, prediction.sport);
            assert_eq!(prop.stat_type, prediction.stat_type);
            assert_eq!(prop.line_value, prediction.line_value);
            assert_eq!(prop.recommendation, prediction.recommendation);
            assert_eq!(prop.confidence, prediction.confidence);
            assert_eq!(prop.edge_percentage, prediction.edge_percentage);
            assert_eq!(prop.posted_at, prediction.posted_at);
        }
    }
}
