use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{ConfidenceLevel, Prediction};

/// Aggregate platform statistics over the full prediction set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_predictions: usize,
    pub execution_level: usize,
    pub demolition_level: usize,
    pub meat_level: usize,
    pub scrap_level: usize,
    pub avg_confidence: f64,
    pub avg_edge: f64,
    /// Distinct sport tags, sorted
    pub sports_supported: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl PlatformStats {
    /// Single pass over `predictions`; means are 0.0 for an empty set.
    pub fn compute(predictions: &[Prediction]) -> Self {
        let mut stats = Self {
            total_predictions: predictions.len(),
            execution_level: 0,
            demolition_level: 0,
            meat_level: 0,
            scrap_level: 0,
            avg_confidence: 0.0,
            avg_edge: 0.0,
            sports_supported: Vec::new(),
            last_updated: Utc::now(),
        };

        let mut confidence_sum = 0.0;
        let mut edge_sum = 0.0;
        let mut sports = BTreeSet::new();

        for prediction in predictions {
            match prediction.confidence_level {
                ConfidenceLevel::Execution => stats.execution_level += 1,
                ConfidenceLevel::Demolition => stats.demolition_level += 1,
                ConfidenceLevel::Meat => stats.meat_level += 1,
                ConfidenceLevel::Scrap => stats.scrap_level += 1,
            }
            confidence_sum += prediction.confidence;
            edge_sum += prediction.edge_percentage;
            sports.insert(prediction.sport.clone());
        }

        if !predictions.is_empty() {
            let n = predictions.len() as f64;
            stats.avg_confidence = confidence_sum / n;
            stats.avg_edge = edge_sum / n;
        }
        stats.sports_supported = sports.into_iter().collect();

        stats
    }
}
