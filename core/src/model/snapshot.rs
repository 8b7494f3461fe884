use serde::{Deserialize, Serialize};

use crate::model::footprint::FootprintResult;

// 1 credit per 1000 kg CO2
const KG_PER_CREDIT: f64 = 1000.0;
// 1 tree absorbs ~21 kg CO2 per year
const KG_PER_TREE: f64 = 21.0;

pub const INVESTMENT_CREDITS: i64 = 5;
pub const INVESTMENT_TREES: i64 = 25;

pub fn credits_for(total_kg: f64) -> i64 {
    (total_kg / KG_PER_CREDIT).floor() as i64
}

pub fn trees_for(total_kg: f64) -> i64 {
    (total_kg / KG_PER_TREE).floor() as i64
}

/// The latest saved footprint and what was derived from it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub footprint_text: String,
    pub credits: i64,
    pub trees: i64,
}

impl Snapshot {
    pub fn from_result(result: &FootprintResult) -> Self {
        Self {
            footprint_text: result.total_text(),
            credits: credits_for(result.total_kg),
            trees: trees_for(result.total_kg),
        }
    }
}

/// Whatever subset of the snapshot keys is present in storage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PartialSnapshot {
    pub footprint_text: Option<String>,
    pub credits: Option<i64>,
    pub trees: Option<i64>,
}

impl PartialSnapshot {
    pub fn is_empty(&self) -> bool {
        self.footprint_text.is_none() && self.credits.is_none() && self.trees.is_none()
    }

    pub fn into_complete(self) -> Option<Snapshot> {
        Some(Snapshot {
            footprint_text: self.footprint_text?,
            credits: self.credits?,
            trees: self.trees?,
        })
    }
}

impl From<Snapshot> for PartialSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            footprint_text: Some(snapshot.footprint_text),
            credits: Some(snapshot.credits),
            trees: Some(snapshot.trees),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_counts_floor() {
        assert_eq!(credits_for(486.0), 0);
        assert_eq!(trees_for(486.0), 23);
        assert_eq!(credits_for(2999.99), 2);
        assert_eq!(trees_for(21.0), 1);
        assert_eq!(trees_for(20.99), 0);
    }

    #[test]
    fn test_negative_total_floors_downwards() {
        assert_eq!(credits_for(-1.0), -1);
        assert_eq!(trees_for(-42.0), -2);
    }

    #[test]
    fn test_partial_completion() {
        let partial = PartialSnapshot {
            footprint_text: None,
            credits: Some(5),
            trees: Some(25),
        };
        assert!(!partial.is_empty());
        assert_eq!(partial.into_complete(), None);

        let snapshot = Snapshot {
            footprint_text: "10.00 kg CO₂".to_string(),
            credits: 0,
            trees: 0,
        };
        let partial = PartialSnapshot::from(snapshot.clone());
        assert_eq!(partial.into_complete(), Some(snapshot));
    }
}
