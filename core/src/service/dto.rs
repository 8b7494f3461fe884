use serde::{Deserialize, Serialize};

use crate::model::footprint::{format_kg, FootprintResult, CO2_UNIT};
use crate::model::snapshot::PartialSnapshot;

/// What the dashboard shows. Missing stored values fall back to blank/zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Dashboard {
    pub footprint_text: Option<String>,
    pub credits: i64,
    pub trees: i64,
}

impl Dashboard {
    pub fn from_partial(partial: &PartialSnapshot) -> Self {
        Self {
            footprint_text: partial.footprint_text.clone(),
            credits: partial.credits.unwrap_or(0),
            trees: partial.trees.unwrap_or(0),
        }
    }

    pub fn footprint_display(&self) -> String {
        self.footprint_text
            .clone()
            .unwrap_or_else(|| format!("0 {}", CO2_UNIT))
    }
}

/// One labelled line of a calculation result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultLine {
    pub label: String,
    pub value: String,
    pub is_total: bool,
}

pub fn result_lines(result: &FootprintResult) -> Vec<ResultLine> {
    let line = |label: &str, kg: f64, is_total: bool| ResultLine {
        label: label.to_string(),
        value: format_kg(kg),
        is_total,
    };
    vec![
        line("Transportation", result.transport_kg, false),
        line("Energy", result.energy_kg, false),
        line("Lifestyle", result.lifestyle_kg, false),
        line("Total Monthly Footprint", result.total_kg, true),
    ]
}
