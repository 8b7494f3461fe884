use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::service::dto::Dashboard;

pub const EXPORT_MESSAGE: &str =
    "Report exported successfully! In a real application, this would generate a PDF.";

const CDM_CONTRIBUTIONS: [&str; 4] = [
    "Renewable energy development",
    "Forest conservation efforts",
    "Sustainable waste management",
    "Community environmental education",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImpactEquivalents {
    pub trees_annually: i64,
    pub cars_removed: i64,
    pub homes_powered: i64,
    pub waste_recycled_kg: i64,
}

impl ImpactEquivalents {
    pub fn from_counts(credits: i64, trees: i64) -> Self {
        Self {
            trees_annually: trees,
            cars_removed: credits.saturating_mul(2),
            homes_powered: credits.saturating_mul(5),
            waste_recycled_kg: trees.saturating_mul(100),
        }
    }
}

/// Monthly report derived from the dashboard at generation time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub period: String,
    pub current_footprint: String,
    pub credits: i64,
    pub trees: i64,
    pub impact: ImpactEquivalents,
    pub contributions: Vec<String>,
}

pub fn generate_report(dashboard: &Dashboard, today: NaiveDate) -> Report {
    Report {
        period: today.format("%B %Y").to_string(),
        current_footprint: dashboard.footprint_display(),
        credits: dashboard.credits,
        trees: dashboard.trees,
        impact: ImpactEquivalents::from_counts(dashboard.credits, dashboard.trees),
        contributions: CDM_CONTRIBUTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

impl Report {
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Monthly Carbon Report ({})\n", self.period));
        out.push_str(&format!("  Current Footprint: {}\n", self.current_footprint));
        out.push_str(&format!("  CDM Credits:       {}\n", self.credits));
        out.push_str(&format!("  Trees Planted:     {}\n", self.trees));
        out.push('\n');

        out.push_str("Environmental Impact\n");
        out.push_str("Your carbon reduction efforts are equivalent to:\n");
        out.push_str(&format!("  - Planting {} trees annually\n", self.impact.trees_annually));
        out.push_str(&format!(
            "  - Removing {} cars from the road for a year\n",
            self.impact.cars_removed
        ));
        out.push_str(&format!(
            "  - Powering {} homes with renewable energy\n",
            self.impact.homes_powered
        ));
        out.push_str(&format!("  - Recycling {} kg of waste\n", self.impact.waste_recycled_kg));
        out.push('\n');

        out.push_str("CDM Contribution\n");
        out.push_str("Through your participation in CDM projects, you've contributed to:\n");
        for item in &self.contributions {
            out.push_str(&format!("  - {}\n", item));
        }
        out.push('\n');

        out.push_str("Footprint Trend\n");
        out.push_str("  Only the latest snapshot is stored, so no trend is available.\n");
        out
    }
}
