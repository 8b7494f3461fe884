use tracing::warn;

use crate::error::Result;
use crate::model::coefficient::CoefficientTable;
use crate::model::footprint::{FootprintInput, FootprintResult, WEEKS_PER_MONTH};

/// Monthly footprint of `input` under `table`. Pure: the same input and table
/// always give the same result.
pub fn compute_footprint(input: &FootprintInput, table: &CoefficientTable) -> Result<FootprintResult> {
    warn_negative("distance", input.car_distance_km);
    warn_negative("electricity", input.electricity_kwh);
    warn_negative("gas", input.gas_usage_m3);
    warn_negative("waste", input.waste_kg_per_week);

    let transport_kg = input.car_distance_km * table.fuel_factor(input.fuel_type)?;
    let energy_kg = (input.electricity_kwh * table.energy.electricity)
        + (input.gas_usage_m3 * table.energy.gas);
    let lifestyle_kg = table.diet_factor(input.diet_type)?
        + (input.waste_kg_per_week * WEEKS_PER_MONTH * table.lifestyle.waste);

    let total_kg = transport_kg + energy_kg + lifestyle_kg;

    Ok(FootprintResult {
        transport_kg,
        energy_kg,
        lifestyle_kg,
        total_kg,
    })
}

// Negative values are passed through unchanged.
fn warn_negative(field: &str, value: f64) {
    if value < 0.0 {
        warn!(field, value, "negative input produces a negative contribution");
    }
}
