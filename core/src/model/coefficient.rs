use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{FootprintError, Result};
use crate::model::footprint::{DietType, FuelType};

// Standard factors, kg CO2 per input unit
const PETROL_PER_KM: f64 = 2.31;
const DIESEL_PER_KM: f64 = 2.68;
const ELECTRIC_PER_KM: f64 = 0.05;
const ELECTRICITY_PER_KWH: f64 = 0.5;
const GAS_PER_M3: f64 = 2.0;
const VEGETARIAN_PER_MONTH: f64 = 100.0;
const NON_VEGETARIAN_PER_MONTH: f64 = 200.0;
const VEGAN_PER_MONTH: f64 = 50.0;
const WASTE_PER_KG: f64 = 0.5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnergyFactors {
    pub electricity: f64,
    pub gas: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LifestyleFactors {
    pub diet: BTreeMap<String, f64>,
    pub waste: f64,
}

/// Emission factors by category. Transportation and diet are keyed by the
/// category name so that a substituted table can leave entries out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    pub transportation: BTreeMap<String, f64>,
    pub energy: EnergyFactors,
    pub lifestyle: LifestyleFactors,
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CoefficientTable {
    pub fn standard() -> Self {
        let transportation = BTreeMap::from([
            (FuelType::Petrol.as_str().to_string(), PETROL_PER_KM),
            (FuelType::Diesel.as_str().to_string(), DIESEL_PER_KM),
            (FuelType::Electric.as_str().to_string(), ELECTRIC_PER_KM),
        ]);
        let diet = BTreeMap::from([
            (DietType::Vegetarian.as_str().to_string(), VEGETARIAN_PER_MONTH),
            (DietType::NonVegetarian.as_str().to_string(), NON_VEGETARIAN_PER_MONTH),
            (DietType::Vegan.as_str().to_string(), VEGAN_PER_MONTH),
        ]);

        Self {
            transportation,
            energy: EnergyFactors {
                electricity: ELECTRICITY_PER_KWH,
                gas: GAS_PER_M3,
            },
            lifestyle: LifestyleFactors {
                diet,
                waste: WASTE_PER_KG,
            },
        }
    }

    pub fn fuel_factor(&self, fuel: FuelType) -> Result<f64> {
        self.transportation
            .get(fuel.as_str())
            .copied()
            .ok_or_else(|| FootprintError::InvalidCategory {
                category: "fuel",
                value: fuel.as_str().to_string(),
            })
    }

    pub fn diet_factor(&self, diet: DietType) -> Result<f64> {
        self.lifestyle
            .diet
            .get(diet.as_str())
            .copied()
            .ok_or_else(|| FootprintError::InvalidCategory {
                category: "diet",
                value: diet.as_str().to_string(),
            })
    }
}
