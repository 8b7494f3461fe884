use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FootprintError;

/// Weeks counted per month when scaling weekly waste.
pub const WEEKS_PER_MONTH: f64 = 4.0;

pub const CO2_UNIT: &str = "kg CO₂";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
}

impl Default for FuelType {
    fn default() -> Self {
        FuelType::Petrol
    }
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
        }
    }
}

impl FromStr for FuelType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "petrol" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            "electric" => Ok(FuelType::Electric),
            _ => Err(FootprintError::InvalidCategory {
                category: "fuel",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    Vegetarian,
    NonVegetarian,
    Vegan,
}

impl Default for DietType {
    fn default() -> Self {
        DietType::Vegetarian
    }
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "vegetarian",
            DietType::NonVegetarian => "non-vegetarian",
            DietType::Vegan => "vegan",
        }
    }
}

impl FromStr for DietType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegetarian" => Ok(DietType::Vegetarian),
            "non-vegetarian" => Ok(DietType::NonVegetarian),
            "vegan" => Ok(DietType::Vegan),
            _ => Err(FootprintError::InvalidCategory {
                category: "diet",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FootprintInput {
    pub car_distance_km: f64,
    pub fuel_type: FuelType,
    pub electricity_kwh: f64,
    pub gas_usage_m3: f64,
    pub diet_type: DietType,
    pub waste_kg_per_week: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct FootprintResult {
    pub transport_kg: f64,
    pub energy_kg: f64,
    pub lifestyle_kg: f64,
    pub total_kg: f64,
}

impl FootprintResult {
    /// `486.0` -> `"486.00 kg CO₂"`
    pub fn total_text(&self) -> String {
        format_kg(self.total_kg)
    }
}

pub fn format_kg(kg: f64) -> String {
    format!("{:.2} {}", kg, CO2_UNIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories() {
        assert_eq!("Diesel".parse::<FuelType>().unwrap(), FuelType::Diesel);
        assert_eq!(" electric ".parse::<FuelType>().unwrap(), FuelType::Electric);
        assert_eq!("non-vegetarian".parse::<DietType>().unwrap(), DietType::NonVegetarian);

        assert!("hydrogen".parse::<FuelType>().is_err());
        assert!("carnivore".parse::<DietType>().is_err());
    }

    #[test]
    fn test_serde_names_match_table_keys() {
        let json = serde_json::to_string(&DietType::NonVegetarian).unwrap();
        assert_eq!(json, "\"non-vegetarian\"");
        let json = serde_json::to_string(&FuelType::Electric).unwrap();
        assert_eq!(json, "\"electric\"");
    }

    #[test]
    fn test_total_text() {
        let result = FootprintResult { total_kg: 486.0, ..Default::default() };
        assert_eq!(result.total_text(), "486.00 kg CO₂");
        assert_eq!(format_kg(-12.5), "-12.50 kg CO₂");
    }
}
