use tracing::{debug, warn};

use crate::error::{FootprintError, Result};
use crate::model::footprint::FootprintInput;

pub const INPUT_KEYS: [&str; 6] = ["distance", "fuel", "electricity", "gas", "diet", "waste"];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub words: Vec<String>,
    /// `key:value` tokens in the order given.
    pub metadata: Vec<(String, String)>,
}

pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut words = Vec::new();
    let mut metadata = Vec::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.push((key.to_string(), value.to_string()));
                continue;
            }
        }
        words.push(arg.clone());
    }

    ParsedInput { words, metadata }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(FootprintError::UnknownKey(key.to_string())),
        _ => Err(FootprintError::AmbiguousKey {
            key: key.to_string(),
            candidates: matches.iter().map(|m| m.to_string()).collect(),
        }),
    }
}

/// Lenient number parsing: the longest numeric prefix wins, anything else
/// (empty, non-numeric, non-finite) is 0.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    let boundaries: Vec<usize> = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .collect();

    for &end in boundaries.iter().rev() {
        if let Ok(value) = s[..end].parse::<f64>() {
            if value.is_finite() {
                return value;
            }
        }
    }

    if !s.is_empty() {
        debug!(raw, "non-numeric input coerced to 0");
    }
    0.0
}

/// Builds a footprint input from `key:value` tokens. Keys may be abbreviated
/// to any unambiguous prefix; unknown keys and bare words are ignored. When a
/// field is given twice the later token wins.
pub fn parse_footprint_input(args: &[String]) -> Result<FootprintInput> {
    let parsed = parse_args(args);
    let mut input = FootprintInput::default();

    for word in &parsed.words {
        warn!(word = word.as_str(), "ignoring input without a key");
    }

    for (key, value) in parsed.metadata {
        let full_key = match expand_key(&key, &INPUT_KEYS) {
            Ok(k) => k,
            Err(e) => {
                warn!("ignoring input field: {}", e);
                continue;
            }
        };

        match full_key.as_str() {
            "distance" => input.car_distance_km = parse_number(&value),
            "fuel" => input.fuel_type = value.parse()?,
            "electricity" => input.electricity_kwh = parse_number(&value),
            "gas" => input.gas_usage_m3 = parse_number(&value),
            "diet" => input.diet_type = value.parse()?,
            "waste" => input.waste_kg_per_week = parse_number(&value),
            _ => {}
        }
    }

    Ok(input)
}
