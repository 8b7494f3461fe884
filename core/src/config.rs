use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{FootprintError, Result};
use crate::model::coefficient::CoefficientTable;

pub const DATA_DIR_ENV: &str = "CARBONWISE_HOME";
const DEFAULT_DIR_NAME: &str = ".carbonwise";
const COEFFICIENTS_FILE_NAME: &str = "coefficients.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub coefficients: CoefficientTable,
}

impl Config {
    /// Resolves the data directory and reads `coefficients.json` from it when
    /// present. The standard table is used otherwise.
    pub fn load(base_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = resolve_data_dir(base_dir)?;
        let path = data_dir.join(COEFFICIENTS_FILE_NAME);

        let coefficients = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let table: CoefficientTable = serde_json::from_str(&content)?;
            info!(path = %path.display(), "loaded coefficient table");
            table
        } else {
            debug!(path = %path.display(), "no coefficient file, using standard table");
            CoefficientTable::standard()
        };

        Ok(Self { data_dir, coefficients })
    }
}

/// Explicit directory first, then `CARBONWISE_HOME`, then `~/.carbonwise`.
pub fn resolve_data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = base_dir {
        return Ok(dir);
    }
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home_dir = dirs::home_dir()
        .ok_or_else(|| FootprintError::Storage("Could not determine home directory".to_string()))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}
