use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::resolve_data_dir;
use crate::error::Result;
use crate::repository::traits::KeyValueStore;

const DEFAULT_FILE_NAME: &str = "storage.json";

/// Key-value store kept as one JSON object on disk.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    file_path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = resolve_data_dir(base_dir)?;
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &BTreeMap::<String, String>::new())?;
            writer.flush()?;
        }

        Ok(FileKeyValueStore { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_values(&self) -> Result<BTreeMap<String, String>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let values = serde_json::from_reader(reader)?;
        Ok(values)
    }

    fn write_values(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, values)?;
        writer.flush()?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.read_values()?;
        let value = values.remove(key);
        debug!(key, found = value.is_some(), "storage read");
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_values()?;
        values.insert(key.to_string(), value.to_string());
        self.write_values(&values)?;
        debug!(key, value, "storage write");
        Ok(())
    }
}
