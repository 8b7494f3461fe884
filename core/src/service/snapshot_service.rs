use tracing::{info, warn};

use crate::error::Result;
use crate::model::footprint::FootprintResult;
use crate::model::snapshot::{PartialSnapshot, Snapshot, INVESTMENT_CREDITS, INVESTMENT_TREES};
use crate::model::ui::Theme;
use crate::repository::KeyValueStore;

pub const FOOTPRINT_KEY: &str = "savedFootprint";
pub const CREDITS_KEY: &str = "savedCredits";
pub const TREES_KEY: &str = "savedTrees";
pub const THEME_KEY: &str = "theme";

/// Saves and restores the latest snapshot through a key-value store.
pub struct SnapshotStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save_snapshot(&self, result: &FootprintResult) -> Result<Snapshot> {
        let snapshot = Snapshot::from_result(result);
        self.store.set(FOOTPRINT_KEY, &snapshot.footprint_text)?;
        self.store.set(CREDITS_KEY, &snapshot.credits.to_string())?;
        self.store.set(TREES_KEY, &snapshot.trees.to_string())?;
        info!(
            footprint = snapshot.footprint_text.as_str(),
            credits = snapshot.credits,
            trees = snapshot.trees,
            "snapshot saved"
        );
        Ok(snapshot)
    }

    /// `None` unless all three keys are present and readable.
    pub fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        Ok(self.load_partial()?.into_complete())
    }

    /// Each key independently; absent or unreadable values are `None`.
    pub fn load_partial(&self) -> Result<PartialSnapshot> {
        Ok(PartialSnapshot {
            footprint_text: self.store.get(FOOTPRINT_KEY)?.filter(|s| !s.is_empty()),
            credits: self.read_count(CREDITS_KEY)?,
            trees: self.read_count(TREES_KEY)?,
        })
    }

    /// Adds a fixed +5 credits and +25 trees on top of whatever is stored.
    /// The footprint is not consulted, so the counts can drift away from it.
    pub fn simulate_investment(&self) -> Result<PartialSnapshot> {
        let mut current = self.load_partial()?;
        let credits = current.credits.unwrap_or(0).saturating_add(INVESTMENT_CREDITS);
        let trees = current.trees.unwrap_or(0).saturating_add(INVESTMENT_TREES);

        self.store.set(CREDITS_KEY, &credits.to_string())?;
        self.store.set(TREES_KEY, &trees.to_string())?;
        info!(credits, trees, "investment simulated");

        current.credits = Some(credits);
        current.trees = Some(trees);
        Ok(current)
    }

    pub fn load_theme(&self) -> Result<Theme> {
        Ok(Theme::from_stored(self.store.get(THEME_KEY)?.as_deref()))
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    fn read_count(&self, key: &str) -> Result<Option<i64>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match leading_integer(&raw) {
            Some(value) => Ok(Some(value)),
            None => {
                warn!(key, raw = raw.as_str(), "ignoring unreadable stored count");
                Ok(None)
            }
        }
    }
}

/// Reads the integer at the start of `raw`, so `"12abc"` is 12.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let end = s
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')))
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    s[..end].parse().ok()
}
