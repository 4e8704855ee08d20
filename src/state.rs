use anyhow::{Context, Result};
use scoreboard_api::TickerItem;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// The persisted ticker document (data.json).
///
/// `today` and `finals` are only ever replaced wholesale, never merged
/// item by item; see `update::apply_fetched`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerState {
    #[serde(default)]
    pub today: Vec<TickerItem>,
    #[serde(default)]
    pub finals: Vec<TickerItem>,
    #[serde(default)]
    pub favorites: Vec<TickerItem>,
    /// League label → team names to track. External input; never modified.
    /// serde_json's preserve_order keeps the resolver output in file order.
    #[serde(default, rename = "favoritesTeams")]
    pub favorites_teams: Map<String, Value>,
    #[serde(default, rename = "statusLine")]
    pub status_line: String,
    /// Keys the display owns but the updater does not understand.
    /// Carried through the rewrite untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TickerState {
    /// Load the persisted document. Any failure here is fatal: the updater
    /// refuses to run against a missing or malformed data file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid ticker state in {}", path.display()))
    }

    /// Write the document back, pretty-printed with a trailing newline.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json =
            serde_json::to_string_pretty(self).context("could not serialize ticker state")?;
        json.push('\n');
        fs::write(path, json).with_context(|| format!("could not write {}", path.display()))
    }
}
