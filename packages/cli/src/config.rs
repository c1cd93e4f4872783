use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub(crate) const CONFIG_FILE: &str = "Slots.toml";

/// Settings read from `Slots.toml`. Command line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct SlotsConfig {
    /// The id of the element whose children are partitioned
    pub(crate) root: Option<String>,

    pub(crate) report: ReportConfig,

    pub(crate) extract: ExtractConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ReportConfig {
    /// Pretty-print the JSON report
    pub(crate) pretty: bool,

    /// Print one line per slot instead of JSON
    pub(crate) summary: bool,
}

/// How `--out-dir` writes each slot to its own file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ExtractConfig {
    /// Written before the slot's markup. `%` is replaced with the slot name
    pub(crate) pre: String,

    /// Written after the slot's markup. `%` is replaced with the slot name
    pub(crate) post: String,

    /// File extension of the written files
    pub(crate) extension: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            pre: String::new(),
            post: String::new(),
            extension: "html".to_string(),
        }
    }
}

impl ExtractConfig {
    pub(crate) fn wrap(&self, name: &str, body: &str) -> String {
        format!(
            "{}{body}{}",
            self.pre.replace('%', name),
            self.post.replace('%', name)
        )
    }
}

impl SlotsConfig {
    /// Load an explicit config file, or `Slots.toml` from the working directory if it exists
    pub(crate) fn load(path: Option<&Path>) -> Result<SlotsConfig> {
        let Some(path) = path.map(Path::to_path_buf).or_else(acquire_slots_toml) else {
            return Ok(SlotsConfig::default());
        };

        tracing::debug!(path = %path.display(), "loading config");
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    pub(crate) fn from_toml(source: &str) -> Result<SlotsConfig> {
        Ok(toml::from_str(source)?)
    }
}

fn acquire_slots_toml() -> Option<PathBuf> {
    // prefer uppercase
    let upper = PathBuf::from(CONFIG_FILE);
    if upper.is_file() {
        return Some(upper);
    }

    // lowercase is fine too
    let lower = PathBuf::from(CONFIG_FILE.to_lowercase());
    lower.is_file().then_some(lower)
}
