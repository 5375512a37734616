use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Report title shown in the group-list header.
    pub title: Option<String>,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Initial visibility of case statuses, before any filter key is pressed.
#[derive(Debug, Default, Deserialize)]
pub struct FilterConfig {
    /// Status keywords drawn from PASS/FAIL/SKIP; empty means all visible.
    /// Example: visible = ["FAIL", "SKIP"]
    #[serde(default)]
    pub visible: Vec<String>,
}

impl Config {
    /// Load `verdict.toml` from the given directory, falling back to
    /// defaults if absent or invalid.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join("verdict.toml");
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_default()
    }
}
