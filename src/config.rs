use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DOCUMENT_ENV: &str = "PARAMEDIT_DOCUMENT";

#[derive(Debug, Default, Serialize, Deserialize)]
/// Persisted window and document settings.
pub struct AppConfig {
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
    pub document_path: Option<PathBuf>,
}

impl AppConfig {
    /// `<config_dir>/paramedit/config.toml`, when the platform has a config dir.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("paramedit").join("config.toml"))
    }

    /// Reads saved settings; a missing or malformed file yields defaults.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_default()
    }

    /// Best-effort write of the window size and last document; failures are dropped.
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(s) = toml::to_string_pretty(self) {
            let _ = std::fs::write(&path, s);
        }
    }
}

/// Picks the document to open: CLI argument, then environment, then config.
pub fn resolve_document_path(
    arg: Option<String>,
    env: Option<String>,
    config: &AppConfig,
) -> Option<PathBuf> {
    let non_blank = |raw: Option<String>| {
        raw.map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
    };
    non_blank(arg)
        .or_else(|| non_blank(env))
        .map(PathBuf::from)
        .or_else(|| config.document_path.clone())
}
