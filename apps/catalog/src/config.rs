use std::fs;

use client_core::{SortKey, DEFAULT_CATALOG_URL};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub default_sort: SortKey,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_CATALOG_URL.into(),
            default_sort: SortKey::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    default_sort: Option<SortKey>,
}

pub fn load_settings() -> ClientSettings {
    let raw = fs::read_to_string("catalog.toml").ok();
    settings_from_sources(raw.as_deref(), |name| std::env::var(name).ok())
}

/// Defaults, then `catalog.toml` contents, then environment variables.
/// Command-line flags are applied by the caller on top of this.
pub fn settings_from_sources(
    raw_file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Some(raw) = raw_file {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.server_url {
                    settings.server_url = v;
                }
                if let Some(v) = file_cfg.default_sort {
                    settings.default_sort = v;
                }
            }
            Err(error) => warn!(%error, "ignoring unreadable catalog.toml"),
        }
    }

    if let Some(v) = env("CATALOG_SERVER_URL").filter(|v| !v.trim().is_empty()) {
        settings.server_url = v;
    }
    if let Some(v) = env("CATALOG_DEFAULT_SORT") {
        match v.parse::<SortKey>() {
            Ok(key) => settings.default_sort = key,
            Err(error) => warn!(%error, "ignoring CATALOG_DEFAULT_SORT"),
        }
    }

    settings
}
