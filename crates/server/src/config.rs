use std::{collections::HashMap, fs, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub catalog_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3033".into(),
            catalog_path: PathBuf::from("./data/products.json"),
        }
    }
}

pub fn load_settings() -> Settings {
    let raw = fs::read_to_string("server.toml").ok();
    settings_from_sources(raw.as_deref(), |name| std::env::var(name).ok())
}

/// Defaults, then `server.toml` contents, then environment variables.
pub fn settings_from_sources(
    raw_file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = raw_file {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("catalog_path") {
                settings.catalog_path = normalize_catalog_path(v);
            }
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("CATALOG_PATH") {
        settings.catalog_path = normalize_catalog_path(&v);
    }
    if let Some(v) = env("APP__CATALOG_PATH") {
        settings.catalog_path = normalize_catalog_path(&v);
    }

    settings
}

fn normalize_catalog_path(raw: &str) -> PathBuf {
    let raw = raw.trim();
    if raw.is_empty() {
        return Settings::default().catalog_path;
    }
    PathBuf::from(raw.replace('\\', "/"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
