use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

use crate::service::service_base_url;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
pub const SETTINGS_FILE_NAME: &str = "microgen.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub service_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    service_url: Option<String>,
}

/// Defaults, then the first settings file found, then environment, then the
/// command-line override.
pub fn load_settings(cli_service_url: Option<&str>) -> anyhow::Result<ClientSettings> {
    let file = match settings_file_candidates().into_iter().find(|path| path.is_file()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading client settings file");
            Some(read_settings_file(&path)?)
        }
        None => None,
    };
    resolve_settings(file.as_deref(), |name| std::env::var(name).ok(), cli_service_url)
}

pub fn resolve_settings(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
    cli_service_url: Option<&str>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    if let Some(raw) = file_contents {
        let file: SettingsFile = toml::from_str(raw).context("invalid settings file")?;
        if let Some(v) = file.service_url {
            settings.service_url = v;
        }
    }

    for name in ["MICROGEN_SERVICE_URL", "APP__SERVICE_URL"] {
        if let Some(v) = env(name).filter(|v| !v.trim().is_empty()) {
            settings.service_url = v;
        }
    }

    if let Some(v) = cli_service_url {
        settings.service_url = v.to_string();
    }

    settings.service_url = settings.service_url.trim().to_string();
    service_base_url(&settings.service_url)
        .with_context(|| format!("service url '{}' is not usable", settings.service_url))?;

    Ok(settings)
}

fn settings_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("microgen").join(SETTINGS_FILE_NAME));
    }
    candidates
}

fn read_settings_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
