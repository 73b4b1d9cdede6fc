use std::fs;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};

use crate::error::{BillError, Result};
use crate::template::DEFAULT_TEMPLATE;

const FALLBACK_DATA_ROOT: &str = "~/.bill-maker";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Root for drafts and exports. A leading `~` is expanded.
    pub data_dir: String,
    /// Template used until one is picked.
    pub default_template: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        let data_dir = project_dirs()
            .map(|dirs| dirs.data_dir().to_string_lossy().to_string())
            .unwrap_or_else(|| FALLBACK_DATA_ROOT.to_string());

        AppSettings {
            data_dir,
            default_template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl AppSettings {
    pub fn data_root(&self) -> PathBuf {
        PathBuf::from(expand_home_dir(&self.data_dir))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "bill-maker", "app")
}

pub fn config_path() -> Result<PathBuf> {
    let dirs = project_dirs().ok_or(BillError::NoPlatformDir("config"))?;
    Ok(dirs.config_dir().join("settings.toml"))
}

/// Settings from `path`, or the defaults when the file doesn't exist yet.
pub fn load_settings(path: &Path) -> Result<AppSettings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(AppSettings::default());
    }
    let content = fs::read_to_string(path).map_err(|e| BillError::io(path, e))?;
    Ok(toml::from_str(&content)?)
}

pub fn save_settings(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| BillError::io(dir, e))?;
    }
    let toml_str = toml::to_string_pretty(settings)?;
    fs::write(path, toml_str).map_err(|e| BillError::io(path, e))?;
    tracing::info!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn expand_home_dir(path: &str) -> String {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(base_dirs) = BaseDirs::new() {
            return format!("{}{}", base_dirs.home_dir().to_string_lossy(), rest);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings.default_template, "modern");
        assert!(!settings.data_dir.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let settings = AppSettings {
            data_dir: "/srv/bills".into(),
            default_template: "corporate".into(),
        };
        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "data_dir = \"/tmp/bills\"\n").unwrap();
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.data_dir, "/tmp/bills");
        assert_eq!(settings.default_template, "modern");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "data_dir = [").unwrap();
        assert!(matches!(load_settings(&path), Err(BillError::SettingsDecode(_))));
    }

    #[test]
    fn test_expand_home_dir() {
        assert_eq!(expand_home_dir("/abs/path"), "/abs/path");
        let expanded = expand_home_dir("~/Documents/Bills");
        if BaseDirs::new().is_some() {
            assert!(!expanded.starts_with('~'));
            assert!(expanded.ends_with("/Documents/Bills"));
        }
    }
}
