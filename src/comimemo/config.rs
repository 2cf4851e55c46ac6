use crate::error::{CircleError, Result};
use crate::registry::AddPolicy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const HOME_ENV: &str = "COMIMEMO_HOME";

pub const KEY_SEED_FILE: &str = "seed-file";
pub const KEY_STRICT_ADD: &str = "strict-add";

/// Configuration for comimemo, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComimemoConfig {
    /// Seed file used when none is given on the command line
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Reject circles with empty fields at the registry level
    #[serde(default = "default_strict_add")]
    pub strict_add: bool,
}

fn default_strict_add() -> bool {
    true
}

impl Default for ComimemoConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            strict_add: default_strict_add(),
        }
    }
}

impl ComimemoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn add_policy(&self) -> AddPolicy {
        if self.strict_add {
            AddPolicy::Strict
        } else {
            AddPolicy::Trusting
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            KEY_SEED_FILE => Ok(self
                .seed_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            KEY_STRICT_ADD => Ok(self.strict_add.to_string()),
            other => Err(CircleError::Config(format!("Unknown config key: {}", other))),
        }
    }

    /// Sets a key from its string form. An empty seed-file clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_SEED_FILE => {
                self.seed_file = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            KEY_STRICT_ADD => {
                self.strict_add = value.parse().map_err(|_| {
                    CircleError::Config(format!("{} expects true or false, got {}", key, value))
                })?;
            }
            other => {
                return Err(CircleError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_SEED_FILE, KEY_STRICT_ADD]
    }
}

/// Where the config lives: `$COMIMEMO_HOME` if set, otherwise the platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "comimemo", "comimemo")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CircleError::Config("Could not determine config dir".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ComimemoConfig::default();
        assert_eq!(config.seed_file, None);
        assert!(config.strict_add);
        assert_eq!(config.add_policy(), AddPolicy::Strict);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ComimemoConfig::load(dir.path()).unwrap();
        assert_eq!(config, ComimemoConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = ComimemoConfig::default();
        config.set(KEY_SEED_FILE, "/tmp/circles.json").unwrap();
        config.set(KEY_STRICT_ADD, "false").unwrap();
        config.save(&nested).unwrap();

        let loaded = ComimemoConfig::load(&nested).unwrap();
        assert_eq!(loaded.seed_file, Some(PathBuf::from("/tmp/circles.json")));
        assert_eq!(loaded.add_policy(), AddPolicy::Trusting);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let config = ComimemoConfig::load(dir.path()).unwrap();
        assert_eq!(config, ComimemoConfig::default());
    }

    #[test]
    fn test_get_and_set() {
        let mut config = ComimemoConfig::default();
        assert_eq!(config.get(KEY_SEED_FILE).unwrap(), "");
        assert_eq!(config.get(KEY_STRICT_ADD).unwrap(), "true");

        config.set(KEY_SEED_FILE, "seed.json").unwrap();
        assert_eq!(config.get(KEY_SEED_FILE).unwrap(), "seed.json");

        config.set(KEY_SEED_FILE, "").unwrap();
        assert_eq!(config.seed_file, None);
    }

    #[test]
    fn test_rejects_bad_keys_and_values() {
        let mut config = ComimemoConfig::default();
        assert!(matches!(config.get("color"), Err(CircleError::Config(_))));
        assert!(matches!(
            config.set("color", "red"),
            Err(CircleError::Config(_))
        ));
        assert!(matches!(
            config.set(KEY_STRICT_ADD, "maybe"),
            Err(CircleError::Config(_))
        ));
    }
}
