//! User configuration: the stored profile and daily targets. Ledger
//! state is never persisted; this file is the only thing written to
//! disk.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::UserProfile;
use crate::errors::FitnessError;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Environment variable that redirects the config directory, used by
/// scripted runs and integration tests.
pub const CONFIG_DIR_ENV: &str = "FITNESS_CORE_CONFIG_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub profile: UserProfile,
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, FitnessError> {
        Self::from_base(default_base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, FitnessError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, FitnessError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Loads the stored config, or defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, FitnessError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), FitnessError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn default_base_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fitness_core")
}

fn ensure_dir(path: &Path) -> Result<(), FitnessError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), FitnessError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.profile.name, "John Doe");
        assert_eq!(config.profile.goals.calories, 2200.0);
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();

        let mut config = manager.load().unwrap();
        config.profile.name = "Jane Doe".into();
        config.profile.goals.protein = 160.0;
        manager.save(&config).unwrap();

        let reloaded = manager.load().unwrap();
        assert_eq!(reloaded, config);
        assert!(manager.path().exists());
    }
}
