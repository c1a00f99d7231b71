//! User configuration: a TOML file holding the persisted theme choice.
//!
//! The file is read once at startup and rewritten atomically on every theme
//! toggle, so a crash mid-write never leaves a truncated config behind.

use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Display theme id ("light" or "dark"); absent until first toggled.
    pub theme: Option<String>,
}

/// Errors that can occur when loading configuration from disk.
#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config at {}: {}", path_display(path), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config at {}: {}", path_display(path), source)
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

/// Render a path with `~` shorthand on Unix when it sits under `$HOME`.
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            if let Ok(relative) = path.strip_prefix(PathBuf::from(home)) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn StdError>> {
        Self::load_from_path(&Self::config_path())
    }

    pub fn load_from_path(config_path: &Path) -> Result<Config, Box<dyn StdError>> {
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), Box<dyn StdError>> {
        self.save_to_path(&Self::config_path())
    }

    pub fn save_to_path(&self, config_path: &Path) -> Result<(), Box<dyn StdError>> {
        let parent = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty());

        if let Some(dir) = parent {
            fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        let mut temp_file = match parent {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new()?,
        };
        temp_file.write_all(contents.as_bytes())?;
        temp_file.as_file_mut().sync_all()?;
        temp_file
            .persist(config_path)
            .map_err(|err| -> Box<dyn StdError> { Box::new(err) })?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let proj_dirs = ProjectDirs::from("org", "softsell", "softsell")
            .expect("Failed to determine config directory");
        proj_dirs.config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_from_path(&dir.path().join("config.toml")).expect("load");
        assert!(config.theme.is_none());
    }

    #[test]
    fn theme_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            theme: Some("light".into()),
        };
        config.save_to_path(&path).expect("save");

        let loaded = Config::load_from_path(&path).expect("load");
        assert_eq!(loaded.theme.as_deref(), Some("light"));
    }

    #[test]
    fn save_overwrites_previous_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        Config {
            theme: Some("dark".into()),
        }
        .save_to_path(&path)
        .expect("first save");
        Config {
            theme: Some("light".into()),
        }
        .save_to_path(&path)
        .expect("second save");

        let loaded = Config::load_from_path(&path).expect("load");
        assert_eq!(loaded.theme.as_deref(), Some("light"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [not toml").expect("write");

        let err = Config::load_from_path(&path).expect_err("should fail");
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
