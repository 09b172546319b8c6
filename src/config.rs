//! Voyagr configuration.
//!
//! Loaded from `~/.voyagr/config.toml`. Every key is optional and a missing
//! file means defaults.

use std::{fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Voyagr configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Airport used when a flight request names no known origin.
    pub default_origin: String,

    /// Airport used when a flight request names no known destination.
    pub default_destination: String,

    /// Currency for totals shown by `trip status`.
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_origin: "JFK".to_string(),
            default_destination: "LHR".to_string(),
            currency: "USD".to_string(),
        }
    }
}

impl Config {
    /// Load config from `~/.voyagr/config.toml`, or defaults if it doesn't exist.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        for (key, value) in [
            ("default-origin", &config.default_origin),
            ("default-destination", &config.default_destination),
            ("currency", &config.currency),
        ] {
            if !is_three_letter_code(value) {
                return Err(format!(
                    "{key} in {} must be a three-letter code, got '{value}'",
                    path.display()
                ));
            }
        }

        Ok(config)
    }

    /// The config file path: `~/.voyagr/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".voyagr").join("config.toml"))
    }
}

fn is_three_letter_code(s: &str) -> bool {
    s.len() == 3 && s.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default-origin = \"BOS\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.default_origin, "BOS");
        assert_eq!(config.default_destination, "LHR");
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn rejects_bad_codes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "currency = \"dollars\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();

        assert!(err.contains("currency"));
    }

    #[test]
    fn rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default-origin = ").unwrap();

        assert!(Config::load_from(&path).unwrap_err().contains("invalid config"));
    }
}
