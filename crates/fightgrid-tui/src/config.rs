use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Defaults read from `<config dir>/fightgrid/config.json`; CLI flags win
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub fights: Option<PathBuf>,
    pub names: Option<PathBuf>,
    pub min_degree: Option<usize>,
    pub max_attempts: Option<usize>,
    pub strict: Option<bool>,
    pub theme: Option<String>,
}

impl FileConfig {
    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fightgrid").join("config.json"))
    }

    /// Load the config file; a missing or unreadable file yields defaults
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|err| {
                log::warn!("ignoring {}: {}", path.display(), err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config = FileConfig::from_json(r#"{"min_degree": 8, "theme": "light"}"#).unwrap();
        assert_eq!(config.min_degree, Some(8));
        assert_eq!(config.theme.as_deref(), Some("light"));
        assert_eq!(config.fights, None);
        assert_eq!(config.strict, None);
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(FileConfig::from_json("{}").unwrap(), FileConfig::default());
    }
}
