use std::path::Path;

use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::error::config_error::{ParseSnafu, ReadFileSnafu};
use crate::error::ConfigError;

/// Name of the optional project-level config file looked up in the root directory.
pub const FILE_NAME: &str = "doxgen.toml";

/// Project-level config stored in `doxgen.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub branch: Option<String>,
    pub tool: Option<String>,
    pub max_entities: Option<usize>,
    pub extensions: Option<Vec<String>>,
    pub excluded_dirs: Option<Vec<String>>,
    pub generation: Option<GenerationConfig>,
}

/// Sampling options forwarded to the generation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub num_ctx: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load a config file. Returns Ok(None) if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path).context(ReadFileSnafu {
            path: path.display().to_string(),
        })?;
        let config: FileConfig = toml::from_str(&contents).context(ParseSnafu {
            path: path.display().to_string(),
        })?;
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = FileConfig::load(&dir.path().join(FILE_NAME)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        std::fs::write(
            &path,
            concat!(
                "model = \"deepseek-coder:6.7b\"\n",
                "excluded_dirs = [\"out\"]\n",
                "\n",
                "[generation]\n",
                "num_ctx = 8192\n",
            ),
        )
        .unwrap();

        let config = FileConfig::load(&path).unwrap().unwrap();
        assert_eq!(config.model.as_deref(), Some("deepseek-coder:6.7b"));
        assert_eq!(config.excluded_dirs, Some(vec!["out".to_string()]));
        assert_eq!(config.generation.unwrap().num_ctx, Some(8192));
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        std::fs::write(&path, "modle = \"typo\"\n").unwrap();

        let err = FileConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
