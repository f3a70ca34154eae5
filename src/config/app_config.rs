use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::errors::{Result, StackctxError};

/// File name of the optional tool configuration.
pub const CONFIG_FILE_NAME: &str = "stackctx.toml";

/// Current format version supported by this build.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// Environment resolved when neither the caller nor the config names one.
pub const DEFAULT_ENVIRONMENT: &str = "dev";

/// Tool configuration read from `stackctx.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub stackctx: StackctxSection,
    /// Extra `${name}` variables available during substitution.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl AppConfig {
    /// Load the configuration from `stackctx.toml` in `project_dir`.
    ///
    /// A missing file is not an error: defaults apply.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no tool config, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_path)?;
        Self::parse(&content)
    }

    /// Parse configuration text and check format compatibility.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| StackctxError::InvalidConfig {
            detail: format!("Failed to parse {CONFIG_FILE_NAME}: {e}"),
        })?;

        if config.stackctx.format_version > CURRENT_FORMAT_VERSION {
            return Err(StackctxError::FormatVersionTooNew {
                project_version: config.stackctx.format_version,
                supported_version: CURRENT_FORMAT_VERSION,
            });
        }

        if config.stackctx.document.trim().is_empty() {
            return Err(StackctxError::InvalidConfig {
                detail: "'document' must not be empty".into(),
            });
        }

        Ok(config)
    }

    /// Environment to resolve when the caller does not name one.
    pub fn default_env(&self) -> &str {
        self.stackctx
            .default_env
            .as_deref()
            .unwrap_or(DEFAULT_ENVIRONMENT)
    }
}

/// The `[stackctx]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StackctxSection {
    /// Format version for backward compatibility. Defaults to 1 if missing.
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    /// Context document path, relative to the project directory.
    #[serde(default = "default_document")]
    pub document: String,
    pub default_env: Option<String>,
}

impl Default for StackctxSection {
    fn default() -> Self {
        Self {
            format_version: default_format_version(),
            document: default_document(),
            default_env: None,
        }
    }
}

fn default_format_version() -> u32 {
    1
}

fn default_document() -> String {
    "cdk.json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::parse("").unwrap();

        assert_eq!(config.stackctx.format_version, 1);
        assert_eq!(config.stackctx.document, "cdk.json");
        assert_eq!(config.default_env(), "dev");
        assert!(config.variables.is_empty());
    }

    #[test]
    fn parses_sections_and_variables() {
        let config = AppConfig::parse(
            "[stackctx]\ndocument = \"infra/cdk.json\"\ndefault_env = \"prod\"\n\n\
             [variables]\nregion = \"us-east-1\"\n",
        )
        .unwrap();

        assert_eq!(config.stackctx.document, "infra/cdk.json");
        assert_eq!(config.default_env(), "prod");
        assert_eq!(config.variables.get("region").map(String::as_str), Some("us-east-1"));
    }

    #[test]
    fn newer_format_version_is_rejected() {
        let err = AppConfig::parse("[stackctx]\nformat_version = 2\n").unwrap_err();

        assert!(matches!(
            err,
            StackctxError::FormatVersionTooNew {
                project_version: 2,
                supported_version: 1
            }
        ));
    }

    #[test]
    fn malformed_toml_is_invalid_config() {
        let err = AppConfig::parse("[stackctx\n").unwrap_err();
        assert!(matches!(err, StackctxError::InvalidConfig { .. }));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.stackctx.document, "cdk.json");
    }

    #[test]
    fn load_reads_file_from_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[stackctx]\ndefault_env = \"prod\"\n",
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();

        assert_eq!(config.default_env(), "prod");
    }
}
