//! Generator configuration for sidecar synchronization.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;

/// Settings controlling which directories qualify for a sidecar entry.
///
/// The enabling flag is an explicit field here rather than process-wide
/// state, so callers decide per invocation whether generation runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Master toggle; when false, synchronization is a no-op.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Extension of source files that make a directory qualify.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    /// Extensions whose direct presence marks a directory as a sub-project root.
    #[serde(default = "default_marker_extensions")]
    pub marker_extensions: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_source_extension() -> String {
    "cs".to_string()
}

fn default_marker_extensions() -> Vec<String> {
    vec!["asmdef".to_string(), "asmref".to_string()]
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            source_extension: default_source_extension(),
            marker_extensions: default_marker_extensions(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), AppError> {
        Self::ensure_valid_extension(&self.source_extension)?;
        for extension in &self.marker_extensions {
            Self::ensure_valid_extension(extension)?;
        }
        Ok(())
    }

    fn ensure_valid_extension(extension: &str) -> Result<(), AppError> {
        if extension.is_empty() {
            return Err(AppError::config_error("file extension must not be empty"));
        }
        if extension.starts_with('.') || extension.contains('/') || extension.contains('\\') {
            return Err(AppError::config_error(format!(
                "invalid file extension '{extension}': expected a bare extension like 'cs'"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_unity_conventions() {
        let config = GeneratorConfig::default();
        assert!(config.enabled);
        assert_eq!(config.source_extension, "cs");
        assert_eq!(config.marker_extensions, vec!["asmdef", "asmref"]);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = GeneratorConfig::from_toml_str("enabled = false\n").unwrap();
        assert!(!config.enabled);
        assert_eq!(config.source_extension, "cs");
        assert_eq!(config.marker_extensions.len(), 2);
    }

    #[test]
    fn full_toml_overrides_all_fields() {
        let config = GeneratorConfig::from_toml_str(
            "enabled = true\nsource_extension = \"fs\"\nmarker_extensions = [\"fsproj\"]\n",
        )
        .unwrap();
        assert_eq!(config.source_extension, "fs");
        assert_eq!(config.marker_extensions, vec!["fsproj"]);
    }

    #[test]
    fn rejects_dotted_extension() {
        let result = GeneratorConfig::from_toml_str("source_extension = \".cs\"\n");
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn rejects_empty_marker_extension() {
        let result = GeneratorConfig::from_toml_str("marker_extensions = [\"\"]\n");
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = GeneratorConfig::from_toml_str("generate = true\n");
        assert!(matches!(result, Err(AppError::TomlParse(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = GeneratorConfig::from_toml_str("enabled = ");
        assert!(matches!(result, Err(AppError::TomlParse(_))));
    }
}
