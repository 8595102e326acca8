//! Configuration I/O (YAML)
//!
//! ```yaml
//! version: 1
//! preset: debug
//! solver:
//!   freshen_nested_functions: true
//! ```

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::solver_config::{SolverConfig, SolverConfigPatch};
use super::validation::Validatable;
use crate::shared::constants::schema::CONFIG_VERSION;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<SolverConfigPatch>,
}

impl SolverConfig {
    /// Load and validate a config from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a config from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        match export.version {
            None => return Err(ConfigError::MissingVersion),
            Some(v) if v != CONFIG_VERSION => {
                return Err(ConfigError::UnsupportedVersion {
                    found: v,
                    expected: CONFIG_VERSION,
                })
            }
            Some(_) => {}
        }

        let preset = match export.preset.as_deref() {
            Some(name) => name.parse::<Preset>()?,
            None => Preset::Default,
        };

        let mut config = SolverConfig::from_preset(preset);
        if let Some(patch) = export.solver {
            config = config.apply_patch(patch);
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML, all fields spelled out
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(CONFIG_VERSION),
            preset: None,
            solver: Some(SolverConfigPatch::from(self)),
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_roundtrip() {
        let config = SolverConfig::default()
            .freshen_nested_functions(true)
            .max_constraints(500);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("max_constraints: 500"));

        let recovered = SolverConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(recovered, config);
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r##"
version: 1
preset: debug
solver:
  synthetic_marker: "#"
"##;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = SolverConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.synthetic_marker, "#");
        assert!(config.record_trace);
    }

    #[test]
    fn test_yaml_marker_containing_hash() {
        let config = SolverConfig::default().synthetic_marker("#");
        let recovered = SolverConfig::from_yaml_str(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(recovered.synthetic_marker, "#");
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = SolverConfig::from_yaml_str("preset: default\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = SolverConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_field_rejected() {
        let result = SolverConfig::from_yaml_str("version: 1\nsolver:\n  occurs_check: true\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_invalid_values_rejected() {
        let result = SolverConfig::from_yaml_str("version: 1\nsolver:\n  synthetic_marker: \"\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
