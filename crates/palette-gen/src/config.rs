//! Generator configuration.
//!
//! Configuration is a small YAML document; every key is optional:
//!
//! ```yaml
//! target: kotlin
//! package: com.eklipse2k8.radixcolor
//! object_name: RadixColors
//! title: Radix Colors
//! description: A gorgeous, accessible color system.
//! output_dir: output
//! output_file: RadixColors.kt
//! ```
//!
//! The command line loads this first and then applies its own overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::target::TargetLanguage;

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub target: TargetLanguage,
    /// Kotlin package line. Not used by Swift output.
    pub package: String,
    /// Name of the wrapping `object` / `enum`.
    pub object_name: String,
    /// Label used in the banner and every documentation line.
    pub title: String,
    /// Documentation for the wrapping type.
    pub description: String,
    /// Created if it does not exist.
    pub output_dir: PathBuf,
    /// Defaults to `<object_name>.<extension>`.
    pub output_file: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target: TargetLanguage::default(),
            package: "com.example.palette".to_string(),
            object_name: "RadixColors".to_string(),
            title: "Radix Colors".to_string(),
            description: "A gorgeous, accessible color system.".to_string(),
            output_dir: PathBuf::from("output"),
            output_file: None,
        }
    }
}

impl GeneratorConfig {
    /// Parses configuration from YAML. An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Reads configuration from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// File name inside [`output_dir`](Self::output_dir).
    pub fn file_name(&self) -> String {
        match &self.output_file {
            Some(name) => name.clone(),
            None => format!(
                "{}.{}",
                self.object_name,
                self.target.target().extension()
            ),
        }
    }

    /// Full path of the generated file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.target, TargetLanguage::Kotlin);
        assert_eq!(config.output_path(), PathBuf::from("output/RadixColors.kt"));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            GeneratorConfig::from_yaml_str("  \n").unwrap(),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config =
            GeneratorConfig::from_yaml_str("target: swift\nobject_name: Palette\n").unwrap();
        assert_eq!(config.target, TargetLanguage::Swift);
        assert_eq!(config.title, "Radix Colors");
        assert_eq!(config.output_path(), PathBuf::from("output/Palette.swift"));
    }

    #[test]
    fn test_explicit_output_file() {
        let config =
            GeneratorConfig::from_yaml_str("output_dir: gen\noutput_file: Colors.kt\n").unwrap();
        assert_eq!(config.output_path(), PathBuf::from("gen/Colors.kt"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GeneratorConfig::from_yaml_str("colour: red\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_target_rejected() {
        assert!(GeneratorConfig::from_yaml_str("target: dart\n").is_err());
    }

    #[test]
    fn test_from_path_missing() {
        let err = GeneratorConfig::from_path("no/such/config.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
