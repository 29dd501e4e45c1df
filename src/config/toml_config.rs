use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_log_directive, Validate};
use serde::Deserialize;
use std::path::Path;

/// Optional settings file. Every key may be omitted.
///
/// ```toml
/// [output]
/// header = true
///
/// [logging]
/// level = "find_primes=debug"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub header: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn header(&self) -> Option<bool> {
        self.output.header
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format.unwrap_or_default()
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_log_directive("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.header(), None);
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_file() {
        let config = FileConfig::from_toml_str(
            r#"
            [output]
            header = false

            [logging]
            level = "find_primes=debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.header(), Some(false));
        assert_eq!(config.log_level(), Some("find_primes=debug"));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = FileConfig::from_toml_str("[output]\nseparator = \",\"\n").unwrap_err();
        assert!(matches!(err, AppError::ConfigParseError(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(FileConfig::from_toml_str("[logging]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_blank_level_fails_validation() {
        let config = FileConfig::from_toml_str("[logging]\nlevel = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = FileConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, AppError::ConfigError { .. }));
    }
}
