use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Service naming used by [`AddProcessorsPass`](crate::pass::AddProcessorsPass).
///
/// The defaults are the identifiers of the Monolog bundle and should only be
/// overridden for containers that namespace their logging services differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorPassConfig {
    pub tag: String,
    pub root_logger_id: String,
    pub logger_prototype_id: String,
    pub channel_logger_prefix: String,
    pub handler_prefix: String,
    pub root_channel: String,
    pub registration_method: String,
}

impl Default for ProcessorPassConfig {
    fn default() -> Self {
        Self {
            tag: constants::PROCESSOR_TAG.to_string(),
            root_logger_id: constants::ROOT_LOGGER_ID.to_string(),
            logger_prototype_id: constants::LOGGER_PROTOTYPE_ID.to_string(),
            channel_logger_prefix: constants::CHANNEL_LOGGER_PREFIX.to_string(),
            handler_prefix: constants::HANDLER_PREFIX.to_string(),
            root_channel: constants::ROOT_CHANNEL.to_string(),
            registration_method: constants::REGISTRATION_METHOD.to_string(),
        }
    }
}

impl ProcessorPassConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("tag", &self.tag),
            ("root_logger_id", &self.root_logger_id),
            ("logger_prototype_id", &self.logger_prototype_id),
            ("root_channel", &self.root_channel),
            ("registration_method", &self.registration_method),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidConfig(format!(
                    "{name} must not be empty"
                )));
            }
        }

        for (name, prefix) in [
            ("channel_logger_prefix", &self.channel_logger_prefix),
            ("handler_prefix", &self.handler_prefix),
        ] {
            if prefix.len() < 2 || !prefix.ends_with('.') {
                return Err(ConfigError::InvalidConfig(format!(
                    "{name} must be a namespace ending in '.', got '{prefix}'"
                )));
            }
        }

        if self.channel_logger_prefix == self.handler_prefix {
            return Err(ConfigError::InvalidConfig(format!(
                "Channel logger and handler prefixes must differ (both '{}')",
                self.handler_prefix
            )));
        }

        Ok(())
    }

    pub fn handler_id(&self, handler: &str) -> String {
        format!("{}{handler}", self.handler_prefix)
    }

    /// Logger serving `channel`. The root channel maps to the root logger itself.
    pub fn channel_logger_id(&self, channel: &str) -> String {
        if channel == self.root_channel {
            self.root_logger_id.clone()
        } else {
            format!("{}{channel}", self.channel_logger_prefix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_bundle_naming() {
        let config = ProcessorPassConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.handler_id("main"), "monolog.handler.main");
        assert_eq!(config.channel_logger_id("doctrine"), "monolog.logger.doctrine");
        assert_eq!(config.channel_logger_id("app"), "monolog.logger");
        assert_eq!(config.logger_prototype_id, "monolog.logger_prototype");
        assert_eq!(config.registration_method, "pushProcessor");
    }

    #[test]
    fn test_from_toml_overrides_only_given_keys() {
        let config = ProcessorPassConfig::from_toml_str(
            r#"
            tag = "rask.processor"
            root_channel = "main"
            "#,
        )
        .unwrap();

        assert_eq!(config.tag, "rask.processor");
        assert_eq!(config.channel_logger_id("main"), "monolog.logger");
        assert_eq!(config.channel_logger_id("app"), "monolog.logger.app");
        assert_eq!(config.handler_prefix, "monolog.handler.");
    }

    #[test]
    fn test_validation_rejects_bad_prefix() {
        let config = ProcessorPassConfig {
            handler_prefix: "monolog.handler".to_string(),
            ..Default::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("handler_prefix"));
    }

    #[test]
    fn test_validation_rejects_empty_method() {
        let result = ProcessorPassConfig::from_toml_str(r#"registration_method = "  ""#);
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = ProcessorPassConfig::from_toml_str("tag = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
