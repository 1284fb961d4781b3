//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{FiestaError, Result};

use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_store_config(&settings.store)?;
    validate_location_config(&settings.location)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate event store configuration
fn validate_store_config(config: &super::StoreConfig) -> Result<()> {
    if config.simulated_delay_ms > 10_000 {
        return Err(FiestaError::Config(
            "Simulated store delay must not exceed 10 seconds".to_string(),
        ));
    }

    Ok(())
}

/// Validate location assist configuration
fn validate_location_config(config: &super::LocationConfig) -> Result<()> {
    if config.lookup_timeout_seconds == 0 || config.lookup_timeout_seconds > 60 {
        return Err(FiestaError::Config(
            "Location lookup timeout must be between 1 and 60 seconds".to_string(),
        ));
    }

    if config.coordinate_precision > 10 {
        return Err(FiestaError::Config(
            "Coordinate precision must not exceed 10 decimal places".to_string(),
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(FiestaError::Config(
            "Default language is required".to_string(),
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(FiestaError::Config(
            "At least one supported language must be configured".to_string(),
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(FiestaError::Config(format!(
            "Default language '{}' is not in the supported languages list",
            config.default_language
        )));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(FiestaError::Config("Logging level is required".to_string()));
    }

    if let Some(path) = &config.file_path {
        if path.is_empty() {
            return Err(FiestaError::Config(
                "Logging file path must not be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_zero_lookup_timeout_rejected() {
        let mut settings = Settings::default();
        settings.location.lookup_timeout_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_unsupported_default_language_rejected() {
        let mut settings = Settings::default();
        settings.i18n.default_language = "de".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_empty_logging_level_rejected() {
        let mut settings = Settings::default();
        settings.logging.level = String::new();
        assert!(validate_settings(&settings).is_err());
    }
}
