use anyhow::{anyhow, Result};
use thiserror::Error;
use tracing::debug;

use super::IsoConfig;

/// ISO 9660 caps the volume identifier at 32 characters.
pub const MAX_VOLUME_ID_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field value: {0}")]
    InvalidValue(String),
}

/// Validate the values of a configuration
pub fn validate_config(config: &IsoConfig) -> Result<()> {
    debug!("Validating configuration");

    if let Some(volume_id) = &config.options.volume_id {
        validate_volume_id(volume_id)?;
    }

    if let Some(destination) = &config.options.file_destination {
        if destination.as_os_str().is_empty() {
            return Err(anyhow!(ValidationError::MissingField(
                "file_destination".to_string()
            )));
        }
    }

    Ok(())
}

pub fn validate_volume_id(volume_id: &str) -> Result<()> {
    if volume_id.is_empty() {
        return Err(anyhow!(ValidationError::MissingField(
            "volume_id".to_string()
        )));
    }

    if volume_id.chars().count() > MAX_VOLUME_ID_LEN {
        return Err(anyhow!(ValidationError::InvalidValue(format!(
            "volume_id '{}' is longer than {} characters",
            volume_id, MAX_VOLUME_ID_LEN
        ))));
    }

    if volume_id.contains(['/', '\\']) {
        return Err(anyhow!(ValidationError::InvalidValue(format!(
            "volume_id '{}' must not contain path separators",
            volume_id
        ))));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso::IsoOptions;
    use rstest::rstest;

    #[rstest]
    #[case("cidata")]
    #[case("CONFIG-2")]
    #[case("a")]
    #[case("abcdefghijklmnopqrstuvwxyz012345")]
    fn test_accepts_volume_ids(#[case] volume_id: &str) {
        assert!(validate_volume_id(volume_id).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("abcdefghijklmnopqrstuvwxyz0123456")]
    #[case("seed/data")]
    #[case("seed\\data")]
    fn test_rejects_volume_ids(#[case] volume_id: &str) {
        assert!(validate_volume_id(volume_id).is_err());
    }

    #[test]
    fn test_empty_destination_is_rejected() {
        let config = IsoConfig {
            host: None,
            options: IsoOptions::new().with_file_destination(""),
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: file_destination");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&IsoConfig::default()).is_ok());
    }
}
