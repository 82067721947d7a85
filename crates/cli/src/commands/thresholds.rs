//! Threshold configuration commands.
//!
//! # Usage
//!
//! ```bash
//! # Print the default configuration
//! taji-cli thresholds defaults
//!
//! # Validate a configuration file before pushing it to the platform
//! taji-cli thresholds validate thresholds.json
//! ```

use std::path::Path;

use thiserror::Error;

use tajicart_pricing::TierThresholdConfig;

/// Errors from threshold commands.
#[derive(Debug, Error)]
pub enum ThresholdsCmdError {
    #[error("failed to read {0}: {1}")]
    Read(String, std::io::Error),
    #[error("failed to parse {0}: {1}")]
    Parse(String, serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] tajicart_pricing::ThresholdError),
    #[error("failed to serialize configuration: {0}")]
    Serialize(serde_json::Error),
}

/// Print the default tier threshold configuration as JSON.
pub fn defaults() -> Result<(), ThresholdsCmdError> {
    let config = TierThresholdConfig::default();
    let json = serde_json::to_string_pretty(&config).map_err(ThresholdsCmdError::Serialize)?;
    println!("{json}");
    Ok(())
}

/// Validate a threshold configuration file.
pub fn validate(file: &Path) -> Result<(), ThresholdsCmdError> {
    let display = file.display().to_string();
    let raw = std::fs::read_to_string(file)
        .map_err(|e| ThresholdsCmdError::Read(display.clone(), e))?;
    let config: TierThresholdConfig =
        serde_json::from_str(&raw).map_err(|e| ThresholdsCmdError::Parse(display.clone(), e))?;

    config.validate()?;

    println!("{display}: OK");
    println!(
        "early access: {}",
        if config.early_access_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    Ok(())
}
