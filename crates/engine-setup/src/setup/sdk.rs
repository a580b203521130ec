//! Vulkan SDK detection through the installer-set environment variable

use crate::setup::SetupConfig;
use std::fmt;

/// Result of inspecting the SDK environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkStatus {
    /// Variable unset
    Missing,
    /// Variable set, but its value does not mention the required version
    WrongVersion { found: String, required: String },
    /// Variable set and mentions the required version
    Installed { path: String },
}

impl SdkStatus {
    pub fn is_installed(&self) -> bool {
        matches!(self, SdkStatus::Installed { .. })
    }

    /// Print the console lines describing this status.
    pub fn report(&self) {
        match self {
            SdkStatus::Missing => println!("You don't have the Vulkan SDK installed!"),
            SdkStatus::WrongVersion { found, required } => {
                println!("Located Vulkan SDK at {}", found);
                println!(
                    "You don't have the correct Vulkan SDK version! (Engine requires {})",
                    required
                );
            }
            SdkStatus::Installed { path } => println!("Correct Vulkan SDK located at {}", path),
        }
    }
}

impl fmt::Display for SdkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkStatus::Missing => write!(f, "missing"),
            SdkStatus::WrongVersion { found, required } => {
                write!(f, "wrong version ({} does not contain {})", found, required)
            }
            SdkStatus::Installed { path } => write!(f, "installed at {}", path),
        }
    }
}

/// Classify an SDK location against the required version.
pub fn classify_sdk(value: Option<&str>, required_version: &str) -> SdkStatus {
    match value {
        None => SdkStatus::Missing,
        Some(found) if !found.contains(required_version) => SdkStatus::WrongVersion {
            found: found.to_string(),
            required: required_version.to_string(),
        },
        Some(found) => SdkStatus::Installed {
            path: found.to_string(),
        },
    }
}

/// Read the configured environment variable and classify it.
pub fn check_sdk(config: &SetupConfig) -> SdkStatus {
    let value = std::env::var(&config.env_var).ok();
    tracing::debug!("{} = {:?}", config.env_var, value);
    classify_sdk(value.as_deref(), &config.required_version)
}
