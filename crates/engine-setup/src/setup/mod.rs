//! Vulkan SDK detection, installation and debug library provisioning

pub mod config;
pub mod debug_libs;
pub mod fetch;
pub mod flow;
pub mod installer;
pub mod launch;
pub mod prompt;
pub mod sdk;

#[cfg(test)]
mod testing;

pub use config::{SetupConfig, SetupPaths, CONFIG_FILE_NAME};
pub use debug_libs::{ensure_debug_libs, DebugLibsStatus};
pub use fetch::{Fetcher, HttpFetcher};
pub use flow::{ensure_sdk, run_setup, EnsureOutcome, Environment, SetupReport};
pub use installer::install_sdk;
pub use launch::{Launcher, SystemLauncher};
pub use prompt::{Console, Prompt};
pub use sdk::{check_sdk, classify_sdk, SdkStatus};
