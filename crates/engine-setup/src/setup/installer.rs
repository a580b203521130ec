//! SDK installer download and hand-off

use crate::error::{Result, SetupError};
use crate::setup::{Fetcher, Launcher, SetupConfig, SetupPaths};
use std::path::PathBuf;

/// Download the SDK installer and open it with the OS.
///
/// Returns the absolute path that was launched. The caller is expected to
/// stop after this; the SDK check only passes once the installer has set
/// the environment variable for a fresh shell.
pub fn install_sdk(
    config: &SetupConfig,
    paths: &SetupPaths,
    fetcher: &dyn Fetcher,
    launcher: &dyn Launcher,
) -> Result<PathBuf> {
    println!(
        "Downloading {} to {}",
        config.installer_url,
        paths.installer.display()
    );
    fetcher.fetch_to_file(&config.installer_url, &paths.installer)?;
    println!("Done!");

    let installer = std::path::absolute(&paths.installer)
        .map_err(|source| SetupError::io(&paths.installer, source))?;

    println!("Running Vulkan SDK Installer...");
    launcher.open(&installer)?;
    println!("Re-run this script after installation");

    Ok(installer)
}
