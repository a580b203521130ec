//! Interactive provisioning flow

use crate::error::Result;
use crate::setup::{
    ensure_debug_libs, install_sdk, DebugLibsStatus, Fetcher, Launcher, Prompt, SdkStatus,
    SetupConfig, SetupPaths,
};
use std::path::PathBuf;

const INSTALL_QUESTION: &str = "Would you like to install the Vulkan SDK?";

/// Result of [`ensure_sdk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// SDK present at the required version
    Ready,
    /// SDK missing or mismatched and the user chose not to install
    Declined,
    /// Installer downloaded and handed to the OS; the run should stop here
    InstallerLaunched(PathBuf),
}

/// Everything the flow talks to outside the process.
pub struct Environment<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub launcher: &'a dyn Launcher,
    pub prompt: &'a mut dyn Prompt,
}

/// Report the SDK status and, when it is not usable, offer to install it.
///
/// Missing and mismatched SDKs take the same path: the user is asked first
/// and nothing is downloaded without a yes.
pub fn ensure_sdk(
    status: &SdkStatus,
    config: &SetupConfig,
    paths: &SetupPaths,
    env: &mut Environment<'_>,
) -> Result<EnsureOutcome> {
    status.report();
    if status.is_installed() {
        return Ok(EnsureOutcome::Ready);
    }

    if !env.prompt.confirm(INSTALL_QUESTION)? {
        tracing::info!("SDK install declined ({})", status);
        return Ok(EnsureOutcome::Declined);
    }

    let installer = install_sdk(config, paths, env.fetcher, env.launcher)?;
    Ok(EnsureOutcome::InstallerLaunched(installer))
}

/// Outcome of a full [`run_setup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub sdk: EnsureOutcome,
    /// `None` when the run stopped at the installer
    pub debug_libs: Option<DebugLibsStatus>,
}

impl SetupReport {
    /// True when the SDK and debug libs are both in place.
    pub fn is_ready(&self) -> bool {
        self.sdk == EnsureOutcome::Ready && self.debug_libs.is_some()
    }
}

/// SDK check with install prompt, followed by the debug libs check.
pub fn run_setup(
    status: &SdkStatus,
    config: &SetupConfig,
    paths: &SetupPaths,
    env: &mut Environment<'_>,
) -> Result<SetupReport> {
    let sdk = ensure_sdk(status, config, paths, env)?;
    match sdk {
        EnsureOutcome::InstallerLaunched(_) => {
            return Ok(SetupReport {
                sdk,
                debug_libs: None,
            })
        }
        EnsureOutcome::Declined => println!("Vulkan SDK not installed correctly."),
        EnsureOutcome::Ready => {}
    }

    let debug_libs = ensure_debug_libs(config, paths, env.fetcher)?;
    Ok(SetupReport {
        sdk,
        debug_libs: Some(debug_libs),
    })
}
