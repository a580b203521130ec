//! Handing downloaded installers to the operating system

use crate::error::{Result, SetupError};
use std::path::Path;

/// Opens a file the way the desktop shell would.
pub trait Launcher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Uses the OS default association (`start` on Windows, `open` on macOS,
/// `xdg-open` elsewhere).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, path: &Path) -> Result<()> {
        tracing::debug!("opening {}", path.display());
        open::that(path).map_err(|source| SetupError::Launch {
            path: path.to_path_buf(),
            source,
        })
    }
}
