//! Provisioning configuration.
//! Defaults match the SDK release the engine is built against; a
//! `engine-setup.toml` at the project root can override any of them.

use crate::error::{Result, SetupError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up under the project root.
pub const CONFIG_FILE_NAME: &str = "engine-setup.toml";

/// Vulkan SDK provisioning settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    /// SDK version the engine requires (matched by substring)
    #[serde(default = "default_required_version")]
    pub required_version: String,
    /// Environment variable set by the SDK installer
    #[serde(default = "default_env_var")]
    pub env_var: String,
    /// Windows installer download URL
    #[serde(default = "default_installer_url")]
    pub installer_url: String,
    /// Where the installer is written, relative to the project root
    #[serde(default = "default_installer_path")]
    pub installer_path: PathBuf,
    /// Debug libraries archive URL
    #[serde(default = "default_debug_libs_url")]
    pub debug_libs_url: String,
    /// Extraction target for the debug libraries, relative to the project root
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// File whose presence means the debug libraries are installed,
    /// relative to `output_dir`
    #[serde(default = "default_marker")]
    pub debug_libs_marker: PathBuf,
    /// HTTP connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            required_version: default_required_version(),
            env_var: default_env_var(),
            installer_url: default_installer_url(),
            installer_path: default_installer_path(),
            debug_libs_url: default_debug_libs_url(),
            output_dir: default_output_dir(),
            debug_libs_marker: default_marker(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_required_version() -> String {
    "1.2.170.0".to_string()
}

fn default_env_var() -> String {
    "VULKAN_SDK".to_string()
}

fn default_installer_url() -> String {
    "https://sdk.lunarg.com/sdk/download/1.2.170.0/windows/vulkan_sdk.exe".to_string()
}

fn default_installer_path() -> PathBuf {
    PathBuf::from("GameEngine/vendor/VulkanSDK/VulkanSDK.exe")
}

fn default_debug_libs_url() -> String {
    "https://files.lunarg.com/SDK-1.2.170.0/VulkanSDK-1.2.170.0-DebugLibs.zip".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("GameEngine/vendor/VulkanSDK")
}

fn default_marker() -> PathBuf {
    PathBuf::from("Lib/shaderc_shaderdd.lib")
}

fn default_connect_timeout() -> u64 {
    30
}

/// Absolute locations derived from a [`SetupConfig`] and a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPaths {
    pub installer: PathBuf,
    pub output_dir: PathBuf,
    pub marker: PathBuf,
}

impl SetupConfig {
    /// Parse a configuration from TOML text; missing keys keep their defaults.
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| SetupError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(SetupConfig::default());
        }

        let contents =
            std::fs::read_to_string(path).map_err(|source| SetupError::io(path, source))?;
        tracing::debug!("loaded config from {}", path.display());
        SetupConfig::from_toml(&contents, path)
    }

    /// Load `<root>/engine-setup.toml` (or defaults).
    pub fn load_from_root(root: &Path) -> Result<Self> {
        SetupConfig::load(&root.join(CONFIG_FILE_NAME))
    }

    /// Resolve the configured relative paths against `root`.
    pub fn resolve(&self, root: &Path) -> SetupPaths {
        let output_dir = root.join(&self.output_dir);
        SetupPaths {
            installer: root.join(&self.installer_path),
            marker: output_dir.join(&self.debug_libs_marker),
            output_dir,
        }
    }
}
