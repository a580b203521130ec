use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    /// Project root that relative vendor paths resolve against
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to <root>/engine-setup.toml when present)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Defaults to `setup`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Report whether the required Vulkan SDK is installed (never prompts)
    Check,
    /// Download the Vulkan SDK installer and launch it
    InstallSdk,
    /// Download and unpack the Vulkan SDK debug libraries if missing
    DebugLibs,
    /// Check the SDK (offering to install it), then the debug libraries
    Setup,
}
