pub mod cli;
pub mod error;
pub mod setup;

pub use cli::{Cli, Commands};
pub use error::{Result, SetupError};
pub use setup::{
    check_sdk, classify_sdk, ensure_debug_libs, ensure_sdk, install_sdk, run_setup, Console,
    DebugLibsStatus, EnsureOutcome, Environment, Fetcher, HttpFetcher, Launcher, Prompt,
    SdkStatus, SetupConfig, SetupPaths, SetupReport, SystemLauncher,
};
