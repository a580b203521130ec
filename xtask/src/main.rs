use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use engine_setup::{
    check_sdk, ensure_debug_libs, run_setup, Console, Environment, HttpFetcher, SetupConfig,
    SystemLauncher,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about = "Utility tasks for preparing an engine checkout", long_about = None)]
struct Opt {
    /// Checkout root (defaults to the workspace root)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Provision the Vulkan SDK and its debug libraries
    Setup,
    /// `xtask setup:debug-libs`
    #[command(name = "setup:debug-libs")]
    SetupDebugLibs,
    /// `xtask setup:check`
    #[command(name = "setup:check")]
    SetupCheck,
}

fn main() -> Result<()> {
    let opts = Opt::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(opts.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let root = match opts.root {
        Some(root) => std::path::absolute(&root)
            .with_context(|| format!("resolving {}", root.display()))?,
        None => workspace_root()?,
    };
    match opts.command {
        Task::Setup => setup(&root),
        Task::SetupDebugLibs => setup_debug_libs(&root),
        Task::SetupCheck => setup_check(&root),
    }
}

/// The xtask crate lives one level below the workspace root.
fn workspace_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask manifest has no parent directory")
}

fn load(root: &Path) -> Result<(SetupConfig, HttpFetcher)> {
    let config = SetupConfig::load_from_root(root)
        .with_context(|| format!("loading setup config under {}", root.display()))?;
    let fetcher = HttpFetcher::new(Duration::from_secs(config.connect_timeout_secs));
    Ok((config, fetcher))
}

fn setup(root: &Path) -> Result<()> {
    let (config, fetcher) = load(root)?;
    let paths = config.resolve(root);
    let mut console = Console::stdio();
    let mut env = Environment {
        fetcher: &fetcher,
        launcher: &SystemLauncher,
        prompt: &mut console,
    };

    let report = run_setup(&check_sdk(&config), &config, &paths, &mut env)?;
    if report.debug_libs.is_some() && !report.is_ready() {
        bail!("engine setup incomplete; re-run `cargo xtask setup` once the SDK is installed");
    }
    Ok(())
}

fn setup_debug_libs(root: &Path) -> Result<()> {
    let (config, fetcher) = load(root)?;
    ensure_debug_libs(&config, &config.resolve(root), &fetcher)?;
    Ok(())
}

fn setup_check(root: &Path) -> Result<()> {
    let (config, _) = load(root)?;
    let status = check_sdk(&config);
    status.report();
    if !status.is_installed() {
        bail!("Vulkan SDK {} is required", config.required_version);
    }
    Ok(())
}
