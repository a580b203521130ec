use anyhow::{bail, Context, Result};
use clap::Parser;
use engine_setup::{
    check_sdk, ensure_debug_libs, install_sdk, run_setup, Cli, Commands, Console, EnsureOutcome,
    Environment, HttpFetcher, SetupConfig, SystemLauncher,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::FmtSubscriber;

fn project_root(cli: &Cli) -> Result<PathBuf> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("resolving current directory")?,
    };
    std::path::absolute(&root).with_context(|| format!("resolving {}", root.display()))
}

fn load_config(cli: &Cli, root: &Path) -> Result<SetupConfig> {
    match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            SetupConfig::load(path).with_context(|| format!("loading {}", path.display()))
        }
        None => SetupConfig::load_from_root(root).context("loading project config"),
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let root = project_root(cli)?;
    let config = load_config(cli, &root)?;
    let paths = config.resolve(&root);
    debug!("project root {}, paths {:?}", root.display(), paths);

    let fetcher = HttpFetcher::new(Duration::from_secs(config.connect_timeout_secs));
    let launcher = SystemLauncher;

    match cli.command.unwrap_or(Commands::Setup) {
        Commands::Check => {
            let status = check_sdk(&config);
            status.report();
            Ok(if status.is_installed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::InstallSdk => {
            install_sdk(&config, &paths, &fetcher, &launcher)
                .context("installing the Vulkan SDK")?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::DebugLibs => {
            ensure_debug_libs(&config, &paths, &fetcher)
                .context("provisioning Vulkan SDK debug libs")?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Setup => {
            let status = check_sdk(&config);
            let mut console = Console::stdio();
            let mut env = Environment {
                fetcher: &fetcher,
                launcher: &launcher,
                prompt: &mut console,
            };
            let report =
                run_setup(&status, &config, &paths, &mut env).context("running engine setup")?;
            info!("setup finished: {:?}", report);

            let launched = matches!(report.sdk, EnsureOutcome::InstallerLaunched(_));
            Ok(if launched || report.is_ready() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    run(&cli)
}
