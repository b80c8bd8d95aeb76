use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use lurk::client::harness::HarnessFactory;
use lurk::config::BotConfig;
use lurk::runner::{logging, run_bot};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Also write logs to `lurk.log` in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the config, validate it, and print a summary
    Check,
    /// Rehearse the configuration against the offline harness session
    Run {
        /// How long each rehearsal session lasts before it disconnects
        #[arg(long, default_value = "10")]
        duration_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init_logging(cli.log_dir.as_deref())
        .context("failed to initialize logging")?;

    let config =
        BotConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Command::Check => check(&config),
        Command::Run { duration_secs } => run(config, duration_secs).await,
    }
}

fn check(config: &BotConfig) -> anyhow::Result<()> {
    config.validate().context("configuration is not usable")?;

    info!("Account: {} ({} auth)", config.account, config.account.auth);
    info!("Server: {} (version {})", config.server, config.server.version);
    info!(
        "Modules: auto-auth={} chat-messages={} move-to-target={} anti-afk={} auto-reconnect={}",
        config.utils.auto_auth.enabled,
        config.utils.chat_messages.enabled,
        config.position.enabled,
        config.utils.anti_afk.enabled,
        config.utils.auto_reconnect,
    );
    if config.position.enabled {
        info!("Target location: {}", config.position);
    }
    info!("Configuration OK");
    Ok(())
}

async fn run(config: BotConfig, duration_secs: u64) -> anyhow::Result<()> {
    let mut factory = HarnessFactory::rehearsal(Duration::from_secs(duration_secs));
    let log = factory.log();

    run_bot(&config, &mut factory)
        .await
        .context("bot run failed")?;

    info!(
        "Rehearsal finished: {} connection(s), {} session action(s)",
        factory.connect_count(),
        log.len()
    );
    Ok(())
}
