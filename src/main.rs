mod fsm;
mod gateway;
mod i18n;
mod keyboards;

use clap::{Parser, Subcommand};
use polyglot_channels::TelegramChannel;
use polyglot_core::config;
use polyglot_storage::{history::HistoryStore, moderation::BanStore, settings::SettingsStore};
use polyglot_translate::TranslateClient;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "polyglot", version, about = "Polyglot — Telegram translation bot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot.
    Start,
    /// Show the effective configuration.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    match cli.command {
        Commands::Start => {
            let file_appender =
                tracing_appender::rolling::daily(&cfg.bot.log_dir, "polyglot.log");
            let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.bot.log_level)),
                )
                .with(tracing_subscriber::fmt::layer())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(file_writer),
                )
                .init();

            if cfg.telegram.bot_token.is_empty() {
                anyhow::bail!(
                    "Telegram bot_token is empty. Set it in {} or the BOT_TOKEN env var.",
                    cli.config
                );
            }

            let storage_dir = Path::new(&cfg.storage.dir);
            let settings =
                Arc::new(SettingsStore::open(storage_dir.join("user_settings.json"))?);
            let history = Arc::new(HistoryStore::open(storage_dir.join("history.json"))?);
            let bans = Arc::new(BanStore::open(storage_dir.join("banned_users.json"))?);

            let translator = Arc::new(TranslateClient::new(&cfg.translate));
            let channel = Arc::new(TelegramChannel::new(cfg.telegram.clone()));

            println!("Polyglot — starting bot...");
            let gw = Arc::new(gateway::Gateway::new(
                channel,
                translator,
                settings,
                history,
                bans,
                cfg.telegram.admin_ids.clone(),
                cfg.limits.min_interval_secs,
            ));
            gw.run().await?;
        }
        Commands::Status => {
            println!("Polyglot — Status\n");
            println!("Config: {}", cli.config);
            println!(
                "  telegram: {}",
                if cfg.telegram.bot_token.is_empty() {
                    "missing bot_token"
                } else {
                    "configured"
                }
            );
            println!("  admins: {}", cfg.telegram.admin_ids.len());
            println!("  translation API: {}", cfg.translate.base_url);
            println!("  storage dir: {}", cfg.storage.dir);
            println!(
                "  rate limit: {:.1}s between messages",
                cfg.limits.min_interval_secs
            );
        }
    }

    Ok(())
}
