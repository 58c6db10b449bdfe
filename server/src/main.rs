use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

use skill_board::config::Config;
use skill_board::{logging, seed, AppState};

/// Skill board persistence service
#[derive(Parser)]
#[command(name = "skill-board", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "SKILL_BOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:3000
    #[arg(long, global = true, env = "SKILL_BOARD_BIND")]
    bind: Option<SocketAddr>,

    /// SQLite database file
    #[arg(long, global = true, env = "SKILL_BOARD_DATABASE")]
    database: Option<PathBuf>,

    /// Directory with the built web UI
    #[arg(long, global = true, env = "SKILL_BOARD_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Insert sample skills into the database
    Seed {
        #[arg(long, default_value_t = 50)]
        count: usize,
    },
}

impl Cli {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = Some(static_dir.clone());
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;
    logging::init(&config.log_level);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => skill_board::serve(&config).await,
        Command::Seed { count } => {
            let state = AppState::open(&config.database)?;
            let created = seed::seed(&state.skills, count).await?;
            info!(count = created.len(), database = %config.database.display(), "seeded skills");
            Ok(())
        }
    }
}
