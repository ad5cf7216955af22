//! Scorekeeper CLI - record finished games and inspect the results.

mod output;
mod script;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use scorekeeper::{
    init_tracing, AppError, CompletedGames, GameSummary, JsonFileStore, PersistOutcome,
    StoreConfig,
};
use script::GameScript;
use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Score keeping and statistics for Wizard card games")]
struct Args {
    /// Store file (defaults to SCOREKEEPER_STORE_PATH or SCOREKEEPER_DATA_DIR/games.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a scripted game and store it
    Record { script: PathBuf },
    /// List completed games
    List,
    /// Show the scoreboard and statistics for a game
    Show { id: Uuid },
    /// Delete a completed game
    Delete { id: Uuid },
    /// Export a game's scores
    Export {
        id: Uuid,
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose { "debug" } else { "warn" };
    init_tracing(filter, args.log_json);

    let config = match args.store {
        Some(path) => StoreConfig::new(path),
        None => StoreConfig::from_env()?,
    };
    let mut games = CompletedGames::load(JsonFileStore::new(&config.path));

    match args.command {
        Command::Record { script } => {
            let game = GameScript::from_path(&script)?.replay(OffsetDateTime::now_utc())?;
            let id = game.id;
            info!(game_id = %id, path = %config.path.display(), "Recording game");
            report(games.add(game))?;
            println!("{id}");
        }
        Command::List => {
            print!("{}", output::render_overview(&games.overview()));
        }
        Command::Show { id } => {
            let game = games.get_by_id(id).map_err(AppError::from)?;
            let summary = GameSummary::from_game(game);
            print!("{}", output::render_scoreboard(game, &summary));
        }
        Command::Delete { id } => match games.delete_by_id(id) {
            Some(outcome) => report(outcome)?,
            None => warn!(game_id = %id, "No such game; nothing deleted"),
        },
        Command::Export { id, format, out } => {
            let game = games.get_by_id(id).map_err(AppError::from)?;
            let summary = GameSummary::from_game(game);
            output::write_export(&summary, &format, out.as_deref())?;
        }
    }

    Ok(())
}

/// A failed save is an error for the CLI, since the process exits right after.
fn report(outcome: PersistOutcome) -> Result<(), AppError> {
    match outcome {
        PersistOutcome::Saved => Ok(()),
        PersistOutcome::Failed(e) => Err(e.into()),
    }
}
