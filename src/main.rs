use anyhow::{Context, Result};
use chessboard_transitions::core::{load_settings, save_settings};
use chessboard_transitions::{
    BoardOrientation, BoardTransitions, Position, Square, SquareGeometry, TransitionSettings,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Inspect the transitions a chessboard would animate between two positions
#[derive(Parser)]
#[command(name = "chessboard-transitions", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the transition records for a change from one FEN to another
    Diff {
        /// Position before the change (FEN or piece placement)
        #[arg(long)]
        from: String,

        /// Position after the change (FEN or piece placement)
        #[arg(long)]
        to: String,

        #[command(flatten)]
        board: BoardArgs,
    },

    /// Print the pixel offset of every square
    Squares {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Print the effective settings, optionally saving them
    Settings {
        #[command(flatten)]
        board: BoardArgs,

        /// Write the effective settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

/// Overrides for the stored settings
#[derive(Args)]
struct BoardArgs {
    /// Board width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Colour drawn at the bottom of the board
    #[arg(long, value_enum)]
    orientation: Option<BoardOrientation>,

    /// Disable animations
    #[arg(long)]
    no_animations: bool,
}

impl BoardArgs {
    fn apply(&self, mut settings: TransitionSettings) -> Result<TransitionSettings> {
        if let Some(width) = self.width {
            settings.board_width = width;
        }
        if let Some(orientation) = self.orientation {
            settings.orientation = orientation;
        }
        if self.no_animations {
            settings.show_animations = false;
        }
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Serialize)]
struct SettingsReport {
    path: String,
    settings: TransitionSettings,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stored = load_settings();

    match cli.command {
        Command::Diff { from, to, board } => {
            let settings = board.apply(stored)?;
            let before = Position::from_fen(&from).context("Failed to parse --from")?;
            let after = Position::from_fen(&to).context("Failed to parse --to")?;

            let mut transitions = BoardTransitions::with_settings(before, settings);
            let records = transitions.update_with_board_geometry(&after);
            info!("[CLI] {} transitions", records.len());

            println!("{}", serde_json::to_string_pretty(records)?);
        }
        Command::Squares { board } => {
            let geometry = board.apply(stored)?.geometry();
            let table: BTreeMap<Square, _> = Square::all()
                .map(|square| (square, geometry.square_to_pixel(square)))
                .collect();

            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Command::Settings { board, save } => {
            let settings = board.apply(stored)?;
            let path = if save {
                save_settings(&settings).context("Failed to save settings")?
            } else {
                chessboard_transitions::core::settings_path()
            };

            let report = SettingsReport {
                path: path.display().to_string(),
                settings,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
