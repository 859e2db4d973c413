//! Console front end: command acquisition and board rendering around the
//! engine's move pipeline.

use anyhow::{Result, bail};
use clap::Parser;
use kinarow_engine::{Board, Engine, GameStatus, Roster};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play a k-in-a-row game in the terminal.
#[derive(Parser, Debug)]
#[command(name = "kinarow")]
#[command(about = "Generalized k-in-a-row board game", long_about = None)]
#[command(version)]
struct Cli {
    /// Board rows, addressed a, b, c, ...
    #[arg(long, default_value_t = 3)]
    rows: usize,

    /// Board columns, addressed 1-9
    #[arg(long, default_value_t = 3)]
    columns: usize,

    /// One symbol per player, in turn order
    #[arg(long, default_value = "XO")]
    symbols: String,

    /// Consecutive same-owner cells required to win
    #[arg(long, default_value_t = 3)]
    win_threshold: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    // The <letter><digit> identifier grammar caps addressable cells at 26x9.
    if cli.rows == 0 || cli.rows > 26 {
        bail!("rows must be between 1 and 26");
    }
    if cli.columns == 0 || cli.columns > 9 {
        bail!("columns must be between 1 and 9");
    }
    if cli.symbols.is_empty() {
        bail!("at least one player symbol is required");
    }
    if cli.win_threshold == 0 {
        bail!("win threshold must be positive");
    }

    let mut engine = Engine::new(
        Board::new(cli.rows, cli.columns),
        Roster::from_symbols(cli.symbols.chars()),
        cli.win_threshold,
    );
    info!(
        rows = cli.rows,
        columns = cli.columns,
        players = cli.symbols.chars().count(),
        win_threshold = cli.win_threshold,
        "game start"
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{}\n", engine.board().display());
        print!("{} to move> ", engine.current_player());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF ends the session.
            break;
        };
        let line = line?;
        let identifier = line.trim();
        if identifier.is_empty() {
            continue;
        }

        if let Err(err) = engine.apply(identifier) {
            println!("{err}");
            continue;
        }

        match engine.status() {
            GameStatus::Won(player) => {
                println!("{}\n", engine.board().display());
                println!("{player} wins");
                break;
            }
            GameStatus::Drawn => {
                println!("{}\n", engine.board().display());
                println!("game drawn");
                break;
            }
            GameStatus::InProgress => {}
        }
    }

    Ok(())
}
