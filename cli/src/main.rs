use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweep_core::{CellCount, Coord, FlagPolicy, Game, GameConfig, Neighborhood};

use crate::{command::Command, render::BoardDisplay};

mod command;
mod render;

/// Play Minesweeper on the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML file with `rows`, `cols`, `mines`, `neighborhood` and `flag_policy`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rows, overrides the config file.
    #[arg(short, long)]
    rows: Option<Coord>,

    /// Number of columns, overrides the config file.
    #[arg(short = 'C', long)]
    cols: Option<Coord>,

    /// Number of mines, must leave at least one safe cell.
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Seed for mine placement, random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Count the cell itself as one of its neighbors.
    #[arg(long)]
    self_count: bool,

    /// Flagged cells cannot be revealed.
    #[arg(long)]
    flags_block: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(mines) = self.mines {
            config.mines = mines;
        }
        if self.self_count {
            config.neighborhood = Neighborhood::WithCenter;
        }
        if self.flags_block {
            config.flag_policy = FlagPolicy::BlockReveal;
        }

        config.validate().context("invalid game configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .format_timestamp(None)
        .init();

    let config = cli.game_config()?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Starting {:?} with seed {}", config, seed);

    let mut game = Game::new(&config, seed).context("creating game")?;
    let stdin = io::stdin();
    play(&mut game, stdin.lock(), io::stdout().lock())
}

/// Runs commands from `input` until the game ends, the player quits or input runs out.
fn play(game: &mut Game, input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(output, "{}", Command::HELP)?;
    writeln!(output, "{}", BoardDisplay(game))?;

    for line in input.lines() {
        let line = line.context("reading input")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "{err:#}\n{}", Command::HELP)?;
                continue;
            }
        };
        log::debug!("{:?}", command);

        // (board changed, game ended)
        let result = match command {
            Command::Quit => break,
            Command::Reveal(coords) => game
                .reveal(coords)
                .map(|outcome| (outcome.has_update(), outcome.is_terminal())),
            Command::Flag(coords) => game
                .toggle_flag(coords)
                .map(|outcome| (outcome.has_update(), false)),
        };
        let ended = match result {
            Ok((true, ended)) => {
                writeln!(output, "{}", BoardDisplay(game))?;
                ended
            }
            Ok((false, _)) => {
                writeln!(output, "nothing to do there")?;
                false
            }
            Err(err) => {
                writeln!(output, "{err}")?;
                false
            }
        };

        if ended {
            let verdict = if game.is_won() {
                "You won!"
            } else {
                "Game over, you hit a mine."
            };
            writeln!(output, "{verdict} Your score was: {}", game.move_count())?;
            break;
        }
    }

    output.flush()?;
    Ok(())
}
