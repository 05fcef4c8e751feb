use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use minesweep_core::{Board, RevealOutcome, RevealResult};

use command::{Command, HELP};
use settings::{FileSettings, GameArgs, Settings};

mod command;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: GameArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();

    simple_logger::SimpleLogger::new()
        .with_level(args.verbose.log_level_filter())
        .init()
        .context("Error initializing logger")?;

    let file_settings = match args.game.config_path() {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };
    let settings = Settings::resolve(&args.game, &file_settings)?;
    log::debug!("settings: {settings:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(settings).run(stdin.lock(), stdout.lock())
}

/// A sequence of games played with the same settings.
struct Session {
    settings: Settings,
    board: Board,
    games_played: u64,
}

impl Session {
    fn new(settings: Settings) -> Self {
        let seed = Self::seed_for(&settings, 0);
        let board = Board::new(settings.game_config, seed).with_start_tile(settings.start_tile);
        Self {
            settings,
            board,
            games_played: 0,
        }
    }

    fn seed_for(settings: &Settings, game: u64) -> u64 {
        match settings.seed {
            Some(seed) => seed.wrapping_add(game),
            None => rand::random(),
        }
    }

    fn new_game(&mut self) {
        self.games_played += 1;
        let seed = Self::seed_for(&self.settings, self.games_played);
        log::debug!("new game with seed {seed}");
        self.board.reset(seed);
    }

    fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}\n\n{}", HELP, render::render(&self.board))?;

        for line in input.lines() {
            let line = line.context("Could not read command")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(output, "{err}")?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => {
                    writeln!(output, "{HELP}")?;
                    continue;
                }
                Command::NewGame => self.new_game(),
                command => {
                    if let Some(message) = self.apply(command) {
                        writeln!(output, "{message}")?;
                    }
                }
            }

            writeln!(output, "{}", render::render(&self.board))?;
        }

        output.flush()?;
        Ok(())
    }

    /// Runs a cell command, returning a message for the player if there is one.
    fn apply(&mut self, command: Command) -> Option<String> {
        let result = match command {
            Command::Reveal(coords) => self.board.reveal(coords).map(Some),
            Command::Chord(coords) => self.board.chord_reveal(coords).map(Some),
            Command::Flag(coords) => self.board.flag(coords).map(|_| None),
            Command::Unflag(coords) => self.board.unflag(coords).map(|_| None),
            Command::NewGame | Command::Help | Command::Quit => return None,
        };

        match result {
            Ok(Some(RevealResult { outcome, .. })) => match outcome {
                RevealOutcome::Continue => None,
                RevealOutcome::Won => {
                    log::info!("game won");
                    Some("You win! Type n for a new game.".to_owned())
                }
                RevealOutcome::Lost => {
                    log::info!("game lost");
                    Some("Boom! You hit a mine. Type n for a new game.".to_owned())
                }
            },
            Ok(None) => None,
            Err(err) => Some(err.to_string()),
        }
    }
}
