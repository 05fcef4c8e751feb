use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use minesweep_core::{CellCount, Coord, Difficulty, GameConfig, StartTile};
use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DifficultyArg {
    Beginner,
    Intermediate,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub(crate) struct GameArgs {
    /// Board preset, ignored when explicit dimensions are given
    #[arg(short, long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Board width, requires --height and --mines
    #[arg(long)]
    width: Option<Coord>,

    /// Board height, requires --width and --mines
    #[arg(long)]
    height: Option<Coord>,

    /// Number of mines, requires --width and --height
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with default settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl GameArgs {
    pub(crate) fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

/// Contents of the optional settings file.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileSettings {
    difficulty: Option<Difficulty>,
    width: Option<Coord>,
    height: Option<Coord>,
    mines: Option<CellCount>,
    seed: Option<u64>,
    start_tile: Option<StartTile>,
}

impl FileSettings {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub(crate) fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Settings {
    pub game_config: GameConfig,
    pub seed: Option<u64>,
    pub start_tile: StartTile,
}

impl Settings {
    /// Merges command line arguments over file settings over the beginner preset.
    pub(crate) fn resolve(args: &GameArgs, file: &FileSettings) -> Result<Self> {
        let game_config = match explicit_dimensions(args.width, args.height, args.mines)? {
            Some(config) => config,
            None => match args.difficulty {
                Some(difficulty) => Difficulty::from(difficulty).config(),
                None => match explicit_dimensions(file.width, file.height, file.mines)? {
                    Some(config) => config,
                    None => file.difficulty.unwrap_or(Difficulty::Beginner).config(),
                },
            },
        };

        Ok(Self {
            game_config,
            seed: args.seed.or(file.seed),
            start_tile: file.start_tile.unwrap_or_default(),
        })
    }
}

fn explicit_dimensions(
    width: Option<Coord>,
    height: Option<Coord>,
    mines: Option<CellCount>,
) -> Result<Option<GameConfig>> {
    match (width, height, mines) {
        (None, None, None) => Ok(None),
        (Some(width), Some(height), Some(mines)) => {
            Ok(Some(GameConfig::new(width, height, mines)?))
        }
        _ => bail!("width, height and mines must be given together"),
    }
}
