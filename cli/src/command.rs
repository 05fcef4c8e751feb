use std::str::FromStr;

use minesweep_core::{Coord, Coord2};
use thiserror::Error;

pub(crate) const HELP: &str = "\
Commands:
  r ROW COL   reveal a cell
  f ROW COL   flag a cell
  u ROW COL   remove a flag
  c ROW COL   reveal around a satisfied number
  n           start a new game
  h           show this help
  q           quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Unflag(Coord2),
    Chord(Coord2),
    NewGame,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type h for help")]
    Unknown(String),
    #[error("Expected ROW COL after {0:?}")]
    MissingCoords(String),
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
    #[error("Unexpected trailing input {0:?}")]
    Trailing(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseCommandError::Empty)?;

        let command = match name {
            "n" | "new" => Command::NewGame,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" => Command::Quit,
            "r" | "reveal" | "f" | "flag" | "u" | "unflag" | "c" | "chord" => {
                let coords = parse_coords(name, &mut words)?;
                match name {
                    "r" | "reveal" => Command::Reveal(coords),
                    "f" | "flag" => Command::Flag(coords),
                    "u" | "unflag" => Command::Unflag(coords),
                    _ => Command::Chord(coords),
                }
            }
            _ => return Err(ParseCommandError::Unknown(name.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(
    name: &str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseCommandError> {
    let mut next = || -> Result<Coord, ParseCommandError> {
        let word = words
            .next()
            .ok_or_else(|| ParseCommandError::MissingCoords(name.to_owned()))?;
        word.parse::<Coord>()
            .map_err(|_| ParseCommandError::InvalidCoord(word.to_owned()))
    };
    let row = next()?;
    let col = next()?;
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell_commands() {
        assert_eq!("r 1 2".parse::<Command>(), Ok(Command::Reveal((1, 2))));
        assert_eq!("flag 0 8".parse::<Command>(), Ok(Command::Flag((0, 8))));
        assert_eq!("  u   3 4 ".parse::<Command>(), Ok(Command::Unflag((3, 4))));
        assert_eq!("c 5 5".parse::<Command>(), Ok(Command::Chord((5, 5))));
    }

    #[test]
    fn parses_plain_commands() {
        assert_eq!("n".parse::<Command>(), Ok(Command::NewGame));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "x 1 1".parse::<Command>(),
            Err(ParseCommandError::Unknown("x".into()))
        );
        assert_eq!(
            "r 1".parse::<Command>(),
            Err(ParseCommandError::MissingCoords("r".into()))
        );
        assert_eq!(
            "r 1 300".parse::<Command>(),
            Err(ParseCommandError::InvalidCoord("300".into()))
        );
        assert_eq!(
            "q now".parse::<Command>(),
            Err(ParseCommandError::Trailing("now".into()))
        );
    }
}
