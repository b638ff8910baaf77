use std::str::FromStr;

use sweeper_core::{Coord, Coord2};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r ROW COL   reveal a cell
  f ROW COL   flag or unflag a cell
  p           pause or resume
  n           new game
  h           show this help
  q           quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Pause,
    New,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`")]
    Unknown(String),
    #[error("Expected a row and a column")]
    MissingCoords,
    #[error("Invalid coordinate `{0}`")]
    InvalidCoord(String),
}

fn parse_coord(word: &str) -> Result<Coord, ParseCommandError> {
    word.parse()
        .map_err(|_| ParseCommandError::InvalidCoord(word.to_owned()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let mut coords = || -> Result<Coord2, ParseCommandError> {
            let (Some(row), Some(column), None) = (words.next(), words.next(), words.next()) else {
                return Err(ParseCommandError::MissingCoords);
            };
            Ok((parse_coord(row)?, parse_coord(column)?))
        };

        Ok(match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal(coords()?),
            "f" | "flag" => Command::Flag(coords()?),
            "p" | "pause" => Command::Pause,
            "n" | "new" => Command::New,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(name.to_owned())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell_commands() {
        assert_eq!("r 3 4".parse(), Ok(Command::Reveal((3, 4))));
        assert_eq!("  flag 0 12 \n".parse(), Ok(Command::Flag((0, 12))));
        assert_eq!("R 1 1".parse(), Ok(Command::Reveal((1, 1))));
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!("p".parse(), Ok(Command::Pause));
        assert_eq!("new".parse(), Ok(Command::New));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "x 1 2".parse::<Command>(),
            Err(ParseCommandError::Unknown("x".into()))
        );
        assert_eq!("r 1".parse::<Command>(), Err(ParseCommandError::MissingCoords));
        assert_eq!("f 1 2 3".parse::<Command>(), Err(ParseCommandError::MissingCoords));
        assert_eq!(
            "r 1 -2".parse::<Command>(),
            Err(ParseCommandError::InvalidCoord("-2".into()))
        );
        assert_eq!(
            "r 256 0".parse::<Command>(),
            Err(ParseCommandError::InvalidCoord("256".into()))
        );
    }
}
