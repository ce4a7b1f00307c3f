use std::str::FromStr;
use sweeper_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command {0:?}, type h for help")]
    Unknown(String),
    #[error("Expected a row and a column, like `{0} 3 4`")]
    MissingCoords(&'static str),
    #[error("Not a coordinate: {0:?}")]
    BadCoord(String),
    #[error("Unexpected trailing input: {0:?}")]
    Trailing(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();

        let command = match verb.as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(&mut words, "r")?),
            "f" | "flag" => Command::Flag(parse_coords(&mut words, "f")?),
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_owned())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    verb: &'static str,
) -> Result<Coord2, CommandError> {
    let row = words.next().ok_or(CommandError::MissingCoords(verb))?;
    let col = words.next().ok_or(CommandError::MissingCoords(verb))?;
    Ok((parse_coord(row)?, parse_coord(col)?))
}

fn parse_coord(word: &str) -> Result<Coord, CommandError> {
    word.parse()
        .map_err(|_| CommandError::BadCoord(word.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_and_aliases() {
        assert_eq!("r 3 4".parse::<Command>(), Ok(Command::Reveal((3, 4))));
        assert_eq!("  REVEAL 0 9 ".parse::<Command>(), Ok(Command::Reveal((0, 9))));
        assert_eq!("f 1 2".parse::<Command>(), Ok(Command::Flag((1, 2))));
        assert_eq!("flag 7 0".parse::<Command>(), Ok(Command::Flag((7, 0))));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            "r 3".parse::<Command>(),
            Err(CommandError::MissingCoords("r"))
        );
        assert_eq!(
            "f a 1".parse::<Command>(),
            Err(CommandError::BadCoord("a".to_owned()))
        );
        assert_eq!(
            "r -1 2".parse::<Command>(),
            Err(CommandError::BadCoord("-1".to_owned()))
        );
        assert_eq!(
            "r 1 2 3".parse::<Command>(),
            Err(CommandError::Trailing("3".to_owned()))
        );
        assert_eq!(
            "dig 1 2".parse::<Command>(),
            Err(CommandError::Unknown("dig 1 2".to_owned()))
        );
    }
}
