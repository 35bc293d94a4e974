use anyhow::{Context, Result, bail};
use sweep_core::{Coord, Coord2};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Quit,
}

impl Command {
    pub const HELP: &str = "commands: r <row> <col> (reveal), f <row> <col> (flag), q (quit)";

    /// Parses a line, `None` for blank input.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument {extra:?}");
        }
        Ok(Some(command))
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2> {
    let row = parse_coord(words.next(), "row")?;
    let col = parse_coord(words.next(), "column")?;
    Ok((row, col))
}

fn parse_coord(word: Option<&str>, what: &str) -> Result<Coord> {
    let word = word.with_context(|| format!("missing {what}"))?;
    word.parse()
        .with_context(|| format!("invalid {what} {word:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!(
            Command::parse("r 1 2").unwrap(),
            Some(Command::Reveal((1, 2)))
        );
        assert_eq!(
            Command::parse("  FLAG 0 7 ").unwrap(),
            Some(Command::Flag((0, 7)))
        );
        assert_eq!(Command::parse("q").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Command::parse("r 1").is_err());
        assert!(Command::parse("r 1 x").is_err());
        assert!(Command::parse("r -1 0").is_err());
        assert!(Command::parse("r 1 2 3").is_err());
        assert!(Command::parse("dig 1 2").is_err());
    }
}
