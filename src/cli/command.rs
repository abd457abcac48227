use crate::board::{Square, SquareError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Shortest path between two square tokens, parsed lazily so that errors
    /// can name the offending endpoint.
    Path { start: String, end: String },
    Graph,
    SetOption { name: String, value: Option<String> },
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match parts.as_slice() {
        ["graph"] => Command::Graph,
        ["help"] => Command::Help,
        ["quit"] | ["exit"] => Command::Quit,
        ["setoption", rest @ ..] => parse_setoption(rest)
            .unwrap_or_else(|| Command::Unknown(trimmed.to_string())),
        ["path", rest @ ..] => {
            path_from_tokens(rest).unwrap_or_else(|| Command::Unknown(trimmed.to_string()))
        }
        tokens => path_from_tokens(tokens).unwrap_or_else(|| Command::Unknown(trimmed.to_string())),
    };

    Some(cmd)
}

fn path_from_tokens(tokens: &[&str]) -> Option<Command> {
    match tokens {
        [start, end] => Some(Command::Path {
            start: (*start).to_string(),
            end: (*end).to_string(),
        }),
        [sf, sr, ef, er] if tokens.iter().all(|t| t.parse::<i32>().is_ok()) => {
            Some(Command::Path {
                start: format!("{sf},{sr}"),
                end: format!("{ef},{er}"),
            })
        }
        _ => None,
    }
}

/// Accepts `setoption <name> [value]` and `setoption name <name> value <value>`.
fn parse_setoption(rest: &[&str]) -> Option<Command> {
    let (name, value) = match rest {
        ["name", name, "value", value] => (*name, Some(*value)),
        ["name", name] => (*name, None),
        [name, value] => (*name, Some(*value)),
        [name] => (*name, None),
        _ => return None,
    };
    Some(Command::SetOption {
        name: name.to_string(),
        value: value.map(str::to_string),
    })
}

/// Parse a square token into raw `(file, rank)` coordinates.
///
/// Coordinate tokens (`"8,0"`) are returned without a bounds check so the
/// search can reject them; algebraic tokens are on the board by construction.
pub fn parse_coordinates(token: &str) -> Result<(i32, i32), SquareError> {
    let invalid = || SquareError::InvalidNotation {
        notation: token.to_string(),
    };
    let inner = token
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(token.trim());
    match inner.split_once(',') {
        Some((file, rank)) => {
            let file = file.trim().parse::<i32>().map_err(|_| invalid())?;
            let rank = rank.trim().parse::<i32>().map_err(|_| invalid())?;
            Ok((file, rank))
        }
        None => inner.parse::<Square>().map(Into::into),
    }
}
