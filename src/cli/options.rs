use std::fmt;

use super::CliError;

/// How squares are written in path listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// `[file, rank]`
    #[default]
    Coordinates,
    /// `a1` .. `h8`
    Algebraic,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Coordinates => f.write_str("coordinates"),
            Notation::Algebraic => f.write_str("algebraic"),
        }
    }
}

/// Session settings, changed with `setoption`.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub notation: Notation,
}

impl CliOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn describe(&self) -> String {
        format!(
            "option name notation type combo default {} var coordinates var algebraic",
            self.notation
        )
    }

    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Result<(), CliError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "notation" => {
                let value = value.map(|v| v.trim().to_ascii_lowercase());
                self.notation = match value.as_deref() {
                    Some("coordinates" | "coords") => Notation::Coordinates,
                    Some("algebraic" | "san") => Notation::Algebraic,
                    _ => {
                        return Err(CliError::Usage(format!(
                            "notation must be 'coordinates' or 'algebraic', got {}",
                            value.as_deref().unwrap_or("nothing")
                        )))
                    }
                };
                Ok(())
            }
            _ => Err(CliError::Usage(format!("unknown option '{name}'"))),
        }
    }
}
