use std::io::{self, Write};

use crate::board::{PathResult, Square};

use super::options::Notation;

pub const ALREADY_THERE: &str = "You're already on that square, silly!";

/// Headline for a completed query, or [`ALREADY_THERE`] for a zero-move path.
#[must_use]
pub fn headline(distance: usize) -> String {
    match distance {
        0 => ALREADY_THERE.to_string(),
        1 => "You made it in 1 move! Your path is:".to_string(),
        n => format!("You made it in {n} moves! Your path is:"),
    }
}

#[must_use]
pub fn format_square(sq: Square, notation: Notation) -> String {
    match notation {
        Notation::Coordinates => sq.to_string(),
        Notation::Algebraic => sq.to_algebraic(),
    }
}

/// Write the headline and, unless no move was made, one square per line.
pub fn write_report<W: Write>(
    out: &mut W,
    result: &PathResult,
    notation: Notation,
) -> io::Result<()> {
    writeln!(out, "{}", headline(result.distance()))?;
    if result.is_already_there() {
        return Ok(());
    }
    for &sq in result.path() {
        writeln!(out, "{}", format_square(sq, notation))?;
    }
    Ok(())
}
