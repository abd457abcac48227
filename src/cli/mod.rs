//! Line-oriented front end for knight path queries.
//!
//! With arguments, answers the one query they describe. Without, reads
//! commands from the input until `quit` or end of input.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Endpoint, KnightGraph, PathError, PathFinder};

pub mod command;
pub mod options;
pub mod report;

pub use command::{parse_command, parse_coordinates, Command};
pub use options::{CliOptions, Notation};
pub use report::{headline, write_report, ALREADY_THERE};

const HELP: &str = "\
commands:
  <from> <to>                 shortest knight path, squares as a1 or 0,0
  path <from> <to>            same as above
  <f> <r> <f> <r>             same, as four integers
  graph                       print the knight adjacency list
  setoption notation <kind>   print paths as 'coordinates' or 'algebraic'
  help                        show this text
  quit                        leave";

/// Error type for CLI execution
#[derive(Debug)]
pub enum CliError {
    /// The query itself failed
    Path(PathError),
    /// Malformed or unsupported command
    Usage(String),
    /// Reading input or writing output failed
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Path(e) => write!(f, "{e}"),
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Path(e) => Some(e),
            CliError::Usage(_) => None,
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<PathError> for CliError {
    fn from(e: PathError) -> Self {
        CliError::Path(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

/// What the caller should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A session: the finder plus the options set so far.
pub struct Session<'g> {
    finder: PathFinder<'g>,
    options: CliOptions,
}

impl<'g> Session<'g> {
    #[must_use]
    pub fn new(graph: &'g KnightGraph) -> Self {
        Session {
            finder: PathFinder::new(graph),
            options: CliOptions::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &CliOptions {
        &self.options
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, CliError> {
        match cmd {
            Command::Path { start, end } => {
                let start = endpoint(&start, Endpoint::Start)?;
                let end = endpoint(&end, Endpoint::End)?;
                let result = self.finder.find_shortest_path(start, end)?;
                write_report(out, &result, self.options.notation)?;
            }
            Command::Graph => write!(out, "{}", self.finder.graph())?,
            Command::SetOption { name, value } => {
                self.options.apply_setoption(&name, value.as_deref())?;
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                writeln!(out, "{}", self.options.describe())?;
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(line) => {
                return Err(CliError::Usage(format!("unknown command '{line}'")));
            }
        }
        Ok(Flow::Continue)
    }

    /// Read commands until `quit` or end of input. Failed commands are
    /// reported on `out` and do not end the session.
    pub fn run_loop<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let Some(cmd) = parse_command(&line) else {
                continue;
            };
            match self.execute(cmd, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(CliError::Io(e)) => return Err(CliError::Io(e)),
                Err(e) => writeln!(out, "error: {e}")?,
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Run the single command spelled out by `args`.
    pub fn run_args<W: Write>(&mut self, args: &[String], out: &mut W) -> Result<(), CliError> {
        let line = args.join(" ");
        match parse_command(&line) {
            Some(Command::Quit) | None => Err(CliError::Usage(HELP.to_string())),
            Some(cmd) => self.execute(cmd, out).map(|_| ()),
        }
    }
}

fn endpoint(token: &str, which: Endpoint) -> Result<(i32, i32), PathError> {
    parse_coordinates(token).map_err(PathError::invalid(which))
}

/// Entry point used by the binary.
pub fn run<R: BufRead, W: Write>(args: &[String], input: R, out: &mut W) -> Result<(), CliError> {
    let mut session = Session::new(KnightGraph::shared());
    if args.is_empty() {
        session.run_loop(input, out)
    } else {
        session.run_args(args, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareError;

    fn run_lines(input: &str) -> String {
        let mut out = Vec::new();
        run(&[], input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn run_with_args(args: &[&str]) -> Result<String, CliError> {
        let args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
        let mut out = Vec::new();
        run(&args, io::empty(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn loop_answers_queries_and_stops_at_quit() {
        let out = run_lines("0 0 1 2\nquit\n0 0 7 7\n");
        assert_eq!(out, "You made it in 1 move! Your path is:\n[0, 0]\n[1, 2]\n");
    }

    #[test]
    fn loop_reports_errors_and_keeps_going() {
        let out = run_lines("8,0 0,0\nbogus command here\na1 a1\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("error: Invalid start square"));
        assert!(lines[1].starts_with("error: unknown command"));
        assert_eq!(lines[2], ALREADY_THERE);
    }

    #[test]
    fn setoption_changes_listing_notation() {
        let out = run_lines("setoption notation algebraic\na1 b3\n");
        assert_eq!(out, "You made it in 1 move! Your path is:\na1\nb3\n");
    }

    #[test]
    fn graph_command_prints_adjacency() {
        let out = run_lines("graph\n");
        assert_eq!(out.lines().count(), 64);
        assert!(out.starts_with("0: 10 17\n"));
    }

    #[test]
    fn args_answer_one_query() {
        let out = run_with_args(&["0,0", "7,7"]).unwrap();
        assert!(out.starts_with("You made it in 6 moves! Your path is:\n"));
    }

    #[test]
    fn args_errors_are_returned() {
        let err = run_with_args(&["a1", "z9"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Path(PathError::InvalidInput {
                endpoint: Endpoint::End,
                source: SquareError::InvalidNotation { .. },
            })
        ));
        assert!(matches!(run_with_args(&["quit"]), Err(CliError::Usage(_))));
    }
}
