//! Drives a [`Tree`] of [`Movie`]s from a line oriented command source.
//!
//! Every command produces exactly one result line on the output sink. Blank lines and lines
//! starting with `#` produce nothing. A line that does not parse produces `Invalid Command` and
//! leaves the tree alone.
//!
//! # Examples
//!
//! ```
//! use movie_bst::interpreter::Interpreter;
//!
//! let commands = "\
//! ## a comment
//! insert,Titanic,1997,7.8,1100000
//! insert,Alien,1979,8.5,900000
//! search,Alien,1979
//! remove,Avatar,2009
//! print
//! ";
//!
//! let mut interpreter = Interpreter::new(Vec::new());
//! interpreter.run(commands.as_bytes()).unwrap();
//!
//! let output = String::from_utf8(interpreter.into_inner()).unwrap();
//! assert_eq!(
//!     output,
//!     "\
//! insert Titanic,1997,7.8,1100000
//! insert Alien,1979,8.5,900000
//! found Alien,1979,8.5,900000
//! remove failed
//! Alien,1979,8.5,900000 Titanic,1997,7.8,1100000
//! "
//! );
//! ```

use std::io::{BufRead, Write};

use log::{debug, info, trace, warn};

use crate::command::Command;
use crate::error::Error;
use crate::movie::Movie;
use crate::tree::Tree;

/// Written in place of a result for any line that fails to parse.
pub const INVALID_COMMAND: &str = "Invalid Command";

/// Counters for the lines seen by an [`Interpreter`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Every line read, including blanks and comments.
    pub lines: usize,
    /// Lines that produced a result line (valid or not).
    pub commands: usize,
    /// Lines answered with [`INVALID_COMMAND`].
    pub invalid: usize,
}

/// Owns a tree of movies and the sink that receives one line per command.
pub struct Interpreter<W> {
    tree: Tree<Movie>,
    out: W,
    stats: RunStats,
}

impl<W> Interpreter<W>
where
    W: Write,
{
    /// Construct an `Interpreter` with an empty tree writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            tree: Tree::new(),
            out,
            stats: RunStats::default(),
        }
    }

    /// The movies stored so far.
    pub fn tree(&self) -> &Tree<Movie> {
        &self.tree
    }

    /// Counters accumulated over every line processed so far.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Gives back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Applies `command` to the tree and returns the line describing the result.
    ///
    /// An `insert` of a movie that is already stored reports the movie from the command but
    /// leaves the stored one in place.
    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Insert(movie) => {
                let line = format!("insert {movie}");
                if !self.tree.insert(movie) {
                    debug!("ignored duplicate insert");
                }
                line
            }
            Command::Search(key) => match self.tree.search(&key) {
                Some(found) => format!("found {found}"),
                None => "search failed".to_string(),
            },
            Command::Remove(key) => match self.tree.remove(&key) {
                Some(removed) => format!("removed {removed}"),
                None => "remove failed".to_string(),
            },
            Command::Print => self.tree.inorder(),
        }
    }

    /// Handles one raw input line: skips it if blank or a comment, otherwise runs it and writes
    /// its result line to the sink. Returns the line written, if any.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>, Error> {
        self.stats.lines += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            trace!("line {}: skipped", self.stats.lines);
            return Ok(None);
        }

        let result = match Command::parse(line) {
            Ok(command) => {
                let result = self.execute(command);
                debug!("line {}: `{line}` -> `{result}`", self.stats.lines);
                result
            }
            Err(err) => {
                warn!("line {}: invalid command `{line}`: {err}", self.stats.lines);
                self.stats.invalid += 1;
                INVALID_COMMAND.to_string()
            }
        };
        self.respond(result).map(Some)
    }

    /// Like [`process_line`][Self::process_line] but for a line straight off the input. A line
    /// that isn't UTF-8 can't be a command, so it's answered with [`INVALID_COMMAND`].
    pub fn process_bytes(&mut self, line: &[u8]) -> Result<Option<String>, Error> {
        match std::str::from_utf8(line) {
            Ok(line) => self.process_line(line),
            Err(err) => {
                self.stats.lines += 1;
                warn!("line {}: invalid command: {err}", self.stats.lines);
                self.stats.invalid += 1;
                self.respond(INVALID_COMMAND.to_string()).map(Some)
            }
        }
    }

    fn respond(&mut self, result: String) -> Result<String, Error> {
        self.stats.commands += 1;
        writeln!(self.out, "{result}")?;
        Ok(result)
    }

    /// Processes every line of `input` in order and flushes the sink. Stops at the first I/O
    /// error; the commands before it have already been applied and written.
    pub fn run<R>(&mut self, mut input: R) -> Result<RunStats, Error>
    where
        R: BufRead,
    {
        let mut line = Vec::new();
        while input.read_until(b'\n', &mut line)? != 0 {
            self.process_bytes(&line)?;
            line.clear();
        }
        self.out.flush()?;

        info!(
            "processed {} line(s): {} command(s), {} invalid, {} movie(s) stored",
            self.stats.lines,
            self.stats.commands,
            self.stats.invalid,
            self.tree.len()
        );
        Ok(self.stats)
    }
}
