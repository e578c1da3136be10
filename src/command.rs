//! Parsing of a single command line.
//!
//! A command line is a comma separated list of fields. The first field names the command (case
//! insensitive), the rest are its arguments:
//!
//! ```text
//! insert,Titanic,1997,7.8,1100000
//! search,Titanic,1997
//! remove,Titanic,1997
//! print
//! ```
//!
//! Every field is trimmed. Empty fields are kept, so `print,` is a `print` with one (empty)
//! argument and is rejected.

use std::str::FromStr;

use crate::error::CommandError;
use crate::movie::Movie;

/// A validated command, ready to be run against a tree of movies.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert the movie unless one with the same title and year is already stored.
    Insert(Movie),
    /// Look up a movie by title and year.
    Search(Movie),
    /// Remove a movie by title and year.
    Remove(Movie),
    /// Render every stored movie in ascending order.
    Print,
}

impl Command {
    /// Parses one (non-blank, non-comment) command line.
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_bst::command::Command;
    /// use movie_bst::movie::Movie;
    ///
    /// let command = Command::parse("Search, Titanic ,1997").unwrap();
    /// assert_eq!(command, Command::Search(Movie::lookup("Titanic", 1997)));
    ///
    /// assert!(Command::parse("search,Titanic").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let (name, args) = match fields.split_first() {
            Some((name, args)) if !name.is_empty() => (name.to_lowercase(), args),
            _ => return Err(CommandError::Empty),
        };

        match name.as_str() {
            "insert" => {
                let [title, year, rating, votes] = arity::<4>("insert", args)?;
                Ok(Self::Insert(Movie::new(
                    title_field(title)?,
                    int_field("year", year)?,
                    float_field("rating", rating)?,
                    int_field("votes", votes)?,
                )))
            }
            "search" => {
                let [title, year] = arity::<2>("search", args)?;
                Ok(Self::Search(Movie::lookup(
                    title_field(title)?,
                    int_field("year", year)?,
                )))
            }
            "remove" => {
                let [title, year] = arity::<2>("remove", args)?;
                Ok(Self::Remove(Movie::lookup(
                    title_field(title)?,
                    int_field("year", year)?,
                )))
            }
            "print" => {
                let [] = arity::<0>("print", args)?;
                Ok(Self::Print)
            }
            _ => Err(CommandError::Unknown(name)),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn arity<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::Arity {
        command,
        expected: N,
        found: args.len(),
    })
}

fn title_field(value: &str) -> Result<&str, CommandError> {
    if value.is_empty() {
        return Err(CommandError::EmptyField("title"));
    }
    Ok(value)
}

fn int_field(field: &'static str, value: &str) -> Result<i32, CommandError> {
    value.parse().map_err(|source| CommandError::Integer {
        field,
        value: value.to_string(),
        source,
    })
}

fn float_field(field: &'static str, value: &str) -> Result<f64, CommandError> {
    value.parse().map_err(|source| CommandError::Float {
        field,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_insert() {
        assert_eq!(
            Command::parse("insert,Titanic,1997,7.8,1100000"),
            Ok(Command::Insert(Movie::new("Titanic", 1997, 7.8, 1_100_000)))
        );
    }

    #[test]
    fn insert_keeps_rating_and_votes() {
        let Ok(Command::Insert(movie)) = Command::parse(" INSERT , The Thing , 1982 , 8.2 , 450000 ")
        else {
            panic!("expected an insert");
        };
        assert_eq!(movie.title, "The Thing");
        assert_eq!(movie.year, 1982);
        assert_eq!(movie.rating, 8.2);
        assert_eq!(movie.votes, 450_000);
    }

    #[test]
    fn parse_search_remove_print() {
        assert_eq!(
            "search,Alien,1979".parse::<Command>(),
            Ok(Command::Search(Movie::lookup("Alien", 1979)))
        );
        assert_eq!(
            "Remove,Alien,1979".parse::<Command>(),
            Ok(Command::Remove(Movie::lookup("Alien", 1979)))
        );
        assert_eq!("PRINT".parse::<Command>(), Ok(Command::Print));
    }

    #[test]
    fn wrong_arity() {
        assert_eq!(
            Command::parse("insert,Titanic,1997,7.8"),
            Err(CommandError::Arity {
                command: "insert",
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Command::parse("search,Titanic,1997,7.8"),
            Err(CommandError::Arity {
                command: "search",
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Command::parse("print,"),
            Err(CommandError::Arity {
                command: "print",
                expected: 0,
                found: 1
            })
        );
    }

    #[test]
    fn empty_title() {
        assert_eq!(
            Command::parse("remove, ,1997"),
            Err(CommandError::EmptyField("title"))
        );
    }

    #[test]
    fn bad_numbers() {
        assert!(matches!(
            Command::parse("search,Titanic,nineteen"),
            Err(CommandError::Integer { field: "year", .. })
        ));
        assert!(matches!(
            Command::parse("insert,Titanic,1997,great,1100000"),
            Err(CommandError::Float { field: "rating", .. })
        ));
        assert!(matches!(
            Command::parse("insert,Titanic,1997,7.8,1.1e6"),
            Err(CommandError::Integer { field: "votes", .. })
        ));
        assert!(matches!(
            Command::parse("insert,Titanic,1997,7.8,"),
            Err(CommandError::Integer { field: "votes", .. })
        ));
    }

    #[test]
    fn unknown_and_empty() {
        assert_eq!(
            Command::parse("delete,Titanic,1997"),
            Err(CommandError::Unknown("delete".to_string()))
        );
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(Command::parse(",Titanic,1997"), Err(CommandError::Empty));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Command::parse("search,Titanic").unwrap_err().to_string(),
            "`search` takes 2 field(s), found 1"
        );
        assert_eq!(
            Command::parse("list").unwrap_err().to_string(),
            "unknown command `list`"
        );
    }
}
