//! The record stored by the command interpreter.

use std::cmp::Ordering;
use std::fmt;

/// A movie with its IMDb style rating.
///
/// Movies are identified by their title and release year only: two movies with the same title
/// and year compare equal whatever their rating or vote count. That lets a [`Movie::lookup`] built
/// from a `search` or `remove` command find the full record stored in the tree.
#[derive(Debug, Clone)]
pub struct Movie {
    /// Title, compared byte-wise (so case-sensitive).
    pub title: String,
    /// Release year, breaks ties between movies sharing a title.
    pub year: i32,
    /// Average rating.
    pub rating: f64,
    /// Number of votes behind `rating`.
    pub votes: i32,
}

impl Movie {
    /// Construct a new `Movie`.
    pub fn new(title: impl Into<String>, year: i32, rating: f64, votes: i32) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            votes,
        }
    }

    /// A movie carrying just enough to be looked up: no rating and no votes.
    pub fn lookup(title: impl Into<String>, year: i32) -> Self {
        Self::new(title, year, 0.0, 0)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Movie {}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.year.cmp(&other.year))
    }
}

/// Written back in the same `title,year,rating,votes` layout the `insert` command reads.
impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},", self.title, self.year)?;
        if self.rating.is_finite() && self.rating.fract() == 0.0 {
            write!(f, "{:.1}", self.rating)?;
        } else {
            write!(f, "{}", self.rating)?;
        }
        write!(f, ",{}", self.votes)
    }
}
