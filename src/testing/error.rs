use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A query against rendered output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Query {
    /// A query by visible text.
    Text(String),
    /// A query by a `data-testid` attribute.
    TestId(String),
}

impl Display for Query {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(formatter, "text \"{text}\""),
            Self::TestId(id) => write!(formatter, "test ID \"{id}\""),
        }
    }
}

/// A query error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QueryError {
    /// No element matches a query.
    NotFound {
        /// A query.
        query: Query,
    },
    /// More than one element matches a query.
    Multiple {
        /// A query.
        query: Query,
        /// A number of matched elements.
        count: usize,
    },
}

impl Display for QueryError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { query } => {
                write!(formatter, "unable to find an element by {query}")
            }
            Self::Multiple { query, count } => {
                write!(formatter, "found {count} elements by {query}")
            }
        }
    }
}

impl Error for QueryError {}
