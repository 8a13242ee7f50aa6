use thiserror::Error;

/// Convenient result alias for the satellite relay library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when normalizing a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    /// Raised when two constellation points occupy the same position, which
    /// makes the line-of-sight test degenerate.
    #[error("points {a} and {b} occupy the same position")]
    CoincidentPositions { a: String, b: String },

    /// Raised when a dataset record has an unexpected shape or field value.
    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// Raised when a satellite identifier appears more than once.
    #[error("duplicate satellite id {id} on line {line}")]
    DuplicateSatellite { id: String, line: usize },

    /// Raised when a satellite record uses an identifier reserved for the
    /// route terminals.
    #[error("identifier {id} on line {line} is reserved for route terminals")]
    ReservedIdentifier { id: String, line: usize },

    /// Raised when the dataset contains no route record.
    #[error("dataset does not contain a route record")]
    MissingRoute,

    /// Raised when the dataset contains more than one route record.
    #[error("second route record on line {line}")]
    DuplicateRoute { line: usize },

    /// Raised when a requested route endpoint is not part of the constellation.
    #[error("unknown endpoint id: {id}")]
    UnknownEndpoint { id: String },

    /// Raised by the route planner when the search exhausts the frontier.
    /// Callers that treat a miss as a normal outcome can use
    /// [`crate::path::find_route`] directly, which returns `None` instead.
    #[error("no relay route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any steps.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
