use thiserror::Error;

/// Top-level error type for the coordinate toolkit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
}

/// Errors raised while reading coordinates, angles or format templates from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unrecognized coordinate expression: {0:?}")]
    UnrecognizedFormat(String),

    #[error("missing closing delimiter '{delimiter}' in {expression:?}")]
    MissingDelimiter {
        delimiter: char,
        expression: String,
    },

    #[error("expected 3 comma-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("not a valid number: {0:?}")]
    InvalidNumber(String),

    #[error("can't parse {0:?} as an angle")]
    InvalidAngle(String),

    #[error("invalid format template: {0}")]
    Template(String),
}

/// Errors raised when an argument lies outside its accepted domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("not a valid octant: {0} (expected 0 to 8)")]
    Octant(i64),

    #[error("section {section} is out of range [1, {count}]")]
    Section { section: u32, count: u32 },
}

/// Convenience type alias for results using [`GeoError`].
pub type Result<T> = std::result::Result<T, GeoError>;
