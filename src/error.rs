use thiserror::Error;

/// Errors from the parsing shims.
///
/// The numeric conversion core never fails: invalid numeric input degenerates
/// to NaN components in the result. Errors only arise when turning strings
/// into typed values.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unknown datum: {0}")]
    UnknownDatum(String),

    #[error("Invalid coordinate string: {0}")]
    InvalidCoordinate(String),
}
