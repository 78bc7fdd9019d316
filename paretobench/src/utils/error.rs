use std::fmt::{Display, Formatter};

/// An error type used across the crate: a human readable message which is reported to the user
/// as is, e.g. a file which cannot be read or a front with unexpected dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl From<&str> for GenericError {
    fn from(msg: &str) -> Self {
        Self(msg.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(err: std::io::Error) -> Self {
        Self(err.to_string())
    }
}

impl From<GenericError> for String {
    fn from(err: GenericError) -> Self {
        err.0
    }
}
