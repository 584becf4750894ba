use std::fmt;

/// Result type for operations that surface engine errors
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to read a single member of a value.
///
/// Captured at the point of access and carried as data in place of the
/// member's value; it only propagates as an error when fail-fast mode
/// is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessError {
    message: String,
}

impl AccessError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "access failed: {}", self.message)
    }
}

impl std::error::Error for AccessError {}

/// Total failure to enumerate a value's members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationError {
    message: String,
}

impl EnumerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enumeration failed: {}", self.message)
    }
}

impl std::error::Error for EnumerationError {}

/// Error types that can surface from engine operations
#[derive(Debug)]
pub enum Error {
    /// A member access raised and fail-fast mode is enabled
    Access(AccessError),
    /// A value could not be enumerated at all
    Enumeration(EnumerationError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Access(err) => write!(f, "{}", err),
            Error::Enumeration(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Access(err) => Some(err),
            Error::Enumeration(err) => Some(err),
        }
    }
}

impl From<AccessError> for Error {
    fn from(err: AccessError) -> Self {
        Error::Access(err)
    }
}

impl From<EnumerationError> for Error {
    fn from(err: EnumerationError) -> Self {
        Error::Enumeration(err)
    }
}
