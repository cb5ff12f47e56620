//! Error type shared by every fallible simulator operation

use core::fmt;

/// Errors raised before or during a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// A count, door index or name was out of range.
    InvalidArgument { what: &'static str, value: String },
    /// A game did not have exactly one prize door.
    MalformedGame { doors: [bool; 3] },
    /// A run configuration document could not be parsed.
    InvalidConfig(String),
}

impl SimError {
    pub(crate) fn invalid(what: &'static str, value: impl fmt::Display) -> Self {
        SimError::InvalidArgument { what, value: value.to_string() }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidArgument { what, value } =>
                write!(f, "invalid {}: {}", what, value),
            SimError::MalformedGame { doors } => {
                let prizes = doors.iter().filter(|d| **d).count();
                write!(f, "malformed game {:?}: expected exactly one prize door, found {}", doors, prizes)
            }
            SimError::InvalidConfig(reason) => write!(f, "invalid run configuration: {}", reason),
        }
    }
}

impl std::error::Error for SimError {}

/// Reject negative counts, converting the rest to `usize`.
pub(crate) fn check_count(what: &'static str, n: i64) -> Result<usize, SimError> {
    usize::try_from(n).map_err(|_| SimError::invalid(what, n))
}
