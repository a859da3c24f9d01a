use thiserror::Error;

/// Errors that can occur when expanding a numlist string.
///
/// All variants except [`UnsupportedFormat`][Error::UnsupportedFormat] reject a single part of
/// the input and carry the text of that part, available via [`Error::part()`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The part has a step suffix that is not a positive decimal integer.
    #[error("invalid step in part '{part}': '{step}' is not a positive integer")]
    InvalidStep {
        /// The part that contained the invalid step.
        part: String,

        /// The text after the step separator.
        step: String,
    },

    /// The part is a single number but is not made of decimal digits only.
    #[error("invalid number in part '{part}': expected unsigned decimal digits")]
    InvalidNumber {
        /// The part that could not be parsed as a number.
        part: String,
    },

    /// The part is a range but one or both of its bounds are not made of decimal digits only.
    #[error("invalid range in part '{part}': bounds must be unsigned decimal digits")]
    InvalidRangeBounds {
        /// The part with the invalid bound.
        part: String,
    },

    /// The part is neither a single number nor two numbers around exactly one range delimiter.
    #[error("malformed part '{part}': {problem}")]
    MalformedPart {
        /// The part that did not match the expected structure.
        part: String,

        /// A human-readable description of the problem.
        problem: &'static str,
    },

    /// The caller asked for an output format that is not recognized.
    ///
    /// This is never scoped to a single part and always aborts the call.
    #[error("unsupported output format '{format}': expected one of 'list', 'set' or 'csv'")]
    UnsupportedFormat {
        /// The format name that was requested.
        format: String,
    },
}

impl Error {
    /// The text of the rejected part, if this error rejects a single part of the input.
    #[must_use]
    pub fn part(&self) -> Option<&str> {
        match self {
            Self::InvalidStep { part, .. }
            | Self::InvalidNumber { part }
            | Self::InvalidRangeBounds { part }
            | Self::MalformedPart { part, .. } => Some(part.as_str()),
            Self::UnsupportedFormat { .. } => None,
        }
    }
}

/// A specialized `Result` type for numlist operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
