use std::error::Error;
use std::fmt;

/// Boxed underlying cause carried alongside an error message.
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// All errors produced by nextdate.
///
/// Every failure is a deterministic input-validation failure; there is no
/// retry concept. The kind is the compatibility contract, the message is
/// human-readable context for the caller.
#[derive(Debug)]
#[non_exhaustive]
pub enum NextDateError {
    /// A date string is not eight digits forming a valid calendar date.
    InvalidDateFormat {
        message: String,
        cause: Option<Cause>,
    },

    /// A repeat specifier fails the grammar, carries an unknown type tag,
    /// contains a non-numeric field, or a numeric field is outside its
    /// semantic range.
    InvalidRepeatFormat {
        message: String,
        cause: Option<Cause>,
    },
}

impl fmt::Display for NextDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDateFormat { message, .. } => write!(f, "{message}"),
            Self::InvalidRepeatFormat { message, .. } => write!(f, "{message}"),
        }
    }
}

impl Error for NextDateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDateFormat { cause, .. } | Self::InvalidRepeatFormat { cause, .. } => {
                cause.as_ref().map(|c| c.as_ref() as &(dyn Error + 'static))
            }
        }
    }
}

impl NextDateError {
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            message: message.into(),
            cause: None,
        }
    }

    pub fn invalid_date_from(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::InvalidDateFormat {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn invalid_repeat(message: impl Into<String>) -> Self {
        Self::InvalidRepeatFormat {
            message: message.into(),
            cause: None,
        }
    }

    pub fn invalid_repeat_from(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::InvalidRepeatFormat {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDateFormat { .. })
    }

    pub fn is_invalid_repeat(&self) -> bool {
        matches!(self, Self::InvalidRepeatFormat { .. })
    }
}
