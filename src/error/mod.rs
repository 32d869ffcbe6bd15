use std::sync::Arc;

pub(crate) mod duration;
pub(crate) mod iso8601;

/// An error that can occur in this crate.
///
/// The most common type of error is a result of failing to parse an ISO 8601
/// duration. Errors also occur when converting a negative [`Duration`] into
/// an unsigned [`std::time::Duration`]. Formatting and conversion to or from
/// ticks never fail.
///
/// An error carries a human readable message (printed with `Display`) and a
/// classification that can be inspected with [`Error::kind`]. The message is
/// not part of the API and may change. The kind is.
///
/// This type is cheap to clone.
///
/// # Example
///
/// ```
/// use isoduration::{Duration, ErrorKind};
///
/// let err = "PT0SP0D".parse::<Duration>().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnexpectedInput);
/// ```
///
/// [`Duration`]: crate::Duration
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    message: Box<str>,
    cause: Option<Error>,
}

/// The classification of an [`Error`].
///
/// Errors are matched by kind. Two errors with the same kind may still have
/// different messages.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The input does not follow the ISO 8601 duration grammar.
    ///
    /// This covers bytes outside the expected alphabet, a unit designator in
    /// the wrong part of the duration (e.g., `H` before `T`), a repeated
    /// designator, a number with no designator following it and a `-` sign
    /// anywhere other than the very first byte.
    UnexpectedInput,
    /// The number preceding a unit designator is not a valid non-negative
    /// decimal literal. For example, it is empty, or has more than one `.`.
    InvalidNumber,
    /// A negative duration was given where only a non-negative duration can
    /// be represented.
    Negative,
}

impl Error {
    /// Returns the classification of this error.
    ///
    /// When an error has been wrapped with additional context, the kind is
    /// always the kind of the error that caused it.
    pub fn kind(&self) -> ErrorKind {
        self.inner.kind
    }

    /// Returns true when the input did not follow the duration grammar.
    pub fn is_unexpected_input(&self) -> bool {
        self.kind() == ErrorKind::UnexpectedInput
    }

    /// Returns true when a number in the input could not be parsed.
    pub fn is_invalid_number(&self) -> bool {
        self.kind() == ErrorKind::InvalidNumber
    }

    fn new(kind: ErrorKind, message: Box<str>) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, message, cause: None }) }
    }

    /// Wraps `self` with a message describing what was being done when it
    /// occurred. The kind of the new error is the kind of `self`.
    fn with_message(self, message: Box<str>) -> Error {
        let kind = self.kind();
        let cause = Some(self);
        Error { inner: Arc::new(ErrorInner { kind, message, cause }) }
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut err = self;
        loop {
            f.write_str(&err.inner.message)?;
            err = match err.inner.cause {
                None => return Ok(()),
                Some(ref cause) => cause,
            };
            f.write_str(": ")?;
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("message", &self.inner.message)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl From<iso8601::Error> for Error {
    fn from(err: iso8601::Error) -> Error {
        Error::new(err.kind(), err.to_string().into_boxed_str())
    }
}

impl From<duration::Error> for Error {
    fn from(err: duration::Error) -> Error {
        Error::new(err.kind(), err.to_string().into_boxed_str())
    }
}

/// A trait for adding context to errors.
///
/// The context is a message describing the operation that failed. It is
/// printed before the message of the underlying error.
pub(crate) trait ErrorContext<T> {
    /// Add the message returned by the given closure as context to an
    /// error. The closure is only called when there is an error.
    fn with_context<M: core::fmt::Display>(
        self,
        message: impl FnOnce() -> M,
    ) -> Result<T, Error>;
}

impl<T> ErrorContext<T> for Result<T, Error> {
    #[inline(always)]
    fn with_context<M: core::fmt::Display>(
        self,
        message: impl FnOnce() -> M,
    ) -> Result<T, Error> {
        self.map_err(|err| err.with_message(message().to_string().into()))
    }
}
