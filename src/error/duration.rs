use crate::error::ErrorKind;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    NegativeToUnsigned,
}

impl Error {
    pub(crate) fn kind(&self) -> ErrorKind {
        match *self {
            Error::NegativeToUnsigned => ErrorKind::Negative,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Error::NegativeToUnsigned => f.write_str(
                "cannot convert a negative duration to an unsigned duration",
            ),
        }
    }
}
