use crate::{error::ErrorKind, util::escape, Unit};

/// The ways in which parsing an ISO 8601 duration can fail.
///
/// These are converted into the public `Error` type as soon as they are
/// produced. The public type only exposes their classification via
/// `ErrorKind`.
#[derive(Clone, Debug)]
pub(crate) enum Error {
    Empty,
    ExpectedDurationDesignator { found: Option<u8> },
    RepeatedDurationDesignator,
    MisplacedSign,
    UnexpectedByte { byte: u8 },
    NumberBeforeTimeDesignator,
    NumberWithoutDesignator,
    PeriodUnitInTime { unit: Unit },
    TimeUnitInPeriod { unit: Unit },
    RepeatedUnit { unit: Unit },
    MissingNumber { unit: Unit },
    InvalidNumber { unit: Unit, digits: Box<[u8]> },
    NumberTooBig { unit: Unit },
}

impl Error {
    pub(crate) fn kind(&self) -> ErrorKind {
        match *self {
            Error::MissingNumber { .. }
            | Error::InvalidNumber { .. }
            | Error::NumberTooBig { .. } => ErrorKind::InvalidNumber,
            _ => ErrorKind::UnexpectedInput,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            Empty => f.write_str(
                "an empty string is not a valid ISO 8601 duration",
            ),
            ExpectedDurationDesignator { found: None } => f.write_str(
                "expected to find duration beginning with `P`, \
                 but found end of input",
            ),
            ExpectedDurationDesignator { found: Some(byte) } => write!(
                f,
                "expected to find duration beginning with `P`, \
                 but found `{byte}` instead",
                byte = escape::Byte(byte),
            ),
            RepeatedDurationDesignator => f.write_str(
                "found duration designator `P` after the start of \
                 the duration, but it may only appear once",
            ),
            MisplacedSign => f.write_str(
                "found sign `-` after the start of the duration, \
                 but a sign may only appear as the first character",
            ),
            UnexpectedByte { byte } => write!(
                f,
                "found unexpected `{byte}`, but expected a digit, `.`, \
                 `T` or a unit designator",
                byte = escape::Byte(byte),
            ),
            NumberBeforeTimeDesignator => f.write_str(
                "found number without a unit designator before \
                 time designator `T`",
            ),
            NumberWithoutDesignator => f.write_str(
                "found number without a unit designator at end of input",
            ),
            PeriodUnitInTime { unit } => write!(
                f,
                "found {unit} designator `{designator}` after time \
                 designator `T`, but it may only appear before it",
                unit = unit.singular(),
                designator = escape::Byte(unit.designator()),
            ),
            TimeUnitInPeriod { unit } => write!(
                f,
                "found {unit} designator `{designator}` before time \
                 designator `T`, but it may only appear after it",
                unit = unit.singular(),
                designator = escape::Byte(unit.designator()),
            ),
            RepeatedUnit { unit } => write!(
                f,
                "found {unit} designator `{designator}` more than once, \
                 but each unit may only appear once",
                unit = unit.singular(),
                designator = escape::Byte(unit.designator()),
            ),
            MissingNumber { unit } => write!(
                f,
                "expected to find number of {unit} before designator \
                 `{designator}`, but found no digits",
                unit = unit.plural(),
                designator = escape::Byte(unit.designator()),
            ),
            InvalidNumber { unit, ref digits } => write!(
                f,
                "failed to parse {digits:?} as number of {unit} \
                 (expected digits with at most one `.`)",
                digits = escape::Bytes(digits),
                unit = unit.plural(),
            ),
            NumberTooBig { unit } => write!(
                f,
                "number of {unit} is too big to represent",
                unit = unit.plural(),
            ),
        }
    }
}
