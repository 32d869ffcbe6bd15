use crate::{
    error::{iso8601::Error as E, Error, ErrorContext},
    fmt::Parsed,
    util::escape,
    Duration, Unit,
};

/// A parser for ISO 8601 durations.
///
/// There are currently no configuration options for this parser. It exists
/// so that a parser can be stored and reused, and so that options can be
/// added later without breaking anything.
///
/// # Example
///
/// ```
/// use isoduration::{fmt::iso8601::DurationParser, Duration};
///
/// static PARSER: DurationParser = DurationParser::new();
///
/// let dur = PARSER.parse_duration("P1MT1M")?;
/// assert_eq!(dur, Duration::new().months(1.0).minutes(1.0));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct DurationParser {
    _priv: (),
}

impl DurationParser {
    /// Create a new ISO 8601 duration parser with the default configuration.
    #[inline]
    pub const fn new() -> DurationParser {
        DurationParser { _priv: () }
    }

    /// Parse an ISO 8601 duration from the given input.
    ///
    /// The whole input must be a duration. Leading or trailing whitespace
    /// is not allowed.
    ///
    /// The duration returned remembers `input`, and prints it verbatim until
    /// it is changed.
    ///
    /// # Errors
    ///
    /// This returns an error on the first violation of the grammar that is
    /// found. There is no attempt at recovery.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::{fmt::iso8601::DurationParser, ErrorKind};
    ///
    /// let parser = DurationParser::new();
    ///
    /// let dur = parser.parse_duration("PT2.5S")?;
    /// assert_eq!(dur.get_seconds(), 2.5);
    ///
    /// let err = parser.parse_duration("P1.2.3Y").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidNumber);
    ///
    /// let err = parser.parse_duration("P-T0S").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::UnexpectedInput);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse_duration<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Duration, Error> {
        let input = input.as_ref();
        let dur = self.parse_to_duration(input).with_context(|| {
            format!(
                "failed to parse {input:?} as an ISO 8601 duration",
                input = escape::Bytes(input),
            )
        })?;
        trace!(
            "parsed {input:?} as ISO 8601 duration {dur:?}",
            input = escape::Bytes(input),
        );
        Ok(dur)
    }

    #[inline(always)]
    fn parse_to_duration(&self, input: &[u8]) -> Result<Duration, Error> {
        if input.is_empty() {
            return Err(Error::from(E::Empty));
        }
        let Parsed { value: negative, input: rest } = self.parse_sign(input);
        let Parsed { input: rest, .. } =
            self.parse_duration_designator(rest)?;

        let mut dur = Duration::new();
        self.parse_units(rest, &mut dur)?;
        dur.set_negative(negative);
        // Only ASCII makes it through a successful parse, so this is never
        // lossy.
        dur.set_original(String::from_utf8_lossy(input).into());
        Ok(dur)
    }

    /// Parses everything after the leading `P` into the duration given.
    ///
    /// This is a single pass over the input. Digits and `.` are collected
    /// into a number that is closed by the next unit designator. The unit a
    /// designator refers to is decided by whether `T` has been seen yet,
    /// which is what makes `M` mean months before `T` and minutes after it.
    ///
    /// All of the input must be consumed.
    fn parse_units(
        &self,
        input: &[u8],
        dur: &mut Duration,
    ) -> Result<(), Error> {
        let mut part = Part::Period;
        let mut seen = [false; 7];
        // The start of the current number. When this is equal to the
        // current position, there is no number in progress.
        let mut start = 0;
        for (i, &byte) in input.iter().enumerate() {
            match byte {
                b'0'..=b'9' | b'.' => continue,
                b'T' => {
                    if start < i {
                        return Err(Error::from(E::NumberBeforeTimeDesignator));
                    }
                    part = Part::Time;
                }
                b'P' => {
                    return Err(Error::from(E::RepeatedDurationDesignator));
                }
                b'-' => return Err(Error::from(E::MisplacedSign)),
                _ => {
                    let Some(unit) = self.parse_unit_designator(part, byte)?
                    else {
                        return Err(Error::from(E::UnexpectedByte { byte }));
                    };
                    if core::mem::replace(&mut seen[unit as usize], true) {
                        return Err(Error::from(E::RepeatedUnit { unit }));
                    }
                    let value = self.parse_unit_value(unit, &input[start..i])?;
                    dur.set_unit(unit, value);
                }
            }
            start = i + 1;
        }
        if start < input.len() {
            return Err(Error::from(E::NumberWithoutDesignator));
        }
        Ok(())
    }

    /// Parses the number preceding a unit designator.
    ///
    /// The given digits are guaranteed to contain only ASCII digits and `.`,
    /// but may be empty or contain more than one `.`.
    #[inline(always)]
    fn parse_unit_value(
        &self,
        unit: Unit,
        digits: &[u8],
    ) -> Result<f64, Error> {
        if digits.is_empty() {
            return Err(Error::from(E::MissingNumber { unit }));
        }
        let value = core::str::from_utf8(digits)
            .ok()
            .and_then(|digits| digits.parse::<f64>().ok());
        let Some(value) = value else {
            let digits = Box::from(digits);
            return Err(Error::from(E::InvalidNumber { unit, digits }));
        };
        // Parsing a float never fails because a number is too big. Instead,
        // it returns infinity.
        if !value.is_finite() {
            return Err(Error::from(E::NumberTooBig { unit }));
        }
        Ok(value)
    }

    /// Maps a unit designator to its unit, given the part of the duration
    /// it appears in.
    ///
    /// If the byte isn't a designator at all, then `None` is returned. If it
    /// is a designator but for the other part of the duration, then an error
    /// is returned.
    #[inline(always)]
    fn parse_unit_designator(
        &self,
        part: Part,
        byte: u8,
    ) -> Result<Option<Unit>, Error> {
        let unit = match (byte, part) {
            (b'Y', _) => Unit::Year,
            (b'M', Part::Period) => Unit::Month,
            (b'W', _) => Unit::Week,
            (b'D', _) => Unit::Day,
            (b'H', _) => Unit::Hour,
            (b'M', Part::Time) => Unit::Minute,
            (b'S', _) => Unit::Second,
            _ => return Ok(None),
        };
        match part {
            Part::Period if unit.is_time() => {
                Err(Error::from(E::TimeUnitInPeriod { unit }))
            }
            Part::Time if !unit.is_time() => {
                Err(Error::from(E::PeriodUnitInTime { unit }))
            }
            _ => Ok(Some(unit)),
        }
    }

    /// Parses the `P` that every duration must begin with, after its
    /// optional sign.
    #[inline(always)]
    fn parse_duration_designator<'i>(
        &self,
        input: &'i [u8],
    ) -> Result<Parsed<'i, ()>, Error> {
        let Some((&first, tail)) = input.split_first() else {
            return Err(Error::from(E::ExpectedDurationDesignator {
                found: None,
            }));
        };
        match first {
            b'P' => Ok(Parsed { value: (), input: tail }),
            // The sign has already been stripped, so this is a second one.
            b'-' => Err(Error::from(E::MisplacedSign)),
            _ => Err(Error::from(E::ExpectedDurationDesignator {
                found: Some(first),
            })),
        }
    }

    /// Parses an optional `-` sign. Returns true when one was found.
    #[inline(always)]
    fn parse_sign<'i>(&self, input: &'i [u8]) -> Parsed<'i, bool> {
        match input.split_first() {
            Some((&b'-', tail)) => Parsed { value: true, input: tail },
            _ => Parsed { value: false, input },
        }
    }
}

impl Default for DurationParser {
    fn default() -> DurationParser {
        DurationParser::new()
    }
}

/// The part of a duration that the parser is in.
///
/// This determines which unit designators are allowed, and which unit `M`
/// refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Part {
    /// Before `T`. Years, months, weeks and days.
    Period,
    /// After `T`. Hours, minutes and seconds.
    Time,
}
