use crate::{
    error::{duration::Error as E, Error},
    fmt::iso8601::{DEFAULT_PARSER, DEFAULT_PRINTER},
    unit::{Unit, NANOS_PER_SECOND},
};

/// An ISO 8601 duration such as `P3Y6M4DT12H30M5.5S`.
///
/// A duration is a non-negative magnitude for each of years, months, weeks,
/// days, hours, minutes and seconds, plus a single sign that applies to the
/// whole value. There is no such thing as a negative field: `-PT5M` is five
/// minutes with the negative sign set.
///
/// Magnitudes are `f64`. Any of them may carry a fractional part, although
/// by convention only seconds do.
///
/// # Creating a duration
///
/// A duration is usually parsed:
///
/// ```
/// use isoduration::Duration;
///
/// let d: Duration = "P3Y6M4DT12H30M5.5S".parse()?;
/// assert_eq!(d.get_years(), 3.0);
/// assert_eq!(d.get_months(), 6.0);
/// assert_eq!(d.get_minutes(), 30.0);
/// assert_eq!(d.get_seconds(), 5.5);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// It can also be built from its parts, or from a count of nanoseconds:
///
/// ```
/// use isoduration::Duration;
///
/// let d = Duration::new().hours(1.0).minutes(34.0);
/// assert_eq!(d, Duration::from_ticks(94 * 60 * 1_000_000_000));
/// assert_eq!(d.to_string(), "PT1H34M");
/// ```
///
/// # Printing
///
/// The `Display` impl prints a duration in its canonical ISO 8601 form. A
/// duration that was parsed, and not changed since, prints exactly the text
/// it was parsed from. Changing any part of it (with any of the builder
/// methods) discards that text:
///
/// ```
/// use isoduration::Duration;
///
/// let d: Duration = "PT0.0000000000001S".parse()?;
/// assert_eq!(d.to_string(), "PT0.0000000000001S");
///
/// let d: Duration = "PT90M".parse()?;
/// assert_eq!(d.to_string(), "PT90M");
/// assert_eq!(d.seconds(1.0).to_string(), "PT90M1S");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Equality
///
/// Two durations are equal when every magnitude and the sign are equal. The
/// text a duration was parsed from is not compared, and neither is the
/// total amount of time: `PT60M` and `PT1H` are not equal.
///
/// # Conversion to ticks
///
/// [`Duration::to_ticks`] and [`Duration::from_ticks`] convert to and from
/// an `i64` number of nanoseconds using the fixed unit lengths documented in
/// the [`unit`](crate::unit) module. Months and years are approximations
/// there, so a conversion through ticks preserves the amount of elapsed time
/// but not the original breakdown into units.
#[derive(Clone, Debug, Default)]
pub struct Duration {
    negative: bool,
    years: f64,
    months: f64,
    weeks: f64,
    days: f64,
    hours: f64,
    minutes: f64,
    seconds: f64,
    /// The text this duration was parsed from. Cleared by any change.
    original: Option<Box<str>>,
}

impl Duration {
    /// Returns a zero duration.
    ///
    /// The zero duration prints as `PT0S`.
    #[inline]
    pub const fn new() -> Duration {
        Duration {
            negative: false,
            years: 0.0,
            months: 0.0,
            weeks: 0.0,
            days: 0.0,
            hours: 0.0,
            minutes: 0.0,
            seconds: 0.0,
            original: None,
        }
    }

    /// Set the number of years on this duration.
    ///
    /// # Panics
    ///
    /// When `years` is negative, infinite or NaN.
    #[inline]
    pub fn years(self, years: f64) -> Duration {
        self.unit_value(Unit::Year, years)
    }

    /// Set the number of months on this duration.
    ///
    /// # Panics
    ///
    /// When `months` is negative, infinite or NaN.
    #[inline]
    pub fn months(self, months: f64) -> Duration {
        self.unit_value(Unit::Month, months)
    }

    /// Set the number of weeks on this duration.
    ///
    /// # Panics
    ///
    /// When `weeks` is negative, infinite or NaN.
    #[inline]
    pub fn weeks(self, weeks: f64) -> Duration {
        self.unit_value(Unit::Week, weeks)
    }

    /// Set the number of days on this duration.
    ///
    /// # Panics
    ///
    /// When `days` is negative, infinite or NaN.
    #[inline]
    pub fn days(self, days: f64) -> Duration {
        self.unit_value(Unit::Day, days)
    }

    /// Set the number of hours on this duration.
    ///
    /// # Panics
    ///
    /// When `hours` is negative, infinite or NaN.
    #[inline]
    pub fn hours(self, hours: f64) -> Duration {
        self.unit_value(Unit::Hour, hours)
    }

    /// Set the number of minutes on this duration.
    ///
    /// # Panics
    ///
    /// When `minutes` is negative, infinite or NaN.
    #[inline]
    pub fn minutes(self, minutes: f64) -> Duration {
        self.unit_value(Unit::Minute, minutes)
    }

    /// Set the number of seconds on this duration.
    ///
    /// # Panics
    ///
    /// When `seconds` is negative, infinite or NaN.
    #[inline]
    pub fn seconds(self, seconds: f64) -> Duration {
        self.unit_value(Unit::Second, seconds)
    }

    /// Set the value of the given unit on this duration.
    ///
    /// The sign of a duration is never set through a unit value. Use
    /// [`Duration::negate`] for that.
    ///
    /// # Panics
    ///
    /// When `value` is negative, infinite or NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::{Duration, Unit};
    ///
    /// let d = Duration::new().unit_value(Unit::Week, 2.0);
    /// assert_eq!(d.to_string(), "P2W");
    /// ```
    #[inline]
    pub fn unit_value(mut self, unit: Unit, value: f64) -> Duration {
        assert!(
            value.is_finite() && value >= 0.0,
            "number of {unit} must be finite and non-negative, \
             but got {value}",
            unit = unit.plural(),
        );
        self.set_unit(unit, value);
        self.original = None;
        self
    }

    /// Returns the number of years in this duration.
    #[inline]
    pub fn get_years(&self) -> f64 {
        self.years
    }

    /// Returns the number of months in this duration.
    #[inline]
    pub fn get_months(&self) -> f64 {
        self.months
    }

    /// Returns the number of weeks in this duration.
    #[inline]
    pub fn get_weeks(&self) -> f64 {
        self.weeks
    }

    /// Returns the number of days in this duration.
    #[inline]
    pub fn get_days(&self) -> f64 {
        self.days
    }

    /// Returns the number of hours in this duration.
    #[inline]
    pub fn get_hours(&self) -> f64 {
        self.hours
    }

    /// Returns the number of minutes in this duration.
    #[inline]
    pub fn get_minutes(&self) -> f64 {
        self.minutes
    }

    /// Returns the number of seconds in this duration.
    #[inline]
    pub fn get_seconds(&self) -> f64 {
        self.seconds
    }

    /// Returns the value of the given unit in this duration.
    ///
    /// The value is always non-negative. The sign is reported separately by
    /// [`Duration::is_negative`].
    #[inline]
    pub fn get_unit(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Year => self.years,
            Unit::Month => self.months,
            Unit::Week => self.weeks,
            Unit::Day => self.days,
            Unit::Hour => self.hours,
            Unit::Minute => self.minutes,
            Unit::Second => self.seconds,
        }
    }

    /// Returns true when this duration has its negative sign set.
    ///
    /// Note that a zero duration may have its sign set if it was parsed from
    /// text like `-PT0S`. It still prints as `PT0S` once the original text
    /// is discarded, and converts to zero ticks.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true when every unit in this duration is zero, regardless of
    /// its sign.
    #[inline]
    pub fn is_zero(&self) -> bool {
        Unit::DESCENDING.iter().all(|&unit| self.get_unit(unit) == 0.0)
    }

    /// Returns this duration with its sign flipped.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// let d = Duration::new().minutes(5.0).negate();
    /// assert!(d.is_negative());
    /// assert_eq!(d.to_string(), "-PT5M");
    /// assert_eq!(-d, Duration::new().minutes(5.0));
    /// ```
    #[inline]
    pub fn negate(mut self) -> Duration {
        self.negative = !self.negative;
        self.original = None;
        self
    }

    /// Returns this duration with its sign cleared.
    #[inline]
    pub fn abs(self) -> Duration {
        if self.negative {
            self.negate()
        } else {
            self
        }
    }

    /// Converts this duration to a signed number of nanoseconds.
    ///
    /// Each unit is multiplied by its fixed length in nanoseconds and rounded
    /// to the nearest nanosecond on its own before the results are summed.
    /// The sum is negated when this duration is negative.
    ///
    /// This never fails. When the total does not fit into an `i64`, the
    /// result saturates at `i64::MAX` (or `-i64::MAX` when negative).
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// let d = Duration::new().seconds(33.3);
    /// assert_eq!(d.to_ticks(), 33_300_000_000);
    ///
    /// let d = Duration::new().hours(2.0).negate();
    /// assert_eq!(d.to_ticks(), -2 * 60 * 60 * 1_000_000_000);
    ///
    /// // A month is always 730 hours.
    /// let d = Duration::new().months(1.0);
    /// assert_eq!(d.to_ticks(), 730 * 60 * 60 * 1_000_000_000);
    /// ```
    pub fn to_ticks(&self) -> i64 {
        let mut ticks: i64 = 0;
        for unit in Unit::DESCENDING {
            let value = self.get_unit(unit);
            if value == 0.0 {
                continue;
            }
            // Float to int casts saturate, so a value too big for an i64
            // becomes i64::MAX here.
            let nanos = (value * unit.nanoseconds() as f64).round() as i64;
            ticks = match ticks.checked_add(nanos) {
                Some(ticks) => ticks,
                None => {
                    warn!(
                        "duration {self} overflows 64-bit nanoseconds, \
                         saturating",
                    );
                    i64::MAX
                }
            };
        }
        // Every term is non-negative, so `ticks` is in `0..=i64::MAX` and
        // negating it can't overflow.
        if self.negative {
            -ticks
        } else {
            ticks
        }
    }

    /// Builds a duration from a signed number of nanoseconds.
    ///
    /// The magnitude is split greedily from the largest unit to the
    /// smallest: years, months, weeks, days, hours and minutes each get the
    /// floor of what remains divided by their fixed length. Seconds get all
    /// of the remainder, including any fraction of a second.
    ///
    /// This never fails, even for `i64::MIN`.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::Duration;
    ///
    /// const HOUR: i64 = 60 * 60 * 1_000_000_000;
    ///
    /// assert_eq!(Duration::from_ticks(72 * HOUR).to_string(), "P3D");
    /// assert_eq!(Duration::from_ticks(26 * HOUR).to_string(), "P1DT2H");
    /// assert_eq!(
    ///     Duration::from_ticks(-99544 * HOUR).to_string(),
    ///     "-P11Y4M1W4D",
    /// );
    /// ```
    pub fn from_ticks(ticks: i64) -> Duration {
        let mut dur = Duration::new();
        dur.negative = ticks < 0;
        let mut remaining = ticks.unsigned_abs();
        for unit in Unit::DESCENDING {
            if unit == Unit::Second {
                break;
            }
            // OK because every unit length is positive.
            let length = unit.nanoseconds().unsigned_abs();
            if remaining >= length {
                dur.set_unit(unit, (remaining / length) as f64);
                remaining %= length;
            }
        }
        // The remainder is less than a minute, so it and the quotient below
        // are represented exactly or within half an ulp.
        dur.seconds = remaining as f64 / NANOS_PER_SECOND as f64;
        dur
    }

    /// Sets a unit value without any checks and without clearing the
    /// original text.
    #[inline]
    pub(crate) fn set_unit(&mut self, unit: Unit, value: f64) {
        match unit {
            Unit::Year => self.years = value,
            Unit::Month => self.months = value,
            Unit::Week => self.weeks = value,
            Unit::Day => self.days = value,
            Unit::Hour => self.hours = value,
            Unit::Minute => self.minutes = value,
            Unit::Second => self.seconds = value,
        }
    }

    #[inline]
    pub(crate) fn set_negative(&mut self, negative: bool) {
        self.negative = negative;
    }

    #[inline]
    pub(crate) fn set_original(&mut self, original: Box<str>) {
        self.original = Some(original);
    }

    /// Returns the text this duration was parsed from, if it hasn't changed
    /// since.
    #[inline]
    pub(crate) fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }
}

impl PartialEq for Duration {
    #[inline]
    fn eq(&self, other: &Duration) -> bool {
        self.negative == other.negative
            && Unit::DESCENDING
                .iter()
                .all(|&unit| self.get_unit(unit) == other.get_unit(unit))
    }
}

impl core::fmt::Display for Duration {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        DEFAULT_PRINTER.print_duration(self, f)
    }
}

impl core::str::FromStr for Duration {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<Duration, Error> {
        DEFAULT_PARSER.parse_duration(string)
    }
}

impl core::ops::Neg for Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Duration {
        self.negate()
    }
}

/// Converts an unsigned standard library duration into an ISO 8601
/// duration by way of [`Duration::from_ticks`].
///
/// Durations longer than `i64::MAX` nanoseconds (about 292 years) saturate.
impl From<std::time::Duration> for Duration {
    #[inline]
    fn from(d: std::time::Duration) -> Duration {
        let ticks = i64::try_from(d.as_nanos()).unwrap_or_else(|_| {
            warn!(
                "duration {d:?} overflows 64-bit nanoseconds, saturating",
            );
            i64::MAX
        });
        Duration::from_ticks(ticks)
    }
}

/// Converts an ISO 8601 duration into an unsigned standard library duration
/// by way of [`Duration::to_ticks`].
///
/// This fails when the duration is negative and not zero.
///
/// # Example
///
/// ```
/// use isoduration::{Duration, ErrorKind};
///
/// let d: Duration = "PT1M30S".parse()?;
/// let sd = std::time::Duration::try_from(d)?;
/// assert_eq!(sd, std::time::Duration::from_secs(90));
///
/// let d: Duration = "-PT1M30S".parse()?;
/// let err = std::time::Duration::try_from(d).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Negative);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
impl TryFrom<Duration> for std::time::Duration {
    type Error = Error;

    #[inline]
    fn try_from(d: Duration) -> Result<std::time::Duration, Error> {
        let ticks = d.to_ticks();
        let nanos = u64::try_from(ticks)
            .map_err(|_| Error::from(E::NegativeToUnsigned))?;
        Ok(std::time::Duration::from_nanos(nanos))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Duration {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Duration {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        use serde::de;

        struct DurationVisitor;

        impl<'de> de::Visitor<'de> for DurationVisitor {
            type Value = Duration;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an ISO 8601 duration string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Duration, E> {
                DEFAULT_PARSER
                    .parse_duration(value)
                    .map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<Duration, E> {
                self.visit_bytes(value.as_bytes())
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        use quickcheck::Arbitrary;

        // Most generated durations should have a few units set and the rest
        // zero, which is what real durations look like.
        let whole = |g: &mut quickcheck::Gen| {
            if bool::arbitrary(g) {
                0.0
            } else {
                f64::from(u16::arbitrary(g))
            }
        };
        let mut dur = Duration::new()
            .years(whole(g))
            .months(whole(g))
            .weeks(whole(g))
            .days(whole(g))
            .hours(whole(g))
            .minutes(whole(g));
        if bool::arbitrary(g) {
            dur = dur.seconds(f64::from(u32::arbitrary(g)) / 1_000.0);
        }
        if bool::arbitrary(g) {
            dur = dur.negate();
        }
        dur
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Duration>> {
        let dur = self.clone();
        Box::new(Unit::DESCENDING.into_iter().filter_map(move |unit| {
            if dur.get_unit(unit) == 0.0 {
                return None;
            }
            Some(dur.clone().unit_value(unit, 0.0))
        }))
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;

    use super::*;

    const HOUR: i64 = crate::unit::NANOS_PER_HOUR;
    const MINUTE: i64 = crate::unit::NANOS_PER_MINUTE;
    const SECOND: i64 = crate::unit::NANOS_PER_SECOND;

    #[test]
    fn to_ticks() {
        assert_eq!(Duration::new().to_ticks(), 0);
        assert_eq!(
            Duration::new().seconds(33.3).to_ticks(),
            33 * SECOND + 300_000_000,
        );
        assert_eq!(
            Duration::new().hours(2.0).minutes(33.0).seconds(17.0).to_ticks(),
            2 * HOUR + 33 * MINUTE + 17 * SECOND,
        );
        assert_eq!(Duration::new().days(2.0).to_ticks(), 2 * 24 * HOUR);
        assert_eq!(Duration::new().weeks(1.0).to_ticks(), 7 * 24 * HOUR);
        assert_eq!(
            Duration::new().weeks(12.5).to_ticks(),
            (12 * 7 * 24 + 84) * HOUR,
        );
        assert_eq!(Duration::new().hours(2.0).negate().to_ticks(), -2 * HOUR);
        assert_eq!(Duration::new().months(1.0).to_ticks(), 730 * HOUR);
        assert_eq!(Duration::new().years(1.0).to_ticks(), 8_760 * HOUR);
        assert_eq!(
            Duration::new().months(12.0).to_ticks(),
            Duration::new().years(1.0).to_ticks(),
        );
    }

    #[test]
    fn to_ticks_rounds_each_unit() {
        // 0.6ns rounds up to 1ns on its own, so two of them make 2ns
        // instead of the 1ns that rounding the sum would give.
        let d = Duration::new().minutes(0.6 / 60e9).seconds(0.6e-9);
        assert_eq!(d.to_ticks(), 2);
    }

    #[test]
    fn to_ticks_saturates() {
        let d = Duration::new().years(1_000.0);
        assert_eq!(d.to_ticks(), i64::MAX);
        assert_eq!(d.negate().to_ticks(), -i64::MAX);

        let d = Duration::new().years(1e300).seconds(1.0);
        assert_eq!(d.to_ticks(), i64::MAX);

        let d = Duration::new().years(292.0).months(12.0);
        assert_eq!(d.to_ticks(), i64::MAX);
    }

    #[test]
    fn from_ticks() {
        assert_eq!(Duration::from_ticks(0), Duration::new());
        assert_eq!(
            Duration::from_ticks(94 * MINUTE),
            Duration::new().hours(1.0).minutes(34.0),
        );
        assert_eq!(
            Duration::from_ticks(-10 * SECOND),
            Duration::new().seconds(10.0).negate(),
        );
        assert_eq!(
            Duration::from_ticks(-99_544 * HOUR),
            Duration::new()
                .years(11.0)
                .months(4.0)
                .weeks(1.0)
                .days(4.0)
                .negate(),
        );
        assert_eq!(
            Duration::from_ticks(1_500_000_000),
            Duration::new().seconds(1.5),
        );
        assert_eq!(Duration::from_ticks(1), Duration::new().seconds(1e-9));
    }

    #[test]
    fn from_ticks_extremes() {
        insta::assert_snapshot!(
            Duration::from_ticks(i64::MAX),
            @"P292Y5M2W5DT21H47M16.854775807S",
        );
        insta::assert_snapshot!(
            Duration::from_ticks(i64::MIN),
            @"-P292Y5M2W5DT21H47M16.854775808S",
        );
        assert_eq!(Duration::from_ticks(i64::MAX).to_ticks(), i64::MAX);
        assert_eq!(Duration::from_ticks(-i64::MAX).to_ticks(), -i64::MAX);
    }

    #[test]
    fn equality_ignores_original() {
        let parsed: Duration = "PT1H".parse().unwrap();
        let built = Duration::new().hours(1.0);
        assert_eq!(parsed, built);
        assert_ne!(parsed, Duration::new().minutes(60.0));
        assert_ne!(built.clone(), built.negate());
    }

    #[test]
    fn builders_discard_original() {
        let d: Duration = "P3Y6M4DT12H30M5.5S".parse().unwrap();
        assert_eq!(d.original(), Some("P3Y6M4DT12H30M5.5S"));
        let d = d.seconds(33.3333);
        assert_eq!(d.original(), None);
        assert_eq!(d.to_string(), "P3Y6M4DT12H30M33.3333S");

        let d: Duration = "-PT2H5M".parse().unwrap();
        assert_eq!(d.clone().abs().original(), None);
        assert_eq!(d.clone().abs().to_string(), "PT2H5M");
        assert_eq!(d.to_string(), "-PT2H5M");

        let d: Duration = "PT2H5M".parse().unwrap();
        assert_eq!(d.abs().original(), Some("PT2H5M"));
    }

    #[test]
    #[should_panic]
    fn negative_unit_value_panics() {
        let _ = Duration::new().hours(-1.0);
    }

    #[test]
    #[should_panic]
    fn nan_unit_value_panics() {
        let _ = Duration::new().seconds(f64::NAN);
    }

    #[test]
    fn zero_sign() {
        let d: Duration = "-PT0S".parse().unwrap();
        assert!(d.is_zero());
        assert!(d.is_negative());
        assert_eq!(d.to_ticks(), 0);
        assert_eq!(d.to_string(), "-PT0S");
        assert_eq!(d.seconds(0.0).to_string(), "PT0S");
    }

    #[test]
    fn std_duration() {
        let d = Duration::from(std::time::Duration::from_secs(26 * 3600));
        assert_eq!(d.to_string(), "P1DT2H");

        let d = Duration::from(std::time::Duration::from_nanos(1_500));
        assert_eq!(d.to_string(), "PT0.0000015S");

        let d = Duration::from(std::time::Duration::MAX);
        assert_eq!(d, Duration::from_ticks(i64::MAX));

        let sd = std::time::Duration::try_from(Duration::new().weeks(1.0));
        assert_eq!(sd.unwrap(), std::time::Duration::from_secs(7 * 86_400));

        let sd = std::time::Duration::try_from(Duration::new().negate());
        assert_eq!(sd.unwrap(), std::time::Duration::ZERO);

        let err = std::time::Duration::try_from(
            Duration::new().seconds(1.0).negate(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Negative);
    }

    quickcheck::quickcheck! {
        fn prop_roundtrip_ticks(ticks: i64) -> TestResult {
            if ticks == i64::MIN {
                return TestResult::discard();
            }
            TestResult::from_bool(Duration::from_ticks(ticks).to_ticks() == ticks)
        }

        fn prop_roundtrip_duration_ticks(dur: Duration) -> bool {
            let ticks = dur.to_ticks();
            Duration::from_ticks(ticks).to_ticks() == ticks
        }

        fn prop_sign_isolation(dur: Duration) -> bool {
            dur.clone().negate().to_ticks() == -dur.to_ticks()
        }

        fn prop_unit_value(unit: Unit, value: u32) -> bool {
            let value = f64::from(value);
            let dur = Duration::new().unit_value(unit, value);
            dur.get_unit(unit) == value
                && Unit::DESCENDING
                    .iter()
                    .filter(|&&u| u != unit)
                    .all(|&u| dur.get_unit(u) == 0.0)
        }
    }
}
