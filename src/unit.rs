/*!
Units of a duration and the fixed lengths used to convert between them.

Weeks and everything smaller have a single well defined length. Months and
years do not: their real length depends on where they fall in a calendar.
This crate never consults a calendar. Instead, it uses the fixed
approximations below, and they are part of the public API:

* One month is 730 hours (about 30.417 days).
* One year is 8,760 hours (exactly 365 days, with no leap year adjustment).

Twelve months is therefore exactly one year.
*/

/// The number of nanoseconds in one second.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
/// The number of nanoseconds in one minute.
pub const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
/// The number of nanoseconds in one hour.
pub const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
/// The number of nanoseconds in one day.
pub const NANOS_PER_DAY: i64 = HOURS_PER_DAY * NANOS_PER_HOUR;
/// The number of nanoseconds in one week.
pub const NANOS_PER_WEEK: i64 = HOURS_PER_WEEK * NANOS_PER_HOUR;
/// The number of nanoseconds in one month, using a fixed 730 hour month.
pub const NANOS_PER_MONTH: i64 = HOURS_PER_MONTH * NANOS_PER_HOUR;
/// The number of nanoseconds in one year, using a fixed 365 day year.
pub const NANOS_PER_YEAR: i64 = HOURS_PER_YEAR * NANOS_PER_HOUR;

/// The number of hours in one day.
pub const HOURS_PER_DAY: i64 = 24;
/// The number of hours in one week.
pub const HOURS_PER_WEEK: i64 = 7 * HOURS_PER_DAY;
/// The number of hours in one month. This is one twelfth of a year.
pub const HOURS_PER_MONTH: i64 = HOURS_PER_YEAR / 12;
/// The number of hours in one year. This is 365 days.
pub const HOURS_PER_YEAR: i64 = 365 * HOURS_PER_DAY;

/// A unit of time that can appear in an ISO 8601 duration.
///
/// Units are ordered from smallest to largest, so `Unit::Second` is the
/// minimum and `Unit::Year` is the maximum.
///
/// # Example
///
/// ```
/// use isoduration::Unit;
///
/// assert!(Unit::Year > Unit::Month);
/// assert_eq!(Unit::Month.designator(), b'M');
/// assert_eq!(Unit::Minute.designator(), b'M');
/// assert_eq!(Unit::Month.nanoseconds(), 730 * 60 * 60 * 1_000_000_000);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Unit {
    /// A second. The only unit whose value conventionally has a fractional
    /// component.
    Second = 0,
    /// A minute, designated by `M` after the time designator `T`.
    Minute = 1,
    /// An hour.
    Hour = 2,
    /// A day, always 24 hours.
    Day = 3,
    /// A week, always 7 days.
    Week = 4,
    /// A month, always 730 hours. Designated by `M` before `T`.
    Month = 5,
    /// A year, always 8,760 hours.
    Year = 6,
}

impl Unit {
    /// All units, largest first. This is the order in which they are printed
    /// and in which ticks are decomposed into them.
    pub(crate) const DESCENDING: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Returns the number of nanoseconds in one of this unit.
    pub const fn nanoseconds(self) -> i64 {
        match self {
            Unit::Second => NANOS_PER_SECOND,
            Unit::Minute => NANOS_PER_MINUTE,
            Unit::Hour => NANOS_PER_HOUR,
            Unit::Day => NANOS_PER_DAY,
            Unit::Week => NANOS_PER_WEEK,
            Unit::Month => NANOS_PER_MONTH,
            Unit::Year => NANOS_PER_YEAR,
        }
    }

    /// Returns the uppercase ISO 8601 designator for this unit.
    ///
    /// Note that both `Unit::Month` and `Unit::Minute` use `M`. Which one is
    /// meant depends on whether it appears before or after `T`.
    pub const fn designator(self) -> u8 {
        match self {
            Unit::Second => b'S',
            Unit::Minute => b'M',
            Unit::Hour => b'H',
            Unit::Day => b'D',
            Unit::Week => b'W',
            Unit::Month => b'M',
            Unit::Year => b'Y',
        }
    }

    /// Returns true if this unit belongs after the time designator `T`.
    pub const fn is_time(self) -> bool {
        matches!(self, Unit::Hour | Unit::Minute | Unit::Second)
    }

    /// A singular human readable name for this unit.
    pub fn singular(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// A plural human readable name for this unit.
    pub fn plural(self) -> &'static str {
        match self {
            Unit::Second => "seconds",
            Unit::Minute => "minutes",
            Unit::Hour => "hours",
            Unit::Day => "days",
            Unit::Week => "weeks",
            Unit::Month => "months",
            Unit::Year => "years",
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        *g.choose(&Unit::DESCENDING).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_lengths() {
        assert_eq!(NANOS_PER_HOUR, 3_600_000_000_000);
        assert_eq!(HOURS_PER_MONTH, 730);
        assert_eq!(HOURS_PER_YEAR, 8_760);
        assert_eq!(12 * NANOS_PER_MONTH, NANOS_PER_YEAR);
        assert_eq!(NANOS_PER_YEAR, 31_536_000_000_000_000);
    }

    #[test]
    fn descending_is_sorted() {
        let mut units = Unit::DESCENDING;
        units.sort();
        units.reverse();
        assert_eq!(units, Unit::DESCENDING);
        for pair in Unit::DESCENDING.windows(2) {
            assert!(pair[0].nanoseconds() > pair[1].nanoseconds());
        }
    }

    #[test]
    fn designators() {
        let got: String = Unit::DESCENDING
            .iter()
            .map(|u| char::from(u.designator()))
            .collect();
        assert_eq!(got, "YMWDHMS");
        let time: Vec<Unit> =
            Unit::DESCENDING.into_iter().filter(|u| u.is_time()).collect();
        assert_eq!(time, vec![Unit::Hour, Unit::Minute, Unit::Second]);
    }
}
