/*!
Parsing and printing of ISO 8601 durations.

This module provides a parser, [`DurationParser`], and a printer,
[`DurationPrinter`]. The free functions [`parse`], [`format`] and
[`format_ticks`] use a default configured parser or printer.

# Example

```
use isoduration::fmt::iso8601;

let dur = iso8601::parse("P3Y6M4DT12H30M5.5S")?;
assert_eq!(dur.get_days(), 4.0);
assert_eq!(iso8601::format(&dur), "P3Y6M4DT12H30M5.5S");

const MINUTE: i64 = 60 * 1_000_000_000;
assert_eq!(iso8601::format_ticks(94 * MINUTE), "PT1H34M");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Precise details of format

Here is the grammar accepted by the parser:

```text
format =
    sign? 'P' period-part? time-part?

period-part = period-unit+
period-unit = number ('Y' | 'M' | 'W' | 'D')

time-part = 'T' time-unit*
time-unit = number ('H' | 'M' | 'S')

number = [0-9.]+
sign = '-'
```

With the following restrictions that the grammar doesn't capture:

* `number` must be a decimal literal with at most one `.`, e.g., `5`,
`5.5`, `5.` or `.5`. It may never be empty.
* Each unit may only appear once. `M` before `T` means months and after `T`
means minutes, so `P1MT1M` is one month and one minute.
* Units within a part may appear in any order. `P1D2Y` is accepted.
* Designators are uppercase only.
* There is no `+` sign. A `-` sign may only be the first character, and it
applies to the whole duration.

`P` and `PT` are both accepted and parse to the zero duration.

The printer always writes units from largest to smallest, omits zero units
and prints the zero duration as `PT0S`. Numbers are written with the
shortest decimal representation that parses back to the same `f64`, never
with an exponent.
*/

use crate::{Duration, Error};

pub use self::{parser::DurationParser, printer::DurationPrinter};

mod parser;
mod printer;

/// The parser used by `FromStr for Duration` and by [`parse`].
pub(crate) static DEFAULT_PARSER: DurationParser = DurationParser::new();

/// The printer used by `Display for Duration` and by [`format`].
pub(crate) static DEFAULT_PRINTER: DurationPrinter = DurationPrinter::new();

/// Parse an ISO 8601 duration.
///
/// This is a convenience for [`DurationParser::parse_duration`] with the
/// default configuration. It is equivalent to `input.parse::<Duration>()`
/// when the input is a `&str`.
///
/// # Errors
///
/// This returns an error when the input does not conform to the grammar
/// documented in this module. See [`ErrorKind`](crate::ErrorKind) for how
/// errors are classified.
///
/// # Example
///
/// ```
/// use isoduration::{fmt::iso8601, Duration};
///
/// assert_eq!(iso8601::parse("-PT5M")?, Duration::new().minutes(5.0).negate());
/// assert!(iso8601::parse("T0S").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[inline]
pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Duration, Error> {
    DEFAULT_PARSER.parse_duration(input)
}

/// Print a duration in ISO 8601 format.
///
/// This is a convenience for [`DurationPrinter::duration_to_string`] with
/// the default configuration. It is equivalent to `dur.to_string()`.
#[inline]
pub fn format(dur: &Duration) -> String {
    DEFAULT_PRINTER.duration_to_string(dur)
}

/// Print a signed number of nanoseconds as an ISO 8601 duration.
///
/// The nanoseconds are first broken down into units with
/// [`Duration::from_ticks`].
///
/// # Example
///
/// ```
/// use isoduration::fmt::iso8601;
///
/// const HOUR: i64 = 60 * 60 * 1_000_000_000;
///
/// assert_eq!(iso8601::format_ticks(0), "PT0S");
/// assert_eq!(iso8601::format_ticks(26 * HOUR), "P1DT2H");
/// assert_eq!(iso8601::format_ticks(-10_000_000_000), "-PT10S");
/// ```
#[inline]
pub fn format_ticks(ticks: i64) -> String {
    DEFAULT_PRINTER.ticks_to_string(ticks)
}
