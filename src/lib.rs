/*!
Parsing, printing and conversion of ISO 8601 durations.

This crate provides a single value type, [`Duration`], for durations written
in the ISO 8601 duration format, e.g., `P3Y6M4DT12H30M5.5S`. A duration can
be parsed from text, printed back to text, and converted to and from a signed
64-bit number of nanoseconds (called "ticks" throughout this crate).

# Example

```
use isoduration::Duration;

let dur: Duration = "P3Y6M4DT12H30M5.5S".parse()?;
assert_eq!(dur.get_years(), 3.0);
assert_eq!(dur.get_seconds(), 5.5);
assert_eq!(dur.to_string(), "P3Y6M4DT12H30M5.5S");

// `M` means months before `T` and minutes after it.
let dur: Duration = "P1MT1M".parse()?;
assert_eq!(dur, Duration::new().months(1.0).minutes(1.0));

// Conversion to and from nanoseconds.
let dur: Duration = "PT1H34M".parse()?;
let ticks = dur.to_ticks();
assert_eq!(ticks, 94 * 60 * 1_000_000_000);
assert_eq!(Duration::from_ticks(-ticks).to_string(), "-PT1H34M");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Months and years

ISO 8601 durations may contain years and months, whose length depends on
where they fall in a calendar. This crate does no calendar arithmetic.
Instead, a year is always 365 days and a month is always one twelfth of a
year, i.e., 730 hours. See the [`unit`] module for the full table. These
lengths are only used when converting to or from ticks.

# Errors

Parsing returns an [`Error`] on failure. Its message says what went wrong
and where, and [`Error::kind`] classifies it:

```
use isoduration::{Duration, ErrorKind};

let err = "P1.2.3Y".parse::<Duration>().unwrap_err();
assert_eq!(err.kind(), ErrorKind::InvalidNumber);
assert_eq!(
    err.to_string(),
    "failed to parse \"P1.2.3Y\" as an ISO 8601 duration: \
     failed to parse \"1.2.3\" as number of years \
     (expected digits with at most one `.`)",
);

let err = "PT0SP0D".parse::<Duration>().unwrap_err();
assert_eq!(err.kind(), ErrorKind::UnexpectedInput);
```

# Crate features

* **logging** -
  When enabled, the `log` crate is used to emit messages when a duration is
  parsed (at `TRACE` level) and when a conversion to ticks saturates (at
  `WARN` level).
* **serde** -
  When enabled, [`Duration`] implements `Serialize` and `Deserialize` as an
  ISO 8601 string, and the [`fmt::serde`] module provides helpers for doing
  the same with `i64` ticks and `std::time::Duration`.
*/

#![deny(missing_docs)]

// Must come first so that its macros are available to every other module.
#[macro_use]
mod logging;

pub use crate::{
    duration::Duration,
    error::{Error, ErrorKind},
    unit::Unit,
};

mod duration;
mod error;
pub mod fmt;
pub mod unit;
mod util;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_size() {
        // The seven units, the sign and the retained text.
        assert!(core::mem::size_of::<Duration>() <= 80);
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Duration>();
        assert_send_sync::<Error>();
        assert_send_sync::<fmt::iso8601::DurationParser>();
        assert_send_sync::<fmt::iso8601::DurationPrinter>();
    }
}
