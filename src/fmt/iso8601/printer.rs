use crate::{unit::Unit, Duration};

/// A printer for ISO 8601 durations.
///
/// By default, a duration that was parsed and has not changed since is
/// printed exactly as it was parsed. Every other duration is printed in
/// canonical form: units from largest to smallest, zero units omitted, and
/// `PT0S` for the zero duration.
///
/// # Example
///
/// ```
/// use isoduration::{fmt::iso8601::DurationPrinter, Duration};
///
/// let dur: Duration = "PT90M".parse()?;
///
/// let printer = DurationPrinter::new();
/// assert_eq!(printer.duration_to_string(&dur), "PT90M");
///
/// let printer = DurationPrinter::new().verbatim(false);
/// assert_eq!(printer.duration_to_string(&dur), "PT90M");
///
/// let dur = Duration::new().days(1.0).hours(2.0).seconds(0.5);
/// let printer = DurationPrinter::new().lowercase(true);
/// assert_eq!(printer.duration_to_string(&dur), "P1dT2h0.5s");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct DurationPrinter {
    lowercase: bool,
    verbatim: bool,
}

impl DurationPrinter {
    /// Create a new ISO 8601 duration printer with the default
    /// configuration.
    #[inline]
    pub const fn new() -> DurationPrinter {
        DurationPrinter { lowercase: false, verbatim: true }
    }

    /// Use lowercase for unit designators.
    ///
    /// The duration designator `P` and the time designator `T` are always
    /// uppercase. Lowercase unit designators make it a little easier to see
    /// where each number ends, e.g., `P1dT2h` instead of `P1DT2H`. Note that
    /// the parser does not accept lowercase designators.
    ///
    /// This is disabled by default.
    ///
    /// This has no effect on durations printed verbatim.
    #[inline]
    pub const fn lowercase(self, yes: bool) -> DurationPrinter {
        DurationPrinter { lowercase: yes, ..self }
    }

    /// Print a parsed duration exactly as it was parsed, so long as it has
    /// not been changed since.
    ///
    /// When disabled, every duration is printed in canonical form.
    ///
    /// This is enabled by default.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::{fmt::iso8601::DurationPrinter, Duration};
    ///
    /// let dur: Duration = "PT36H".parse()?;
    /// let printer = DurationPrinter::new().verbatim(false);
    /// assert_eq!(printer.duration_to_string(&dur), "PT36H");
    ///
    /// let dur: Duration = "P1D2Y".parse()?;
    /// assert_eq!(dur.to_string(), "P1D2Y");
    /// assert_eq!(printer.duration_to_string(&dur), "P2Y1D");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub const fn verbatim(self, yes: bool) -> DurationPrinter {
        DurationPrinter { verbatim: yes, ..self }
    }

    /// Format a duration into a string.
    pub fn duration_to_string(&self, dur: &Duration) -> String {
        DurationDisplay { printer: self, dur }.to_string()
    }

    /// Format a signed number of nanoseconds into a string.
    ///
    /// The nanoseconds are broken down into units with
    /// [`Duration::from_ticks`] and then printed in canonical form.
    ///
    /// # Example
    ///
    /// ```
    /// use isoduration::fmt::iso8601::DurationPrinter;
    ///
    /// const MINUTE: i64 = 60 * 1_000_000_000;
    ///
    /// let printer = DurationPrinter::new();
    /// assert_eq!(printer.ticks_to_string(94 * MINUTE), "PT1H34M");
    ///
    /// let printer = DurationPrinter::new().lowercase(true);
    /// assert_eq!(printer.ticks_to_string(-94 * MINUTE), "-PT1h34m");
    /// ```
    pub fn ticks_to_string(&self, ticks: i64) -> String {
        self.duration_to_string(&Duration::from_ticks(ticks))
    }

    /// Print a duration to the given writer.
    ///
    /// # Errors
    ///
    /// This only returns an error when writing to the given writer fails.
    pub fn print_duration<W: core::fmt::Write>(
        &self,
        dur: &Duration,
        mut wtr: W,
    ) -> core::fmt::Result {
        if self.verbatim {
            if let Some(original) = dur.original() {
                return wtr.write_str(original);
            }
        }
        if dur.is_zero() {
            // The zero duration is never signed, even when it was parsed
            // from something like `-PT0S`.
            wtr.write_str("PT0")?;
            return wtr.write_char(self.designator(Unit::Second));
        }
        if dur.is_negative() {
            wtr.write_char('-')?;
        }
        wtr.write_char('P')?;
        let mut wrote_time = false;
        for unit in Unit::DESCENDING {
            let value = dur.get_unit(unit);
            if value == 0.0 {
                continue;
            }
            if unit.is_time() && !wrote_time {
                wtr.write_char('T')?;
                wrote_time = true;
            }
            write!(wtr, "{value}")?;
            wtr.write_char(self.designator(unit))?;
        }
        Ok(())
    }

    /// Print a signed number of nanoseconds to the given writer.
    ///
    /// # Errors
    ///
    /// This only returns an error when writing to the given writer fails.
    pub fn print_ticks<W: core::fmt::Write>(
        &self,
        ticks: i64,
        wtr: W,
    ) -> core::fmt::Result {
        self.print_duration(&Duration::from_ticks(ticks), wtr)
    }

    fn designator(&self, unit: Unit) -> char {
        let designator = char::from(unit.designator());
        if self.lowercase {
            designator.to_ascii_lowercase()
        } else {
            designator
        }
    }
}

impl Default for DurationPrinter {
    fn default() -> DurationPrinter {
        DurationPrinter::new()
    }
}

/// Prints a duration with a specific printer via `Display`.
struct DurationDisplay<'a> {
    printer: &'a DurationPrinter,
    dur: &'a Duration,
}

impl<'a> core::fmt::Display for DurationDisplay<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.printer.print_duration(self.dur, f)
    }
}
