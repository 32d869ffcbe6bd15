use isoduration::{
    fmt::iso8601::{self, DurationPrinter},
    unit::{NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND},
    Duration, ErrorKind, Unit,
};

const HOUR: i64 = NANOS_PER_HOUR;
const MINUTE: i64 = NANOS_PER_MINUTE;
const SECOND: i64 = NANOS_PER_SECOND;

#[test]
fn parse() {
    let d: Duration = "P4Y".parse().unwrap();
    assert_eq!(d, Duration::new().years(4.0));

    let d: Duration = "PT2.5S".parse().unwrap();
    assert_eq!(d, Duration::new().seconds(2.5));

    let d: Duration = "P3Y6M4DT12H30M5.5S".parse().unwrap();
    assert_eq!(d.get_years(), 3.0);
    assert_eq!(d.get_months(), 6.0);
    assert_eq!(d.get_weeks(), 0.0);
    assert_eq!(d.get_days(), 4.0);
    assert_eq!(d.get_hours(), 12.0);
    assert_eq!(d.get_minutes(), 30.0);
    assert_eq!(d.get_seconds(), 5.5);
    assert!(!d.is_negative());

    let d: Duration = "-PT5M".parse().unwrap();
    assert_eq!(d.get_unit(Unit::Minute), 5.0);
    assert!(d.is_negative());
}

#[test]
fn parse_rejects() {
    for input in ["T0S", "P-T0S", "PT0SP0D"] {
        let err = input.parse::<Duration>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedInput, "{input}");
        assert!(err.is_unexpected_input());
    }
    for input in ["PT", "P"] {
        assert!(iso8601::parse(input).unwrap().is_zero());
    }
    let err = iso8601::parse("PT1..5S").unwrap_err();
    assert!(err.is_invalid_number());
}

#[test]
fn format_ticks() {
    assert_eq!(iso8601::format_ticks(0), "PT0S");
    assert_eq!(iso8601::format_ticks(94 * MINUTE), "PT1H34M");
    assert_eq!(iso8601::format_ticks(72 * HOUR), "P3D");
    assert_eq!(iso8601::format_ticks(26 * HOUR), "P1DT2H");
    assert_eq!(
        iso8601::format_ticks(465_461_651 * SECOND),
        "P14Y9M3DT12H54M11S",
    );
    assert_eq!(iso8601::format_ticks(-99544 * HOUR), "-P11Y4M1W4D");
    assert_eq!(iso8601::format_ticks(-10 * SECOND), "-PT10S");
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
}

#[test]
fn to_ticks() {
    let d = Duration::new().seconds(33.3);
    assert_eq!(d.to_ticks(), 33 * SECOND + 300_000_000);

    let d = Duration::new().hours(2.0).minutes(33.0).seconds(17.0);
    assert_eq!(d.to_ticks(), 2 * HOUR + 33 * MINUTE + 17 * SECOND);

    assert_eq!(Duration::new().days(2.0).to_ticks(), 48 * HOUR);
    assert_eq!(Duration::new().weeks(1.0).to_ticks(), 7 * 24 * HOUR);
    assert_eq!(
        Duration::new().weeks(12.5).to_ticks(),
        (12 * 7 * 24 + 84) * HOUR,
    );
    assert_eq!(Duration::new().hours(2.0).negate().to_ticks(), -2 * HOUR);
}

#[test]
fn display() {
    let d: Duration = "P3Y6M4DT12H30M5.5S".parse().unwrap();
    assert_eq!(d.to_string(), "P3Y6M4DT12H30M5.5S");
    assert_eq!(d.seconds(33.3333).to_string(), "P3Y6M4DT12H30M33.3333S");

    let d: Duration = "PT0.0000000000001S".parse().unwrap();
    assert_eq!(d.to_string(), "PT0.0000000000001S");

    let d: Duration = "-PT2H5M".parse().unwrap();
    assert_eq!(d.to_string(), "-PT2H5M");
    assert_eq!(iso8601::format(&d), "-PT2H5M");

    assert_eq!(Duration::new().to_string(), "PT0S");
}

#[test]
fn printer_options() {
    let d: Duration = "PT36H".parse().unwrap();
    let printer = DurationPrinter::new().lowercase(true).verbatim(false);
    assert_eq!(printer.duration_to_string(&d), "PT36h");
    assert_eq!(printer.ticks_to_string(-26 * HOUR), "-P1dT2h");
}

#[test]
fn std_duration() {
    let d = Duration::from(std::time::Duration::from_secs(94 * 60));
    assert_eq!(d.to_string(), "PT1H34M");

    let d: Duration = "P1DT0.5S".parse().unwrap();
    let sd = std::time::Duration::try_from(d).unwrap();
    assert_eq!(sd, std::time::Duration::from_millis(86_400_500));

    let d: Duration = "-PT1S".parse().unwrap();
    let err = std::time::Duration::try_from(d).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Negative);
}
