/*!
Helpers for (de)serializing other duration types as ISO 8601 strings.

[`Duration`](crate::Duration) implements `Serialize` and `Deserialize`
itself, so these modules are only needed for types that don't. Each module
here is meant to be used with Serde's [`with` attribute].

# Example

```
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    #[serde(with = "isoduration::fmt::serde::ticks")]
    elapsed: i64,
    #[serde(with = "isoduration::fmt::serde::std_duration")]
    timeout: std::time::Duration,
}

let json = r#"{"elapsed":"PT1H34M","timeout":"PT2.5S"}"#;
let got: Record = serde_json::from_str(json)?;
assert_eq!(got.elapsed, 94 * 60 * 1_000_000_000);
assert_eq!(got.timeout, std::time::Duration::from_millis(2_500));

assert_eq!(serde_json::to_string(&got)?, json);

# Ok::<(), Box<dyn std::error::Error>>(())
```

[`with` attribute]: https://serde.rs/field-attrs.html#with
*/

/// (De)serialize a signed number of nanoseconds as an ISO 8601 duration.
///
/// Serialization breaks the nanoseconds down into units with
/// [`Duration::from_ticks`](crate::Duration::from_ticks). Deserialization
/// accepts any ISO 8601 duration and converts it with
/// [`Duration::to_ticks`](crate::Duration::to_ticks), which saturates when
/// the duration is too big.
pub mod ticks {
    use serde::Deserialize;

    use crate::Duration;

    /// Serialize a signed number of nanoseconds as an ISO 8601 duration.
    pub fn serialize<S: serde::Serializer>(
        ticks: &i64,
        se: S,
    ) -> Result<S::Ok, S::Error> {
        se.collect_str(&Duration::from_ticks(*ticks))
    }

    /// Deserialize an ISO 8601 duration into a signed number of
    /// nanoseconds.
    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
        de: D,
    ) -> Result<i64, D::Error> {
        Duration::deserialize(de).map(|dur| dur.to_ticks())
    }
}

/// (De)serialize a [`std::time::Duration`] as an ISO 8601 duration.
///
/// Deserialization fails when the duration parsed is negative. Durations
/// longer than about 292 years saturate in both directions, since the
/// conversion goes through a signed 64-bit number of nanoseconds.
pub mod std_duration {
    use serde::Deserialize;

    use crate::Duration;

    /// Serialize a `std::time::Duration` as an ISO 8601 duration.
    pub fn serialize<S: serde::Serializer>(
        dur: &std::time::Duration,
        se: S,
    ) -> Result<S::Ok, S::Error> {
        se.collect_str(&Duration::from(*dur))
    }

    /// Deserialize an ISO 8601 duration into a `std::time::Duration`.
    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
        de: D,
    ) -> Result<std::time::Duration, D::Error> {
        let dur = Duration::deserialize(de)?;
        std::time::Duration::try_from(dur).map_err(serde::de::Error::custom)
    }
}
