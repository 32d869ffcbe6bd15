/*!
Parsing and printing of durations.

The only format currently supported is ISO 8601, in the [`iso8601`] module.
The [`Duration`](crate::Duration) type's `FromStr` and `Display` impls use
it, so most callers never need to reach into this module directly.

When the `serde` feature is enabled, the [`serde`](self::serde) module
provides helpers for (de)serializing other duration types as ISO 8601
strings.
*/

pub mod iso8601;
#[cfg(feature = "serde")]
pub mod serde;

/// The result of parsing a value out of a slice of bytes.
///
/// This contains the parsed value and the offset at which the value ended in
/// the input given. This makes it possible to parse, e.g., a sign, and then
/// continue parsing the remaining input.
#[derive(Clone, Debug)]
pub(crate) struct Parsed<'i, V> {
    /// The parsed value.
    pub(crate) value: V,
    /// The remaining input that was not parsed.
    pub(crate) input: &'i [u8],
}
