/*!
Helpers for printing raw input in error messages.

Parser input is bytes. When a byte or a slice of bytes ends up in an error
message, it should be printed in a way that doesn't mangle the message when
the input is not valid UTF-8 or contains control characters.
*/

/// Provides a `Display` impl for a single byte.
///
/// Printable ASCII is written as-is. Everything else uses a `\xNN` escape.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.0.is_ascii_graphic() || self.0 == b' ' {
            write!(f, "{}", char::from(self.0))
        } else {
            write!(f, "\\x{:02X}", self.0)
        }
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// Provides a `Debug` impl for a slice of bytes.
///
/// Valid UTF-8 is printed like a Rust string literal. Otherwise, each byte
/// is printed as with [`Byte`], with `"` and `\` escaped.
#[derive(Clone, Copy)]
pub(crate) struct Bytes<'a>(pub(crate) &'a [u8]);

impl<'a> core::fmt::Debug for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if let Ok(s) = core::str::from_utf8(self.0) {
            return core::fmt::Debug::fmt(s, f);
        }
        f.write_str("\"")?;
        for &b in self.0 {
            match b {
                b'"' => f.write_str("\\\"")?,
                b'\\' => f.write_str("\\\\")?,
                _ => core::fmt::Display::fmt(&Byte(b), f)?,
            }
        }
        f.write_str("\"")
    }
}
