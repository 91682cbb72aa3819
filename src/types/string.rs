use core::{fmt, str::from_utf8};

/// The reason a byte run was rejected as an MQTT UTF-8 encoded string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Utf8Violation {
    /// The input is longer than [`MAX_VALIDATED_LENGTH`].
    TooLong,

    /// U+0000 is not allowed anywhere in an MQTT string.
    NullCharacter,

    /// 0xC0, 0xC1, a byte greater than 0xF4 or a continuation byte in lead position.
    InvalidLeadByte,

    /// A multi-byte sequence is cut off by the end of the input.
    Truncated,

    /// A byte inside a multi-byte sequence does not match `10xxxxxx`.
    InvalidContinuation,

    /// Code point in 0xD800..=0xDFFF.
    Surrogate,

    /// The code point could have been encoded in fewer bytes.
    Overlong,

    /// A 4-byte sequence outside of 0x10000..=0x10FFFF.
    OutOfRange,

    /// Code point in 0xFDD0..=0xFDEF or ending in 0xFFFE / 0xFFFF.
    NonCharacter,

    /// Code point in 0x0000..=0x001F or 0x007F..=0x009F.
    ControlCharacter,
}

impl fmt::Display for Utf8Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::TooLong => "string exceeds the maximum length",
            Self::NullCharacter => "string contains a null character",
            Self::InvalidLeadByte => "invalid UTF-8 lead byte",
            Self::Truncated => "truncated UTF-8 sequence",
            Self::InvalidContinuation => "invalid UTF-8 continuation byte",
            Self::Surrogate => "UTF-16 surrogate code point",
            Self::Overlong => "overlong UTF-8 encoding",
            Self::OutOfRange => "code point out of the unicode range",
            Self::NonCharacter => "unicode non-character",
            Self::ControlCharacter => "control character",
        };
        f.write_str(reason)
    }
}

impl core::error::Error for Utf8Violation {}

/// Longest byte run the validator accepts.
pub const MAX_VALIDATED_LENGTH: usize = 65_536;

/// Validates `bytes` against the MQTT UTF-8 encoded string rules and returns them as `&str`.
///
/// This is stricter than [`core::str::from_utf8`]: besides well-formedness it rejects null
/// characters, unicode non-characters and control characters.
pub fn validate(bytes: &[u8]) -> Result<&str, Utf8Violation> {
    if bytes.len() > MAX_VALIDATED_LENGTH {
        return Err(Utf8Violation::TooLong);
    }

    let len = bytes.len();
    let mut i = 0;
    while i < len {
        let lead = bytes[i];

        let (codelen, mut codepoint) = match lead {
            0x00 => return Err(Utf8Violation::NullCharacter),
            0x01..=0x7F => (1, lead as u32),
            0xC0 | 0xC1 => return Err(Utf8Violation::InvalidLeadByte),
            b if b & 0xE0 == 0xC0 => (2, (b & 0x1F) as u32),
            b if b & 0xF0 == 0xE0 => (3, (b & 0x0F) as u32),
            b if b & 0xF8 == 0xF0 && b <= 0xF4 => (4, (b & 0x07) as u32),
            _ => return Err(Utf8Violation::InvalidLeadByte),
        };

        if i + codelen > len {
            return Err(Utf8Violation::Truncated);
        }

        for b in &bytes[i + 1..i + codelen] {
            if b & 0xC0 != 0x80 {
                return Err(Utf8Violation::InvalidContinuation);
            }
            codepoint = (codepoint << 6) | (b & 0x3F) as u32;
        }

        check_codepoint(codelen, codepoint)?;

        i += codelen;
    }

    // The checks above are a superset of the ones performed by `from_utf8`.
    match from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(_) => Err(Utf8Violation::InvalidContinuation),
    }
}

fn check_codepoint(codelen: usize, codepoint: u32) -> Result<(), Utf8Violation> {
    if (0xD800..=0xDFFF).contains(&codepoint) {
        return Err(Utf8Violation::Surrogate);
    }

    match codelen {
        3 if codepoint < 0x0800 => return Err(Utf8Violation::Overlong),
        4 if codepoint < 0x1_0000 => return Err(Utf8Violation::Overlong),
        4 if codepoint > 0x10_FFFF => return Err(Utf8Violation::OutOfRange),
        _ => {}
    }

    if (0xFDD0..=0xFDEF).contains(&codepoint) {
        return Err(Utf8Violation::NonCharacter);
    }
    if codepoint & 0xFFFF == 0xFFFE || codepoint & 0xFFFF == 0xFFFF {
        return Err(Utf8Violation::NonCharacter);
    }

    if codepoint <= 0x001F || (0x007F..=0x009F).contains(&codepoint) {
        return Err(Utf8Violation::ControlCharacter);
    }

    Ok(())
}
