use core::{
    error::Error,
    fmt::{self, Display},
};

use crate::{
    header::PacketType,
    types::Utf8Violation,
    v5::property::{PropertyIdentifier, UnknownIdentifier},
};

/// Errors that abort decoding of a properties field. No partial result is ever returned
/// alongside one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// A fixed-width or length-prefixed field claims more bytes than remain.
    TruncatedInput,

    /// A variable byte integer runs to or past the end of the buffer or is longer than 4 bytes.
    MalformedVarint,

    /// A string is not a valid MQTT UTF-8 encoded string.
    InvalidUtf8(Utf8Violation),

    /// The identifier byte is not one of the MQTT v5.0 property identifiers.
    UnknownPropertyIdentifier(u8),

    /// The declared properties length exceeds the buffer or does not divide into whole
    /// properties.
    InconsistentLength,

    /// Memory for a decoded string or collection could not be reserved.
    AllocationFailure,

    /// A string is longer than the configured maximum.
    StringTooLong { len: u16, max: u16 },

    /// The property may not appear in the packet the properties field belongs to.
    PropertyNotAllowed(PropertyIdentifier, PacketType),

    /// A property that may appear at most once was seen again.
    DuplicateProperty(PropertyIdentifier),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedInput => write!(f, "field exceeds the remaining properties length"),
            Self::MalformedVarint => write!(f, "malformed variable byte integer"),
            Self::InvalidUtf8(v) => write!(f, "invalid UTF-8 encoded string: {v}"),
            Self::UnknownPropertyIdentifier(id) => write!(f, "unknown property identifier {id:#04x}"),
            Self::InconsistentLength => write!(f, "properties length does not match its content"),
            Self::AllocationFailure => write!(f, "memory allocation failed"),
            Self::StringTooLong { len, max } => {
                write!(f, "string of {len} bytes exceeds the maximum of {max}")
            }
            Self::PropertyNotAllowed(p, t) => write!(f, "{} is not allowed in {t:?}", p.name()),
            Self::DuplicateProperty(p) => write!(f, "{} is included more than once", p.name()),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidUtf8(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Utf8Violation> for DecodeError {
    fn from(v: Utf8Violation) -> Self {
        Self::InvalidUtf8(v)
    }
}

impl From<UnknownIdentifier> for DecodeError {
    fn from(e: UnknownIdentifier) -> Self {
        Self::UnknownPropertyIdentifier(e.0)
    }
}

impl From<alloc::collections::TryReserveError> for DecodeError {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        Self::AllocationFailure
    }
}
