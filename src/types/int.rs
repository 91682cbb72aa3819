use crate::io::err::DecodeError;

/// MQTT's variable byte integer encoding. Used for the length of the properties field and the
/// value of the Subscription Identifier property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VarByteInt(u32);

impl VarByteInt {
    /// The maximum encodable value using the variable byte integer encoding according to <https://docs.oasis-open.org/mqtt/mqtt/v5.0/os/mqtt-v5.0-os.html#_Toc3901011>.
    pub const MAX_ENCODABLE: u32 = 268_435_455;

    /// The maximum number of bytes an encoding may occupy.
    pub const MAX_LEN: usize = 4;

    /// Returns the inner value.
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns `Self::value() as usize`
    pub const fn size(&self) -> usize {
        self.0 as usize
    }

    /// Decodes a variable byte integer from the start of `slice`, enforcing MQTT's limit of
    /// [`VarByteInt::MAX_LEN`] bytes.
    ///
    /// Returns the value and the number of bytes its encoding occupied. Bytes following the
    /// encoding are ignored.
    pub fn from_slice(slice: &[u8]) -> Result<(Self, usize), DecodeError> {
        let (value, len) = read_var_int_unbounded(slice)?;

        if len > Self::MAX_LEN {
            return Err(DecodeError::MalformedVarint);
        }

        // 4 groups of 7 bits always fit
        debug_assert!(value <= Self::MAX_ENCODABLE as u64);

        Ok((Self(value as u32), len))
    }
}

impl From<VarByteInt> for u32 {
    fn from(value: VarByteInt) -> Self {
        value.0
    }
}

/// Longest encoding the raw reader follows. 9 groups of 7 bits still fit into a `u64`.
const UNBOUNDED_MAX_LEN: usize = 9;

/// Accumulates 7 bits per byte, least significant group first, until a byte without the
/// continuation bit is found.
///
/// Fails with [`DecodeError::MalformedVarint`] if `slice` ends before the encoding does. This
/// reader does not enforce the 4 byte limit of MQTT, see [`VarByteInt::from_slice`].
pub fn read_var_int_unbounded(slice: &[u8]) -> Result<(u64, usize), DecodeError> {
    let mut value: u64 = 0;

    for (i, byte) in slice.iter().enumerate() {
        if i == UNBOUNDED_MAX_LEN {
            return Err(DecodeError::MalformedVarint);
        }

        value |= ((byte & 0x7F) as u64) << (7 * i);

        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }

    Err(DecodeError::MalformedVarint)
}
