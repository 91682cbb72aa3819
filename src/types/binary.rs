use core::fmt;

/// Binary data borrowed from the decoded buffer. Its length is always less than or equal to
/// `MqttBinary::MAX_LENGTH`.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct MqttBinary<'b>(&'b [u8]);

impl<'b> fmt::Debug for MqttBinary<'b> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MqttBinary").field(&self.0).finish()
    }
}

#[cfg(feature = "defmt")]
impl<'a> defmt::Format for MqttBinary<'a> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "MqttBinary({:?})", self.0);
    }
}

impl<'b> MqttBinary<'b> {
    /// The maximum length of binary data. This value is limited by the 2-byte length field.
    pub const MAX_LENGTH: usize = u16::MAX as usize;

    /// Wraps a slice read from behind a 2-byte length prefix.
    ///
    /// # Panics
    ///
    /// In debug builds, this function will panic if the slice's length is greater than `MqttBinary::MAX_LENGTH`.
    pub(crate) const fn from_slice_unchecked(slice: &'b [u8]) -> Self {
        debug_assert!(
            slice.len() <= Self::MAX_LENGTH,
            "the slice's length exceeds MAX_LENGTH"
        );

        Self(slice)
    }

    /// Returns the length of the underlying data.
    #[inline]
    pub const fn len(&self) -> u16 {
        self.0.len() as u16
    }

    /// Returns the number of bytes this value occupied on the wire, including the length prefix.
    #[inline]
    pub const fn encoded_len(&self) -> usize {
        2 + self.0.len()
    }
}
