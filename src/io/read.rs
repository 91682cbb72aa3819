use crate::{
    io::err::DecodeError,
    types::{MqttBinary, VarByteInt, string},
};

/// Reads wire types from a borrowed byte slice and keeps track of the current position.
///
/// Every read is checked against the bytes left in the slice and either consumes exactly the
/// bytes of the value or fails without moving the cursor. `remaining()` therefore always
/// equals the number of unread bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeCursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> DecodeCursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn rest(&self) -> &'a [u8] {
        &self.buffer[self.position..]
    }

    /// Reads the next `len` bytes as a slice.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let rest = self.rest();
        if rest.len() < len {
            return Err(DecodeError::TruncatedInput);
        }

        self.position += len;
        Ok(&rest[..len])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut array = [0; N];
        array.copy_from_slice(self.read_slice(N)?);
        Ok(array)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.read_array().map(u8::from_be_bytes)
    }

    /// Reading u16 as `Big endian`
    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        self.read_array().map(u16::from_be_bytes)
    }

    /// Reading u32 as `Big endian`
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.read_array().map(u32::from_be_bytes)
    }

    /// Variable byte integers are 1 to 4 bytes long. The cursor is moved by the length of the
    /// encoding.
    pub fn read_var_int(&mut self) -> Result<VarByteInt, DecodeError> {
        let (value, len) = VarByteInt::from_slice(self.rest())?;
        self.position += len;
        Ok(value)
    }

    /// Reads a 2-byte length prefix and the bytes it announces. The cursor is not moved on
    /// failure.
    fn read_length_prefixed(&mut self) -> Result<&'a [u8], DecodeError> {
        let rest = self.rest();
        if rest.len() < 2 {
            return Err(DecodeError::TruncatedInput);
        }

        let len = u16::from_be_bytes([rest[0], rest[1]]) as usize;
        if rest.len() < 2 + len {
            return Err(DecodeError::TruncatedInput);
        }

        trace!("reading slice of {} bytes", len);

        self.position += 2 + len;
        Ok(&rest[2..2 + len])
    }

    /// Reads a UTF-8 encoded string of at most `max_len` bytes. The string is validated
    /// according to the rules of [`string::validate`].
    pub fn read_str(&mut self, max_len: u16) -> Result<&'a str, DecodeError> {
        let mut lookahead = *self;
        let bytes = lookahead.read_length_prefixed()?;

        if bytes.len() > max_len as usize {
            return Err(DecodeError::StringTooLong {
                len: bytes.len() as u16,
                max: max_len,
            });
        }

        let s = string::validate(bytes)?;
        *self = lookahead;
        Ok(s)
    }

    /// Reads binary data. Its content is not inspected.
    pub fn read_binary(&mut self) -> Result<MqttBinary<'a>, DecodeError> {
        self.read_length_prefixed()
            .map(MqttBinary::from_slice_unchecked)
    }
}
