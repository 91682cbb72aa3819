//! Builders for properties fields on the wire. Mirrors the crate's internal `test::wire`.

/// Encodes `value` as a variable byte integer.
pub fn var_int(mut value: u32) -> Vec<u8> {
    let mut encoded = Vec::new();

    loop {
        let mut byte = (value % 128) as u8;
        value /= 128;
        if value > 0 {
            byte |= 0x80;
        }
        encoded.push(byte);

        if value == 0 {
            return encoded;
        }
    }
}

/// Prefixes `bytes` with its length as a 2 byte big endian integer.
pub fn length_prefixed(bytes: &[u8]) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(2 + bytes.len());
    encoded.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
    encoded.extend_from_slice(bytes);
    encoded
}

/// Assembles the body of a properties field one property at a time.
#[derive(Debug, Default)]
pub struct PropertiesBuilder {
    body: Vec<u8>,
}

impl PropertiesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn byte(self, identifier: u8, value: u8) -> Self {
        self.raw(&[identifier, value])
    }

    pub fn u16(self, identifier: u8, value: u16) -> Self {
        self.raw(&[identifier]).raw(&value.to_be_bytes())
    }

    pub fn u32(self, identifier: u8, value: u32) -> Self {
        self.raw(&[identifier]).raw(&value.to_be_bytes())
    }

    pub fn var_int(self, identifier: u8, value: u32) -> Self {
        self.raw(&[identifier]).raw(&var_int(value))
    }

    pub fn string(self, identifier: u8, value: &str) -> Self {
        self.raw_string(identifier, value.as_bytes())
    }

    pub fn raw_string(self, identifier: u8, value: &[u8]) -> Self {
        self.raw(&[identifier]).raw(&length_prefixed(value))
    }

    pub fn pair(self, identifier: u8, name: &str, value: &str) -> Self {
        self.raw_pair(identifier, name.as_bytes(), value.as_bytes())
    }

    pub fn raw_pair(self, identifier: u8, name: &[u8], value: &[u8]) -> Self {
        self.raw(&[identifier])
            .raw(&length_prefixed(name))
            .raw(&length_prefixed(value))
    }

    pub fn binary(self, identifier: u8, value: &[u8]) -> Self {
        self.raw_string(identifier, value)
    }

    /// The properties field: the body prefixed by its variable byte integer length.
    pub fn build(self) -> Vec<u8> {
        let mut field = var_int(self.body.len() as u32);
        field.extend_from_slice(&self.body);
        field
    }
}
