use alloc::string::String;

/// The decoded value of one property occurrence.
///
/// Binary data properties are consumed while decoding but never produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecodedValue {
    /// Byte, Two Byte Integer, Four Byte Integer and Variable Byte Integer properties
    Integer(u32),

    /// UTF-8 Encoded String properties
    String(String),

    /// UTF-8 String Pair properties (name, value)
    StringPair(String, String),
}

impl DecodedValue {
    pub fn as_integer(&self) -> Option<u32> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(&str, &str)> {
        match self {
            Self::StringPair(name, value) => Some((name, value)),
            _ => None,
        }
    }
}

impl From<u32> for DecodedValue {
    fn from(value: u32) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for DecodedValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<(&str, &str)> for DecodedValue {
    fn from((name, value): (&str, &str)) -> Self {
        Self::StringPair(name.into(), value.into())
    }
}
