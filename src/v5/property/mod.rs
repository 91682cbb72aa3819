//! MQTT v5.0 properties: their identifiers, decoded values and the decoder itself.

mod decode;
mod table;
mod types;
mod values;

pub use decode::{decode_properties, decode_properties_len, decode_properties_with};
pub use table::PropertyTable;
pub use types::{PropertyIdentifier, PropertyKind, UnknownIdentifier};
pub use values::DecodedValue;
