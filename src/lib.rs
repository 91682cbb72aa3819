//! Decoder for the properties field of MQTT v5.0 control packets.
//!
//! A properties field is a variable byte integer length followed by a sequence of properties,
//! each a one byte identifier and a value whose encoding the identifier determines. Decoding
//! produces a [`PropertyTable`] that maps every property present to the sequence of its values.
//!
//! ```rust
//! use mqtt5_props::{DecodeOptions, InsertOrder, PacketType, decode_properties_with};
//!
//! // User Property ("a", "1"), User Property ("b", "2")
//! let field = [
//!     0x0E, 0x26, 0x00, 0x01, b'a', 0x00, 0x01, b'1', 0x26, 0x00, 0x01, b'b', 0x00, 0x01, b'2',
//! ];
//!
//! let options = DecodeOptions::strict(PacketType::Publish).order(InsertOrder::Append);
//! let table = decode_properties_with(&field, &options)?;
//!
//! assert!(table.user_properties().eq([("a", "1"), ("b", "2")]));
//! # Ok::<(), mqtt5_props::DecodeError>(())
//! ```
//!
//! # Feature flags
//!
//! - `log`: Log through the `log` crate
//! - `defmt`: Log through `defmt` and implement `defmt::Format` for public types
//! - `log-level-*`: Maximum level of the crate's own log statements
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod config;
pub mod header;
pub mod io;
pub mod types;
pub mod v5;


pub use config::{DecodeOptions, InsertOrder};
pub use header::PacketType;
pub use io::{err::DecodeError, read::DecodeCursor};
pub use types::{MqttBinary, Utf8Violation, VarByteInt};
pub use v5::property::{
    DecodedValue, PropertyIdentifier, PropertyKind, PropertyTable, decode_properties,
    decode_properties_len, decode_properties_with,
};
