//! Contains the configuration of a decode call.

use crate::header::PacketType;

/// Where a newly decoded value is put into the sequence of its property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InsertOrder {
    /// New values are inserted at the front, the most recently decoded value comes first.
    #[default]
    Prepend,

    /// New values are appended, values keep the order they were encountered in.
    Append,
}

/// Options for decoding a properties field.
///
/// The default values decode every known property regardless of the packet it is embedded in
/// and accept strings up to the maximum length allowed by the 2-byte length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodeOptions {
    /// Longest accepted UTF-8 encoded string in bytes. Applies to each string of a string pair.
    pub max_string_len: u16,

    /// Order of repeated values within a property's sequence.
    pub order: InsertOrder,

    /// If set, properties that are not allowed in this packet are rejected.
    pub packet: Option<PacketType>,

    /// If set, properties that are not allowed to be included more than once are rejected when
    /// they are repeated.
    pub reject_duplicates: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeOptions {
    pub const fn new() -> Self {
        Self {
            max_string_len: u16::MAX,
            order: InsertOrder::Prepend,
            packet: None,
            reject_duplicates: false,
        }
    }

    pub const fn max_string_len(mut self, max_string_len: u16) -> Self {
        self.max_string_len = max_string_len;
        self
    }

    pub const fn order(mut self, order: InsertOrder) -> Self {
        self.order = order;
        self
    }

    /// Checks properties against the packet they are embedded in.
    pub const fn packet(mut self, packet: PacketType) -> Self {
        self.packet = Some(packet);
        self
    }

    pub const fn reject_duplicates(mut self, reject_duplicates: bool) -> Self {
        self.reject_duplicates = reject_duplicates;
        self
    }

    /// Options enforcing the packet applicability and at-most-once rules of MQTT v5.0 for
    /// `packet`.
    pub const fn strict(packet: PacketType) -> Self {
        Self::new().packet(packet).reject_duplicates(true)
    }
}
