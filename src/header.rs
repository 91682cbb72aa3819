/// The control packet a properties field is embedded in.
///
/// Used to check which properties may legally appear in a given packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketType {
    Connect = 1,
    Connack = 2,
    Publish = 3,
    Puback = 4,
    Pubrec = 5,
    Pubrel = 6,
    Pubcomp = 7,
    Subscribe = 8,
    Suback = 9,
    Unsubscribe = 10,
    Unsuback = 11,
    Pingreq = 12,
    Pingresp = 13,
    Disconnect = 14,
    Auth = 15,

    /// The Will Properties inside the payload of a CONNECT packet. Has no fixed header value
    /// of its own.
    Will = 16,
}

impl PacketType {
    /// Whether a packet of this type carries a properties field at all.
    pub const fn has_properties(&self) -> bool {
        !matches!(self, Self::Pingreq | Self::Pingresp)
    }
}

#[cfg(test)]
mod unit {
    use crate::header::PacketType;

    #[test_log::test]
    fn pings_have_no_properties() {
        assert!(!PacketType::Pingreq.has_properties());
        assert!(!PacketType::Pingresp.has_properties());
        assert!(PacketType::Connect.has_properties());
        assert!(PacketType::Will.has_properties());
    }
}
