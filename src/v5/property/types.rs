use core::fmt;

use crate::header::PacketType;

/// Returned if a byte is not one of the MQTT v5.0 property identifiers. Contains the byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownIdentifier(pub u8);

impl fmt::Display for UnknownIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown property identifier {:#04x}", self.0)
    }
}

impl core::error::Error for UnknownIdentifier {}

/// The wire representation of a property's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PropertyKind {
    Byte,
    TwoByteInt,
    FourByteInt,
    VariableByteInt,
    Utf8String,
    Utf8StringPair,
    BinaryData,
}

/// The closed set of property identifiers defined by MQTT v5.0.
///
/// The documentation of each variant lists the packets the property may appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PropertyIdentifier {
    /// PUBLISH, Will Properties
    PayloadFormatIndicator,

    /// PUBLISH, Will Properties
    MessageExpiryInterval,

    /// PUBLISH, Will Properties
    ContentType,

    /// PUBLISH, Will Properties
    ResponseTopic,

    /// PUBLISH, Will Properties
    CorrelationData,

    /// PUBLISH, SUBSCRIBE
    SubscriptionIdentifier,

    /// CONNECT, CONNACK, DISCONNECT
    SessionExpiryInterval,

    /// CONNACK
    AssignedClientIdentifier,

    /// CONNACK
    ServerKeepAlive,

    /// CONNECT, CONNACK, AUTH
    AuthenticationMethod,

    /// CONNECT, CONNACK, AUTH
    AuthenticationData,

    /// CONNECT
    RequestProblemInformation,

    /// Will Properties
    WillDelayInterval,

    /// CONNECT
    RequestResponseInformation,

    /// CONNACK
    ResponseInformation,

    /// CONNACK, DISCONNECT
    ServerReference,

    /// CONNACK, PUBACK, PUBREC, PUBREL, PUBCOMP, SUBACK, UNSUBACK, DISCONNECT, AUTH
    ReasonString,

    /// CONNECT, CONNACK
    ReceiveMaximum,

    /// CONNECT, CONNACK
    TopicAliasMaximum,

    /// PUBLISH
    TopicAlias,

    /// CONNACK
    MaximumQoS,

    /// CONNACK
    RetainAvailable,

    /// CONNECT, CONNACK, PUBLISH, Will Properties, PUBACK, PUBREC, PUBREL, PUBCOMP, SUBSCRIBE, SUBACK, UNSUBSCRIBE, UNSUBACK, DISCONNECT, AUTH
    UserProperty,

    /// CONNECT, CONNACK
    MaximumPacketSize,

    /// CONNACK
    WildcardSubscriptionAvailable,

    /// CONNACK
    SubscriptionIdentifierAvailable,

    /// CONNACK
    SharedSubscriptionAvailable,
}

impl PropertyIdentifier {
    /// All identifiers in ascending order of their identifier byte.
    pub const ALL: [Self; 27] = [
        Self::PayloadFormatIndicator,
        Self::MessageExpiryInterval,
        Self::ContentType,
        Self::ResponseTopic,
        Self::CorrelationData,
        Self::SubscriptionIdentifier,
        Self::SessionExpiryInterval,
        Self::AssignedClientIdentifier,
        Self::ServerKeepAlive,
        Self::AuthenticationMethod,
        Self::AuthenticationData,
        Self::RequestProblemInformation,
        Self::WillDelayInterval,
        Self::RequestResponseInformation,
        Self::ResponseInformation,
        Self::ServerReference,
        Self::ReasonString,
        Self::ReceiveMaximum,
        Self::TopicAliasMaximum,
        Self::TopicAlias,
        Self::MaximumQoS,
        Self::RetainAvailable,
        Self::UserProperty,
        Self::MaximumPacketSize,
        Self::WildcardSubscriptionAvailable,
        Self::SubscriptionIdentifierAvailable,
        Self::SharedSubscriptionAvailable,
    ];

    pub const fn from_identifier(identifier: u8) -> Result<Self, UnknownIdentifier> {
        Ok(match identifier {
            0x01 => Self::PayloadFormatIndicator,
            0x02 => Self::MessageExpiryInterval,
            0x03 => Self::ContentType,
            0x08 => Self::ResponseTopic,
            0x09 => Self::CorrelationData,
            0x0B => Self::SubscriptionIdentifier,
            0x11 => Self::SessionExpiryInterval,
            0x12 => Self::AssignedClientIdentifier,
            0x13 => Self::ServerKeepAlive,
            0x15 => Self::AuthenticationMethod,
            0x16 => Self::AuthenticationData,
            0x17 => Self::RequestProblemInformation,
            0x18 => Self::WillDelayInterval,
            0x19 => Self::RequestResponseInformation,
            0x1A => Self::ResponseInformation,
            0x1C => Self::ServerReference,
            0x1F => Self::ReasonString,
            0x21 => Self::ReceiveMaximum,
            0x22 => Self::TopicAliasMaximum,
            0x23 => Self::TopicAlias,
            0x24 => Self::MaximumQoS,
            0x25 => Self::RetainAvailable,
            0x26 => Self::UserProperty,
            0x27 => Self::MaximumPacketSize,
            0x28 => Self::WildcardSubscriptionAvailable,
            0x29 => Self::SubscriptionIdentifierAvailable,
            0x2A => Self::SharedSubscriptionAvailable,
            _ => return Err(UnknownIdentifier(identifier)),
        })
    }

    pub const fn identifier(&self) -> u8 {
        match self {
            Self::PayloadFormatIndicator => 0x01,
            Self::MessageExpiryInterval => 0x02,
            Self::ContentType => 0x03,
            Self::ResponseTopic => 0x08,
            Self::CorrelationData => 0x09,
            Self::SubscriptionIdentifier => 0x0B,
            Self::SessionExpiryInterval => 0x11,
            Self::AssignedClientIdentifier => 0x12,
            Self::ServerKeepAlive => 0x13,
            Self::AuthenticationMethod => 0x15,
            Self::AuthenticationData => 0x16,
            Self::RequestProblemInformation => 0x17,
            Self::WillDelayInterval => 0x18,
            Self::RequestResponseInformation => 0x19,
            Self::ResponseInformation => 0x1A,
            Self::ServerReference => 0x1C,
            Self::ReasonString => 0x1F,
            Self::ReceiveMaximum => 0x21,
            Self::TopicAliasMaximum => 0x22,
            Self::TopicAlias => 0x23,
            Self::MaximumQoS => 0x24,
            Self::RetainAvailable => 0x25,
            Self::UserProperty => 0x26,
            Self::MaximumPacketSize => 0x27,
            Self::WildcardSubscriptionAvailable => 0x28,
            Self::SubscriptionIdentifierAvailable => 0x29,
            Self::SharedSubscriptionAvailable => 0x2A,
        }
    }

    /// The wire representation of this property's value.
    pub const fn kind(&self) -> PropertyKind {
        match self {
            Self::PayloadFormatIndicator
            | Self::RequestProblemInformation
            | Self::RequestResponseInformation
            | Self::MaximumQoS
            | Self::RetainAvailable
            | Self::WildcardSubscriptionAvailable
            | Self::SubscriptionIdentifierAvailable
            | Self::SharedSubscriptionAvailable => PropertyKind::Byte,

            Self::ServerKeepAlive
            | Self::ReceiveMaximum
            | Self::TopicAliasMaximum
            | Self::TopicAlias => PropertyKind::TwoByteInt,

            Self::MessageExpiryInterval
            | Self::SessionExpiryInterval
            | Self::WillDelayInterval
            | Self::MaximumPacketSize => PropertyKind::FourByteInt,

            Self::SubscriptionIdentifier => PropertyKind::VariableByteInt,

            Self::ContentType
            | Self::ResponseTopic
            | Self::AssignedClientIdentifier
            | Self::AuthenticationMethod
            | Self::ResponseInformation
            | Self::ServerReference
            | Self::ReasonString => PropertyKind::Utf8String,

            Self::UserProperty => PropertyKind::Utf8StringPair,

            Self::CorrelationData | Self::AuthenticationData => PropertyKind::BinaryData,
        }
    }

    /// The key this property is stored under in a [`crate::PropertyTable`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PayloadFormatIndicator => "payload_format_id",
            Self::MessageExpiryInterval => "message_expiry_interval",
            Self::ContentType => "content_type",
            Self::ResponseTopic => "response_topic",
            Self::CorrelationData => "correlation_data",
            Self::SubscriptionIdentifier => "subscription_identifier",
            Self::SessionExpiryInterval => "session_expiry_interval",
            Self::AssignedClientIdentifier => "assigned_client_identifier",
            Self::ServerKeepAlive => "server_keep_alive",
            Self::AuthenticationMethod => "auth_method",
            Self::AuthenticationData => "auth_data",
            Self::RequestProblemInformation => "request_problem_info",
            Self::WillDelayInterval => "will_delay_interval",
            Self::RequestResponseInformation => "request_response_info",
            Self::ResponseInformation => "response_info",
            Self::ServerReference => "server_reference",
            Self::ReasonString => "reason_string",
            Self::ReceiveMaximum => "receive_maximum",
            Self::TopicAliasMaximum => "topic_alias_maximum",
            Self::TopicAlias => "topic_alias",
            Self::MaximumQoS => "max_qos",
            Self::RetainAvailable => "retain_available",
            Self::UserProperty => "user_property",
            Self::MaximumPacketSize => "maximum_packet_size",
            Self::WildcardSubscriptionAvailable => "wildcard_subscription_available",
            Self::SubscriptionIdentifierAvailable => "sub_id_available",
            Self::SharedSubscriptionAvailable => "shared_subscription_available",
        }
    }

    /// Inverse of [`PropertyIdentifier::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Whether the property may be included more than once in a properties field.
    pub const fn allows_multiple(&self) -> bool {
        matches!(self, Self::UserProperty | Self::SubscriptionIdentifier)
    }

    /// Whether the property may appear in the properties of `packet`.
    pub const fn allowed_in(&self, packet: PacketType) -> bool {
        use PacketType::*;

        match self {
            Self::PayloadFormatIndicator
            | Self::MessageExpiryInterval
            | Self::ContentType
            | Self::ResponseTopic
            | Self::CorrelationData => matches!(packet, Publish | Will),

            Self::SubscriptionIdentifier => matches!(packet, Publish | Subscribe),
            Self::SessionExpiryInterval => matches!(packet, Connect | Connack | Disconnect),
            Self::AuthenticationMethod | Self::AuthenticationData => {
                matches!(packet, Connect | Connack | Auth)
            }
            Self::RequestProblemInformation | Self::RequestResponseInformation => {
                matches!(packet, Connect)
            }
            Self::WillDelayInterval => matches!(packet, Will),
            Self::ServerReference => matches!(packet, Connack | Disconnect),
            Self::ReasonString => matches!(
                packet,
                Connack | Puback | Pubrec | Pubrel | Pubcomp | Suback | Unsuback | Disconnect | Auth
            ),
            Self::ReceiveMaximum | Self::TopicAliasMaximum | Self::MaximumPacketSize => {
                matches!(packet, Connect | Connack)
            }
            Self::TopicAlias => matches!(packet, Publish),
            Self::UserProperty => packet.has_properties(),

            Self::AssignedClientIdentifier
            | Self::ServerKeepAlive
            | Self::ResponseInformation
            | Self::MaximumQoS
            | Self::RetainAvailable
            | Self::WildcardSubscriptionAvailable
            | Self::SubscriptionIdentifierAvailable
            | Self::SharedSubscriptionAvailable => matches!(packet, Connack),
        }
    }
}

impl TryFrom<u8> for PropertyIdentifier {
    type Error = UnknownIdentifier;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_identifier(value)
    }
}

impl From<PropertyIdentifier> for u8 {
    fn from(value: PropertyIdentifier) -> Self {
        value.identifier()
    }
}

impl fmt::Display for PropertyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
