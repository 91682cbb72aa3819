//! Walks a properties field and collects its content into a [`PropertyTable`].
//!
//! The field is a variable byte integer length followed by that many bytes of properties. Each
//! property is a one byte identifier followed by a value whose shape is determined by the
//! identifier's [`PropertyKind`]. Decoding is a single forward pass that either consumes the
//! field exactly or fails as a whole.

use alloc::string::String;

use crate::{
    config::DecodeOptions,
    io::{err::DecodeError, read::DecodeCursor},
    types::VarByteInt,
    v5::property::{DecodedValue, PropertyIdentifier, PropertyKind, PropertyTable},
};

/// Decodes the properties field at the start of `buffer` using the default [`DecodeOptions`].
///
/// `buffer` is the remainder of an MQTT v5.0 packet beginning at the properties field. Bytes
/// following the properties field are ignored.
///
/// # Examples
///
/// ```rust
/// use mqtt5_props::{PropertyIdentifier, decode_properties};
///
/// // Receive Maximum = 10, Maximum QoS = 1
/// let table = decode_properties(&[0x05, 0x21, 0x00, 0x0A, 0x24, 0x01])?;
///
/// assert_eq!(table.integer(PropertyIdentifier::ReceiveMaximum), Some(10));
/// assert_eq!(table.integer(PropertyIdentifier::MaximumQoS), Some(1));
/// # Ok::<(), mqtt5_props::DecodeError>(())
/// ```
pub fn decode_properties(buffer: &[u8]) -> Result<PropertyTable, DecodeError> {
    decode_properties_with(buffer, &DecodeOptions::default())
}

/// Decodes the properties field at the start of `buffer`.
pub fn decode_properties_with(
    buffer: &[u8],
    options: &DecodeOptions,
) -> Result<PropertyTable, DecodeError> {
    decode_properties_len(buffer, options).map(|(table, _)| table)
}

/// Decodes the properties field at the start of `buffer` and additionally returns the number of
/// bytes the field occupied, including its length prefix.
pub fn decode_properties_len(
    buffer: &[u8],
    options: &DecodeOptions,
) -> Result<(PropertyTable, usize), DecodeError> {
    if buffer.is_empty() {
        debug!("no properties length present");
        return Err(DecodeError::TruncatedInput);
    }

    let (len, prefix_len) = VarByteInt::from_slice(buffer)?;
    let len = len.size();
    let body = &buffer[prefix_len..];

    if len > body.len() {
        debug!(
            "properties length {} exceeds the remaining {} bytes",
            len,
            body.len()
        );
        return Err(DecodeError::InconsistentLength);
    }

    trace!("decoding {} bytes of properties", len);

    let mut decoder = Decoder {
        reader: DecodeCursor::new(&body[..len]),
        options,
        table: PropertyTable::new(),
        seen: 0,
    };

    while decoder.reader.remaining() > 1 {
        decoder.decode_property()?;
    }

    if !decoder.reader.is_empty() {
        debug!("properties length leaves a dangling byte");
        return Err(DecodeError::InconsistentLength);
    }

    let mut table = decoder.table;
    table.apply_order(options.order);

    Ok((table, prefix_len + len))
}

struct Decoder<'a, 'o> {
    reader: DecodeCursor<'a>,
    options: &'o DecodeOptions,
    table: PropertyTable,

    /// Bit `n` is set if the property with identifier `n` has been decoded.
    seen: u64,
}

impl Decoder<'_, '_> {
    fn decode_property(&mut self) -> Result<(), DecodeError> {
        let identifier = self.reader.read_u8()?;
        let property = match PropertyIdentifier::from_identifier(identifier) {
            Ok(p) => p,
            Err(e) => {
                warn!("unknown property identifier {}", identifier);
                return Err(e.into());
            }
        };

        trace!("reading {} at offset {}", property.name(), self.reader.position() - 1);

        if let Some(packet) = self.options.packet {
            if !property.allowed_in(packet) {
                warn!("{} is not allowed in this packet", property.name());
                return Err(DecodeError::PropertyNotAllowed(property, packet));
            }
        }

        let bit = 1u64 << identifier;
        if self.options.reject_duplicates && !property.allows_multiple() && self.seen & bit != 0 {
            warn!("{} is included more than once", property.name());
            return Err(DecodeError::DuplicateProperty(property));
        }
        self.seen |= bit;

        if let Some(value) = self.decode_value(property.kind())? {
            self.table.insert(property, value)?;
        }

        Ok(())
    }

    fn decode_value(&mut self, kind: PropertyKind) -> Result<Option<DecodedValue>, DecodeError> {
        let max = self.options.max_string_len;
        let r = &mut self.reader;

        let value = match kind {
            PropertyKind::Byte => DecodedValue::Integer(r.read_u8()?.into()),
            PropertyKind::TwoByteInt => DecodedValue::Integer(r.read_u16()?.into()),
            PropertyKind::FourByteInt => DecodedValue::Integer(r.read_u32()?),
            PropertyKind::VariableByteInt => DecodedValue::Integer(r.read_var_int()?.value()),
            PropertyKind::Utf8String => DecodedValue::String(to_owned(r.read_str(max)?)?),
            PropertyKind::Utf8StringPair => {
                let name = r.read_str(max)?;
                let value = r.read_str(max)?;
                DecodedValue::StringPair(to_owned(name)?, to_owned(value)?)
            }
            PropertyKind::BinaryData => {
                let skipped = r.read_binary()?;
                trace!(
                    "skipping {} bytes of binary data, {} on the wire",
                    skipped.len(),
                    skipped.encoded_len()
                );
                return Ok(None);
            }
        };

        Ok(Some(value))
    }
}

fn to_owned(s: &str) -> Result<String, DecodeError> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len())?;
    owned.push_str(s);
    Ok(owned)
}

#[cfg(test)]
mod unit {
    use tokio_test::{assert_err, assert_ok};

    use crate::{
        config::{DecodeOptions, InsertOrder},
        header::PacketType,
        io::err::DecodeError,
        test::wire::PropertiesBuilder,
        types::Utf8Violation,
        v5::property::{
            DecodedValue, PropertyIdentifier, decode_properties, decode_properties_len,
            decode_properties_with,
        },
    };

    #[test_log::test]
    fn receive_maximum_and_maximum_qos() {
        let t = assert_ok!(decode_properties(&[0x05, 0x21, 0x00, 0x0A, 0x24, 0x01]));

        assert_eq!(t.len(), 2);
        assert_eq!(
            t.get_by_name("receive_maximum"),
            Some(&[DecodedValue::Integer(10)][..])
        );
        assert_eq!(t.get_by_name("max_qos"), Some(&[DecodedValue::Integer(1)][..]));
    }

    #[test_log::test]
    fn empty() {
        let t = assert_ok!(decode_properties(&[0x00]));
        assert!(t.is_empty());
    }

    #[test_log::test]
    fn empty_buffer() {
        let e = assert_err!(decode_properties(&[]));
        assert_eq!(e, DecodeError::TruncatedInput);
    }

    #[test_log::test]
    fn every_kind() {
        let bytes = PropertiesBuilder::new()
            .byte(0x01, 1)
            .u32(0x02, 3600)
            .string(0x03, "application/json")
            .string(0x08, "response/topic")
            .binary(0x09, b"\xDE\xAD\xBE\xEF")
            .var_int(0x0B, 268_435_455)
            .u16(0x23, 7)
            .pair(0x26, "key", "value")
            .build();

        let t = assert_ok!(decode_properties(&bytes));

        assert_eq!(t.integer(PropertyIdentifier::PayloadFormatIndicator), Some(1));
        assert_eq!(t.integer(PropertyIdentifier::MessageExpiryInterval), Some(3600));
        assert_eq!(
            t.string(PropertyIdentifier::ContentType),
            Some("application/json")
        );
        assert_eq!(
            t.string(PropertyIdentifier::ResponseTopic),
            Some("response/topic")
        );
        assert!(!t.contains(PropertyIdentifier::CorrelationData));
        assert!(t.subscription_identifiers().eq([268_435_455u32]));
        assert_eq!(t.integer(PropertyIdentifier::TopicAlias), Some(7));
        assert!(t.user_properties().eq([("key", "value")]));
        assert_eq!(t.len(), 7);
    }

    #[test_log::test]
    fn repeated_properties_are_prepended() {
        let bytes = PropertiesBuilder::new()
            .pair(0x26, "a", "1")
            .var_int(0x0B, 5)
            .pair(0x26, "b", "2")
            .var_int(0x0B, 300)
            .build();

        let t = assert_ok!(decode_properties(&bytes));

        assert!(t.user_properties().eq([("b", "2"), ("a", "1")]));
        assert!(t.subscription_identifiers().eq([300u32, 5]));
    }

    #[test_log::test]
    fn repeated_properties_are_appended() {
        let bytes = PropertiesBuilder::new()
            .pair(0x26, "a", "1")
            .pair(0x26, "b", "2")
            .build();

        let options = DecodeOptions::new().order(InsertOrder::Append);
        let t = assert_ok!(decode_properties_with(&bytes, &options));

        assert!(t.user_properties().eq([("a", "1"), ("b", "2")]));
    }

    #[test_log::test]
    fn binary_is_consumed() {
        let bytes = PropertiesBuilder::new()
            .binary(0x09, &[0xAA; 300])
            .byte(0x24, 2)
            .build();

        let (t, len) = assert_ok!(decode_properties_len(&bytes, &DecodeOptions::default()));

        assert_eq!(len, bytes.len());
        assert_eq!(t.len(), 1);
        assert_eq!(t.integer(PropertyIdentifier::MaximumQoS), Some(2));
    }

    #[test_log::test]
    fn trailing_payload_is_ignored() {
        let mut bytes = PropertiesBuilder::new().u16(0x13, 60).build();
        let properties_len = bytes.len();
        bytes.extend_from_slice(b"payload");

        let (t, len) = assert_ok!(decode_properties_len(&bytes, &DecodeOptions::default()));

        assert_eq!(len, properties_len);
        assert_eq!(t.integer(PropertyIdentifier::ServerKeepAlive), Some(60));
    }

    #[test_log::test]
    fn unknown_identifier() {
        let e = assert_err!(decode_properties(&[0x02, 0x00, 0x01]));
        assert_eq!(e, DecodeError::UnknownPropertyIdentifier(0x00));

        let e = assert_err!(decode_properties(&[0x02, 0x2B, 0x01]));
        assert_eq!(e, DecodeError::UnknownPropertyIdentifier(0x2B));

        let bytes = PropertiesBuilder::new().byte(0x24, 1).byte(0x04, 1).build();
        let e = assert_err!(decode_properties(&bytes));
        assert_eq!(e, DecodeError::UnknownPropertyIdentifier(0x04));
    }

    #[test_log::test]
    fn length_exceeds_buffer() {
        let e = assert_err!(decode_properties(&[0x06, 0x21, 0x00, 0x0A, 0x24, 0x01]));
        assert_eq!(e, DecodeError::InconsistentLength);
    }

    #[test_log::test]
    fn dangling_byte() {
        let e = assert_err!(decode_properties(&[0x03, 0x24, 0x01, 0x25]));
        assert_eq!(e, DecodeError::InconsistentLength);

        let e = assert_err!(decode_properties(&[0x01, 0x24]));
        assert_eq!(e, DecodeError::InconsistentLength);
    }

    #[test_log::test]
    fn value_exceeds_properties_length() {
        // the buffer holds the value, the declared length does not
        let e = assert_err!(decode_properties(&[0x02, 0x21, 0x00, 0x0A]));
        assert_eq!(e, DecodeError::TruncatedInput);

        let e = assert_err!(decode_properties(&[0x04, 0x02, 0x00, 0x00, 0x0E, 0x10]));
        assert_eq!(e, DecodeError::TruncatedInput);

        let e = assert_err!(decode_properties(&[0x04, 0x03, 0x00, 0x03, b'a', b'b']));
        assert_eq!(e, DecodeError::TruncatedInput);

        let e = assert_err!(decode_properties(&[0x03, 0x09, 0x00, 0x01, 0xFF]));
        assert_eq!(e, DecodeError::TruncatedInput);
    }

    #[test_log::test]
    fn malformed_varints() {
        let e = assert_err!(decode_properties(&[0x80]));
        assert_eq!(e, DecodeError::MalformedVarint);

        let e = assert_err!(decode_properties(&[0x80, 0x80, 0x80, 0x80, 0x00]));
        assert_eq!(e, DecodeError::MalformedVarint);

        // subscription identifier runs past the properties length
        let e = assert_err!(decode_properties(&[0x02, 0x0B, 0x80, 0x01]));
        assert_eq!(e, DecodeError::MalformedVarint);

        let e = assert_err!(decode_properties(&[
            0x06, 0x0B, 0x80, 0x80, 0x80, 0x80, 0x01
        ]));
        assert_eq!(e, DecodeError::MalformedVarint);
    }

    #[test_log::test]
    fn invalid_utf8() {
        let bytes = PropertiesBuilder::new().raw_string(0x1F, b"bad\x00").build();
        let e = assert_err!(decode_properties(&bytes));
        assert_eq!(e, DecodeError::InvalidUtf8(Utf8Violation::NullCharacter));

        let bytes = PropertiesBuilder::new()
            .raw_pair(0x26, b"name", b"\xED\xA0\x80")
            .build();
        let e = assert_err!(decode_properties(&bytes));
        assert_eq!(e, DecodeError::InvalidUtf8(Utf8Violation::Surrogate));
    }

    #[test_log::test]
    fn string_too_long() {
        let bytes = PropertiesBuilder::new()
            .pair(0x26, "name", "a rather long value")
            .build();
        let options = DecodeOptions::new().max_string_len(8);

        let e = assert_err!(decode_properties_with(&bytes, &options));
        assert_eq!(e, DecodeError::StringTooLong { len: 19, max: 8 });
    }

    #[test_log::test]
    fn packet_applicability() {
        let bytes = PropertiesBuilder::new()
            .u16(0x23, 1)
            .pair(0x26, "a", "b")
            .build();

        let options = DecodeOptions::new().packet(PacketType::Publish);
        assert_ok!(decode_properties_with(&bytes, &options));

        let options = DecodeOptions::new().packet(PacketType::Connack);
        let e = assert_err!(decode_properties_with(&bytes, &options));
        assert_eq!(
            e,
            DecodeError::PropertyNotAllowed(PropertyIdentifier::TopicAlias, PacketType::Connack)
        );
    }

    #[test_log::test]
    fn duplicates() {
        let bytes = PropertiesBuilder::new()
            .binary(0x09, b"a")
            .binary(0x09, b"b")
            .build();

        assert_ok!(decode_properties(&bytes));

        let options = DecodeOptions::new().reject_duplicates(true);
        let e = assert_err!(decode_properties_with(&bytes, &options));
        assert_eq!(
            e,
            DecodeError::DuplicateProperty(PropertyIdentifier::CorrelationData)
        );

        let bytes = PropertiesBuilder::new()
            .var_int(0x0B, 1)
            .var_int(0x0B, 2)
            .build();
        assert_ok!(decode_properties_with(&bytes, &options));
    }

    #[test_log::test]
    fn singular_properties_keep_every_value() {
        let bytes = PropertiesBuilder::new()
            .string(0x1F, "first")
            .string(0x1F, "second")
            .build();

        let t = assert_ok!(decode_properties(&bytes));

        assert_eq!(
            t.get(PropertyIdentifier::ReasonString),
            Some(&[DecodedValue::from("second"), DecodedValue::from("first")][..])
        );
    }
}
