use alloc::{collections::BTreeMap, vec::Vec};

use crate::{
    config::InsertOrder,
    io::err::DecodeError,
    v5::property::{DecodedValue, PropertyIdentifier},
};

/// The result of decoding a properties field: every property that was present, mapped to the
/// sequence of its decoded values.
///
/// Properties which may only appear once still map to a sequence of length 1. Binary data
/// properties never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    entries: BTreeMap<PropertyIdentifier, Vec<DecodedValue>>,
}

impl PropertyTable {
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Appends `value` to the sequence of `property`.
    pub(crate) fn insert(
        &mut self,
        property: PropertyIdentifier,
        value: DecodedValue,
    ) -> Result<(), DecodeError> {
        let values = self.entries.entry(property).or_default();
        values.try_reserve(1)?;
        values.push(value);

        Ok(())
    }

    /// Brings every sequence into `order`. Sequences are built in encounter order, so this
    /// reverses each of them once for [`InsertOrder::Prepend`].
    pub(crate) fn apply_order(&mut self, order: InsertOrder) {
        if order == InsertOrder::Prepend {
            self.entries.values_mut().for_each(|values| values.reverse());
        }
    }

    /// Number of distinct properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, property: PropertyIdentifier) -> bool {
        self.entries.contains_key(&property)
    }

    pub fn get(&self, property: PropertyIdentifier) -> Option<&[DecodedValue]> {
        self.entries.get(&property).map(Vec::as_slice)
    }

    /// Looks up a property by its [`PropertyIdentifier::name`].
    pub fn get_by_name(&self, name: &str) -> Option<&[DecodedValue]> {
        PropertyIdentifier::from_name(name).and_then(|p| self.get(p))
    }

    /// The first value of the property's sequence.
    pub fn first(&self, property: PropertyIdentifier) -> Option<&DecodedValue> {
        self.get(property).and_then(<[_]>::first)
    }

    pub fn integer(&self, property: PropertyIdentifier) -> Option<u32> {
        self.first(property).and_then(DecodedValue::as_integer)
    }

    pub fn string(&self, property: PropertyIdentifier) -> Option<&str> {
        self.first(property).and_then(DecodedValue::as_str)
    }

    /// All User Properties as (name, value) pairs in sequence order.
    pub fn user_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values(PropertyIdentifier::UserProperty)
            .filter_map(DecodedValue::as_pair)
    }

    /// All Subscription Identifiers in sequence order.
    pub fn subscription_identifiers(&self) -> impl Iterator<Item = u32> {
        self.values(PropertyIdentifier::SubscriptionIdentifier)
            .filter_map(DecodedValue::as_integer)
    }

    fn values(&self, property: PropertyIdentifier) -> impl Iterator<Item = &DecodedValue> {
        self.get(property).unwrap_or_default().iter()
    }

    /// Iterates over the properties in ascending order of their identifier.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyIdentifier, &[DecodedValue])> {
        self.entries.iter().map(|(p, v)| (*p, v.as_slice()))
    }
}

impl IntoIterator for PropertyTable {
    type Item = (PropertyIdentifier, Vec<DecodedValue>);
    type IntoIter = alloc::collections::btree_map::IntoIter<PropertyIdentifier, Vec<DecodedValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
