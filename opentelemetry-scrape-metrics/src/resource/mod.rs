//! Representations of the entities metrics are scraped from.
//!
//! A [Resource] is an immutable set of attributes identifying one monitored
//! entity, typically a device or a sub-component of a device discovered
//! while walking the remote system. Attribute membership and values carry
//! the identity; the order attributes were supplied in does not.

mod builder;

pub use builder::{AttributeConfig, DeviceAttributesConfig, ResourceBuilder};

use std::collections::{hash_map, HashMap};

use opentelemetry::{Key, KeyValue, Value};

/// An immutable representation of the entity producing telemetry as
/// attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resource {
    attrs: HashMap<Key, Value>,
}

impl Resource {
    /// Create a new `Resource` from key value pairs.
    ///
    /// Values are de-duplicated by key, and the last key-value pair will be
    /// retained.
    pub fn new<T: IntoIterator<Item = KeyValue>>(kvs: T) -> Self {
        let mut attrs = HashMap::new();
        for kv in kvs {
            attrs.insert(kv.key, kv.value);
        }

        Resource { attrs }
    }

    /// Creates an empty resource.
    pub fn empty() -> Self {
        Resource::default()
    }

    /// Returns the number of attributes for this resource.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns `true` if the resource contains no attributes.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Gets an iterator over the attributes of this resource.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.attrs.iter())
    }

    /// Retrieve the value associated with the given key, if any.
    pub fn get(&self, key: &Key) -> Option<Value> {
        self.attrs.get(key).cloned()
    }
}

/// An iterator over the entries of a `Resource`.
#[derive(Debug)]
pub struct Iter<'a>(hash_map::Iter<'a, Key, Value>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<'a> IntoIterator for &'a Resource {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resources_are_equal_regardless_of_attribute_order() {
        let left = Resource::new([
            KeyValue::new("device.id", "d1"),
            KeyValue::new("device.name", "edge-router"),
        ]);
        let right = Resource::new([
            KeyValue::new("device.name", "edge-router"),
            KeyValue::new("device.id", "d1"),
        ]);

        assert_eq!(left, right);
    }

    #[test]
    fn last_value_wins_for_duplicate_keys() {
        let resource = Resource::new([
            KeyValue::new("device.id", "stale"),
            KeyValue::new("device.id", "d1"),
        ]);

        assert_eq!(resource.len(), 1);
        assert_eq!(
            resource.get(&Key::new("device.id")),
            Some(Value::from("d1"))
        );
    }

    #[test]
    fn get_returns_none_for_unknown_keys() {
        let resource = Resource::new([KeyValue::new("device.id", "d1")]);

        assert!(resource.get(&Key::new("device.name")).is_none());
        assert!(!resource.is_empty());
    }

    #[test]
    fn empty_resource_has_no_attributes() {
        let resource = Resource::empty();

        assert!(resource.is_empty());
        assert_eq!(resource.iter().count(), 0);
    }
}
