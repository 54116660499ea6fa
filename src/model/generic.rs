//! GenericGraphObject — the untyped base view.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{GraphObject, InnerObject, JsonMap};
use crate::Result;

/// A graph object viewed only through its map capability.
#[derive(Clone, Default, PartialEq)]
pub struct GenericGraphObject {
    inner: InnerObject,
}

impl GenericGraphObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: JsonMap) -> Self {
        Self { inner: InnerObject::from_map(map) }
    }

    /// Fails with `Error::NotAnObject` unless `value` is a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        InnerObject::from_value(value).map(|inner| Self { inner })
    }
}

impl GraphObject for GenericGraphObject {
    const TYPE_NAME: &'static str = "GraphObject";

    fn from_inner(inner: InnerObject) -> Self {
        Self { inner }
    }

    fn inner(&self) -> &InnerObject {
        &self.inner
    }
}

impl From<InnerObject> for GenericGraphObject {
    fn from(inner: InnerObject) -> Self {
        Self { inner }
    }
}

impl FromIterator<(String, Value)> for GenericGraphObject {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl fmt::Debug for GenericGraphObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GenericGraphObject").field(&*self.inner.read()).finish()
    }
}

/// Compact JSON.
impl fmt::Display for GenericGraphObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&*self.inner.read()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for GenericGraphObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.inner.read().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GenericGraphObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        JsonMap::deserialize(deserializer).map(Self::from_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_capability() {
        let obj = GenericGraphObject::new();
        assert!(obj.is_empty());
        assert_eq!(obj.insert("id", "42"), None);
        assert_eq!(obj.insert("id", "43"), Some(json!("42")));
        assert!(obj.contains_key("id"));
        assert!(obj.contains_value(&json!("43")));
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.remove("id"), Some(json!("43")));
        assert!(obj.is_empty());
    }

    #[test]
    fn test_extend_and_entries() {
        let obj = GenericGraphObject::new();
        obj.extend([("a", json!(1)), ("b", json!(2))]);
        let mut keys = obj.keys();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(obj.entries().len(), 2);
        obj.clear();
        assert!(obj.values().is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let obj: GenericGraphObject = vec![("name".to_string(), json!("Ada"))].into_iter().collect();
        assert_eq!(obj.get("name"), Some(json!("Ada")));
    }

    #[test]
    fn test_display_is_compact_json() {
        let obj = GenericGraphObject::from_value(json!({"id": 7})).unwrap();
        assert_eq!(obj.to_string(), r#"{"id":7}"#);
    }

    #[test]
    fn test_serde_roundtrip_through_value() {
        let obj = GenericGraphObject::from_value(json!({"name": "Ada", "tags": ["x"]})).unwrap();
        let value = serde_json::to_value(&obj).unwrap();
        assert_eq!(value, json!({"name": "Ada", "tags": ["x"]}));
        let back: GenericGraphObject = serde_json::from_value(value).unwrap();
        assert_eq!(back, obj);
        assert!(!back.shares_storage_with(&obj));
    }
}
