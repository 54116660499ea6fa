//! GraphObject — the contract every typed view of a graph object satisfies.
//!
//! A view is a thin wrapper around an `InnerObject` handle. No validation is
//! done that the underlying data has the shape a view expects: any graph
//! object can be cast to any view, and the presence or absence of specific
//! properties decides whether it is usable as that view. Mismatches surface
//! at the typed getter, never at cast time.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{InnerObject, JsonMap};
use crate::{Error, Result};

/// A typed view over a shared JSON graph object.
///
/// Implementors supply `from_inner` and `inner`; everything else is
/// provided. Use [`graph_object_view!`](crate::graph_object_view) to declare
/// views rather than implementing this by hand.
pub trait GraphObject: Sized {
    /// Name of the view, used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Wrap an existing handle. Must not copy or inspect the data.
    fn from_inner(inner: InnerObject) -> Self;

    /// The handle this view wraps.
    fn inner(&self) -> &InnerObject;

    // ========================================================================
    // Re-typing and the canonical representation
    // ========================================================================

    /// A new view of type `T` over the same underlying data.
    ///
    /// Never fails and never validates. The receiver is unaffected.
    fn cast<T: GraphObject>(&self) -> T {
        tracing::trace!(from = Self::TYPE_NAME, to = T::TYPE_NAME, "cast graph object");
        T::from_inner(self.inner().clone())
    }

    /// The underlying JSON object. Returns the shared handle, not a copy:
    /// writes through it are visible in every view.
    fn inner_json_object(&self) -> InnerObject {
        self.inner().clone()
    }

    /// True if `other` (of any view type) wraps the same storage.
    fn shares_storage_with<O: GraphObject>(&self, other: &O) -> bool {
        InnerObject::ptr_eq(self.inner(), other.inner())
    }

    /// Detached copy of the current content.
    fn snapshot(&self) -> Value {
        self.inner().snapshot()
    }

    // ========================================================================
    // Map capability
    // ========================================================================

    fn len(&self) -> usize {
        self.inner().read().len()
    }

    fn is_empty(&self) -> bool {
        self.inner().read().is_empty()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.inner().read().contains_key(key)
    }

    fn contains_value(&self, value: &Value) -> bool {
        self.inner().read().values().any(|v| v == value)
    }

    /// Clone of the value stored under `key`.
    fn get(&self, key: &str) -> Option<Value> {
        self.inner().read().get(key).cloned()
    }

    /// Store `value` under `key`, returning the previous value.
    fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner().write().insert(key.into(), value.into())
    }

    fn remove(&self, key: &str) -> Option<Value> {
        self.inner().write().remove(key)
    }

    fn clear(&self) {
        self.inner().write().clear();
    }

    /// Insert every pair, overwriting existing keys.
    ///
    /// The iterator is drained before the lock is taken, so it may read
    /// views over the same storage.
    fn extend<I, K>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let entries: Vec<(String, Value)> = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.inner().write().extend(entries);
    }

    fn keys(&self) -> Vec<String> {
        self.inner().read().keys().cloned().collect()
    }

    fn values(&self) -> Vec<Value> {
        self.inner().read().values().cloned().collect()
    }

    fn entries(&self) -> Vec<(String, Value)> {
        self.inner().read().iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Copy of the whole map.
    fn to_map(&self) -> JsonMap {
        self.inner().read().clone()
    }

    // ========================================================================
    // Typed property access
    // ========================================================================

    /// Read `key` as `V`.
    ///
    /// Absent keys and JSON `null` both read as `Ok(None)`. A value that
    /// cannot be read as `V` is `Error::PropertyType`.
    fn get_property<V: DeserializeOwned>(&self, key: &str) -> Result<Option<V>> {
        let value = match self.inner().read().get(key) {
            None | Some(Value::Null) => return Ok(None),
            Some(v) => v.clone(),
        };
        serde_json::from_value(value).map(Some).map_err(|source| {
            tracing::debug!(view = Self::TYPE_NAME, key, error = %source, "property type mismatch");
            Error::PropertyType { key: key.to_owned(), source }
        })
    }

    /// Like `get_property`, but absence is `Error::MissingProperty`.
    fn require_property<V: DeserializeOwned>(&self, key: &str) -> Result<V> {
        self.get_property(key)?.ok_or_else(|| Error::MissingProperty {
            key: key.to_owned(),
            view: Self::TYPE_NAME,
        })
    }

    /// Serialize `value` and store it under `key`.
    fn set_property<V: Serialize>(&self, key: &str, value: V) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|e| Error::Serialization(e.to_string()))?;
        self.inner().write().insert(key.to_owned(), value);
        Ok(())
    }

    /// True if every key is present. Advisory only; `cast` never calls it.
    fn has_properties(&self, keys: &[&str]) -> bool {
        let map = self.inner().read();
        keys.iter().all(|k| map.contains_key(*k))
    }
}
