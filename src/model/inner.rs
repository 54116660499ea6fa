//! InnerObject — the shared handle to a graph object's JSON map.
//!
//! Every view of a graph object holds one of these. Cloning the handle
//! clones the `Arc`, never the map, so all clones alias the same storage.
//!
//! ## Locking
//!
//! Each map operation takes the lock once and releases it before returning.
//! Sequences of operations are NOT atomic; callers that need a consistent
//! multi-step update hold a `write()` guard for the whole sequence.
//! Do not call view methods while holding a guard on the same handle:
//! `parking_lot::RwLock` is not reentrant.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::Value;

use crate::{Error, Result};

/// A JSON object: string keys to arbitrary JSON values.
pub type JsonMap = serde_json::Map<String, Value>;

/// Shared handle to the canonical JSON object behind one or more views.
#[derive(Clone, Default)]
pub struct InnerObject {
    map: Arc<RwLock<JsonMap>>,
}

impl InnerObject {
    /// An empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an existing JSON map as the canonical representation.
    pub fn from_map(map: JsonMap) -> Self {
        tracing::trace!(keys = map.len(), "adopting JSON object");
        Self { map: Arc::new(RwLock::new(map)) }
    }

    /// Adopt a JSON value. Only objects are accepted.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(Error::NotAnObject { got: crate::json_type_name(&other) }),
        }
    }

    /// Shared access to the backing map.
    pub fn read(&self) -> RwLockReadGuard<'_, JsonMap> {
        self.map.read()
    }

    /// Exclusive access to the backing map. Mutations are visible through
    /// every view sharing this handle.
    pub fn write(&self) -> RwLockWriteGuard<'_, JsonMap> {
        self.map.write()
    }

    /// True if both handles point at the same storage.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.map, &b.map)
    }

    /// Number of live handles (views and bare handles) on this storage.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.map)
    }

    /// Detached copy of the current content.
    pub fn snapshot(&self) -> Value {
        Value::Object(self.read().clone())
    }

    /// New handle over a detached copy. The result no longer aliases `self`.
    pub fn deep_copy(&self) -> Self {
        Self::from_map(self.read().clone())
    }
}

impl From<JsonMap> for InnerObject {
    fn from(map: JsonMap) -> Self {
        Self::from_map(map)
    }
}

impl fmt::Debug for InnerObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InnerObject").field(&*self.read()).finish()
    }
}

/// Content equality, not identity. Use `InnerObject::ptr_eq` for identity.
impl PartialEq for InnerObject {
    fn eq(&self, other: &Self) -> bool {
        if Self::ptr_eq(self, other) {
            return true;
        }
        // never hold both locks at once
        let mine = self.read().clone();
        mine == *other.read()
    }
}
