//! # graph-object — Typed Views over Shared JSON Graph Objects
//!
//! A graph object is a node of a remote social graph, held locally as one
//! JSON object. Callers look at that object through strongly-typed *views*.
//!
//! ## Design Principles
//!
//! 1. **One canonical representation**: every view wraps an `InnerObject`
//!    handle; the JSON map behind it is the only copy of the data
//! 2. **Cast is free**: `cast::<T>()` builds a new view over the same handle,
//!    no copy, no validation
//! 3. **Check at point of use**: typed getters report absent keys as `None`
//!    and unreadable values as `Error::PropertyType`
//! 4. **Escape hatch**: `inner_json_object()` exposes the backing map directly
//!
//! ## Quick Start
//!
//! ```rust
//! use graph_object::{graph_object_view, GenericGraphObject, GraphObject};
//!
//! graph_object_view! {
//!     /// A person in the graph.
//!     pub struct GraphUser {
//!         name / set_name: String => "name",
//!         first_name / set_first_name: String => "first_name",
//!     }
//! }
//!
//! # fn main() -> graph_object::Result<()> {
//! let raw: GenericGraphObject = graph_object::codec::parse(r#"{"id": "4", "name": "Mark"}"#)?;
//! let user: GraphUser = raw.cast();
//!
//! assert_eq!(user.name()?, Some("Mark".to_string()));
//! assert_eq!(user.first_name()?, None);
//!
//! user.set_first_name("Mark".into())?;
//! assert!(raw.contains_key("first_name"));
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod codec;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{GraphObject, GenericGraphObject, InnerObject, JsonMap};
pub use codec::JsonFormat;
pub use serde_json::Value;

#[doc(hidden)]
pub mod __private {
    pub use serde::{Deserialize, Deserializer, Serialize, Serializer};
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not a JSON object: got {got}")]
    NotAnObject { got: &'static str },

    #[error("Missing property '{key}' on {view}")]
    MissingProperty { key: String, view: &'static str },

    #[error("Property '{key}' has wrong type: {source}")]
    PropertyType {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// JSON type name used in diagnostics.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
