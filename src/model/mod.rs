//! # Graph Object Model
//!
//! The canonical representation (`InnerObject`), the `GraphObject` view
//! contract, the untyped base view and the macro for declaring typed views.
//!
//! Design rule: no text parsing or I/O here. JSON text lives in `codec`.

pub mod inner;
pub mod graph_object;
pub mod generic;
pub mod view;

pub use inner::{InnerObject, JsonMap};
pub use graph_object::GraphObject;
pub use generic::GenericGraphObject;
