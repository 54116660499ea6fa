//! Typed view declarations.
//!
//! ```text
//! graph_object_view! {
//!     pub struct GraphPlace {
//!         name / set_name: String => "name",
//!         category / set_category: String => "category",
//!     }
//! }
//! ```
//!
//! expands to a struct wrapping an `InnerObject`, a `GraphObject` impl, and
//! one getter/setter pair per field. Getters return `Result<Option<T>>` with
//! the `GraphObject::get_property` rules; setters serialize into the shared
//! map.

/// Declare a typed graph object view. See the [module docs](crate::model::view).
#[macro_export]
macro_rules! graph_object_view {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $getter:ident / $setter:ident : $ty:ty => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq)]
        $vis struct $name {
            inner: $crate::InnerObject,
        }

        impl $crate::GraphObject for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn from_inner(inner: $crate::InnerObject) -> Self {
                Self { inner }
            }

            fn inner(&self) -> &$crate::InnerObject {
                &self.inner
            }
        }

        #[allow(dead_code)]
        impl $name {
            /// An empty object seen through this view.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$field_meta])*
                pub fn $getter(&self) -> $crate::Result<::std::option::Option<$ty>> {
                    $crate::GraphObject::get_property(self, $key)
                }

                pub fn $setter(&self, value: $ty) -> $crate::Result<()> {
                    $crate::GraphObject::set_property(self, $key, value)
                }
            )*
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&*self.inner.read()).finish()
            }
        }

        impl $crate::__private::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::Serializer,
            {
                $crate::__private::Serialize::serialize(&*self.inner.read(), serializer)
            }
        }

        impl<'de> $crate::__private::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::Deserializer<'de>,
            {
                <$crate::JsonMap as $crate::__private::Deserialize>::deserialize(deserializer)
                    .map(|map| Self { inner: $crate::InnerObject::from_map(map) })
            }
        }
    };
}
