//! JSON text boundary — parse graph objects from text, write them back.
//!
//! ```text
//! "{\"id\": \"4\"}" → parse::<V>() → InnerObject → V
//! V → to_string(format) / write(writer, format) → JSON text
//! ```

use std::io::Write;

use serde_json::Value;

use crate::model::{GraphObject, InnerObject};
use crate::Result;

/// Output layout for serialized graph objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Single line, no insignificant whitespace.
    #[default]
    Compact,
    /// Indented, one property per line.
    Pretty,
}

/// Parse JSON text into a view. The top level must be an object.
pub fn parse<T: GraphObject>(text: &str) -> Result<T> {
    let value: Value = serde_json::from_str(text)?;
    from_value(value)
}

/// Adopt an already-parsed JSON value as a view.
pub fn from_value<T: GraphObject>(value: Value) -> Result<T> {
    let inner = InnerObject::from_value(value).inspect_err(|e| {
        tracing::debug!(view = T::TYPE_NAME, error = %e, "rejected top-level JSON");
    })?;
    Ok(T::from_inner(inner))
}

/// Serialize the current content of a view.
pub fn to_string<T: GraphObject>(view: &T, format: JsonFormat) -> Result<String> {
    let map = view.inner().read();
    let text = match format {
        JsonFormat::Compact => serde_json::to_string(&*map)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(&*map)?,
    };
    Ok(text)
}

/// Serialize the current content of a view into `writer`, followed by a newline.
///
/// The object is serialized to a buffer first; the lock is released before
/// `writer` sees any bytes.
pub fn write<T: GraphObject>(view: &T, writer: &mut dyn Write, format: JsonFormat) -> Result<()> {
    let text = to_string(view, format)?;
    writeln!(writer, "{text}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, GenericGraphObject};
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let obj: GenericGraphObject = parse(r#"{"id": "4", "name": "Mark"}"#).unwrap();
        assert_eq!(obj.get("name"), Some(json!("Mark")));
    }

    #[test]
    fn test_parse_rejects_array() {
        let err = parse::<GenericGraphObject>("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::NotAnObject { got: "array" }));
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse::<GenericGraphObject>("{\"id\": ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_formats() {
        let obj = GenericGraphObject::from_value(json!({"id": 1})).unwrap();
        assert_eq!(to_string(&obj, JsonFormat::Compact).unwrap(), r#"{"id":1}"#);
        assert_eq!(to_string(&obj, JsonFormat::Pretty).unwrap(), "{\n  \"id\": 1\n}");
        assert_eq!(JsonFormat::default(), JsonFormat::Compact);
    }

    #[test]
    fn test_write_appends_newline() {
        let obj = GenericGraphObject::from_value(json!({"id": 1})).unwrap();
        let mut out = Vec::new();
        write(&obj, &mut out, JsonFormat::Compact).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"id\":1}\n");
    }

    /// Writer that mutates the object it is being handed.
    struct TouchingWriter {
        view: GenericGraphObject,
        out: Vec<u8>,
    }

    impl Write for TouchingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.view.insert("written", true);
            self.out.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_releases_lock_before_writer_runs() {
        let obj = GenericGraphObject::from_value(json!({"id": 1})).unwrap();
        let mut writer = TouchingWriter { view: obj.cast(), out: Vec::new() };
        write(&obj, &mut writer, JsonFormat::Compact).unwrap();
        assert_eq!(String::from_utf8(writer.out).unwrap(), "{\"id\":1}\n");
        assert_eq!(obj.get("written"), Some(json!(true)));
    }
}
