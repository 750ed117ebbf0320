//! The seam to a document codec.
//!
//! The engine never parses or prints text. A host plugs in a codec that turns
//! bytes into a [`Value`] and back, and hands the result to
//! [`crate::Configuration`] or [`crate::Tree::load`].

use crate::{Result, value::Value};

/// Converts between serialized bytes and the document value model.
///
/// # Examples
///
/// ```
/// use arbor::{DocumentCodec, Error, Result, value::Value};
///
/// /// Treats the whole input as one text property.
/// struct PlainText;
///
/// impl DocumentCodec for PlainText {
///     fn decode(&self, bytes: &[u8]) -> Result<Option<Value>> {
///         if bytes.is_empty() {
///             return Ok(None);
///         }
///         let text = std::str::from_utf8(bytes).map_err(|e| Error::Codec {
///             reason: e.to_string(),
///         })?;
///         Ok(Some(arbor::value::Record::new().with("text", text).into()))
///     }
///
///     fn encode(&self, document: &Value) -> Result<Vec<u8>> {
///         let text = document
///             .as_record()
///             .and_then(|record| record.property("text"))
///             .and_then(Value::as_text)
///             .unwrap_or_default();
///         Ok(text.as_bytes().to_vec())
///     }
/// }
/// ```
pub trait DocumentCodec {
    /// Parses a whole document. `Ok(None)` means the input holds no document
    /// (for example an empty file).
    fn decode(&self, bytes: &[u8]) -> Result<Option<Value>>;

    /// Serializes a whole document.
    fn encode(&self, document: &Value) -> Result<Vec<u8>>;
}
