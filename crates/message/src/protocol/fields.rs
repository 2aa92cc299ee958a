//! Header field containers.
//!
//! A [`Fields`] value carries everything about a message that is not the body:
//! arbitrary name/value pairs plus the start-line pieces (method and target for
//! requests, reason phrase for responses). [`Message`](crate::protocol::Message)
//! only talks to its header through this trait, so the concrete layout stays a
//! detail of the implementation.

use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;

use crate::protocol::FieldError;

/// Accessor contract between a message and its header container.
///
/// Lookups never fail: absent names (and names that could never be stored)
/// read back as the empty string.
pub trait Fields {
    /// Sets `name` to `value`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError`] when the container cannot represent the name or value.
    fn set(&mut self, name: &str, value: &str) -> Result<(), FieldError>;

    /// Returns the value of `name`, or `""` when it is not present.
    fn get(&self, name: &str) -> &str;

    fn method(&self) -> &str;

    fn set_method(&mut self, method: &str);

    fn target(&self) -> &str;

    fn set_target(&mut self, target: &str);

    fn reason(&self) -> &str;

    fn set_reason(&mut self, reason: &str);
}

/// Default [`Fields`] container backed by an [`http::HeaderMap`].
///
/// Field names are case-insensitive. The start-line pieces are kept as plain
/// strings and accepted as given.
#[derive(Debug, Clone, Default)]
pub struct BasicFields {
    method: String,
    target: String,
    reason: String,
    map: HeaderMap,
}

impl BasicFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `name`, returning whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.map.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates the name/value pairs, names in their lowercase form.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(name, value)| (name.as_str(), value_str(value)))
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.map
    }
}

impl Fields for BasicFields {
    fn set(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| FieldError::invalid_name(name, e))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| FieldError::invalid_value(name, e))?;

        self.map.insert(header_name, header_value);
        Ok(())
    }

    fn get(&self, name: &str) -> &str {
        self.map.get(name).map_or("", value_str)
    }

    fn method(&self) -> &str {
        &self.method
    }

    fn set_method(&mut self, method: &str) {
        method.clone_into(&mut self.method);
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn set_target(&mut self, target: &str) {
        target.clone_into(&mut self.target);
    }

    fn reason(&self) -> &str {
        &self.reason
    }

    fn set_reason(&mut self, reason: &str) {
        reason.clone_into(&mut self.reason);
    }
}

// values only ever enter the map through `set`, so they started life as `&str`
fn value_str(value: &HeaderValue) -> &str {
    std::str::from_utf8(value.as_bytes()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let mut fields = BasicFields::new();
        fields.set("Content-Type", "text/plain").unwrap();

        assert_eq!(fields.get("content-type"), "text/plain");
        assert_eq!(fields.get("CONTENT-TYPE"), "text/plain");
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn absent_field_reads_as_empty() {
        let fields = BasicFields::new();

        assert_eq!(fields.get("host"), "");
        assert_eq!(fields.get("not a header name"), "");
        assert!(fields.is_empty());
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut fields = BasicFields::new();
        fields.set("Server", "first").unwrap();
        fields.set("server", "second").unwrap();

        assert_eq!(fields.get("Server"), "second");
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec![("server", "second")]);
    }

    #[test]
    fn non_ascii_value_round_trips() {
        let mut fields = BasicFields::new();
        fields.set("x-greeting", "grüß dich").unwrap();

        assert_eq!(fields.get("x-greeting"), "grüß dich");
    }

    #[test]
    fn invalid_name_and_value_are_reported() {
        let mut fields = BasicFields::new();

        assert!(matches!(fields.set("bad name", "v"), Err(FieldError::InvalidName { .. })));
        assert!(matches!(fields.set("x-bad", "line\nbreak"), Err(FieldError::InvalidValue { .. })));
        assert!(fields.is_empty());
    }

    #[test]
    fn remove_field() {
        let mut fields = BasicFields::new();
        fields.set("Host", "localhost").unwrap();

        assert!(fields.contains("host"));
        assert!(fields.remove("HOST"));
        assert!(!fields.remove("HOST"));
        assert_eq!(fields.get("host"), "");
    }

    #[test]
    fn start_line_pieces_are_stored_verbatim() {
        let mut fields = BasicFields::new();
        fields.set_method("not a method");
        fields.set_target("");
        fields.set_reason("Teapot");

        assert_eq!(fields.method(), "not a method");
        assert_eq!(fields.target(), "");
        assert_eq!(fields.reason(), "Teapot");
    }
}
