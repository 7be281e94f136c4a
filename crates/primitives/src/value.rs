use serde::{Deserialize, Serialize};

/// Opaque caller metadata carried alongside a value.
pub type Meta = serde_json::Map<String, serde_json::Value>;

/// A facet or value payload.
///
/// The same shape is used for both halves of a [`crate::SearchEntry`] and for
/// dropdown candidates. Exact-match comparisons only look at [`Value::value`];
/// label, partial flag, and metadata ride along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Value {
	/// Canonical string used for matching and committing.
	pub value: String,
	/// Optional display text.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Candidate only completes the input text instead of committing.
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub partial: bool,
	/// Caller-owned extras.
	#[serde(default, skip_serializing_if = "Meta::is_empty")]
	pub meta: Meta,
}

impl Value {
	/// Creates a bare value with no label or metadata.
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			..Self::default()
		}
	}

	/// Creates a partial candidate: selecting it fills the input with `value`.
	pub fn partial(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: Some(label.into()),
			partial: true,
			meta: Meta::new(),
		}
	}

	/// Returns this value with `label` attached.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Returns this value with one metadata key set.
	pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
		self.meta.insert(key.into(), value.into());
		self
	}

	/// Text shown to the user: the label when present, else the value.
	pub fn display(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.value)
	}

	/// Returns true when `text` is this value's canonical string.
	#[inline]
	pub fn matches(&self, text: &str) -> bool {
		self.value == text
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&Value> for Value {
	fn from(value: &Value) -> Self {
		value.clone()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn display_prefers_label() {
		assert_eq!(Value::new("nl").display(), "nl");
		assert_eq!(Value::new("nl").with_label("Netherlands").display(), "Netherlands");
	}

	#[test]
	fn matches_ignores_label_and_meta() {
		let value = Value::new("a").with_label("Alpha").with_meta("id", 7);
		assert!(value.matches("a"));
		assert!(!value.matches("Alpha"));
	}

	#[test]
	fn serde_skips_defaults() {
		let json = serde_json::to_string(&Value::new("a")).unwrap();
		assert_eq!(json, r#"{"value":"a"}"#);

		let partial: Value = serde_json::from_str(r#"{"value":"ab","label":"ab…","partial":true}"#).unwrap();
		assert_eq!(partial, Value::partial("ab", "ab…"));
	}
}
