use serde::{Deserialize, Serialize};

use crate::Value;

/// A committed unit of the search query.
///
/// `facet` is only populated in faceted mode, where every committed entry
/// carries both halves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
	/// Field or category the value is scoped to.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub facet: Option<Value>,
	/// The committed value.
	pub value: Value,
}

impl SearchEntry {
	/// Creates an entry without a facet.
	pub fn new(value: impl Into<Value>) -> Self {
		Self {
			facet: None,
			value: value.into(),
		}
	}

	/// Creates a `{facet, value}` pair.
	pub fn faceted(facet: impl Into<Value>, value: impl Into<Value>) -> Self {
		Self {
			facet: Some(facet.into()),
			value: value.into(),
		}
	}

	/// Display text for the value half.
	pub fn display(&self) -> &str {
		self.value.display()
	}
}
