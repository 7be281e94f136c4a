//! Total conversions from literal shapes into canonical values and entries.
//!
//! Callers hand the store bare strings, values, or full entries; everything is
//! funnelled through here so the rest of the engine only ever sees
//! [`Value`] and [`SearchEntry`]. None of these conversions can fail.

use crate::{SearchEntry, Value};

/// Literal shapes accepted where a [`SearchEntry`] is expected.
pub trait IntoEntry {
	/// Converts into a canonical entry.
	fn into_entry(self) -> SearchEntry;
}

impl IntoEntry for SearchEntry {
	fn into_entry(self) -> SearchEntry {
		self
	}
}

impl IntoEntry for &SearchEntry {
	fn into_entry(self) -> SearchEntry {
		self.clone()
	}
}

impl IntoEntry for Value {
	fn into_entry(self) -> SearchEntry {
		SearchEntry::new(self)
	}
}

impl IntoEntry for &Value {
	fn into_entry(self) -> SearchEntry {
		SearchEntry::new(self.clone())
	}
}

impl IntoEntry for &str {
	fn into_entry(self) -> SearchEntry {
		SearchEntry::new(self)
	}
}

impl IntoEntry for String {
	fn into_entry(self) -> SearchEntry {
		SearchEntry::new(self)
	}
}

impl<F: Into<Value>, V: Into<Value>> IntoEntry for (F, V) {
	fn into_entry(self) -> SearchEntry {
		to_facet_value(self.0, self.1)
	}
}

/// Normalizes an optional literal into a value; `None` becomes the empty value.
pub fn to_value<V: Into<Value>>(value: Option<V>) -> Value {
	value.map(Into::into).unwrap_or_default()
}

/// Normalizes a single literal into an entry.
pub fn to_entry(entry: impl IntoEntry) -> SearchEntry {
	entry.into_entry()
}

/// Normalizes every literal in `entries`, preserving order.
pub fn to_entries<I>(entries: I) -> Vec<SearchEntry>
where
	I: IntoIterator,
	I::Item: IntoEntry,
{
	entries.into_iter().map(IntoEntry::into_entry).collect()
}

/// Pairs a facet with a value.
pub fn to_facet_value(facet: impl Into<Value>, value: impl Into<Value>) -> SearchEntry {
	SearchEntry::faceted(facet, value)
}
