//! Store configuration.
//!
//! [`StoreOptions`] is fixed once a store is built. Hooks (suppliers,
//! predicates, rewrite) are `Send + Sync` so the store itself stays `Send`.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use sieve_primitives::Value;

use crate::supplier::{Candidates, FnSupplier, Supplier};

/// Default wait before a pending lookup shows its loading indicator.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(100);

/// Default minimum input length before suppliers are consulted.
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Shape of the query the store builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
	/// At most one entry; each commit replaces it.
	#[default]
	Single,
	/// Any number of plain value entries.
	Multiple,
	/// Any number of `{facet, value}` entries.
	Faceted,
}

/// Whether free text may be committed without matching a candidate.
#[derive(Clone, Default)]
pub enum Allow {
	/// Any text is accepted.
	#[default]
	Always,
	/// Only candidates offered by the supplier are accepted.
	Never,
	/// Decided per input text.
	Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl Allow {
	/// Builds a predicate policy.
	pub fn predicate(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
		Self::Predicate(Arc::new(f))
	}

	/// Returns true when `text` may be committed as free text.
	pub fn permits(&self, text: &str) -> bool {
		match self {
			Self::Always => true,
			Self::Never => false,
			Self::Predicate(f) => f(text),
		}
	}

	/// Returns true when no free text is ever accepted.
	pub fn is_never(&self) -> bool {
		matches!(self, Self::Never)
	}
}

impl From<bool> for Allow {
	fn from(allow: bool) -> Self {
		if allow { Self::Always } else { Self::Never }
	}
}

impl fmt::Debug for Allow {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Always => f.write_str("Always"),
			Self::Never => f.write_str("Never"),
			Self::Predicate(_) => f.write_str("Predicate(..)"),
		}
	}
}

/// Minimum input length gate, in characters.
#[derive(Clone)]
pub enum MinLength {
	Fixed(usize),
	/// Evaluated against the current text on every refresh; never cached.
	Dynamic(Arc<dyn Fn(&str) -> usize + Send + Sync>),
}

impl MinLength {
	/// Builds a text-dependent gate.
	pub fn dynamic(f: impl Fn(&str) -> usize + Send + Sync + 'static) -> Self {
		Self::Dynamic(Arc::new(f))
	}

	/// Resolves the gate for `text`.
	pub fn resolve(&self, text: &str) -> usize {
		match self {
			Self::Fixed(n) => *n,
			Self::Dynamic(f) => f(text),
		}
	}
}

impl Default for MinLength {
	fn default() -> Self {
		Self::Fixed(DEFAULT_MIN_LENGTH)
	}
}

impl From<usize> for MinLength {
	fn from(n: usize) -> Self {
		Self::Fixed(n)
	}
}

impl fmt::Debug for MinLength {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Fixed(n) => f.debug_tuple("Fixed").field(n).finish(),
			Self::Dynamic(_) => f.write_str("Dynamic(..)"),
		}
	}
}

/// Text shown while a lookup is pending.
#[derive(Clone)]
pub enum LoadingLabel {
	Static(String),
	/// Computed from the pending query.
	Dynamic(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl LoadingLabel {
	/// Resolves the label for `text`.
	pub fn resolve(&self, text: &str) -> String {
		match self {
			Self::Static(label) => label.clone(),
			Self::Dynamic(f) => f(text),
		}
	}
}

impl fmt::Debug for LoadingLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Static(label) => f.debug_tuple("Static").field(label).finish(),
			Self::Dynamic(_) => f.write_str("Dynamic(..)"),
		}
	}
}

/// When the loading indicator of a pending lookup appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingDelay {
	/// Loading shows as soon as the lookup is pending.
	Immediate,
	/// Loading shows once the lookup has been pending this long.
	After(Duration),
}

impl Default for LoadingDelay {
	fn default() -> Self {
		Self::After(DEFAULT_LOADING_DELAY)
	}
}

impl From<bool> for LoadingDelay {
	/// `true` selects the default delay, `false` shows loading immediately.
	fn from(delay: bool) -> Self {
		if delay { Self::default() } else { Self::Immediate }
	}
}

impl From<Duration> for LoadingDelay {
	fn from(delay: Duration) -> Self {
		if delay.is_zero() { Self::Immediate } else { Self::After(delay) }
	}
}

/// Hook applied to every committed value.
pub type RewriteFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Immutable store configuration.
#[derive(Clone, Default)]
pub struct StoreOptions {
	pub(crate) kind: SearchKind,
	pub(crate) custom_values: Allow,
	pub(crate) custom_facets: Allow,
	pub(crate) min_length: MinLength,
	pub(crate) get_values: Option<Arc<dyn Supplier>>,
	pub(crate) get_facets: Option<Arc<dyn Supplier>>,
	pub(crate) loading_label: Option<LoadingLabel>,
	pub(crate) loading_delay: LoadingDelay,
	pub(crate) rewrite_value: Option<RewriteFn>,
	pub(crate) auto_select_first: bool,
}

impl StoreOptions {
	/// Returns the default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the search kind.
	pub fn kind(mut self, kind: SearchKind) -> Self {
		self.kind = kind;
		self
	}

	/// Sets the policy for committing free text as a value.
	pub fn custom_values(mut self, allow: impl Into<Allow>) -> Self {
		self.custom_values = allow.into();
		self
	}

	/// Sets the policy for committing free text as a facet.
	pub fn custom_facets(mut self, allow: impl Into<Allow>) -> Self {
		self.custom_facets = allow.into();
		self
	}

	/// Sets the minimum text length before suppliers are consulted.
	pub fn min_length(mut self, min_length: impl Into<MinLength>) -> Self {
		self.min_length = min_length.into();
		self
	}

	/// Sets the value supplier from a closure returning a list or a pending lookup.
	pub fn get_values<F, C>(self, f: F) -> Self
	where
		F: Fn(&str) -> C + Send + Sync + 'static,
		C: Into<Candidates>,
	{
		self.values_supplier(FnSupplier::new(move |query: &str| -> Candidates { f(query).into() }))
	}

	/// Sets the facet supplier from a closure returning a list or a pending lookup.
	pub fn get_facets<F, C>(self, f: F) -> Self
	where
		F: Fn(&str) -> C + Send + Sync + 'static,
		C: Into<Candidates>,
	{
		self.facets_supplier(FnSupplier::new(move |query: &str| -> Candidates { f(query).into() }))
	}

	/// Sets the value supplier.
	pub fn values_supplier(mut self, supplier: impl Supplier + 'static) -> Self {
		self.get_values = Some(Arc::new(supplier));
		self
	}

	/// Sets the facet supplier.
	pub fn facets_supplier(mut self, supplier: impl Supplier + 'static) -> Self {
		self.get_facets = Some(Arc::new(supplier));
		self
	}

	/// Sets a fixed loading text.
	pub fn loading_label(mut self, label: impl Into<String>) -> Self {
		self.loading_label = Some(LoadingLabel::Static(label.into()));
		self
	}

	/// Computes the loading text from the pending query.
	pub fn get_loading(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
		self.loading_label = Some(LoadingLabel::Dynamic(Arc::new(f)));
		self
	}

	/// Sets when the loading indicator appears.
	pub fn loading_delay(mut self, delay: impl Into<LoadingDelay>) -> Self {
		self.loading_delay = delay.into();
		self
	}

	/// Sets the hook applied once to every committed value.
	pub fn rewrite_value(mut self, f: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
		self.rewrite_value = Some(Arc::new(f));
		self
	}

	/// Highlights the first candidate whenever options are shown.
	pub fn auto_select_first(mut self, enabled: bool) -> Self {
		self.auto_select_first = enabled;
		self
	}

	/// Returns the search kind.
	pub fn search_kind(&self) -> SearchKind {
		self.kind
	}
}

impl fmt::Debug for StoreOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StoreOptions")
			.field("kind", &self.kind)
			.field("custom_values", &self.custom_values)
			.field("custom_facets", &self.custom_facets)
			.field("min_length", &self.min_length)
			.field("get_values", &self.get_values.is_some())
			.field("get_facets", &self.get_facets.is_some())
			.field("loading_label", &self.loading_label)
			.field("loading_delay", &self.loading_delay)
			.field("rewrite_value", &self.rewrite_value.is_some())
			.field("auto_select_first", &self.auto_select_first)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(Allow::Always, "x", true)]
	#[case(Allow::Never, "x", false)]
	#[case(Allow::predicate(|t| t.starts_with('#')), "#tag", true)]
	#[case(Allow::predicate(|t| t.starts_with('#')), "tag", false)]
	fn allow_policy(#[case] allow: Allow, #[case] text: &str, #[case] expected: bool) {
		assert_eq!(allow.permits(text), expected);
	}

	#[test]
	fn only_never_is_never() {
		assert!(Allow::Never.is_never());
		assert!(!Allow::Always.is_never());
		assert!(!Allow::predicate(|_| false).is_never());
	}

	#[rstest]
	#[case(true, LoadingDelay::After(DEFAULT_LOADING_DELAY))]
	#[case(false, LoadingDelay::Immediate)]
	fn loading_delay_from_bool(#[case] flag: bool, #[case] expected: LoadingDelay) {
		assert_eq!(LoadingDelay::from(flag), expected);
	}

	#[test]
	fn defaults() {
		let options = StoreOptions::new();
		assert_eq!(options.kind, SearchKind::Single);
		assert!(options.custom_values.permits("anything"));
		assert!(options.custom_facets.permits("anything"));
		assert_eq!(options.min_length.resolve(""), DEFAULT_MIN_LENGTH);
		assert_eq!(options.loading_delay, LoadingDelay::After(DEFAULT_LOADING_DELAY));
		assert!(!options.auto_select_first);
	}

	#[test]
	fn dynamic_min_length_sees_text() {
		let min = MinLength::dynamic(|t| if t.starts_with('a') { 1 } else { 2 });
		assert_eq!(min.resolve("a"), 1);
		assert_eq!(min.resolve("b"), 2);
	}
}
