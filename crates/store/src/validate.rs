//! Free-text commit validation.
//!
//! Pure functions of input text, current candidates, and policy. A rejection
//! is not an error: callers leave the buffer untouched and produce no entry.

use sieve_primitives::Value;

use crate::options::Allow;

/// Returns true when `text` may become a pending facet without a candidate.
pub fn can_commit_facet(text: &str, custom_facets: &Allow) -> bool {
	!text.is_empty() && custom_facets.permits(text)
}

/// Returns true when `text` may be committed as a custom value.
pub fn can_commit_value(text: &str, custom_values: &Allow) -> bool {
	!text.is_empty() && custom_values.permits(text)
}

/// Returns the candidate whose canonical string equals `text`.
pub fn exact_match<'a>(text: &str, options: &'a [Value]) -> Option<&'a Value> {
	options.iter().find(|option| option.matches(text))
}

/// Resolves raw text to the facet it would become, if any.
///
/// An exact candidate match wins and bypasses `custom_facets`.
pub fn resolve_facet(text: &str, options: &[Value], custom_facets: &Allow) -> Option<Value> {
	resolve(text, options, || can_commit_facet(text, custom_facets))
}

/// Resolves raw text to the value it would commit as, if any.
///
/// An exact candidate match wins and bypasses `custom_values`.
pub fn resolve_value(text: &str, options: &[Value], custom_values: &Allow) -> Option<Value> {
	resolve(text, options, || can_commit_value(text, custom_values))
}

fn resolve(text: &str, options: &[Value], custom_allowed: impl FnOnce() -> bool) -> Option<Value> {
	if text.is_empty() {
		return None;
	}
	if let Some(option) = exact_match(text, options) {
		return Some(option.clone());
	}
	custom_allowed().then(|| Value::new(text))
}
