use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use proptest::prelude::*;

use super::*;
use crate::error::SupplierError;
use crate::options::MinLength;
use crate::supplier::Candidates;

/// Must not invoke any supplier while the text is shorter than `min_length`.
///
/// - Enforced in: `SearchStore::refresh_dropdown`
/// - Failure symptom: Backends are queried for every keystroke below the threshold.
#[cfg_attr(test, test)]
pub(crate) fn test_gate_blocks_supplier() {
	let calls = Arc::new(AtomicUsize::new(0));
	let seen = Arc::clone(&calls);
	let mut store = SearchStore::new(
		StoreOptions::new()
			.kind(SearchKind::Faceted)
			.min_length(MinLength::dynamic(|t| if t.starts_with('a') { 1 } else { 2 }))
			.get_facets(move |_: &str| {
				seen.fetch_add(1, Ordering::SeqCst);
				vec!["f"]
			}),
	);

	let mut counts = Vec::new();
	store.focus();
	counts.push(calls.load(Ordering::SeqCst));
	for text in ["b", "bc", "a"] {
		store.set_input(text);
		counts.push(calls.load(Ordering::SeqCst));
	}
	assert_eq!(counts, [0, 0, 1, 2]);
}

/// Must keep the dropdown hidden whenever gating fails, regardless of in-flight results.
///
/// - Enforced in: `SearchStore::refresh_dropdown`, `SuggestEngine::accept`
/// - Failure symptom: A late answer pops the dropdown open under a cleared input.
#[cfg_attr(test, tokio::test(start_paused = true))]
pub(crate) async fn test_gate_hides_late_results() {
	let mut store = SearchStore::new(StoreOptions::new().loading_delay(false).get_values(|q: &str| {
		let q = q.to_owned();
		Candidates::pending(async move {
			tokio::time::sleep(Duration::from_millis(20)).await;
			Ok::<_, SupplierError>(vec![q])
		})
	}));
	store.set_input("abc");
	assert!(store.showing_dropdown());
	store.set_input("");
	assert!(!store.showing_dropdown());

	tokio::time::sleep(Duration::from_millis(50)).await;
	store.pump();
	store.settle().await;
	assert!(!store.showing_dropdown());
}

/// Must let only the newest lookup reach the dropdown.
///
/// - Enforced in: `SuggestEngine::accept`
/// - Failure symptom: Suggestions for an older prefix replace those for the current text.
#[cfg_attr(test, tokio::test(start_paused = true))]
pub(crate) async fn test_last_request_wins() {
	let mut store = SearchStore::new(StoreOptions::new().get_values(|q: &str| {
		let q = q.to_owned();
		let wait = 100 / q.len() as u64;
		Candidates::pending(async move {
			tokio::time::sleep(Duration::from_millis(wait)).await;
			Ok::<_, SupplierError>(vec![q])
		})
	}));
	for text in ["a", "ab", "abc", "abcd"] {
		store.set_input(text);
	}
	store.settle().await;
	tokio::time::sleep(Duration::from_millis(200)).await;
	store.pump();
	assert_eq!(store.dropdown().options, vec![Value::new("abcd")]);
}

/// Must hold at most one entry in single mode.
///
/// - Enforced in: `SearchStore::commit_value`, `SearchStore::set_entries`
/// - Failure symptom: A single-value search silently accumulates terms.
#[cfg_attr(test, test)]
pub(crate) fn test_single_holds_one_entry() {
	let mut store = SearchStore::default();
	for text in ["a", "b", "c"] {
		store.set_input(text);
		store.set_selection(None);
		assert!(store.entries().len() <= 1);
	}
	store.set_entries(["x", "y", "z"]);
	assert_eq!(store.entries().len(), 1);
}

/// Must commit faceted entries only with both a facet and a value.
///
/// - Enforced in: `SearchStore::commit_candidate`, `SearchStore::commit_raw`
/// - Failure symptom: Entries without a facet reach a backend expecting `facet:value`.
#[cfg_attr(test, test)]
pub(crate) fn test_faceted_entries_are_complete() {
	let mut store = SearchStore::new(StoreOptions::new().kind(SearchKind::Faceted).get_values(|_: &str| vec!["v"]));
	for text in ["a", "b", "c", "d"] {
		store.set_input(text);
		store.set_selection(None);
	}
	assert_eq!(store.entries().len(), 2);
	assert!(store.entries().iter().all(|e| e.facet.is_some()));
	assert_eq!(store.entries()[1], SearchEntry::faceted("c", "d"));
}

/// Must apply `rewrite_value` exactly once per committed value and never to facets.
///
/// - Enforced in: `SearchStore::commit_value`
/// - Failure symptom: Rewrites compound (e.g. prefixes applied twice) or mangle facet names.
#[cfg_attr(test, test)]
pub(crate) fn test_rewrite_once() {
	let calls = Arc::new(AtomicUsize::new(0));
	let seen = Arc::clone(&calls);
	let mut store = SearchStore::new(StoreOptions::new().kind(SearchKind::Faceted).rewrite_value(move |v| {
		seen.fetch_add(1, Ordering::SeqCst);
		Value::new(format!("#{}", v.value))
	}));
	store.set_input("tag:");
	assert_eq!(calls.load(Ordering::SeqCst), 0);
	store.set_input("x");
	store.set_selection(None);
	assert_eq!(calls.load(Ordering::SeqCst), 1);
	assert_eq!(store.entries(), [SearchEntry::faceted("tag", "#x")]);
}

/// Must leave text untouched and create no entry when free text is rejected.
///
/// - Enforced in: `SearchStore::commit_raw`, `SearchStore::try_commit_facet_text`
/// - Failure symptom: The user's typing vanishes without producing a term.
#[cfg_attr(test, test)]
pub(crate) fn test_rejection_preserves_text() {
	let mut store = SearchStore::new(StoreOptions::new().kind(SearchKind::Faceted).custom_facets(false).custom_values(false));
	store.set_input("a");
	store.set_selection(None);
	assert_eq!(store.text(), "a");
	assert_eq!(store.pending_facet(), None);
	assert!(store.entries().is_empty());
}

/// Must keep the cursor on a valid slot through any mix of navigation and entry edits.
///
/// - Enforced in: `SearchStore::set_cursor`, `nav::clamp`
/// - Failure symptom: Cursor points past the last entry and deletion panics or no-ops.
#[cfg_attr(test, test)]
pub(crate) fn test_cursor_valid_under_edits() {
	#[derive(Debug, Clone)]
	enum Op {
		Left,
		Right,
		Home,
		End,
		Select(usize),
		Remove,
		Caret(usize),
		Replace(usize),
	}

	let op = prop_oneof![
		Just(Op::Left),
		Just(Op::Right),
		Just(Op::Home),
		Just(Op::End),
		(0usize..8).prop_map(Op::Select),
		Just(Op::Remove),
		(0usize..3).prop_map(Op::Caret),
		(0usize..6).prop_map(Op::Replace),
	];

	proptest!(|(ops in prop::collection::vec(op, 0..60))| {
		let mut store = SearchStore::new(StoreOptions::new().kind(SearchKind::Multiple));
		store.set_entries(["a", "b", "c", "d"]);
		store.set_input("xy");
		for op in ops {
			match op {
				Op::Left => store.move_left(),
				Op::Right => store.move_right(),
				Op::Home => store.move_to_home(),
				Op::End => store.move_to_end(),
				Op::Select(i) => store.select_entry(i),
				Op::Remove => {
					store.remove_selected_entry();
				}
				Op::Caret(i) => store.set_input_selection(i, i),
				Op::Replace(n) => store.set_entries((0..n).map(|i| i.to_string())),
			}
			if let Cursor::Entry(i) = store.cursor() {
				prop_assert!(i < store.entries().len());
				prop_assert!(!store.showing_dropdown());
			}
		}
	});
}
