//! Search input store: entries, input buffer, cursor, and dropdown.
//!
//! # Purpose
//!
//! * Owns every piece of mutable interaction state for one search input.
//! * Turns UI events (typing, selection, navigation, focus) into entry commits.
//! * Applies asynchronous suggestion results without letting stale ones through.
//!
//! # Mental model
//!
//! * The input is a row `[entry0 .. entryN-1, INPUT]`; [`Cursor`] rests on one slot.
//! * Typing always lands in the input buffer and re-queries the dropdown.
//! * Committing converts the buffer into a [`SearchEntry`], or into a pending
//!   facet first when faceted mode is still waiting for one.
//! * Async lookups are fire-and-forget; their answers queue up until the owner
//!   calls [`SearchStore::pump`] or awaits [`SearchStore::settle`].
//!
//! # Key types
//!
//! | Type | Meaning | Constraints | Constructed / mutated in |
//! |---|---|---|---|
//! | [`SearchStore`] | Store handle | Must be the only writer of its state | this module |
//! | [`InputBuffer`] | Text, caret, pending facet | Caret must stay within the text | `set_input`, `commit.rs` |
//! | [`DropdownState`] | Suggestion snapshot | Highlight must index `options` | `refresh.rs` |
//! | [`Cursor`] | Entry index or input | Entry index must be `< entries.len()` | `set_cursor` |
//! | [`StoreEvent`] | Change notification | Must be pushed on every observable change | everywhere |
//!
//! # Invariants
//!
//! * Must not consult any supplier while the text is shorter than `min_length`.
//! * Must hide the dropdown whenever gating fails.
//! * Must keep at most one entry in single mode.
//! * Must commit faceted entries only with both a facet and a value.
//! * Must apply `rewrite_value` exactly once per committed value.
//! * Must leave text untouched when free text is rejected.
//!
//! # Data flow
//!
//! 1. Caller invokes `set_input(text)`.
//! 2. The buffer updates and `refresh_dropdown` checks the length gate.
//! 3. The facet or value supplier answers synchronously or with a future.
//! 4. Futures resolve on tokio tasks and queue a resolution.
//! 5. `pump`/`settle` apply current resolutions to [`DropdownState`].
//! 6. `set_selection`/`select_exact`/`blur` commit and clear the buffer.
//!
//! # Concurrency & ordering
//!
//! * All transitions take `&mut self` and run to completion.
//! * Background tasks only send messages; generation checks discard superseded ones.
//!
//! # Failure modes & recovery
//!
//! * Validation rejection: logged at debug, buffer kept, no entry.
//! * Supplier failure: logged at warn, dropdown shows an empty list.
//! * Out-of-range indices: ignored.

mod commit;
mod refresh;

use sieve_primitives::{IntoEntry, SearchEntry, Value, to_entries};

use crate::dropdown::DropdownState;
use crate::event::{EventQueue, StoreEvent};
use crate::input::InputBuffer;
use crate::nav::{self, Cursor, Motion, NavContext};
use crate::options::{SearchKind, StoreOptions};
use crate::suggest::SuggestEngine;

/// Typing this after a facet name in faceted mode commits the facet.
pub const FACET_SEPARATOR: char = ':';

/// Interaction state engine for one faceted search input.
#[derive(Debug)]
pub struct SearchStore {
	options: StoreOptions,
	entries: Vec<SearchEntry>,
	input: InputBuffer,
	dropdown: DropdownState,
	cursor: Cursor,
	focused: bool,
	suggest: SuggestEngine,
	events: EventQueue,
}

impl Default for SearchStore {
	fn default() -> Self {
		Self::new(StoreOptions::default())
	}
}

impl SearchStore {
	/// Creates an empty, unfocused store with the cursor on the input.
	pub fn new(options: StoreOptions) -> Self {
		Self {
			options,
			entries: Vec::new(),
			input: InputBuffer::default(),
			dropdown: DropdownState::default(),
			cursor: Cursor::Input,
			focused: false,
			suggest: SuggestEngine::new(),
			events: EventQueue::default(),
		}
	}

	pub fn options(&self) -> &StoreOptions {
		&self.options
	}

	pub fn is_single(&self) -> bool {
		self.options.kind == SearchKind::Single
	}

	pub fn is_multiple(&self) -> bool {
		self.options.kind == SearchKind::Multiple
	}

	pub fn is_faceted(&self) -> bool {
		self.options.kind == SearchKind::Faceted
	}

	pub fn entries(&self) -> &[SearchEntry] {
		&self.entries
	}

	pub fn input(&self) -> &InputBuffer {
		&self.input
	}

	/// Current input text.
	pub fn text(&self) -> &str {
		&self.input.text
	}

	pub fn pending_facet(&self) -> Option<&Value> {
		self.input.pending_facet.as_ref()
	}

	pub fn dropdown(&self) -> &DropdownState {
		&self.dropdown
	}

	pub fn showing_dropdown(&self) -> bool {
		self.dropdown.visible
	}

	pub fn is_dropdown_loading(&self) -> bool {
		self.dropdown.loading
	}

	/// Candidate `set_selection(None)` would commit.
	pub fn highlighted_candidate(&self) -> Option<&Value> {
		self.dropdown.highlighted_option()
	}

	pub fn cursor(&self) -> Cursor {
		self.cursor
	}

	/// Entry under the cursor.
	pub fn selected_entry(&self) -> Option<&SearchEntry> {
		self.cursor.entry().and_then(|i| self.entries.get(i))
	}

	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Returns and clears change notifications accumulated since the last call.
	pub fn drain_events(&mut self) -> Vec<StoreEvent> {
		self.events.drain()
	}

	/// Marks the input focused. Does not query suppliers on its own.
	pub fn focus(&mut self) -> &mut Self {
		if !self.focused {
			self.focused = true;
			self.events.push(StoreEvent::Focus);
		}
		self
	}

	/// Leaves the input, committing its text if it validates and discarding it otherwise.
	pub fn blur(&mut self) -> &mut Self {
		if !self.input.text.is_empty() && !self.commit_raw() {
			tracing::debug!(text = %self.input.text, "store.blur_discard");
			self.input.clear_text();
			self.input.pending_facet = None;
			self.events.push(StoreEvent::Input);
		}
		self.suggest.invalidate();
		self.hide_dropdown();
		self.set_cursor(Cursor::Input);
		if self.focused {
			self.focused = false;
			self.events.push(StoreEvent::Focus);
		}
		self
	}

	/// Replaces the input text and re-queries the dropdown, even if the text is unchanged.
	///
	/// In faceted mode, text ending in [`FACET_SEPARATOR`] tries to commit the
	/// part before it as the pending facet.
	pub fn set_input(&mut self, text: impl Into<String>) {
		let before = self.input.clone();
		self.input.set_text(text.into());
		if self.input != before {
			self.events.push(StoreEvent::Input);
		}
		self.set_cursor(Cursor::Input);

		if self.awaiting_facet()
			&& let Some(facet) = self.input.text.strip_suffix(FACET_SEPARATOR)
		{
			let facet = facet.to_owned();
			if self.try_commit_facet_text(&facet) {
				return;
			}
		}
		self.refresh_dropdown();
	}

	/// Records the caret/selection inside the input text, in characters.
	///
	/// A collapsed caret at 0 lets `move_left`/`move_to_home` reach the entries.
	pub fn set_input_selection(&mut self, start: usize, end: usize) {
		if self.input.select(start, end) {
			self.events.push(StoreEvent::Input);
		}
	}

	pub fn move_left(&mut self) {
		self.navigate(Motion::Left);
	}

	pub fn move_right(&mut self) {
		self.navigate(Motion::Right);
	}

	/// Jumps to the first entry, or to the start of the text first if the caret is elsewhere.
	///
	/// When custom values are never accepted the caret is skipped.
	pub fn move_to_home(&mut self) {
		self.navigate(Motion::Home);
	}

	pub fn move_to_end(&mut self) {
		self.navigate(Motion::End);
	}

	/// Puts the cursor on entry `index`; out-of-range indices are ignored.
	pub fn select_entry(&mut self, index: usize) {
		self.navigate(Motion::Select(index));
	}

	fn navigate(&mut self, motion: Motion) {
		let ctx = NavContext {
			len: self.entries.len(),
			caret_at_start: self.input.caret_at_start(),
			entries_only: self.options.custom_values.is_never(),
		};
		let next = nav::step(self.cursor, motion, ctx);
		if motion == Motion::Home && next.is_input() && self.input.select(0, 0) {
			self.events.push(StoreEvent::Input);
		}
		self.set_cursor(next);
	}

	/// Moves the cursor, clamped to the entries. Landing on an entry closes the dropdown.
	fn set_cursor(&mut self, cursor: Cursor) {
		let cursor = nav::clamp(cursor, self.entries.len());
		if cursor != self.cursor {
			tracing::trace!(from = ?self.cursor, to = ?cursor, "store.cursor");
			self.cursor = cursor;
			self.events.push(StoreEvent::Cursor);
		}
		if !cursor.is_input() {
			self.suggest.invalidate();
			self.hide_dropdown();
		}
	}

	/// Replaces all entries. The input buffer is left alone.
	///
	/// Single mode keeps only the last supplied entry.
	pub fn set_entries<I>(&mut self, entries: I)
	where
		I: IntoIterator,
		I::Item: IntoEntry,
	{
		let mut entries = to_entries(entries);
		if self.is_single() && entries.len() > 1 {
			entries.drain(..entries.len() - 1);
		}
		if entries != self.entries {
			self.entries = entries;
			self.events.push(StoreEvent::Entries);
		}
		self.set_cursor(self.cursor);
	}

	/// Removes entry `index`, keeping the cursor on the entry it was on when possible.
	pub fn remove_entry(&mut self, index: usize) -> Option<SearchEntry> {
		if index >= self.entries.len() {
			return None;
		}
		let removed = self.entries.remove(index);
		self.events.push(StoreEvent::Entries);
		let cursor = match self.cursor {
			Cursor::Entry(i) if i > index => Cursor::Entry(i - 1),
			other => other,
		};
		self.set_cursor(cursor);
		Some(removed)
	}

	/// Removes the entry under the cursor.
	pub fn remove_selected_entry(&mut self) -> Option<SearchEntry> {
		self.cursor.entry().and_then(|i| self.remove_entry(i))
	}
}

#[cfg(test)]
mod invariants;
