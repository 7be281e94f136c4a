//! Selection and commit paths.

use sieve_primitives::{SearchEntry, Value};
use tracing::debug;

use super::SearchStore;
use crate::dropdown::DropdownMode;
use crate::event::StoreEvent;
use crate::nav::Cursor;
use crate::validate::{resolve_facet, resolve_value};

impl SearchStore {
	/// Commits candidate `index`, the highlighted candidate, or the raw text.
	///
	/// With `Some(index)` outside the shown candidates nothing happens. With
	/// `None` and no highlight, the text commits through exact match and then
	/// the custom value/facet policy. Partial candidates only fill the input.
	pub fn set_selection(&mut self, index: Option<usize>) {
		let candidate = match index {
			Some(index) => match self.dropdown.option(index) {
				Some(candidate) => Some(candidate.clone()),
				None => {
					debug!(index, "store.selection_out_of_range");
					return;
				}
			},
			None => self.dropdown.highlighted_option().cloned(),
		};

		match candidate {
			Some(candidate) if candidate.partial => self.set_input(candidate.value),
			Some(candidate) => self.commit_candidate(candidate),
			None => {
				self.commit_raw();
			}
		}
	}

	/// Commits candidate `index` as a full selection, partial or not.
	pub fn select_exact(&mut self, index: usize) {
		let Some(mut candidate) = self.dropdown.option(index).cloned() else {
			debug!(index, "store.selection_out_of_range");
			return;
		};
		candidate.partial = false;
		self.commit_candidate(candidate);
	}

	/// Faceted mode with no facet chosen yet.
	pub(crate) fn awaiting_facet(&self) -> bool {
		self.is_faceted() && self.input.pending_facet.is_none()
	}

	fn candidates_for(&self, mode: DropdownMode) -> &[Value] {
		if self.dropdown.mode == mode { &self.dropdown.options } else { &[] }
	}

	fn commit_candidate(&mut self, candidate: Value) {
		if self.awaiting_facet() {
			self.set_pending_facet(candidate);
		} else {
			self.commit_value(candidate);
		}
	}

	/// Commits the input text as typed. Returns false when it was rejected.
	pub(crate) fn commit_raw(&mut self) -> bool {
		let text = self.input.text.clone();
		if self.awaiting_facet() {
			return self.try_commit_facet_text(&text);
		}
		match resolve_value(&text, self.candidates_for(DropdownMode::Value), &self.options.custom_values) {
			Some(value) => {
				self.commit_value(value);
				true
			}
			None => {
				debug!(text = %text, "store.value_rejected");
				false
			}
		}
	}

	pub(crate) fn try_commit_facet_text(&mut self, text: &str) -> bool {
		match resolve_facet(text, self.candidates_for(DropdownMode::Facet), &self.options.custom_facets) {
			Some(facet) => {
				self.set_pending_facet(facet);
				true
			}
			None => {
				debug!(text, "store.facet_rejected");
				false
			}
		}
	}

	fn set_pending_facet(&mut self, facet: Value) {
		debug!(facet = %facet.value, "store.facet_pending");
		self.input.pending_facet = Some(facet);
		self.input.clear_text();
		self.events.push(StoreEvent::Input);
		self.set_cursor(Cursor::Input);
		self.refresh_dropdown();
	}

	fn commit_value(&mut self, value: Value) {
		let value = match &self.options.rewrite_value {
			Some(rewrite) => rewrite(&value),
			None => value,
		};
		let entry = SearchEntry {
			facet: self.input.pending_facet.take(),
			value,
		};
		debug!(facet = ?entry.facet.as_ref().map(|f| &f.value), value = %entry.value.value, "store.commit");

		if self.is_single() {
			self.entries.clear();
		}
		self.entries.push(entry);
		self.events.push(StoreEvent::Entries);

		self.input.clear_text();
		self.events.push(StoreEvent::Input);
		self.set_cursor(Cursor::Input);
		self.refresh_dropdown();
	}
}
