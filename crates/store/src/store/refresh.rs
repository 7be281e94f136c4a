//! Dropdown refresh and async resolution plumbing.

use sieve_primitives::Value;
use tracing::{debug, trace, warn};

use super::SearchStore;
use crate::dropdown::DropdownMode;
use crate::error::SupplierError;
use crate::event::StoreEvent;
use crate::suggest::{Requested, Resolution};

impl SearchStore {
	/// Re-queries candidates for the current text.
	///
	/// Runs on every input change; callers may also use it directly, e.g. to
	/// populate the dropdown on focus when `min_length` is 0.
	pub fn refresh_dropdown(&mut self) {
		let text = self.input.text.clone();
		let min_length = self.options.min_length.resolve(&text);
		if text.chars().count() < min_length {
			trace!(min_length, "store.gated");
			self.suggest.invalidate();
			self.hide_dropdown();
			return;
		}

		let mode = if self.awaiting_facet() { DropdownMode::Facet } else { DropdownMode::Value };
		let supplier = match mode {
			DropdownMode::Facet => self.options.get_facets.clone(),
			DropdownMode::Value => self.options.get_values.clone(),
		};
		let Some(supplier) = supplier else {
			trace!(?mode, "store.no_supplier");
			self.suggest.invalidate();
			self.hide_dropdown();
			return;
		};

		if self.dropdown.set_mode(mode) {
			self.events.push(StoreEvent::Dropdown);
		}
		match self.suggest.request(supplier.as_ref(), &text, self.options.loading_delay) {
			Requested::Ready(values) => self.show_candidates(None, Ok(values)),
			Requested::Failed(err) => self.show_candidates(None, Err(err)),
			Requested::Pending { loading_now: true } => self.show_loading(),
			Requested::Pending { loading_now: false } => {}
		}
	}

	/// Applies every resolution that has already arrived. Returns true if any did.
	pub fn pump(&mut self) -> bool {
		let mut changed = false;
		while let Some(resolution) = self.suggest.try_next() {
			self.apply_resolution(resolution);
			changed = true;
		}
		changed
	}

	/// Waits until no lookup is pending, applying resolutions as they arrive.
	///
	/// Never returns while a supplier future stays unresolved.
	pub async fn settle(&mut self) {
		while let Some(resolution) = self.suggest.next().await {
			self.apply_resolution(resolution);
		}
	}

	/// Moves the dropdown highlight by `delta`. Returns true if it moved.
	pub fn move_highlight(&mut self, delta: isize) -> bool {
		let moved = self.dropdown.move_highlight(delta);
		if moved {
			self.events.push(StoreEvent::Dropdown);
		}
		moved
	}

	pub(crate) fn hide_dropdown(&mut self) {
		if self.dropdown.hide() {
			self.events.push(StoreEvent::Dropdown);
		}
	}

	fn show_loading(&mut self) {
		let label = self.options.loading_label.as_ref().map(|label| label.resolve(&self.input.text));
		self.dropdown.show_loading(label);
		self.events.push(StoreEvent::Dropdown);
	}

	fn apply_resolution(&mut self, resolution: Resolution) {
		match resolution {
			Resolution::LoadingDue { generation } => {
				trace!(generation, "store.loading_due");
				self.show_loading();
			}
			Resolution::Candidates { generation, result } => self.show_candidates(Some(generation), result),
		}
	}

	/// Shows a lookup outcome; failures show as an empty list.
	fn show_candidates(&mut self, generation: Option<u64>, result: Result<Vec<Value>, SupplierError>) {
		let values = result.unwrap_or_else(|err| {
			warn!(?generation, error = %err, "store.supplier_failed");
			Vec::new()
		});
		debug!(?generation, count = values.len(), "store.candidates");
		self.dropdown.show_options(values, self.options.auto_select_first);
		self.events.push(StoreEvent::Dropdown);
	}
}
