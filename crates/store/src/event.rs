//! Change notifications drained by the UI layer.

/// Observable state that changed since the last drain.
///
/// Events carry no payload; consumers re-read the store snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreEvent {
	/// Focus was gained or lost.
	Focus,
	/// Input text, caret, or pending facet changed.
	Input,
	/// Committed entries changed.
	Entries,
	/// Entry cursor moved.
	Cursor,
	/// Dropdown visibility, loading state, candidates, or highlight changed.
	Dropdown,
}

/// Pending notifications, one per kind, in order of first occurrence.
///
/// Bounded by the number of [`StoreEvent`] kinds however long the UI goes
/// without draining.
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
	events: Vec<StoreEvent>,
}

impl EventQueue {
	pub(crate) fn push(&mut self, event: StoreEvent) {
		if !self.events.contains(&event) {
			self.events.push(event);
		}
	}

	pub(crate) fn drain(&mut self) -> Vec<StoreEvent> {
		std::mem::take(&mut self.events)
	}
}
