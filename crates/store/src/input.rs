//! Live text-input buffer.

use sieve_primitives::{TextRange, Value};

/// Text being typed plus the facet it will be scoped to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputBuffer {
	/// Current text.
	pub text: String,
	/// Facet chosen in faceted mode while the value half is still being typed.
	pub pending_facet: Option<Value>,
	/// Caret or selection inside `text`, in characters.
	pub selection: TextRange,
}

impl InputBuffer {
	/// Length of `text` in characters.
	pub fn char_len(&self) -> usize {
		self.text.chars().count()
	}

	/// Returns true when the caret is collapsed before the first character.
	pub fn caret_at_start(&self) -> bool {
		self.selection.is_at_start()
	}

	/// Replaces the text and parks the caret after the last character.
	pub(crate) fn set_text(&mut self, text: String) {
		self.text = text;
		self.selection = TextRange::point(self.char_len());
	}

	/// Records a caret/selection range, clamped to the text.
	pub(crate) fn select(&mut self, start: usize, end: usize) -> bool {
		let range = TextRange::new(start, end).clamp(self.char_len());
		if range == self.selection {
			return false;
		}
		self.selection = range;
		true
	}

	/// Clears the text, keeping any pending facet.
	pub(crate) fn clear_text(&mut self) {
		self.text.clear();
		self.selection = TextRange::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn caret_follows_text() {
		let mut input = InputBuffer::default();
		assert!(input.caret_at_start());
		input.set_text("héllo".into());
		assert_eq!(input.selection, TextRange::point(5));
		assert!(!input.caret_at_start());
	}

	#[test]
	fn selection_is_clamped() {
		let mut input = InputBuffer::default();
		input.set_text("abc".into());
		assert!(input.select(1, 10));
		assert_eq!(input.selection, TextRange::new(1, 3));
		assert!(!input.select(1, 3));
	}
}
