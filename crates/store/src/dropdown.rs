//! Suggestion dropdown state.

use sieve_primitives::Value;

/// Which half of an entry the dropdown is proposing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownMode {
	Facet,
	#[default]
	Value,
}

/// Snapshot of the suggestion dropdown.
///
/// `highlighted` is always `None` or a valid index into `options`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownState {
	/// Whether the dropdown is shown at all.
	pub visible: bool,
	/// A lookup is pending and its loading indicator is due.
	pub loading: bool,
	/// Text rendered while loading.
	pub loading_label: Option<String>,
	/// Current candidates.
	pub options: Vec<Value>,
	pub mode: DropdownMode,
	/// Index of the highlighted candidate.
	pub highlighted: Option<usize>,
}

impl DropdownState {
	/// Hides the dropdown and drops its candidates. Returns true if anything changed.
	pub(crate) fn hide(&mut self) -> bool {
		let hidden = Self {
			mode: self.mode,
			..Self::default()
		};
		if *self == hidden {
			return false;
		}
		*self = hidden;
		true
	}

	/// Switches proposal mode, dropping candidates that belong to the other half.
	pub(crate) fn set_mode(&mut self, mode: DropdownMode) -> bool {
		if self.mode == mode {
			return false;
		}
		self.hide();
		self.mode = mode;
		true
	}

	pub(crate) fn show_loading(&mut self, label: Option<String>) {
		self.visible = true;
		self.loading = true;
		self.loading_label = label;
	}

	/// Applies a resolved candidate list.
	pub(crate) fn show_options(&mut self, options: Vec<Value>, auto_select_first: bool) {
		self.highlighted = (auto_select_first && !options.is_empty()).then_some(0);
		self.options = options;
		self.visible = true;
		self.loading = false;
		self.loading_label = None;
	}

	/// Candidate at `index`, only while the dropdown is shown.
	pub fn option(&self, index: usize) -> Option<&Value> {
		if !self.visible {
			return None;
		}
		self.options.get(index)
	}

	/// Highlighted candidate, only while the dropdown is shown.
	pub fn highlighted_option(&self) -> Option<&Value> {
		self.highlighted.and_then(|idx| self.option(idx))
	}

	/// Moves the highlight by `delta`, clamped to the candidate list.
	///
	/// With nothing highlighted, a forward move lands on the first candidate
	/// and a backward move on the last.
	pub(crate) fn move_highlight(&mut self, delta: isize) -> bool {
		if !self.visible || self.options.is_empty() || delta == 0 {
			return false;
		}
		let last = self.options.len() - 1;
		let next = match self.highlighted {
			None if delta > 0 => 0,
			None => last,
			Some(idx) => idx.saturating_add_signed(delta).min(last),
		};
		let changed = self.highlighted != Some(next);
		self.highlighted = Some(next);
		changed
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	fn shown(n: usize, highlighted: Option<usize>) -> DropdownState {
		let mut state = DropdownState::default();
		state.show_options((0..n).map(|i| Value::new(i.to_string())).collect(), false);
		state.highlighted = highlighted;
		state
	}

	#[rstest]
	#[case(3, None, 1, Some(0))]
	#[case(3, None, -1, Some(2))]
	#[case(3, Some(0), -1, Some(0))]
	#[case(3, Some(2), 1, Some(2))]
	#[case(3, Some(1), 5, Some(2))]
	#[case(0, None, 1, None)]
	fn highlight_clamps(#[case] n: usize, #[case] from: Option<usize>, #[case] delta: isize, #[case] expected: Option<usize>) {
		let mut state = shown(n, from);
		state.move_highlight(delta);
		assert_eq!(state.highlighted, expected);
	}

	#[test]
	fn auto_select_first_highlights_index_zero() {
		let mut state = DropdownState::default();
		state.show_options(vec![Value::new("A"), Value::new("B")], true);
		assert_eq!(state.highlighted_option(), Some(&Value::new("A")));

		state.show_options(Vec::new(), true);
		assert_eq!(state.highlighted, None);
	}

	#[test]
	fn hidden_dropdown_offers_nothing() {
		let mut state = shown(2, Some(1));
		assert!(state.hide());
		assert_eq!(state.option(0), None);
		assert_eq!(state.highlighted_option(), None);
		assert!(!state.hide());
	}

	#[test]
	fn mode_switch_drops_candidates() {
		let mut state = shown(2, Some(0));
		assert!(state.set_mode(DropdownMode::Facet));
		assert!(state.options.is_empty());
		assert_eq!(state.mode, DropdownMode::Facet);
	}
}
