/// A position in the input text, measured in characters (not bytes).
pub type CharIdx = usize;

/// Caret or selection inside the input buffer.
///
/// The anchor is the fixed end and the head is where the caret sits. A
/// collapsed range (anchor == head) is a plain caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextRange {
	/// The fixed end of the range.
	pub anchor: CharIdx,
	/// The moving end of the range (caret position).
	pub head: CharIdx,
}

impl TextRange {
	/// Creates a new range from anchor to head.
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// Creates a collapsed caret at `pos`.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Returns the smaller of anchor and head.
	#[inline]
	pub fn min(&self) -> CharIdx {
		std::cmp::min(self.anchor, self.head)
	}

	/// Returns the larger of anchor and head.
	#[inline]
	pub fn max(&self) -> CharIdx {
		std::cmp::max(self.anchor, self.head)
	}

	/// Returns true if anchor equals head.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	/// Returns true for a collapsed caret before the first character.
	///
	/// Left/Home only leave the input for the entry list from here.
	#[inline]
	pub fn is_at_start(&self) -> bool {
		self.anchor == 0 && self.head == 0
	}

	/// Clamps both ends to `len` characters.
	pub fn clamp(self, len: CharIdx) -> Self {
		Self::new(self.anchor.min(len), self.head.min(len))
	}
}
