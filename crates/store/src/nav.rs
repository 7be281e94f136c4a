//! Cursor state machine over `[entry0 .. entryN-1, INPUT]`.
//!
//! Everything here is pure: the store feeds in the entry count and whether
//! the text caret sits at the start of the input, and applies the result.
//! Movement clamps at both ends and never wraps.

/// Where keyboard focus rests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cursor {
	/// A committed entry, by index.
	Entry(usize),
	/// The text input after the last entry.
	#[default]
	Input,
}

impl Cursor {
	/// Selected entry index, if any.
	pub fn entry(self) -> Option<usize> {
		match self {
			Self::Entry(i) => Some(i),
			Self::Input => None,
		}
	}

	pub fn is_input(self) -> bool {
		matches!(self, Self::Input)
	}
}

/// Navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
	Left,
	Right,
	Home,
	End,
	/// Pointer selection of an entry.
	Select(usize),
}

/// State the navigator needs beyond the cursor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavContext {
	/// Number of committed entries.
	pub len: usize,
	/// Text caret collapsed at position 0.
	pub caret_at_start: bool,
	/// Free text can never be committed, so only entries are navigable.
	pub entries_only: bool,
}

/// Brings a cursor back inside `[0, len)` or onto the input.
pub fn clamp(cursor: Cursor, len: usize) -> Cursor {
	match cursor {
		Cursor::Entry(_) if len == 0 => Cursor::Input,
		Cursor::Entry(i) if i >= len => Cursor::Entry(len - 1),
		other => other,
	}
}

/// Applies `motion` to `cursor`.
///
/// From the input, `Left` and `Home` only move onto entries when the caret is
/// at the start of the text; otherwise the cursor stays and the caller moves
/// the caret instead. With `entries_only` the caret position is ignored.
pub fn step(cursor: Cursor, motion: Motion, ctx: NavContext) -> Cursor {
	let cursor = clamp(cursor, ctx.len);
	let can_leave_input = ctx.len > 0 && (ctx.caret_at_start || ctx.entries_only);

	match (cursor, motion) {
		(Cursor::Input, Motion::Left) if can_leave_input => Cursor::Entry(ctx.len - 1),
		(Cursor::Input, Motion::Home) if can_leave_input => Cursor::Entry(0),
		(Cursor::Input, Motion::Left | Motion::Right | Motion::Home) => Cursor::Input,
		(Cursor::Entry(i), Motion::Left) => Cursor::Entry(i.saturating_sub(1)),
		(Cursor::Entry(i), Motion::Right) if i + 1 < ctx.len => Cursor::Entry(i + 1),
		(Cursor::Entry(_), Motion::Right) => Cursor::Input,
		(Cursor::Entry(_), Motion::Home) => Cursor::Entry(0),
		(_, Motion::End) => Cursor::Input,
		(_, Motion::Select(i)) if i < ctx.len => Cursor::Entry(i),
		(current, Motion::Select(_)) => current,
	}
}
