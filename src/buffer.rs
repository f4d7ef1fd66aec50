//! The rune-sequence buffer.
//!
//! Storage is a flat vector of runes with half-open edit primitives, a mark
//! table, and a commit-based undo log. Reads past the end of the text return
//! `'\n'`: motions treat everything beyond the last rune as an endless run of
//! newlines ("limbo"), which keeps line arithmetic total.

use std::collections::HashMap;

use crate::keys::Rune;

/// Mark names.
///
/// Most marks are plain runes set by the `m` command; the selection endpoints
/// get their own names so they cannot collide with anything the user types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Mark {
	Name(Rune),
	SelBeg,
	SelEnd,
}

#[derive(Clone, Debug, Default)]
struct EditOp {
	at: usize,
	removed: Vec<char>,
	inserted: Vec<char>,
}

/// One undo record: every edit between two commits, plus the cursor on both
/// sides so undo can put it back exactly.
#[derive(Clone, Debug, Default)]
struct Commit {
	ops: Vec<EditOp>,
	cursor_before: usize,
	cursor_after: usize,
}

#[derive(Default)]
pub struct Buffer {
	runes: Vec<char>,
	marks: HashMap<Mark, usize>,
	pending: Vec<EditOp>,
	hist: Vec<Commit>,
	applied: usize,
}

impl Buffer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_text(text: &str) -> Self {
		Self {
			runes: text.chars().collect(),
			..Self::default()
		}
	}

	pub fn len(&self) -> usize {
		self.runes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.runes.is_empty()
	}

	pub fn text(&self) -> String {
		self.runes.iter().collect()
	}

	/// The rune at `pos`. Everything past the end of the text is `'\n'`.
	pub fn rune_at(&self, pos: usize) -> char {
		self.runes.get(pos).copied().unwrap_or('\n')
	}

	/// The rune just before `pos`, with the same newline sentinel before the
	/// start of the text.
	pub fn prev_rune(&self, pos: usize) -> char {
		if pos == 0 { '\n' } else { self.rune_at(pos - 1) }
	}

	pub fn slice(&self, beg: usize, end: usize) -> Vec<char> {
		let len = self.len();
		self.runes[beg.min(len)..end.min(len)].to_vec()
	}

	// -- line and column queries ---------------------------------------------

	/// Offset of the first rune of the line containing `pos`.
	pub fn bol(&self, pos: usize) -> usize {
		let mut p = pos.min(self.len());
		while p > 0 && self.runes[p - 1] != '\n' {
			p -= 1;
		}
		p
	}

	/// Offset of the newline ending the line containing `pos`, or the end of
	/// the text when the last line has none.
	pub fn eol(&self, pos: usize) -> usize {
		let len = self.len();
		let mut p = pos.min(len);
		while p < len && self.runes[p] != '\n' {
			p += 1;
		}
		p
	}

	/// First rune of the line that is not a space or tab. May be the newline.
	pub fn first_nonblank(&self, pos: usize) -> usize {
		let len = self.len();
		let mut p = self.bol(pos);
		while p < len && matches!(self.runes[p], ' ' | '\t') {
			p += 1;
		}
		p
	}

	/// Zero-based line number of `pos`.
	pub fn line_of(&self, pos: usize) -> usize {
		let p = pos.min(self.len());
		self.runes[..p].iter().filter(|&&ch| ch == '\n').count()
	}

	/// Column of `pos` within its line. The newline sits at the line's last
	/// column.
	pub fn col_of(&self, pos: usize) -> usize {
		pos.min(self.len()) - self.bol(pos)
	}

	/// Zero-based number of the last real line.
	pub fn last_line(&self) -> usize {
		if self.runes.is_empty() {
			0
		} else {
			self.line_of(self.len() - 1)
		}
	}

	/// Start offset of the given line, if the buffer reaches it.
	pub fn line_start(&self, line: usize) -> Option<usize> {
		let mut at = 0;
		for _ in 0..line {
			at = self.eol(at) + 1;
			if at > self.len() {
				return None;
			}
		}
		Some(at)
	}

	/// The offset of `(line, col)`, with the column clamped into the line.
	pub fn pos_at(&self, line: usize, col: usize) -> Option<usize> {
		let start = self.line_start(line)?;
		let eol = self.eol(start);
		Some(start + col.min(eol - start))
	}

	// -- marks ---------------------------------------------------------------

	pub fn mark_set(&mut self, mark: Mark, pos: usize) {
		self.marks.insert(mark, pos.min(self.len()));
	}

	pub fn mark_get(&self, mark: Mark) -> Option<usize> {
		self.marks.get(&mark).copied()
	}

	// -- edits ---------------------------------------------------------------

	/// Replace `del` runes at `at` with `ins`, shifting marks to follow.
	/// Returns what was removed. Does not touch the undo log.
	fn splice(&mut self, at: usize, del: usize, ins: &[char]) -> Vec<char> {
		let len = self.len();
		let at = at.min(len);
		let end = (at + del).min(len);
		let removed: Vec<char> = self.runes.splice(at..end, ins.iter().copied()).collect();
		let cut = end - at;
		for pos in self.marks.values_mut() {
			if *pos >= end {
				*pos = *pos - cut + ins.len();
			} else if *pos > at {
				*pos = at;
			}
		}
		removed
	}

	pub fn insert(&mut self, at: usize, text: &[char]) {
		if text.is_empty() {
			return;
		}
		let at = at.min(self.len());
		self.splice(at, 0, text);
		self.pending.push(EditOp {
			at,
			removed: Vec::new(),
			inserted: text.to_vec(),
		});
	}

	pub fn insert_rune(&mut self, at: usize, ch: char) {
		self.insert(at, &[ch]);
	}

	pub fn delete(&mut self, beg: usize, end: usize) -> Vec<char> {
		let at = beg.min(self.len());
		let removed = self.splice(at, end.saturating_sub(beg), &[]);
		if !removed.is_empty() {
			self.pending.push(EditOp {
				at,
				removed: removed.clone(),
				inserted: Vec::new(),
			});
		}
		removed
	}

	// -- undo ----------------------------------------------------------------

	pub(crate) fn has_pending(&self) -> bool {
		!self.pending.is_empty()
	}

	/// Seal every edit since the last commit into a single undo record.
	/// Committing on top of undone history drops the stale tail.
	pub fn commit(&mut self, cursor_before: usize, cursor_after: usize) {
		if self.pending.is_empty() {
			return;
		}
		self.hist.truncate(self.applied);
		self.hist.push(Commit {
			ops: std::mem::take(&mut self.pending),
			cursor_before,
			cursor_after,
		});
		self.applied = self.hist.len();
	}

	/// Walk the undo log one record: backward normally, forward when `redo`.
	/// Returns the cursor recorded on the restored side, or `None` at either
	/// end of the log.
	pub fn undo(&mut self, redo: bool) -> Option<usize> {
		if redo {
			if self.applied == self.hist.len() {
				return None;
			}
			let commit = self.hist[self.applied].clone();
			for op in &commit.ops {
				self.splice(op.at, op.removed.len(), &op.inserted);
			}
			self.applied += 1;
			Some(commit.cursor_after.min(self.len()))
		} else {
			if self.applied == 0 {
				return None;
			}
			let commit = self.hist[self.applied - 1].clone();
			for op in commit.ops.iter().rev() {
				self.splice(op.at, op.inserted.len(), &op.removed);
			}
			self.applied -= 1;
			Some(commit.cursor_before.min(self.len()))
		}
	}
}
