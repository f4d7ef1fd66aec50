//! The focused editing window: a buffer, a cursor, and a viewport.
//!
//! The core does not draw anything; the viewport exists because several
//! commands are screen-relative (`H`/`M`/`L`, the scroll group) and need to
//! know which lines are visible.

use crate::buffer::Buffer;

pub struct Window {
	pub buf: Buffer,
	/// Cursor offset into the buffer, in runes.
	pub cursor: usize,
	top: usize,
	rows: usize,
}

impl Window {
	pub fn new(buf: Buffer, rows: usize) -> Self {
		Self {
			buf,
			cursor: 0,
			top: 0,
			rows: rows.max(1),
		}
	}

	pub fn rows(&self) -> usize {
		self.rows
	}

	/// Start offsets of the visible lines, at most `rows` of them. Limbo
	/// lines past the end of the text are not reported.
	pub fn line_starts(&self) -> Vec<usize> {
		let mut l = Vec::with_capacity(self.rows);
		let mut at = self.top.min(self.buf.len());
		for _ in 0..self.rows {
			l.push(at);
			let eol = self.buf.eol(at);
			if eol + 1 >= self.buf.len() {
				break;
			}
			at = eol + 1;
		}
		l
	}

	/// Scroll the view by `n` lines, positive toward the end of the buffer.
	/// The cursor is dragged along so it stays on a visible line, keeping its
	/// column where the landing line allows.
	pub fn scroll(&mut self, n: isize) {
		if n >= 0 {
			for _ in 0..n {
				let eol = self.buf.eol(self.top);
				if eol + 1 >= self.buf.len() {
					break;
				}
				self.top = eol + 1;
			}
		} else {
			for _ in 0..n.unsigned_abs() {
				if self.top == 0 {
					break;
				}
				self.top = self.buf.bol(self.top - 1);
			}
		}
		let l = self.line_starts();
		let Some(&first) = l.first() else { return };
		let last = l.last().copied().unwrap_or(first);
		let col = self.buf.col_of(self.cursor);
		if self.cursor < first {
			let eol = self.buf.eol(first);
			self.cursor = first + col.min(eol - first);
		} else if self.cursor > self.buf.eol(last) {
			let eol = self.buf.eol(last);
			self.cursor = last + col.min(eol - last);
		}
	}
}
