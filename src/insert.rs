//! The insertion-mode interpreter.
//!
//! Every rune typed in insert mode lands here. The interpreter records what
//! it sees so a counted insertion, or a later `.`, can replay the whole
//! typing session rune for rune.

use crate::editor::{Editor, Mode};
use crate::keys::Rune;

pub const LOG_CAP: usize = 512;

/// The replay log for the insertion in progress.
///
/// While `locked`, nothing is appended and the log is not cleared; that is
/// what keeps a replay from re-recording itself.
#[derive(Default, Debug)]
pub struct InsertLog {
	runes: Vec<Rune>,
	locked: bool,
}

impl InsertLog {
	pub fn clear(&mut self) {
		if !self.locked {
			self.runes.clear();
		}
	}

	pub fn push(&mut self, r: Rune) {
		if self.locked {
			return;
		}
		self.runes.push(r);
		if self.runes.len() >= LOG_CAP {
			// overflow: drop the recording and disable replay for this
			// insertion; the lock clears again when Esc ends it
			self.runes.clear();
			self.locked = true;
		}
	}

	pub fn lock(&mut self) {
		self.locked = true;
	}

	pub fn unlock(&mut self) {
		self.locked = false;
	}

	pub fn runes(&self) -> &[Rune] {
		&self.runes
	}
}

impl Editor {
	/// Interpret one rune of insert-mode input.
	pub(crate) fn insert(&mut self, r: Rune) {
		if r != Rune::Esc {
			self.log.push(r);
		}
		match r {
			Rune::Esc => {
				self.log.lock();
				for _ in 1..self.cnti.max(1) {
					let replay = self.log.runes().to_vec();
					for rr in replay {
						self.insert(rr);
					}
				}
				self.log.unlock();
				let cu = self.win.cursor;
				if self.win.buf.prev_rune(cu) != '\n' {
					self.win.cursor = cu - 1;
				}
				self.commit();
				self.mode = Mode::Command;
			}
			Rune::Backspace => {
				let cu = self.win.cursor;
				if cu > 0 {
					self.win.buf.delete(cu - 1, cu);
					self.win.cursor = cu - 1;
				}
			}
			Rune::Char('\n') => {
				let cu = self.win.cursor;
				self.win.buf.insert_rune(cu, '\n');
				let mut at = cu + 1;
				// carry the indentation of the line we just left
				let mut from = self.win.buf.bol(cu);
				while from < cu {
					let ch = self.win.buf.rune_at(from);
					if ch != ' ' && ch != '\t' {
						break;
					}
					self.win.buf.insert_rune(at, ch);
					at += 1;
					from += 1;
				}
				self.win.cursor = at;
			}
			Rune::Char(ch) => {
				let cu = self.win.cursor;
				self.win.buf.insert_rune(cu, ch);
				self.win.cursor = cu + 1;
			}
			// special keys have no insert-mode meaning
			_ => {}
		}
	}
}
