//! This module contains the `Editor` struct, the central container for state
//! in the core.
//!
//! Every rune the host feeds passes through `Editor::feed`, and every parsed
//! command comes back through `Editor::dispatch`. The editor also owns the
//! memories that make `.`, `u`, `;` and counted insertions work.

use log::trace;

use crate::cmd::{Cmd, Parser};
use crate::host::Host;
use crate::insert::InsertLog;
use crate::keymap::{self, Binding, MotionFn};
use crate::keys::Rune;
use crate::motion::Span;
use crate::register::YankRing;
use crate::window::Window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
	#[default]
	Command,
	Insert,
}

/// The last `t`/`T`/`f`/`F` target, replayed by `;` and `,`.
///
/// `locked` suppresses updates while a replay is in flight, so the stored
/// target survives being replayed through the same motion code.
#[derive(Default, Debug)]
pub struct FindMemory {
	pub locked: bool,
	pub chr: u8,
	pub arg: Option<Rune>,
}

/// What `.` replays, and which way the next `u` walks the undo log.
#[derive(Default, Debug)]
pub struct RepeatMemory {
	pub buf: Option<char>,
	pub cmd: Cmd,
	pub mot: Cmd,
	pub redo: bool,
}

pub struct Editor {
	pub win: Window,
	pub(crate) host: Box<dyn Host>,
	pub(crate) mode: Mode,
	pub(crate) parser: Parser,
	pub(crate) log: InsertLog,
	pub(crate) find: FindMemory,
	pub(crate) repeat: RepeatMemory,
	pub(crate) yanks: YankRing,
	/// Set by the scroll actions so the host does not recenter on the cursor.
	pub scrolling: bool,
	/// Repeat count for the insertion in progress.
	pub(crate) cnti: u16,
	/// Cursor position at the start of the current undo record.
	pub(crate) undo_cursor: usize,
	/// Last explicit count given to `^U`/`^D`.
	pub(crate) sticky_scroll: u16,
}

impl Editor {
	pub fn new(buf: crate::buffer::Buffer, rows: usize, host: Box<dyn Host>) -> Self {
		Self {
			win: Window::new(buf, rows),
			host,
			mode: Mode::Command,
			parser: Parser::default(),
			log: InsertLog::default(),
			find: FindMemory::default(),
			repeat: RepeatMemory::default(),
			yanks: YankRing::new(),
			scrolling: false,
			cnti: 1,
			undo_cursor: 0,
			sticky_scroll: 0,
		}
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn yanks(&self) -> &YankRing {
		&self.yanks
	}

	pub fn text(&self) -> String {
		self.win.buf.text()
	}

	/// Consume one rune of input.
	///
	/// Runs to completion: whatever the rune triggers (a dispatch, an
	/// insertion replay) has fully happened by the time this returns.
	pub fn feed(&mut self, r: Rune) {
		if !self.win.buf.has_pending() {
			self.undo_cursor = self.win.cursor;
		}
		match self.mode {
			Mode::Insert => self.insert(r),
			Mode::Command => self.step(r),
		}
	}

	/// Seal the edits of the current command into one undo record.
	pub(crate) fn commit(&mut self) {
		let after = self.win.cursor;
		self.win.buf.commit(self.undo_cursor, after);
	}

	/// Apply a fully parsed command.
	///
	/// A standalone motion just moves the cursor. Actions run their handler;
	/// successful ones are remembered for `.` unless the key is a control
	/// character (or `.` itself, which must never repeat itself).
	pub(crate) fn dispatch(&mut self, buf: Option<char>, cur: Cmd, mot: Cmd) -> bool {
		trace!("dispatch: buf={buf:?} cmd={cur:?} motion={mot:?}");
		let Some(entry) = keymap::entry(cur.chr) else {
			return false;
		};
		match entry.bind {
			Binding::Motion(run) => {
				let Some(m) = self.run_motion(run, false, &cur) else {
					return false;
				};
				self.win.cursor = m.end;
				true
			}
			Binding::Action(run) => {
				let ok = run(self, buf, &cur, &mot);
				if ok && !cur.chr.is_ascii_control() && cur.chr != b'.' {
					self.repeat.buf = buf;
					self.repeat.cmd = cur;
					self.repeat.mot = mot;
					if cur.chr != b'u' {
						self.repeat.redo = false;
					}
				}
				ok
			}
		}
	}

	/// Run a motion handler, normalizing the span for operators.
	pub(crate) fn run_motion(&mut self, run: MotionFn, as_op: bool, c: &Cmd) -> Option<Span> {
		let mut m = run(self, as_op, c)?;
		if as_op && m.end < m.beg {
			std::mem::swap(&mut m.beg, &mut m.end);
		}
		Some(m)
	}

	/// Run the motion bound to `mc.chr`. The parser only hands motions to
	/// this slot, so a non-motion binding is a failure, not a panic.
	pub(crate) fn run_motion_chr(&mut self, as_op: bool, mc: &Cmd) -> Option<Span> {
		let entry = keymap::entry(mc.chr)?;
		let Binding::Motion(run) = entry.bind else {
			return None;
		};
		self.run_motion(run, as_op, mc)
	}

	/// Switch to insert mode, remembering the repeat count for Esc.
	pub(crate) fn enter_insert(&mut self, cnti: u16) {
		self.cnti = cnti.max(1);
		self.log.clear();
		self.mode = Mode::Insert;
	}
}
