//! The command parser.
//!
//! A small persistent state machine that consumes one rune per call and
//! recognizes vi's four-part command form: optional `"x` register, count,
//! command character, optional motion (itself with a count). State survives
//! across calls, so half-typed commands simply wait for the next rune.

use log::trace;

use crate::editor::Editor;
use crate::keymap::{self, KeyFlags};
use crate::keys::Rune;

/// One parsed command fragment, used for both the main command and its
/// motion. A `count` of 0 means "unspecified": the parser turns it into 1
/// before dispatch unless the key asked to see the sentinel.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Cmd {
	pub count: u16,
	pub chr: u8,
	pub arg: Option<Rune>,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
enum Phase {
	#[default]
	BufferDQuote,
	BufferName,
	CmdChar,
	CmdDouble,
	CmdArg,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
enum Target {
	#[default]
	Main,
	Motion,
}

/// Parser state. `phase == BufferDQuote` exactly when no partial command is
/// in flight; every dispatch and every error resets to that state.
#[derive(Default, Debug)]
pub struct Parser {
	buf: Option<char>,
	cur: Cmd,
	mot: Cmd,
	target: Target,
	phase: Phase,
}

impl Parser {
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	pub fn idle(&self) -> bool {
		self.phase == Phase::BufferDQuote
	}

	fn frag(&self) -> &Cmd {
		match self.target {
			Target::Main => &self.cur,
			Target::Motion => &self.mot,
		}
	}

	fn frag_mut(&mut self) -> &mut Cmd {
		match self.target {
			Target::Main => &mut self.cur,
			Target::Motion => &mut self.mot,
		}
	}
}

impl Editor {
	/// Advance the parser by one rune of command-mode input.
	pub(crate) fn step(&mut self, r: Rune) {
		if r == Rune::Esc {
			self.parser.reset();
			return;
		}
		loop {
			match self.parser.phase {
				Phase::BufferDQuote => {
					if r == Rune::Char('"') {
						self.parser.phase = Phase::BufferName;
						return;
					}
					self.parser.phase = Phase::CmdChar;
					// fall through with the same rune
					continue;
				}
				Phase::BufferName => {
					match r {
						Rune::Char(ch) if ch.is_ascii_lowercase() || ch.is_ascii_digit() => {
							self.parser.buf = Some(ch);
							self.parser.phase = Phase::CmdChar;
						}
						_ => self.bad_command(),
					}
					return;
				}
				Phase::CmdChar => return self.cmd_char(r),
				Phase::CmdDouble => {
					let chr = self.parser.frag().chr;
					if r.ascii() == Some(chr) {
						if self.parser.target == Target::Main {
							// `dd`, `cc`, `yy`: the command doubled operates
							// on whole lines, same as an explicit `_` motion
							self.parser.mot = Cmd { count: 1, chr: b'_', arg: None };
						}
						if keymap::flags(chr).contains(KeyFlags::ARG) {
							self.parser.phase = Phase::CmdArg;
							return;
						}
						return self.dispatch_parsed();
					}
					// Not a double after all: the rune starts the motion
					self.parser.target = Target::Motion;
					self.parser.phase = Phase::CmdChar;
					continue;
				}
				Phase::CmdArg => {
					self.parser.frag_mut().arg = Some(r);
					return self.finish();
				}
			}
		}
	}

	fn cmd_char(&mut self, r: Rune) {
		if let Rune::Char(d) = r
			&& d.is_ascii_digit()
			&& (d != '0' || self.parser.frag().count != 0) {
			let frag = self.parser.frag_mut();
			frag.count = frag
				.count
				.saturating_mul(10)
				.saturating_add((d as u8 - b'0') as u16);
			return;
		}
		let Some(ch) = r.ascii() else {
			return self.bad_command();
		};
		let Some(entry) = keymap::entry(ch) else {
			return self.bad_command();
		};
		let zero = entry.flags.contains(KeyFlags::ZERO_COUNT);
		let frag = self.parser.frag_mut();
		if frag.count == 0 && !zero {
			frag.count = 1;
		}
		frag.chr = ch;
		if entry.flags.contains(KeyFlags::DOUBLE) {
			self.parser.phase = Phase::CmdDouble;
		} else if entry.flags.contains(KeyFlags::ARG) {
			self.parser.phase = Phase::CmdArg;
		} else {
			self.finish();
		}
	}

	fn finish(&mut self) {
		let chr = self.parser.frag().chr;
		let flags = keymap::flags(chr);
		match self.parser.target {
			Target::Motion => {
				if !flags.contains(KeyFlags::MOTION) {
					return self.bad_command();
				}
				self.dispatch_parsed();
			}
			Target::Main => {
				if flags.contains(KeyFlags::TAKES_MOTION) {
					self.parser.target = Target::Motion;
					self.parser.phase = Phase::CmdChar;
					return;
				}
				self.dispatch_parsed();
			}
		}
	}

	fn dispatch_parsed(&mut self) {
		let buf = self.parser.buf;
		let cur = self.parser.cur;
		let mot = self.parser.mot;
		self.parser.reset();
		self.dispatch(buf, cur, mot);
	}

	fn bad_command(&mut self) {
		trace!("parse error in phase {:?}", self.parser);
		self.host.notify("! invalid command");
		self.parser.reset();
	}
}
