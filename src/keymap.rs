//! The keys table: the single source of truth for how command-mode runes are
//! classified.
//!
//! Each ASCII code point maps to at most one entry carrying parse flags and
//! either a motion handler or an action handler. The two handler kinds are a
//! tagged variant on purpose: nothing here should ever need an unchecked
//! union.

use bitflags::bitflags;

use crate::action;
use crate::cmd::Cmd;
use crate::editor::Editor;
use crate::keys::{CTRL_D, CTRL_E, CTRL_I, CTRL_L, CTRL_Q, CTRL_T, CTRL_U, CTRL_W, CTRL_Y};
use crate::motion::{self, Span};

pub type MotionFn = fn(&mut Editor, bool, &Cmd) -> Option<Span>;
pub type ActionFn = fn(&mut Editor, Option<char>, &Cmd, &Cmd) -> bool;

bitflags! {
	#[derive(Clone, Copy, PartialEq, Eq, Debug)]
	pub struct KeyFlags: u8 {
		/// Usable in the motion slot.
		const MOTION = 1 << 0;
		/// The command consumes a motion. Exclusive with MOTION.
		const TAKES_MOTION = 1 << 1;
		/// The command doubles itself (`dd`) to act on whole lines.
		const DOUBLE = 1 << 2;
		/// One more rune follows as an argument (mark name, find target).
		const ARG = 1 << 3;
		/// Deliver an unspecified count as the 0 sentinel instead of 1.
		const ZERO_COUNT = 1 << 4;
	}
}

#[derive(Clone, Copy)]
pub enum Binding {
	Motion(MotionFn),
	Action(ActionFn),
}

#[derive(Clone, Copy)]
pub struct KeyEntry {
	pub flags: KeyFlags,
	pub bind: Binding,
}

pub fn entry(chr: u8) -> Option<&'static KeyEntry> {
	KEYS.get(chr as usize).and_then(|e| e.as_ref())
}

pub fn flags(chr: u8) -> KeyFlags {
	entry(chr).map(|e| e.flags).unwrap_or(KeyFlags::empty())
}

const fn mot(flags: KeyFlags, run: MotionFn) -> Option<KeyEntry> {
	Some(KeyEntry { flags, bind: Binding::Motion(run) })
}

const fn act(flags: KeyFlags, run: ActionFn) -> Option<KeyEntry> {
	Some(KeyEntry { flags, bind: Binding::Action(run) })
}

static KEYS: [Option<KeyEntry>; 128] = build();

const M: KeyFlags = KeyFlags::MOTION;
const MA: KeyFlags = KeyFlags::MOTION.union(KeyFlags::ARG);
const MZ: KeyFlags = KeyFlags::MOTION.union(KeyFlags::ZERO_COUNT);
const OP: KeyFlags = KeyFlags::TAKES_MOTION.union(KeyFlags::DOUBLE);
const NONE: KeyFlags = KeyFlags::empty();

const fn build() -> [Option<KeyEntry>; 128] {
	let mut k: [Option<KeyEntry>; 128] = [None; 128];

	// motions
	k[b'h' as usize] = mot(M, motion::m_hl);
	k[b'l' as usize] = mot(M, motion::m_hl);
	k[b'j' as usize] = mot(M, motion::m_jk);
	k[b'k' as usize] = mot(M, motion::m_jk);
	k[b't' as usize] = mot(MA, motion::m_find);
	k[b'T' as usize] = mot(MA, motion::m_find);
	k[b'f' as usize] = mot(MA, motion::m_find);
	k[b'F' as usize] = mot(MA, motion::m_find);
	k[b';' as usize] = mot(M, motion::m_findrep);
	k[b',' as usize] = mot(M, motion::m_findrep);
	k[b'0' as usize] = mot(M, motion::m_bol);
	k[b'^' as usize] = mot(M, motion::m_bol);
	k[b'$' as usize] = mot(M, motion::m_eol);
	k[b'_' as usize] = mot(M, motion::m_line);
	k[b'w' as usize] = mot(M, motion::m_word);
	k[b'W' as usize] = mot(M, motion::m_word);
	k[b'e' as usize] = mot(M, motion::m_word);
	k[b'E' as usize] = mot(M, motion::m_word);
	k[b'b' as usize] = mot(M, motion::m_back);
	k[b'B' as usize] = mot(M, motion::m_back);
	k[b'{' as usize] = mot(M, motion::m_par);
	k[b'}' as usize] = mot(M, motion::m_par);
	k[b'%' as usize] = mot(M, motion::m_match);
	k[b'G' as usize] = mot(MZ, motion::m_gotoline);
	k[b'H' as usize] = mot(M, motion::m_vis);
	k[b'M' as usize] = mot(M, motion::m_vis);
	k[b'L' as usize] = mot(M, motion::m_vis);
	k[b'\'' as usize] = mot(MA, motion::m_mark);
	k[b'`' as usize] = mot(MA, motion::m_mark);
	k[b'n' as usize] = mot(M, motion::m_search);
	k[b'N' as usize] = mot(M, motion::m_search);
	k[b'/' as usize] = mot(M, motion::m_sel);

	// actions
	k[b'y' as usize] = act(OP, action::a_y);
	k[b'd' as usize] = act(OP, action::a_d);
	k[b'c' as usize] = act(OP, action::a_c);
	k[b'x' as usize] = act(NONE, action::a_d);
	k[b'p' as usize] = act(NONE, action::a_put);
	k[b'P' as usize] = act(NONE, action::a_put);
	k[b'm' as usize] = act(KeyFlags::ARG, action::a_mark);
	k[b'i' as usize] = act(NONE, action::a_ins);
	k[b'I' as usize] = act(NONE, action::a_ins);
	k[b'a' as usize] = act(NONE, action::a_ins);
	k[b'A' as usize] = act(NONE, action::a_ins);
	k[b'o' as usize] = act(NONE, action::a_ins);
	k[b'O' as usize] = act(NONE, action::a_ins);
	k[b'u' as usize] = act(NONE, action::a_undo);
	k[b'.' as usize] = act(KeyFlags::ZERO_COUNT, action::a_repeat);
	k[CTRL_E as usize] = act(NONE, action::a_scroll);
	k[CTRL_Y as usize] = act(NONE, action::a_scroll);
	k[CTRL_U as usize] = act(KeyFlags::ZERO_COUNT, action::a_scroll);
	k[CTRL_D as usize] = act(KeyFlags::ZERO_COUNT, action::a_scroll);
	k[CTRL_T as usize] = act(NONE, action::a_tag);
	k[CTRL_I as usize] = act(NONE, action::a_run);
	k[CTRL_L as usize] = act(KeyFlags::ARG, action::a_focus);
	k[CTRL_W as usize] = act(NONE, action::a_write);
	k[CTRL_Q as usize] = act(NONE, action::a_quit);

	k
}
