//! The action catalog.
//!
//! Actions own their side effects: buffer edits, mark and register updates,
//! mode changes, and host calls all happen here. Each returns whether it
//! applied; a failed action leaves the buffer untouched and is not
//! remembered for `.`.

use log::trace;

use crate::buffer::Mark;
use crate::cmd::Cmd;
use crate::editor::{Editor, Mode};
use crate::host::FocusDir;
use crate::keys::{self, Rune};
use crate::motion::Span;

/// Run `mc` as the operand of an action with count `count`, then store the
/// covered runes: always into the anonymous slot, into the named letter slot
/// when one was given, and line-wise spans rotate the numeric ring.
fn yank(ed: &mut Editor, buf: Option<char>, count: u16, mc: &Cmd) -> Option<Span> {
	let mut mc = *mc;
	mc.count = mc.count.saturating_mul(count.max(1));
	let m = ed.run_motion_chr(true, &mc)?;
	let runes = ed.win.buf.slice(m.beg, m.end);
	ed.yanks.store(buf, runes, m.linewise);
	Some(m)
}

/// `y`: yank the operand and leave the selection marks on it.
pub fn a_y(ed: &mut Editor, buf: Option<char>, c: &Cmd, mc: &Cmd) -> bool {
	let Some(m) = yank(ed, buf, c.count, mc) else {
		return false;
	};
	ed.win.buf.mark_set(Mark::SelBeg, m.beg);
	ed.win.buf.mark_set(Mark::SelEnd, m.end);
	true
}

/// `d` and `x`: yank then delete. `x` is delete with a one-rune `l` operand.
pub fn a_d(ed: &mut Editor, buf: Option<char>, c: &Cmd, mc: &Cmd) -> bool {
	let synth = Cmd { count: 1, chr: b'l', arg: None };
	let mc = if c.chr == b'x' { &synth } else { mc };
	let Some(m) = yank(ed, buf, c.count, mc) else {
		return false;
	};
	ed.win.buf.delete(m.beg, m.end);
	ed.win.cursor = m.beg;
	ed.commit();
	true
}

/// `c`: like `d`, but a line-wise operand keeps its trailing newline and
/// starts at the indent, and the editor drops into insert mode afterward.
/// `cw` from a word behaves like `ce`, so the space after the word survives.
pub fn a_c(ed: &mut Editor, buf: Option<char>, c: &Cmd, mc: &Cmd) -> bool {
	let mut mc = *mc;
	if matches!(mc.chr, b'w' | b'W') && !ed.win.buf.rune_at(ed.win.cursor).is_whitespace() {
		mc.chr = if mc.chr == b'w' { b'e' } else { b'E' };
	}
	let Some(mut m) = yank(ed, buf, c.count, &mc) else {
		return false;
	};
	if m.linewise {
		m.beg = ed.win.buf.first_nonblank(m.beg);
		m.end -= 1;
	}
	ed.win.buf.delete(m.beg, m.end);
	ed.win.cursor = m.beg;
	ed.enter_insert(1);
	true
}

/// `p` and `P`: insert a register's contents, `count` times over.
pub fn a_put(ed: &mut Editor, buf: Option<char>, c: &Cmd, _mc: &Cmd) -> bool {
	let Some(slot) = ed.yanks.slot(buf) else {
		return false;
	};
	if slot.is_empty() {
		return false;
	}
	let runes = slot.runes.clone();
	let linemode = slot.linemode;
	let cu = ed.win.cursor;
	let at = if linemode {
		if c.chr == b'P' {
			ed.win.buf.bol(cu)
		} else {
			(ed.win.buf.eol(cu) + 1).min(ed.win.buf.len())
		}
	} else if c.chr == b'p' && ed.win.buf.rune_at(cu) != '\n' {
		cu + 1
	} else {
		cu
	};
	for _ in 0..c.count.max(1) {
		ed.win.buf.insert(at, &runes);
	}
	ed.win.cursor = at;
	ed.commit();
	true
}

/// `m`: drop a mark named by the argument rune at the cursor.
pub fn a_mark(ed: &mut Editor, _buf: Option<char>, c: &Cmd, _mc: &Cmd) -> bool {
	let Some(arg) = c.arg else {
		return false;
	};
	ed.win.buf.mark_set(Mark::Name(arg), ed.win.cursor);
	true
}

/// The insert-entry family. Each variant places the cursor, then hands
/// control to the insertion interpreter; `o` and `O` open their new line by
/// feeding it an initial newline, which also records it for replay.
pub fn a_ins(ed: &mut Editor, _buf: Option<char>, c: &Cmd, _mc: &Cmd) -> bool {
	let cu = ed.win.cursor;
	match c.chr {
		b'a' => {
			if ed.win.buf.rune_at(cu) != '\n' {
				ed.win.cursor = cu + 1;
			}
		}
		b'A' => ed.win.cursor = ed.win.buf.eol(cu),
		b'I' => ed.win.cursor = ed.win.buf.first_nonblank(cu),
		b'o' => ed.win.cursor = ed.win.buf.eol(cu),
		b'O' => ed.win.cursor = ed.win.buf.first_nonblank(cu),
		_ => {}
	}
	ed.enter_insert(c.count);
	match c.chr {
		b'o' => ed.insert(Rune::Char('\n')),
		b'O' => {
			// the indent-preserving newline handler builds the line above;
			// the cursor then goes back to sit at its end
			let saved = ed.win.cursor;
			ed.insert(Rune::Char('\n'));
			ed.win.cursor = saved;
		}
		_ => {}
	}
	true
}

/// `u`: one direction-aware step through the undo log. Each use flips the
/// direction, which is what makes `u u` an alternation.
pub fn a_undo(ed: &mut Editor, _buf: Option<char>, _c: &Cmd, _mc: &Cmd) -> bool {
	let redo = ed.repeat.redo;
	let Some(cu) = ed.win.buf.undo(redo) else {
		return false;
	};
	ed.win.cursor = cu;
	ed.repeat.redo = !redo;
	true
}

/// `.`: re-dispatch the remembered command. A count overrides the stored
/// counts; a repeat of `u` keeps walking the same way through the undo log.
/// If the command lands in insert mode, the recorded insertion is replayed
/// and closed with Esc.
pub fn a_repeat(ed: &mut Editor, _buf: Option<char>, c: &Cmd, _mc: &Cmd) -> bool {
	if ed.repeat.cmd.chr == 0 || ed.repeat.cmd.chr == b'.' {
		return false;
	}
	let buf = ed.repeat.buf;
	let mut cmd = ed.repeat.cmd;
	let mut mot = ed.repeat.mot;
	if c.count != 0 {
		cmd.count = c.count;
		mot.count = 1;
	}
	if cmd.chr == b'u' {
		ed.repeat.redo = !ed.repeat.redo;
	} else {
		debug_assert!(!ed.repeat.redo);
	}
	trace!("repeat: cmd={cmd:?} motion={mot:?}");
	ed.find.locked = true;
	ed.log.lock();
	let ok = ed.dispatch(buf, cmd, mot);
	if ok && ed.mode() == Mode::Insert {
		let mut replay = ed.log.runes().to_vec();
		if matches!(cmd.chr, b'o' | b'O') && !replay.is_empty() {
			// the entry newline was already emitted by the action itself
			replay.remove(0);
		}
		for r in replay {
			ed.insert(r);
		}
		ed.insert(Rune::Esc);
	}
	ed.log.unlock();
	ed.find.locked = false;
	ok
}

/// The scroll group. `^E`/`^Y` move by the count; `^U`/`^D` move by the last
/// explicit count they were given, defaulting to a third of the view.
pub fn a_scroll(ed: &mut Editor, _buf: Option<char>, c: &Cmd, _mc: &Cmd) -> bool {
	let lines = match c.chr {
		keys::CTRL_E => c.count.max(1) as isize,
		keys::CTRL_Y => -(c.count.max(1) as isize),
		_ => {
			if c.count != 0 {
				ed.sticky_scroll = c.count;
			}
			let n = if ed.sticky_scroll != 0 {
				ed.sticky_scroll as isize
			} else {
				(ed.win.rows() / 3).max(1) as isize
			};
			if c.chr == keys::CTRL_U { -n } else { n }
		}
	};
	ed.win.scroll(lines);
	ed.scrolling = true;
	true
}

/// `^T`: show or hide the tag window.
pub fn a_tag(ed: &mut Editor, _buf: Option<char>, _c: &Cmd, _mc: &Cmd) -> bool {
	ed.host.toggle_tag();
	true
}

/// `^I`: run the current line as an external command.
pub fn a_run(ed: &mut Editor, _buf: Option<char>, _c: &Cmd, _mc: &Cmd) -> bool {
	let cu = ed.win.cursor;
	ed.host.run_line(&mut ed.win, cu);
	true
}

/// `^L` plus a direction rune: move focus to a neighboring window.
pub fn a_focus(ed: &mut Editor, _buf: Option<char>, c: &Cmd, _mc: &Cmd) -> bool {
	let dir = match c.arg {
		Some(Rune::Char('h')) => FocusDir::Left,
		Some(Rune::Char('j')) => FocusDir::Down,
		Some(Rune::Char('k')) => FocusDir::Up,
		Some(Rune::Char('l')) => FocusDir::Right,
		_ => return false,
	};
	ed.host.move_focus(dir);
	true
}

/// `^W`: persist the buffer through the host.
pub fn a_write(ed: &mut Editor, _buf: Option<char>, _c: &Cmd, _mc: &Cmd) -> bool {
	ed.host.persist(&ed.win.buf)
}

/// `^Q`: request a graceful exit.
pub fn a_quit(ed: &mut Editor, _buf: Option<char>, _c: &Cmd, _mc: &Cmd) -> bool {
	ed.host.quit();
	true
}
