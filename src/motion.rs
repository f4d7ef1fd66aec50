//! The motion catalog.
//!
//! Every motion has the same shape: it receives the parsed fragment and a
//! flag saying whether an operator is consuming it, and answers with the span
//! it covers, or `None` when it cannot move. Standalone use only cares about
//! `end`; operators get a range normalized to `beg <= end` by the caller.
//!
//! Several motions are line-wise only in some positions (`$` with a count
//! from the indent, `{`/`}` from at-or-before the first non-blank, `%` when
//! both delimiters sit alone at their line ends). That non-orthogonality is
//! the command language, not an accident; resist the urge to regularize it.

use crate::buffer::{Buffer, Mark};
use crate::cmd::Cmd;
use crate::editor::Editor;

/// A motion result: a half-open rune range plus the line-mode flag that
/// changes how yank and delete treat it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Span {
	pub beg: usize,
	pub end: usize,
	pub linewise: bool,
}

impl Span {
	fn to(beg: usize, end: usize) -> Self {
		Self { beg, end, linewise: false }
	}

	fn order(&mut self) {
		if self.end < self.beg {
			std::mem::swap(&mut self.beg, &mut self.end);
		}
	}

	/// Stretch the span to whole lines, trailing newline included.
	fn extend_lines(&mut self, buf: &Buffer) {
		self.order();
		self.beg = buf.bol(self.beg);
		self.end = (buf.eol(self.end) + 1).min(buf.len());
		self.linewise = true;
	}
}

/// The `w`/`e`/`b` word alphabet: ASCII alphanumerics, underscore, and the
/// latin-1 block 0xC0..0xFF. The latter is a crude "alphabetic above ASCII";
/// it is kept as is rather than silently widened to full Unicode.
fn is_word(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch == '_' || ('\u{c0}'..='\u{ff}').contains(&ch)
}

fn is_blank(ch: char) -> bool {
	ch == ' ' || ch == '\t'
}

/// `h` and `l`: horizontal movement within the line.
///
/// `h` fails on column 0. Standalone `l` refuses to land on the newline but
/// keeps whatever ground it covered before failing; as an operand it may take
/// the newline with it.
pub fn m_hl(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let cu = ed.win.cursor;
	let count = c.count.max(1) as usize;
	if c.chr == b'h' {
		let col = ed.win.buf.col_of(cu);
		if col == 0 {
			return None;
		}
		return Some(Span::to(cu, cu - col.min(count)));
	}
	if as_op {
		let mut end = cu;
		for _ in 0..count {
			if end >= ed.win.buf.len() {
				break;
			}
			let ch = ed.win.buf.rune_at(end);
			end += 1;
			if ch == '\n' {
				break;
			}
		}
		return Some(Span::to(cu, end));
	}
	let mut at = cu;
	for _ in 0..count {
		if ed.win.buf.rune_at(at + 1) == '\n' {
			ed.win.cursor = at;
			return None;
		}
		at += 1;
	}
	Some(Span::to(cu, at))
}

/// `j` and `k`: vertical movement keeping the column.
pub fn m_jk(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let buf = &ed.win.buf;
	let cu = ed.win.cursor;
	let count = c.count.max(1) as usize;
	let line = buf.line_of(cu);
	let target = if c.chr == b'k' {
		if count > line {
			return None;
		}
		line - count
	} else {
		let t = line + count;
		if t > buf.last_line() {
			return None;
		}
		t
	};
	let dest = buf.pos_at(target, buf.col_of(cu))?;
	let mut m = Span::to(cu, dest);
	if as_op {
		m.extend_lines(buf);
	}
	Some(m)
}

/// `t`/`T`/`f`/`F`: rune search within the current line. Lowercase goes
/// forward, `t`/`T` stop one short of the target. Remembered for `;`/`,`.
pub fn m_find(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let target = c.arg?.char()?;
	if !ed.find.locked {
		ed.find.chr = c.chr;
		ed.find.arg = c.arg;
	}
	let buf = &ed.win.buf;
	let cu = ed.win.cursor;
	let forward = c.chr.is_ascii_lowercase();
	let mut at = cu;
	for _ in 0..c.count.max(1) {
		loop {
			if forward {
				at += 1;
			} else {
				if at == 0 {
					return None;
				}
				at -= 1;
			}
			let ch = buf.rune_at(at);
			if ch == '\n' {
				return None;
			}
			if ch == target {
				break;
			}
		}
	}
	let landing = match c.chr {
		b't' => at - 1,
		b'T' => at + 1,
		_ => at,
	};
	let end = if as_op && forward { landing + 1 } else { landing };
	Some(Span::to(cu, end))
}

/// `;` and `,`: replay the last rune search, `,` with the direction flipped
/// by toggling the case bit of the stored command.
pub fn m_findrep(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	if ed.find.chr == 0 {
		return None;
	}
	let mut chr = ed.find.chr;
	if c.chr == b',' {
		chr ^= 0x20;
	}
	let cmd = Cmd { count: c.count, chr, arg: ed.find.arg };
	ed.find.locked = true;
	let m = m_find(ed, as_op, &cmd);
	ed.find.locked = false;
	m
}

/// `0` and `^`: start of line, first non-blank. Standalone use fails when
/// there is nowhere to go.
pub fn m_bol(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let buf = &ed.win.buf;
	let cu = ed.win.cursor;
	let dest = if c.chr == b'^' {
		buf.first_nonblank(cu)
	} else {
		buf.bol(cu)
	};
	if !as_op && dest == cu {
		return None;
	}
	Some(Span::to(cu, dest))
}

/// `$`: end of line, or of the count-th following line. Takes the newline
/// along as an operand (or when the cursor already sits on one), and turns
/// line-wise when a counted `$` starts at or before the indent.
pub fn m_eol(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let buf = &ed.win.buf;
	let cu = ed.win.cursor;
	let count = c.count.max(1) as usize;
	let line = buf.line_of(cu);
	let target = line + count - 1;
	if target > buf.last_line() {
		return None;
	}
	let end = buf.eol(buf.line_start(target)?);
	let mut m = Span::to(cu, end);
	if count > 1 && cu <= buf.first_nonblank(cu) {
		m.extend_lines(buf);
	} else if as_op || buf.rune_at(cu) == '\n' {
		m.end = (end + 1).min(buf.len());
	}
	Some(m)
}

/// `_`: the current line (and count-1 more below), landing on the first
/// non-blank. Doubled operators resolve to this motion.
pub fn m_line(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let buf = &ed.win.buf;
	let cu = ed.win.cursor;
	let count = c.count.max(1) as usize;
	let target = buf.line_of(cu) + count - 1;
	if target > buf.last_line() {
		return None;
	}
	let start = buf.line_start(target)?;
	if as_op {
		let mut m = Span::to(cu, start);
		m.extend_lines(buf);
		return Some(m);
	}
	Some(Span::to(cu, buf.first_nonblank(start)))
}

/// `w`/`W`/`e`/`E`: forward to the next word start or end. Lowercase words
/// are runs of the word alphabet, uppercase words are runs of non-blanks.
/// As an operand the final iteration will not cross a trailing newline.
pub fn m_word(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let buf = &ed.win.buf;
	let cu = ed.win.cursor;
	let pred: fn(char) -> bool = if c.chr.is_ascii_lowercase() {
		is_word
	} else {
		|ch| !ch.is_whitespace()
	};
	let to_end = matches!(c.chr, b'e' | b'E');
	let count = c.count.max(1) as usize;
	let len = buf.len();
	let mut at = cu;
	for i in 0..count {
		let final_step = i + 1 == count;
		if to_end {
			at += 1;
			while !pred(buf.rune_at(at)) {
				if at >= len {
					return None;
				}
				at += 1;
			}
			while pred(buf.rune_at(at + 1)) {
				at += 1;
			}
		} else {
			while pred(buf.rune_at(at)) {
				at += 1;
			}
			while !pred(buf.rune_at(at)) {
				if at >= len || (as_op && final_step && buf.rune_at(at) == '\n') {
					break;
				}
				at += 1;
			}
		}
	}
	let end = if to_end && as_op { at + 1 } else { at };
	if end == cu {
		return None;
	}
	Some(Span::to(cu, end.min(len)))
}

/// `b`/`B`: backward to a word start, symmetric to `w`/`W`.
pub fn m_back(ed: &mut Editor, _as_op: bool, c: &Cmd) -> Option<Span> {
	let buf = &ed.win.buf;
	let cu = ed.win.cursor;
	let pred: fn(char) -> bool = if c.chr == b'b' {
		is_word
	} else {
		|ch| !ch.is_whitespace()
	};
	let mut at = cu;
	for _ in 0..c.count.max(1) {
		if at == 0 {
			return None;
		}
		at -= 1;
		while !pred(buf.rune_at(at)) {
			if at == 0 {
				return None;
			}
			at -= 1;
		}
		while at > 0 && pred(buf.rune_at(at - 1)) {
			at -= 1;
		}
	}
	Some(Span::to(cu, at))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LineType {
	Blank,
	FormFeed,
	Text,
}

fn line_type(buf: &Buffer, line: usize) -> LineType {
	let Some(start) = buf.line_start(line) else {
		return LineType::Blank;
	};
	match buf.rune_at(buf.first_nonblank(start)) {
		'\n' => LineType::Blank,
		'\u{c}' => LineType::FormFeed,
		_ => LineType::Text,
	}
}

/// `{` and `}`: paragraph boundaries. A paragraph is a run of text lines;
/// blank and form-feed lines separate them. Line-wise (begin side only) when
/// the cursor starts at or before the first non-blank of its line.
pub fn m_par(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let buf = &ed.win.buf;
	let cu = ed.win.cursor;
	let last = buf.last_line();
	let mut ln = buf.line_of(cu);
	let fwd = c.chr == b'}';
	for _ in 0..c.count.max(1) {
		if fwd {
			while ln <= last && line_type(buf, ln) != LineType::Text {
				ln += 1;
			}
			while ln <= last && line_type(buf, ln) == LineType::Text {
				ln += 1;
			}
		} else {
			while ln > 0 && line_type(buf, ln) != LineType::Text {
				ln -= 1;
			}
			while ln > 0 && line_type(buf, ln) == LineType::Text {
				ln -= 1;
			}
		}
	}
	let dest = if ln > last {
		buf.len()
	} else {
		buf.line_start(ln)?
	};
	if !as_op && dest == cu {
		return None;
	}
	let mut m = Span::to(cu, dest);
	if as_op && cu <= buf.first_nonblank(cu) {
		m.order();
		m.beg = buf.bol(m.beg);
		m.linewise = true;
	}
	Some(m)
}

fn delim_mate(ch: char) -> Option<(char, bool)> {
	match ch {
		'<' => Some(('>', true)),
		'{' => Some(('}', true)),
		'(' => Some((')', true)),
		'[' => Some((']', true)),
		'>' => Some(('<', false)),
		'}' => Some(('{', false)),
		')' => Some(('(', false)),
		']' => Some(('[', false)),
		_ => None,
	}
}

/// `%`: match the first delimiter at or after the cursor on this line
/// against its mate. Running off either end of the text is failure. As an
/// operand the pair is taken inclusively, and the span turns line-wise when
/// both endpoints have nothing but blanks on their outer side of the line.
pub fn m_match(ed: &mut Editor, as_op: bool, _c: &Cmd) -> Option<Span> {
	let buf = &ed.win.buf;
	let cu = ed.win.cursor;
	let mut at = cu;
	let (mate, fwd) = loop {
		let ch = buf.rune_at(at);
		if ch == '\n' {
			return None;
		}
		if let Some(m) = delim_mate(ch) {
			break m;
		}
		at += 1;
	};
	let delim = buf.rune_at(at);
	let mut depth = 1i32;
	let mut p = at;
	let other = loop {
		if fwd {
			p += 1;
			if p >= buf.len() {
				return None;
			}
		} else {
			if p == 0 {
				return None;
			}
			p -= 1;
		}
		let ch = buf.rune_at(p);
		if ch == delim {
			depth += 1;
		} else if ch == mate {
			depth -= 1;
			if depth == 0 {
				break p;
			}
		}
	};
	if !as_op {
		return Some(Span::to(cu, other));
	}
	let (lo, hi) = if other < cu { (other, cu) } else { (cu, other) };
	let mut m = Span { beg: lo, end: hi + 1, linewise: false };
	let beg_clear = (buf.bol(m.beg)..m.beg).all(|i| is_blank(buf.rune_at(i)));
	let end_clear = (m.end..buf.eol(m.end)).all(|i| is_blank(buf.rune_at(i)));
	if beg_clear && end_clear {
		m.extend_lines(buf);
	}
	Some(m)
}

/// `G`: go to a line by number, or to limbo when no count was given.
pub fn m_gotoline(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let buf = &ed.win.buf;
	let cu = ed.win.cursor;
	let dest = if c.count == 0 {
		buf.len()
	} else {
		let target = (c.count - 1) as usize;
		if target > buf.last_line() {
			return None;
		}
		buf.line_start(target)?
	};
	let mut m = Span::to(cu, dest);
	if as_op {
		m.extend_lines(buf);
	}
	Some(m)
}

/// `H`, `M`, `L`: top, middle, bottom of the visible lines.
pub fn m_vis(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let l = ed.win.line_starts();
	let nl = l.len();
	if nl == 0 {
		return None;
	}
	let count = c.count.max(1) as usize;
	let dest = match c.chr {
		b'H' => {
			if count > nl {
				return None;
			}
			l[count - 1]
		}
		b'L' => {
			if count > nl {
				return None;
			}
			l[nl - count]
		}
		_ => l[nl / 2],
	};
	let mut m = Span::to(ed.win.cursor, dest);
	if as_op {
		m.extend_lines(&ed.win.buf);
	}
	Some(m)
}

/// `'` and `` ` ``: jump to a mark. `'` is line-wise and lands on the first
/// non-blank of the marked line; the backquote goes to the exact offset.
pub fn m_mark(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let buf = &ed.win.buf;
	let pos = buf.mark_get(Mark::Name(c.arg?))?;
	let cu = ed.win.cursor;
	if c.chr == b'`' {
		return Some(Span::to(cu, pos));
	}
	let mut m = Span::to(cu, buf.first_nonblank(pos));
	if as_op {
		m.extend_lines(buf);
	}
	Some(m)
}

/// `n` and `N`: hand the current selection (or the anonymous yank) to the
/// host's literal search. `N` looks the other way. Wraps around limbo.
pub fn m_search(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	let needle: Vec<char> = {
		let buf = &ed.win.buf;
		match (buf.mark_get(Mark::SelBeg), buf.mark_get(Mark::SelEnd)) {
			(Some(b), Some(e)) if b < e => buf.slice(b, e),
			_ => ed.yanks.anon().runes.clone(),
		}
	};
	if needle.is_empty() {
		return None;
	}
	let cu = ed.win.cursor;
	let reverse = c.chr == b'N';
	for _ in 0..c.count.max(1) {
		if !ed.host.look(&mut ed.win, &needle, reverse) {
			ed.win.cursor = cu;
			return None;
		}
	}
	let hit = ed.win.cursor;
	ed.win.cursor = cu;
	let mut m = Span::to(cu, hit);
	if as_op {
		m.extend_lines(&ed.win.buf);
	}
	Some(m)
}

/// `/` as an operand: the region between the selection marks. Standalone use
/// (or any count but one) fails.
pub fn m_sel(ed: &mut Editor, as_op: bool, c: &Cmd) -> Option<Span> {
	if !as_op || c.count != 1 {
		return None;
	}
	let buf = &ed.win.buf;
	let beg = buf.mark_get(Mark::SelBeg)?;
	let end = buf.mark_get(Mark::SelEnd)?;
	if beg >= end {
		return None;
	}
	Some(Span { beg, end, linewise: false })
}
