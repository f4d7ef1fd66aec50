//! The input vocabulary of the command engine.
//!
//! Everything the host feeds to the core is a `Rune`: a decoded Unicode
//! scalar, or one of the special-key sentinels that have no scalar value.
//! Control letters arrive as their C0 scalars (`'\x01'..='\x1a'`), the same
//! way a terminal delivers them.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Rune {
	Char(char),
	Esc,
	Backspace,
	Up,
	Down,
	Left,
	Right,
	PageUp,
	PageDown,
	F(u8),
}

impl Rune {
	/// The low code point used for keys-table lookup, if this rune has one.
	pub fn ascii(self) -> Option<u8> {
		match self {
			Rune::Char(ch) if (ch as u32) < 128 => Some(ch as u8),
			_ => None,
		}
	}
	pub fn char(self) -> Option<char> {
		match self {
			Rune::Char(ch) => Some(ch),
			_ => None,
		}
	}
}

// C0 codes the action catalog binds.
pub const CTRL_D: u8 = 0x04;
pub const CTRL_E: u8 = 0x05;
pub const CTRL_I: u8 = 0x09;
pub const CTRL_L: u8 = 0x0c;
pub const CTRL_Q: u8 = 0x11;
pub const CTRL_T: u8 = 0x14;
pub const CTRL_U: u8 = 0x15;
pub const CTRL_W: u8 = 0x17;
pub const CTRL_Y: u8 = 0x19;

/// Decode a command script into runes.
///
/// Scripts use angle-bracket notation for keys that are awkward to type in a
/// shell argument: `<esc>`, `<cr>`, `<bs>`, `<tab>`, `<space>`, `<lt>` and
/// `<c-x>` for control letters. Anything that does not parse as an escape is
/// taken literally, opening bracket included.
pub fn decode_script(script: &str) -> Vec<Rune> {
	let mut out = Vec::with_capacity(script.len());
	let mut chars = script.chars().peekable();
	while let Some(ch) = chars.next() {
		if ch != '<' {
			out.push(Rune::Char(ch));
			continue;
		}
		let mut probe = chars.clone();
		let mut name = String::new();
		let mut closed = false;
		for _ in 0..8 {
			match probe.next() {
				Some('>') => {
					closed = true;
					break;
				}
				Some(nc) => name.push(nc),
				None => break,
			}
		}
		let rune = if closed {
			named_rune(&name.to_ascii_lowercase())
		} else {
			None
		};
		match rune {
			Some(r) => {
				chars = probe;
				out.push(r);
			}
			None => out.push(Rune::Char('<')),
		}
	}
	out
}

fn named_rune(name: &str) -> Option<Rune> {
	match name {
		"esc" => Some(Rune::Esc),
		"cr" | "enter" => Some(Rune::Char('\n')),
		"bs" => Some(Rune::Backspace),
		"tab" => Some(Rune::Char('\t')),
		"space" => Some(Rune::Char(' ')),
		"lt" => Some(Rune::Char('<')),
		"up" => Some(Rune::Up),
		"down" => Some(Rune::Down),
		"left" => Some(Rune::Left),
		"right" => Some(Rune::Right),
		_ => {
			let mut it = name.chars();
			if let (Some('c'), Some('-'), Some(ch), None) = (it.next(), it.next(), it.next(), it.next())
				&& ch.is_ascii_alphabetic() {
				let ctrl = (ch.to_ascii_uppercase() as u8) & 0x1f;
				return Some(Rune::Char(ctrl as char));
			}
			None
		}
	}
}
