use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::buffer::Buffer;
use crate::editor::Editor;
use crate::host::ScratchHost;
use crate::keys::decode_script;

pub mod motions;

pub fn editor(text: &str) -> Editor {
	editor_with_host(text).0
}

pub fn editor_with_host(text: &str) -> (Editor, Rc<RefCell<ScratchHost>>) {
	editor_sized(text, 24)
}

pub fn editor_sized(text: &str, rows: usize) -> (Editor, Rc<RefCell<ScratchHost>>) {
	let host = Rc::new(RefCell::new(ScratchHost::default()));
	let ed = Editor::new(Buffer::from_text(text), rows, Box::new(host.clone()));
	(ed, host)
}

pub fn feed(ed: &mut Editor, script: &str) {
	for r in decode_script(script) {
		ed.feed(r);
	}
}

// Integration tests: each walks one full command sequence end to end.

#[test]
fn register_plus_word_delete() {
	// "adw into register a
	let mut ed = editor("hello\n");
	feed(&mut ed, "\"adw");
	assert_eq!(ed.text(), "\n");
	assert_eq!(ed.win.cursor, 0);
	let slot = ed.yanks().slot(Some('a')).unwrap();
	assert_eq!(slot.text(), "hello");
	assert!(!slot.linemode);
	assert_eq!(ed.yanks().anon().text(), "hello");
}

#[test]
fn change_word_keeps_the_space() {
	// cw acts like ce, so the gap between words survives
	let mut ed = editor("foo bar baz\n");
	ed.win.cursor = 4;
	feed(&mut ed, "cwQUUX<esc>");
	assert_eq!(ed.text(), "foo QUUX baz\n");
}

#[test]
fn paragraph_delete_is_linewise() {
	let mut ed = editor("a\n\nb\n\nc\n");
	feed(&mut ed, "d}");
	assert_eq!(ed.text(), "\nb\n\nc\n");
	let slot = ed.yanks().slot(Some('1')).unwrap();
	assert_eq!(slot.text(), "a\n");
	assert!(slot.linemode);
}

#[test]
fn repeat_with_count_override() {
	let mut ed = editor("foo bar baz qux quux\n");
	feed(&mut ed, "dw");
	assert_eq!(ed.text(), "bar baz qux quux\n");
	feed(&mut ed, "3.");
	assert_eq!(ed.text(), "quux\n");
}

#[test]
fn newline_preserves_indentation() {
	let mut ed = editor("    x\n");
	ed.win.cursor = 5;
	feed(&mut ed, "i<cr>");
	assert_eq!(ed.text(), "    x\n    \n");
	// cursor sits at column 4 of the new line
	assert_eq!(ed.win.cursor, 10);
	feed(&mut ed, "<esc>");
}

#[test]
fn bracket_match_delete_goes_linewise() {
	let mut ed = editor("{\n  body\n}\n");
	feed(&mut ed, "d%");
	assert_eq!(ed.text(), "");
	let slot = ed.yanks().slot(Some('1')).unwrap();
	assert!(slot.linemode);
	assert_eq!(slot.text(), "{\n  body\n}\n");
}

#[test]
fn delete_then_undo_restores_buffer_and_cursor() {
	let mut ed = editor("one two\n");
	ed.win.cursor = 4;
	feed(&mut ed, "dw");
	assert_eq!(ed.text(), "one \n");
	feed(&mut ed, "u");
	assert_eq!(ed.text(), "one two\n");
	assert_eq!(ed.win.cursor, 4);
}

#[test]
fn triple_dd_fills_slot_one() {
	let mut ed = editor("a\nb\nc\nd\n");
	feed(&mut ed, "3dd");
	assert_eq!(ed.text(), "d\n");
	let slot = ed.yanks().slot(Some('1')).unwrap();
	assert!(slot.linemode);
	assert_eq!(slot.text(), "a\nb\nc\n");
}
