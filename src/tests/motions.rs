use pretty_assertions::assert_eq;

use crate::tests::{editor, editor_sized, editor_with_host, feed};

#[test]
fn horizontal_movement() {
	let mut ed = editor("hello\n");
	ed.win.cursor = 2;
	feed(&mut ed, "h");
	assert_eq!(ed.win.cursor, 1);
	feed(&mut ed, "2l");
	assert_eq!(ed.win.cursor, 3);
	feed(&mut ed, "3h");
	assert_eq!(ed.win.cursor, 0);
	// h on column 0 fails and stays put
	feed(&mut ed, "h");
	assert_eq!(ed.win.cursor, 0);
}

#[test]
fn standalone_l_keeps_partial_progress() {
	// the motion fails on the newline but does not give back the ground
	// it already covered
	let mut ed = editor("hello\n");
	ed.win.cursor = 2;
	feed(&mut ed, "9l");
	assert_eq!(ed.win.cursor, 4);
}

#[test]
fn l_as_operand_may_take_the_newline() {
	let mut ed = editor("ab\ncd\n");
	ed.win.cursor = 1;
	feed(&mut ed, "d3l");
	// one rune, then the newline stops the sweep
	assert_eq!(ed.text(), "acd\n");
}

#[test]
fn vertical_movement_clamps_the_column() {
	let mut ed = editor("alpha\nhi\ngamma\n");
	ed.win.cursor = 4;
	feed(&mut ed, "j");
	assert_eq!(ed.win.cursor, 8); // the newline is the line's last column
	feed(&mut ed, "j");
	assert_eq!(ed.win.cursor, 11);
	feed(&mut ed, "k");
	assert_eq!(ed.win.cursor, 8);
	feed(&mut ed, "k");
	assert_eq!(ed.win.cursor, 2);
}

#[test]
fn k_fails_past_the_first_line() {
	let mut ed = editor("a\nb\nc\n");
	ed.win.cursor = 4;
	feed(&mut ed, "3k");
	assert_eq!(ed.win.cursor, 4);
}

#[test]
fn j_fails_past_the_last_line() {
	let mut ed = editor("a\nb\n");
	feed(&mut ed, "4j");
	assert_eq!(ed.win.cursor, 0);
}

#[test]
fn delete_j_takes_both_lines() {
	let mut ed = editor("one\ntwo\nthree\n");
	ed.win.cursor = 1;
	feed(&mut ed, "dj");
	assert_eq!(ed.text(), "three\n");
	let slot = ed.yanks().anon();
	assert!(slot.linemode);
	assert_eq!(slot.text(), "one\ntwo\n");
}

#[test]
fn find_and_till() {
	let mut ed = editor("abcabc\n");
	feed(&mut ed, "fc");
	assert_eq!(ed.win.cursor, 2);
	feed(&mut ed, ";");
	assert_eq!(ed.win.cursor, 5);
	feed(&mut ed, ",");
	assert_eq!(ed.win.cursor, 2);
}

#[test]
fn find_fails_at_the_newline() {
	let (mut ed, host) = editor_with_host("abc\ndef\n");
	feed(&mut ed, "fe");
	// 'e' is on the next line; the search must not cross
	assert_eq!(ed.win.cursor, 0);
	assert!(host.borrow().notes.is_empty());
}

#[test]
fn find_as_operand_includes_the_target() {
	let mut ed = editor("abcabc\n");
	feed(&mut ed, "dfc");
	assert_eq!(ed.text(), "abc\n");

	let mut ed = editor("abcabc\n");
	ed.win.cursor = 4;
	feed(&mut ed, "dFa");
	assert_eq!(ed.text(), "abcbc\n");
}

#[test]
fn till_stops_one_short() {
	let mut ed = editor("foo bar\n");
	feed(&mut ed, "tb");
	assert_eq!(ed.win.cursor, 3);
	let mut ed = editor("foo bar\n");
	feed(&mut ed, "dtb");
	assert_eq!(ed.text(), "bar\n");
}

#[test]
fn semicolon_with_nothing_to_replay_fails() {
	let mut ed = editor("abc\n");
	feed(&mut ed, ";");
	assert_eq!(ed.win.cursor, 0);
}

#[test]
fn comma_does_not_clobber_find_memory() {
	let mut ed = editor("abcabcabc\n");
	feed(&mut ed, "fb");
	assert_eq!(ed.win.cursor, 1);
	feed(&mut ed, ";");
	assert_eq!(ed.win.cursor, 4);
	feed(&mut ed, ",");
	assert_eq!(ed.win.cursor, 1);
	// the stored direction is still forward
	feed(&mut ed, ";");
	assert_eq!(ed.win.cursor, 4);
}

#[test]
fn bol_and_first_nonblank() {
	let mut ed = editor("  foo\n");
	ed.win.cursor = 4;
	feed(&mut ed, "^");
	assert_eq!(ed.win.cursor, 2);
	feed(&mut ed, "0");
	assert_eq!(ed.win.cursor, 0);
	// already there: the motion fails
	feed(&mut ed, "0");
	assert_eq!(ed.win.cursor, 0);
}

#[test]
fn delete_to_bol() {
	let mut ed = editor("  abc\n");
	ed.win.cursor = 3;
	feed(&mut ed, "d0");
	assert_eq!(ed.text(), "bc\n");
	assert_eq!(ed.win.cursor, 0);
}

#[test]
fn eol_takes_the_newline_as_operand() {
	let mut ed = editor("  foo\n");
	ed.win.cursor = 3;
	feed(&mut ed, "$");
	assert_eq!(ed.win.cursor, 5);
	let mut ed = editor("  foo\nbar\n");
	ed.win.cursor = 2;
	feed(&mut ed, "d$");
	assert_eq!(ed.text(), "  bar\n");
}

#[test]
fn counted_eol_from_the_indent_is_linewise() {
	let mut ed = editor("  ab\ncd\nef\n");
	feed(&mut ed, "d2$");
	assert_eq!(ed.text(), "ef\n");
	assert!(ed.yanks().anon().linemode);
}

#[test]
fn underscore_selects_lines() {
	let mut ed = editor("  foo\nbar\n");
	ed.win.cursor = 4;
	feed(&mut ed, "_");
	assert_eq!(ed.win.cursor, 2);
	let mut ed = editor("a\nb\nc\n");
	feed(&mut ed, "d2_");
	assert_eq!(ed.text(), "c\n");
}

#[test]
fn word_motion_families() {
	let mut ed = editor("foo bar-baz qux\n");
	feed(&mut ed, "w");
	assert_eq!(ed.win.cursor, 4);
	// the dash is not in the word alphabet, so w skips it entirely
	feed(&mut ed, "w");
	assert_eq!(ed.win.cursor, 8);
	feed(&mut ed, "b");
	assert_eq!(ed.win.cursor, 4);
	feed(&mut ed, "e");
	assert_eq!(ed.win.cursor, 6);
}

#[test]
fn big_words_are_runs_of_nonblanks() {
	let mut ed = editor("foo bar-baz qux\n");
	feed(&mut ed, "W");
	assert_eq!(ed.win.cursor, 4);
	feed(&mut ed, "W");
	assert_eq!(ed.win.cursor, 12);
	feed(&mut ed, "B");
	assert_eq!(ed.win.cursor, 4);
	feed(&mut ed, "E");
	assert_eq!(ed.win.cursor, 10);
}

#[test]
fn latin1_runes_are_word_runes() {
	let mut ed = editor("héllo wörld\n");
	feed(&mut ed, "e");
	assert_eq!(ed.win.cursor, 4);
	feed(&mut ed, "w");
	assert_eq!(ed.win.cursor, 6);
}

#[test]
fn dw_on_the_last_word_keeps_the_newline() {
	let mut ed = editor("foo bar\n");
	ed.win.cursor = 4;
	feed(&mut ed, "dw");
	assert_eq!(ed.text(), "foo \n");
}

#[test]
fn de_includes_the_word_end() {
	let mut ed = editor("foo bar\n");
	feed(&mut ed, "de");
	assert_eq!(ed.text(), " bar\n");
}

#[test]
fn paragraph_motions() {
	let mut ed = editor("a\n\nb\n\nc\n");
	feed(&mut ed, "}");
	assert_eq!(ed.win.cursor, 2);
	feed(&mut ed, "}");
	assert_eq!(ed.win.cursor, 5);
	feed(&mut ed, "{");
	assert_eq!(ed.win.cursor, 2);
	feed(&mut ed, "{");
	assert_eq!(ed.win.cursor, 0);
}

#[test]
fn formfeed_lines_separate_paragraphs() {
	let mut ed = editor("a\n\u{c}\nb\n");
	feed(&mut ed, "}");
	assert_eq!(ed.win.cursor, 2);
}

#[test]
fn bracket_matching() {
	let mut ed = editor("(a(b)c)\n");
	feed(&mut ed, "%");
	assert_eq!(ed.win.cursor, 6);
	feed(&mut ed, "%");
	assert_eq!(ed.win.cursor, 0);
}

#[test]
fn percent_seeks_the_first_delim_on_the_line() {
	let mut ed = editor("ab (cd)\n");
	feed(&mut ed, "%");
	assert_eq!(ed.win.cursor, 6);
}

#[test]
fn percent_fails_without_a_delim_or_mate() {
	let (mut ed, host) = editor_with_host("abc\n");
	feed(&mut ed, "%");
	assert_eq!(ed.win.cursor, 0);
	let mut ed = editor("(abc\n");
	feed(&mut ed, "%");
	assert_eq!(ed.win.cursor, 0);
	assert!(host.borrow().notes.is_empty());
}

#[test]
fn goto_line_bounds() {
	let mut ed = editor("one\ntwo\nthree\n");
	feed(&mut ed, "2G");
	assert_eq!(ed.win.cursor, 4);
	feed(&mut ed, "9G");
	assert_eq!(ed.win.cursor, 4); // out of range fails
	feed(&mut ed, "G");
	assert_eq!(ed.win.cursor, 14);
	feed(&mut ed, "1G");
	feed(&mut ed, "dG");
	assert_eq!(ed.text(), "");
}

#[test]
fn screen_relative_motions() {
	let text = "l0\nl1\nl2\nl3\nl4\n";
	let (mut ed, _) = editor_sized(text, 3);
	feed(&mut ed, "L");
	assert_eq!(ed.win.cursor, 6);
	feed(&mut ed, "H");
	assert_eq!(ed.win.cursor, 0);
	feed(&mut ed, "M");
	assert_eq!(ed.win.cursor, 3);
	// count past the view fails
	feed(&mut ed, "5H");
	assert_eq!(ed.win.cursor, 3);
}

#[test]
fn marks_and_mark_motions() {
	let mut ed = editor("alpha\n  beta\n");
	feed(&mut ed, "ma");
	feed(&mut ed, "j");
	assert_eq!(ed.win.cursor, 6);
	feed(&mut ed, "`a");
	assert_eq!(ed.win.cursor, 0);
	// quote lands on the first non-blank of the marked line
	ed.win.cursor = 10;
	feed(&mut ed, "mb");
	feed(&mut ed, "1G");
	feed(&mut ed, "'b");
	assert_eq!(ed.win.cursor, 8);
	// unset mark fails
	feed(&mut ed, "`z");
	assert_eq!(ed.win.cursor, 8);
}

#[test]
fn delete_to_mark() {
	let mut ed = editor("alpha\nbeta\n");
	feed(&mut ed, "ma");
	ed.win.cursor = 6;
	feed(&mut ed, "d`a");
	assert_eq!(ed.text(), "beta\n");
}

#[test]
fn search_repeats_the_selection() {
	let mut ed = editor("foo bar foo baz foo\n");
	feed(&mut ed, "ye");
	assert_eq!(ed.yanks().anon().text(), "foo");
	feed(&mut ed, "n");
	assert_eq!(ed.win.cursor, 8);
	feed(&mut ed, "n");
	assert_eq!(ed.win.cursor, 16);
	// wraps around limbo
	feed(&mut ed, "n");
	assert_eq!(ed.win.cursor, 0);
	feed(&mut ed, "N");
	assert_eq!(ed.win.cursor, 16);
}

#[test]
fn slash_consumes_the_selection_as_operand() {
	let mut ed = editor("foo bar\n");
	feed(&mut ed, "ye");
	feed(&mut ed, "d/");
	assert_eq!(ed.text(), " bar\n");
	// standalone use fails
	let (mut ed, host) = editor_with_host("foo bar\n");
	feed(&mut ed, "/");
	assert_eq!(ed.win.cursor, 0);
	assert!(host.borrow().notes.is_empty());
}
