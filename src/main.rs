//! `ved` applies vi command scripts to text non-interactively.
//!
//! It exists so the command core can be exercised end to end without a GUI
//! backend: text comes from a file or stdin, one or more `-c` scripts run
//! against it in command mode, and the resulting buffer goes to stdout.
//!
//! ### High-level structure:
//! 1. Arguments are parsed into a list of scripts
//! 2. An `Editor` is built over the input text with a headless host
//! 3. Each script is decoded into runes and fed to the editor in order

use std::cell::RefCell;
use std::fmt::Display;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::rc::Rc;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use ved::keys::decode_script;
use ved::{Buffer, Editor, ScratchHost};

/// Print the given error message and exit the program.
///
/// Despite the signature, this never returns; the type parameter is there so
/// it slots into `unwrap_or_else`.
fn complain_and_exit<T>(err: impl Display) -> T {
	let mut err = err.to_string();
	if !err.starts_with("ved: ") {
		err = format!("ved: {err}");
	}
	eprintln!("{err}");
	std::process::exit(1)
}

/// The arguments passed to the program by the user
#[derive(Default, Debug)]
struct Opts {
	scripts: Vec<String>,
	file: Option<PathBuf>,
	rows: usize,
	trace: bool,
}

impl Opts {
	fn parse() -> Result<Self, String> {
		let mut new = Self {
			rows: 24,
			..Self::default()
		};
		let mut args = std::env::args().skip(1);
		while let Some(arg) = args.next() {
			match arg.as_str() {
				"-c" | "--cmd" => {
					let script = args.next().ok_or("expected a script after '-c'".to_string())?;
					new.scripts.push(script);
				}
				"-f" | "--file" => {
					let path = args.next().ok_or("expected a path after '-f'".to_string())?;
					new.file = Some(PathBuf::from(path));
				}
				"--rows" => {
					let rows = args.next().ok_or("expected a number after '--rows'".to_string())?;
					new.rows = rows
						.parse::<usize>()
						.map_err(|_| format!("invalid row count '{rows}'"))?;
				}
				"--trace" => {
					new.trace = true;
				}
				"-h" | "--help" => {
					println!("{}", help_text());
					std::process::exit(0);
				}
				_ => return Err(format!("unrecognized argument '{arg}'")),
			}
		}
		if new.scripts.is_empty() {
			return Err("no scripts given; use -c '<commands>'".to_string());
		}
		Ok(new)
	}
}

fn help_text() -> String {
	let mut help = String::new();
	help.push_str("ved — apply vi command scripts to text\n\n");
	help.push_str("USAGE:\n\tved [-f FILE] [--rows N] [--trace] -c SCRIPT [-c SCRIPT ...]\n\n");
	help.push_str("Reads FILE (or stdin) and runs each SCRIPT against it in command mode.\n");
	help.push_str("Scripts use <esc>, <cr>, <bs>, <tab> and <c-x> for special keys.\n\n");
	help.push_str("EXAMPLE:\n\t$ echo 'foo bar' | ved -c 'dw'\n\toutputs:\n\tbar\n");
	help
}

fn init_logger(trace: bool) {
	let mut builder = env_logger::Builder::from_default_env();
	if trace {
		builder.filter(None, log::LevelFilter::Trace);
	}
	builder.init();
}

fn read_input(opts: &Opts) -> Result<String, String> {
	match opts.file.as_ref() {
		Some(path) => fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display())),
		None => {
			let mut text = String::new();
			std::io::stdin()
				.read_to_string(&mut text)
				.map_err(|e| format!("stdin: {e}"))?;
			Ok(text)
		}
	}
}

fn main() {
	let opts = Opts::parse().unwrap_or_else(complain_and_exit);
	init_logger(opts.trace);
	let text = read_input(&opts).unwrap_or_else(complain_and_exit);

	let host = Rc::new(RefCell::new(ScratchHost::default()));
	let mut ed = Editor::new(Buffer::from_text(&text), opts.rows, Box::new(host.clone()));

	for script in &opts.scripts {
		for rune in decode_script(script) {
			ed.feed(rune);
		}
		if host.borrow().quit_requested {
			break;
		}
	}

	for note in &host.borrow().notes {
		eprintln!("ved: {note}");
	}
	print!("{}", ed.text());
}
