//! `ved` is the command-language core of a modal, vi-style editor.
//!
//! The host feeds decoded runes to an [`Editor`] one at a time. In command
//! mode a small persistent state machine parses them into vi's four-part
//! command form (register, count, command, motion) and dispatches the result;
//! in insert mode every rune flows to the insertion interpreter until Esc.
//!
//! ### High-level structure:
//! 1. `keys` defines the rune vocabulary the host speaks
//! 2. `cmd` parses rune input against the classification table in `keymap`
//! 3. `motion` and `action` implement the command catalogs over `buffer`
//! 4. `editor` ties the state together and owns repeat/undo memory
//!
//! Everything outside the core (search, external commands, window layout,
//! persistence) is reached through the [`Host`] trait.

pub mod action;
pub mod buffer;
pub mod cmd;
pub mod editor;
pub mod host;
pub mod insert;
pub mod keymap;
pub mod keys;
pub mod motion;
pub mod register;
pub mod window;

#[cfg(test)]
pub mod tests;

pub use buffer::Buffer;
pub use editor::{Editor, Mode};
pub use host::{FocusDir, Host, ScratchHost};
pub use keys::Rune;
pub use window::Window;
