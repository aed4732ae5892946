//! REPL and CLI for Glossia.
//!
//! The `glossia` binary parses localized command text interactively or in
//! batch mode and pretty-prints the resulting semantic nodes. The REPL also
//! renders the last parsed node into another language, which doubles as a
//! quick translation check.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod repl;

pub use repl::Repl;
