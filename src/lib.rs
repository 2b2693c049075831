//! Embeddable line-oriented command scripting.
//!
//! A host registers named functions with fixed, typed parameter lists on
//! a [`Config`], compiles script text once into an [`Executable`], and
//! replays it as often as it likes. Each non-blank source line is one
//! call:
//!
//! ```text
//! Greet "Bob"
//! Add 1, 2
//! Reset
//! ```
//!
//! - Tokens are separated by runs of spaces, commas and tabs.
//! - Strings are double-quoted, with no escape syntax; a string value
//!   cannot contain a quote character.
//! - Booleans are spelled `true`/`yes`/`on` and `false`/`no`/`off`.
//! - Numbers are plain base-10 literals checked against the declared
//!   width; unsigned slots reject a leading `-`.
//! - Blank and whitespace-only lines are skipped; there is no comment
//!   syntax, and only `\n` ends a line.
//!
//! Compilation is a single pass and fail-fast: the first bad line aborts
//! with one [`CompileError`] carrying the 1-based line number. A compiled
//! program owns its callbacks and argument values outright, so it stays
//! runnable after the [`Config`] is changed or dropped.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use cmdscript::{Config, ParamType};
//!
//! let greeted = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&greeted);
//!
//! let mut config = Config::new();
//! config.define("Greet", &[ParamType::Str], move |args| {
//!     sink.lock().unwrap().push(args[0].as_str().unwrap().to_owned());
//! });
//!
//! let program = config.compile("Greet \"Bob\"\nGreet \"Eve\"").unwrap();
//! program.run();
//! assert_eq!(*greeted.lock().unwrap(), ["Bob", "Eve"]);
//! ```

pub mod error;
pub mod program;
pub mod registry;
pub mod value;

mod parse;
mod scan;

// Re-exports for convenience.
pub use error::CompileError;
pub use program::{Executable, Instruction};
pub use registry::{Callback, Config, Signature};
pub use value::{ParamType, Value};
