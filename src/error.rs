//! Compile-time diagnostics.
//!
//! Compilation is fail-fast: the first problem found aborts the whole
//! compile and surfaces as exactly one [`CompileError`]. Every variant
//! carries the 1-based source line it was detected on.

use thiserror::Error;

use crate::value::ParamType;

/// The single diagnostic a failed compile produces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// A line starts with a name no registered function matches.
    #[error("line {line}: unknown function `{name}`")]
    UnknownFunction { name: String, line: u32 },

    /// A line supplies more or fewer arguments than the function's arity.
    ///
    /// For surplus arguments, `actual` is the 1-based index of the first
    /// extra token; compilation stops there without counting the rest.
    #[error("line {line}: `{name}` expects {expected} argument(s), got {actual}")]
    ArgumentCountMismatch {
        name: String,
        expected: usize,
        actual: usize,
        line: u32,
    },

    /// A token does not decode as the type its slot declares.
    ///
    /// `slot` is the zero-based parameter index; the message prints it
    /// 1-based.
    #[error("line {line}: argument {} of `{name}` expects {expected}, got `{token}`", .slot + 1)]
    ArgumentTypeMismatch {
        name: String,
        slot: usize,
        expected: ParamType,
        token: String,
        line: u32,
    },

    /// A quote opened on the line was never closed before the line ended.
    #[error("line {line}: string not closed before end of line")]
    UnterminatedString { line: u32 },
}

impl CompileError {
    /// 1-based source line the compile failed on.
    pub fn line(&self) -> u32 {
        match self {
            CompileError::UnknownFunction { line, .. }
            | CompileError::ArgumentCountMismatch { line, .. }
            | CompileError::ArgumentTypeMismatch { line, .. }
            | CompileError::UnterminatedString { line } => *line,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
