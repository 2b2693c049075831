//! Line validation and instruction emission.
//!
//! Consumes [`Scanner`](crate::scan::Scanner) events one at a time. Each
//! line binds a function name first, then fills parameter slots left to
//! right, decoding every token against the type its slot declares. The
//! first problem anywhere aborts the whole compile with a single
//! [`CompileError`].

use tracing::{debug, trace};

use crate::error::CompileError;
use crate::program::{Executable, Instruction};
use crate::registry::{Config, Signature};
use crate::scan::{ScanEvent, Scanner};
use crate::value::{ParamType, Value};

/// Compile `source` against `config` into an executable program.
pub(crate) fn compile(config: &Config, source: &str) -> Result<Executable, CompileError> {
    let mut scanner = Scanner::new(source);
    let mut parser = LineParser::new(config);
    while let Some(event) = scanner.next_event() {
        match event {
            ScanEvent::Token { text, line } => parser.token(&text, line)?,
            ScanEvent::EndOfLine {
                trailing,
                quoted,
                line,
            } => parser.end_of_line(&trailing, quoted, line)?,
        }
    }
    let instructions = parser.finish();
    debug!(instructions = instructions.len(), "script compiled");
    Ok(Executable::new(instructions))
}

/// Per-line state: the signature bound by the first token, then one
/// decoded value per filled slot. `sig == None` means the next token is
/// expected to be a function name.
struct LineParser<'c> {
    config: &'c Config,
    sig: Option<&'c Signature>,
    args: Vec<Value>,
    instructions: Vec<Instruction>,
}

impl<'c> LineParser<'c> {
    fn new(config: &'c Config) -> Self {
        LineParser {
            config,
            sig: None,
            args: Vec::new(),
            instructions: Vec::new(),
        }
    }

    /// Handle one completed token.
    fn token(&mut self, text: &str, line: u32) -> Result<(), CompileError> {
        match self.sig {
            None => match self.config.lookup(text) {
                Some(sig) => self.sig = Some(sig),
                None => {
                    return Err(CompileError::UnknownFunction {
                        name: text.to_owned(),
                        line,
                    })
                }
            },
            Some(sig) => {
                let slot = self.args.len();
                if slot >= sig.params.len() {
                    // First surplus token; nothing further on the line is
                    // looked at.
                    return Err(CompileError::ArgumentCountMismatch {
                        name: sig.name.clone(),
                        expected: sig.params.len(),
                        actual: slot + 1,
                        line,
                    });
                }
                let expected = sig.params[slot];
                match decode(expected, text) {
                    Some(value) => self.args.push(value),
                    None => {
                        return Err(CompileError::ArgumentTypeMismatch {
                            name: sig.name.clone(),
                            slot,
                            expected,
                            token: text.to_owned(),
                            line,
                        })
                    }
                }
            }
        }
        Ok(())
    }

    /// Finalize a line: flush any trailing token, check arity, emit.
    fn end_of_line(&mut self, trailing: &str, quoted: bool, line: u32) -> Result<(), CompileError> {
        if quoted {
            return Err(CompileError::UnterminatedString { line });
        }
        if !trailing.is_empty() {
            self.token(trailing, line)?;
        }
        let sig = match self.sig.take() {
            Some(sig) => sig,
            // Nothing but separators (or nothing at all): not a statement.
            None => return Ok(()),
        };
        if self.args.len() != sig.params.len() {
            return Err(CompileError::ArgumentCountMismatch {
                name: sig.name.clone(),
                expected: sig.params.len(),
                actual: self.args.len(),
                line,
            });
        }
        let args = std::mem::take(&mut self.args);
        trace!(line, function = %sig.name, args = args.len(), "instruction bound");
        self.instructions
            .push(Instruction::new(sig.name.clone(), sig.callback.clone(), args));
        Ok(())
    }

    fn finish(self) -> Vec<Instruction> {
        self.instructions
    }
}

/// Decode one token against the type its slot declares.
///
/// Integer and float parses must consume the whole token; `str::parse`
/// already rejects a leading `-` for the unsigned widths and anything out
/// of range for the target. A string token must still wear the quotes the
/// scanner left on it. Booleans take exactly six spellings, case
/// sensitively.
fn decode(expected: ParamType, token: &str) -> Option<Value> {
    match expected {
        ParamType::I32 => token.parse().ok().map(Value::I32),
        ParamType::U32 => token.parse().ok().map(Value::U32),
        ParamType::I64 => token.parse().ok().map(Value::I64),
        ParamType::U64 => token.parse().ok().map(Value::U64),
        ParamType::F32 => token.parse().ok().map(Value::F32),
        ParamType::F64 => token.parse().ok().map(Value::F64),
        ParamType::Str => decode_text(token).map(Value::Str),
        ParamType::Bool => decode_bool(token).map(Value::Bool),
    }
}

fn decode_text(token: &str) -> Option<String> {
    // Both quotes are single bytes, so byte slicing cannot split a char.
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        Some(token[1..token.len() - 1].to_owned())
    } else {
        None
    }
}

fn decode_bool(token: &str) -> Option<bool> {
    match token {
        "true" | "yes" | "on" => Some(true),
        "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
