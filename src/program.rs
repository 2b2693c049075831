//! Compiled programs.
//!
//! A successful compile yields an [`Executable`]: an immutable sequence of
//! [`Instruction`]s in source-line order. Each instruction owns a clone of
//! its callback handle and fully decoded argument values, so an executable
//! stays valid after the [`Config`](crate::Config) that produced it is
//! mutated or dropped, and can be replayed any number of times.

use std::fmt;

use tracing::trace;

use crate::registry::Callback;
use crate::value::Value;

/// One bound call: a callback and the arguments decoded for it.
#[derive(Clone)]
pub struct Instruction {
    name: String,
    callback: Callback,
    args: Vec<Value>,
}

impl Instruction {
    pub(crate) fn new(name: String, callback: Callback, args: Vec<Value>) -> Self {
        Instruction {
            name,
            callback,
            args,
        }
    }

    /// Name of the function this instruction calls. An owned copy taken
    /// at compile time, not a registry reference.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The decoded arguments, in slot order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    fn invoke(&self) {
        trace!(function = %self.name, "call");
        (self.callback)(&self.args);
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("name", &self.name)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// An immutable compiled program.
#[derive(Debug, Clone, Default)]
pub struct Executable {
    instructions: Vec<Instruction>,
}

impl Executable {
    pub(crate) fn new(instructions: Vec<Instruction>) -> Self {
        Executable { instructions }
    }

    /// Invoke every instruction's callback in program order.
    ///
    /// Synchronous, no internal state: repeated calls replay the same
    /// sequence with the same argument values. Whatever a callback itself
    /// panics with unwinds straight through.
    pub fn run(&self) {
        trace!(instructions = self.instructions.len(), "running program");
        for instruction in &self.instructions {
            instruction.invoke();
        }
    }

    /// Number of instructions (one per non-blank source line).
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The bound instructions, in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
