//! Host-facing registration surface.
//!
//! The host builds a [`Config`], registers every function its scripts may
//! call, then compiles source text against it. Compiled programs copy
//! what they need out of the registry, so a [`Config`] can be mutated or
//! dropped once compilation is done without invalidating anything it
//! produced.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::CompileError;
use crate::parse;
use crate::program::Executable;
use crate::value::{ParamType, Value};

/// Shared handle to a registered host callback.
pub type Callback = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// A registered function: its name, expected parameter types, and the
/// callback invoked at run time.
#[derive(Clone)]
pub struct Signature {
    pub name: String,
    pub params: Vec<ParamType>,
    pub(crate) callback: Callback,
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Function registry scripts compile against.
#[derive(Debug, Default)]
pub struct Config {
    functions: HashMap<String, Signature>,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// Register `name` with its parameter types and callback.
    ///
    /// Re-registering a name silently replaces the previous definition;
    /// already-compiled programs keep the callback they captured. Names
    /// should stick to alphabetic characters: a name containing a
    /// separator or quote character can never be matched by the scanner,
    /// and `define` does not police that.
    pub fn define<F>(&mut self, name: impl Into<String>, params: &[ParamType], callback: F)
    where
        F: Fn(&[Value]) + Send + Sync + 'static,
    {
        let name = name.into();
        let signature = Signature {
            name: name.clone(),
            params: params.to_vec(),
            callback: Arc::new(callback),
        };
        self.functions.insert(name, signature);
    }

    /// Look up a registered function by exact, case-sensitive name.
    pub fn lookup(&self, name: &str) -> Option<&Signature> {
        self.functions.get(name)
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Compile `source` into an executable program.
    ///
    /// One pass, fail-fast: the first problem aborts the compile and
    /// comes back as the single [`CompileError`].
    pub fn compile(&self, source: &str) -> Result<Executable, CompileError> {
        parse::compile(self, source)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
