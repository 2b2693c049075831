//! Runtime values and parameter types for registered functions.
//!
//! Unlike a dynamically typed scripting value, every argument here decodes
//! to exactly the variant its slot declares, and nothing coerces after
//! that. `ParamType` mirrors `Value` one variant to one variant and only
//! ever describes an *expected* type; it never holds data.

use std::fmt;

/// A decoded script argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I32(n) => write!(f, "{n}"),
            Value::U32(n) => write!(f, "{n}"),
            Value::I64(n) => write!(f, "{n}"),
            Value::U64(n) => write!(f, "{n}"),
            Value::F32(x) => write!(f, "{x}"),
            Value::F64(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Value {
    /// The parameter type this value would satisfy.
    pub fn param_type(&self) -> ParamType {
        match self {
            Value::I32(_) => ParamType::I32,
            Value::U32(_) => ParamType::U32,
            Value::I64(_) => ParamType::I64,
            Value::U64(_) => ParamType::U64,
            Value::F32(_) => ParamType::F32,
            Value::F64(_) => ParamType::F64,
            Value::Str(_) => ParamType::Str,
            Value::Bool(_) => ParamType::Bool,
        }
    }

    /// Name of the type held, matching [`ParamType::name`].
    pub fn type_name(&self) -> &'static str {
        self.param_type().name()
    }

    // ── Strict accessors ──────────────────────────────────────────────────────
    // Each returns `Some` only for its own variant; callbacks that know
    // their signature can index args and unwrap the matching accessor.

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::I32(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::U32(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::F32(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::I32(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::U32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::I64(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::U64(n)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::F32(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::F64(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Declared type of one parameter slot in a function signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Str,
    Bool,
}

impl ParamType {
    /// Every parameter type, in declaration order.
    pub const ALL: [ParamType; 8] = [
        ParamType::I32,
        ParamType::U32,
        ParamType::I64,
        ParamType::U64,
        ParamType::F32,
        ParamType::F64,
        ParamType::Str,
        ParamType::Bool,
    ];

    /// Short name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ParamType::I32 => "i32",
            ParamType::U32 => "u32",
            ParamType::I64 => "i64",
            ParamType::U64 => "u64",
            ParamType::F32 => "f32",
            ParamType::F64 => "f64",
            ParamType::Str => "str",
            ParamType::Bool => "bool",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_numbers() {
        assert_eq!(Value::I32(-7).to_string(), "-7");
        assert_eq!(Value::U64(18_446_744_073_709_551_615).to_string(), "18446744073709551615");
        assert_eq!(Value::F64(3.25).to_string(), "3.25");
    }

    #[test]
    fn display_text_and_bool() {
        assert_eq!(Value::Str("hello".into()).to_string(), "hello");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn accessors_are_strict() {
        assert_eq!(Value::I32(5).as_i32(), Some(5));
        assert_eq!(Value::U32(5).as_i32(), None);
        assert_eq!(Value::Str("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Str("x".into()).as_bool(), None);
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
    }

    #[test]
    fn param_type_mirrors_variant() {
        assert_eq!(Value::I32(0).param_type(), ParamType::I32);
        assert_eq!(Value::U32(0).param_type(), ParamType::U32);
        assert_eq!(Value::I64(0).param_type(), ParamType::I64);
        assert_eq!(Value::U64(0).param_type(), ParamType::U64);
        assert_eq!(Value::F32(0.0).param_type(), ParamType::F32);
        assert_eq!(Value::F64(0.0).param_type(), ParamType::F64);
        assert_eq!(Value::Str(String::new()).param_type(), ParamType::Str);
        assert_eq!(Value::Bool(false).param_type(), ParamType::Bool);
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from(3i32), Value::I32(3));
        assert_eq!(Value::from(3u64), Value::U64(3));
        assert_eq!(Value::from("abc"), Value::Str("abc".into()));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn type_names() {
        for pt in ParamType::ALL {
            assert_eq!(pt.to_string(), pt.name());
        }
        assert_eq!(ParamType::Str.name(), "str");
        assert_eq!(ParamType::Bool.name(), "bool");
    }
}
