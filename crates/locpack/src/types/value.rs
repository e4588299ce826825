use std::fmt::{Display, Formatter, Result as FmtResult};

/// A runtime value substituted into a `{n}` placeholder.
///
/// Messages take positional arguments of mixed types, so the resolver
/// accepts a slice of `Value`s and renders each through `Display`.
///
/// # Example
///
/// ```
/// use locpack::Value;
///
/// let done: Value = 3.into();
/// let ratio: Value = "30%".into();
/// assert_eq!(done.to_string(), "3");
/// assert_eq!(ratio.to_string(), "30%");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer, e.g. a file count.
    Number(i64),

    /// A floating-point number, e.g. elapsed seconds.
    Float(f64),

    /// A string value, e.g. a file name or an already-localized label.
    String(String),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Float(_) | Value::String(_) => None,
        }
    }

    /// Get this value as a float, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            Value::String(_) => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Number(_) | Value::Float(_) => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

/// Integers beyond `i64::MAX` keep their exact digits as a string.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or_else(|_| Value::String(n.to_string()), Value::Number)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or_else(|_| Value::String(n.to_string()), Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}
