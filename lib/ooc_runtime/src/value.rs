use crate::method_table::Override;
use ooc_core::ObjRef;

/// A value passed to constructors or held by an instance variable
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The content of a freshly allocated cell
    #[default]
    Nil,
    Int(i64),
    Str(String),
    Ref(ObjRef),
    /// Method overrides of a class definition
    Overrides(Vec<Override>),
}

impl Value {
    /// Returns the integer. `Nil` reads as zero.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Nil => Some(0),
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_obj(&self) -> Option<ObjRef> {
        match self {
            Value::Ref(r) => Some(*r),
            _ => None,
        }
    }

    /// Short description used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::Ref(_) => "object",
            Value::Overrides(_) => "overrides",
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(n as i64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<ObjRef> for Value {
    fn from(r: ObjRef) -> Self {
        Value::Ref(r)
    }
}

impl From<Vec<Override>> for Value {
    fn from(overrides: Vec<Override>) -> Self {
        Value::Overrides(overrides)
    }
}
