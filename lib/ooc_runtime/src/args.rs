use crate::error::{bad_argument, Result};
use crate::method_table::Override;
use crate::value::Value;
use ooc_core::ObjRef;

/// Build `Args` from a list of expressions convertible into `Value`
#[macro_export]
macro_rules! args {
    ($($x:expr),* $(,)?) => {
        $crate::Args::new(vec![$($crate::Value::from($x)),*])
    };
}

/// Cursor over the arguments of a `create` call.
///
/// Each constructor in a super-chain consumes its own arguments, ancestors
/// first. The override list of a class definition is read by every metaclass
/// layer and is never consumed.
#[derive(Debug, Default)]
pub struct Args {
    values: Vec<Value>,
    pos: usize,
}

impl Args {
    pub fn new(values: Vec<Value>) -> Args {
        Args { values, pos: 0 }
    }

    pub fn empty() -> Args {
        Args::default()
    }

    /// Number of values not consumed yet
    pub fn remaining(&self) -> usize {
        self.values.len() - self.pos
    }

    fn next(&mut self, expected: &str) -> Result<Value> {
        let Some(v) = self.values.get(self.pos) else {
            return Err(bad_argument(format!(
                "expected {} at position {} but arguments are exhausted",
                expected, self.pos
            )));
        };
        self.pos += 1;
        Ok(v.clone())
    }

    fn mismatch(&self, expected: &str, got: &Value) -> crate::Error {
        bad_argument(format!(
            "expected {} at position {} but got {}",
            expected,
            self.pos - 1,
            got.kind()
        ))
    }

    pub fn next_int(&mut self) -> Result<i64> {
        match self.next("int")? {
            Value::Int(i) => Ok(i),
            v => Err(self.mismatch("int", &v)),
        }
    }

    pub fn next_str(&mut self) -> Result<String> {
        match self.next("string")? {
            Value::Str(s) => Ok(s),
            v => Err(self.mismatch("string", &v)),
        }
    }

    pub fn next_ref(&mut self) -> Result<ObjRef> {
        match self.next("object")? {
            Value::Ref(r) => Ok(r),
            v => Err(self.mismatch("object", &v)),
        }
    }

    pub fn next_size(&mut self) -> Result<usize> {
        let i = self.next_int()?;
        usize::try_from(i).map_err(|_| bad_argument(format!("size must not be negative: {}", i)))
    }

    /// Returns the override list at the current position without consuming
    /// it. Empty when the class definition has no overrides.
    pub fn overrides(&self) -> &[Override] {
        match self.values.get(self.pos) {
            Some(Value::Overrides(list)) => list,
            _ => &[],
        }
    }
}
