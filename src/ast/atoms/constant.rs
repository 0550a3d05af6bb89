use std::fmt::{self, Write};

use crate::ast::{Restore, RestoreError, RestoreFlag, Value};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstantAtom(Value);

impl ConstantAtom {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn null() -> Self {
        Self(Value::Null)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl Restore for ConstantAtom {
    fn restore(&self, _: RestoreFlag, sb: &mut String, _: Option<&mut Vec<usize>>) -> Result<(), RestoreError> {
        write!(sb, "{}", self.0)?;
        Ok(())
    }
}

impl fmt::Display for ConstantAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
