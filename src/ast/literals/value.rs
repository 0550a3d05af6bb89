use ordered_float::NotNan;
use std::fmt::{self, Display};

use crate::ast::escape::write_string_literal;

/// A literal carried by a constant atom.
///
/// The set is closed: every kind the parser can produce has a variant here,
/// so rendering never meets an unknown runtime type.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Null,
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(NotNan<f32>),
    Float64(NotNan<f64>),
    Bool(bool),
    String(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Value::Int8(_) | Value::Int16(_) | Value::Int32(_) | Value::Int64(_)
                | Value::UInt8(_) | Value::UInt16(_) | Value::UInt32(_) | Value::UInt64(_)
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float32(_) | Value::Float64(_))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int8(i) => write!(f, "{}", i),
            Value::Int16(i) => write!(f, "{}", i),
            Value::Int32(i) => write!(f, "{}", i),
            Value::Int64(i) => write!(f, "{}", i),
            Value::UInt8(u) => write!(f, "{}", u),
            Value::UInt16(u) => write!(f, "{}", u),
            Value::UInt32(u) => write!(f, "{}", u),
            Value::UInt64(u) => write!(f, "{}", u),
            // shortest round-trip digits, never in exponent form
            Value::Float32(n) => write!(f, "{}", n.into_inner()),
            Value::Float64(n) => write!(f, "{}", n.into_inner()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => {
                let mut sb = String::with_capacity(s.len() + 16);
                write_string_literal(&mut sb, s);
                f.write_str(&sb)
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Int8(_) => write!(f, "Int8({})", self),
            Value::Int16(_) => write!(f, "Int16({})", self),
            Value::Int32(_) => write!(f, "Int32({})", self),
            Value::Int64(_) => write!(f, "Int64({})", self),
            Value::UInt8(_) => write!(f, "UInt8({})", self),
            Value::UInt16(_) => write!(f, "UInt16({})", self),
            Value::UInt32(_) => write!(f, "UInt32({})", self),
            Value::UInt64(_) => write!(f, "UInt64({})", self),
            Value::Float32(_) => write!(f, "Float32({})", self),
            Value::Float64(_) => write!(f, "Float64({})", self),
            Value::Bool(_) => write!(f, "Bool({})", self),
            Value::String(_) => write!(f, "String({})", self),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

value_from! {
    i8 => Int8, i16 => Int16, i32 => Int32, i64 => Int64,
    u8 => UInt8, u16 => UInt16, u32 => UInt32, u64 => UInt64,
    bool => Bool, String => String, &str => String,
}

macro_rules! value_from_float {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            /// Panics on NaN or infinity: MySQL has no literal for either.
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    assert!(v.is_finite(), "float literal must be finite, got {}", v);
                    match NotNan::new(v) {
                        Ok(n) => Value::$variant(n),
                        Err(_) => unreachable!("finite float is never NaN"),
                    }
                }
            }
        )*
    };
}

value_from_float! {
    f32 => Float32, f64 => Float64,
}
