// Author: Dustin Pilgrim
// License: MIT

use crate::{Scope, Value, XxmlError};

/// Conversion from a resolved [`Value`] into the type requested by [`Scope::get`].
///
/// Conversions only accept their own arm; a string is never read as a number
/// and so on.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, XxmlError>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, XxmlError> {
        Ok(value)
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, XxmlError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(XxmlError::mismatch("string", other.type_name(), 401)
                .with_hint("Use a quoted string in your settings file")),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, XxmlError> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(XxmlError::mismatch("number", other.type_name(), 402)
                .with_hint("Use a number value in your settings file")),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, XxmlError> {
        let n = f64::from_value(value)?;
        let narrowed = n as f32;
        if narrowed.is_finite() || !n.is_finite() {
            Ok(narrowed)
        } else {
            Err(XxmlError::mismatch("f32", &format!("number {}", n), 407)
                .with_hint(format!("Use a number no larger than {} in magnitude", f32::MAX)))
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, XxmlError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(XxmlError::mismatch("boolean", other.type_name(), 403)
                .with_hint("Use true or false")),
        }
    }
}

impl FromValue for Scope {
    fn from_value(value: Value) -> Result<Self, XxmlError> {
        match value {
            Value::Scope(scope) => Ok(scope),
            other => Err(XxmlError::mismatch("scope", other.type_name(), 404)
                .with_hint("Use a [<Namespace> ...] block or a { ... } object")),
        }
    }
}

/// Arrays convert element by element, so `Vec<Value>` is the raw sequence and
/// `Vec<f64>` requires every element to be a number.
impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, XxmlError> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    T::from_value(item).map_err(|e| e.at_path(&format!("[{}]", index)))
                })
                .collect(),
            other => Err(XxmlError::mismatch("array", other.type_name(), 405)
                .with_hint("Use a [a, b, c] array")),
        }
    }
}

// Numbers are stored as f64; integer targets need an integral value in range.
// `MAX as f64` rounds up to a power of two for 64-bit types, so the upper
// bound is exclusive against `MAX + 1`.
macro_rules! impl_from_value_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, XxmlError> {
                    let n = f64::from_value(value)?;
                    if n.fract() == 0.0 && n >= <$ty>::MIN as f64 && n < <$ty>::MAX as f64 + 1.0 {
                        Ok(n as $ty)
                    } else {
                        Err(XxmlError::mismatch(stringify!($ty), &format!("number {}", n), 407)
                            .with_hint(format!(
                                "Use a whole number between {} and {}",
                                <$ty>::MIN,
                                <$ty>::MAX
                            )))
                    }
                }
            }
        )*
    };
}

impl_from_value_for_int!(i32, i64, u8, u16, u32, u64, usize);
