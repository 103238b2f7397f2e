//! Literal values rendered inline into predicates.
//!
//! Unlike a parameterized builder, selq writes values straight into the SQL
//! text:
//!
//! - `Null` → `null`
//! - booleans and numbers → their unquoted literal form
//! - text → single-quoted, **without** escaping embedded quotes
//! - timestamps → single-quoted ISO-8601 in UTC with millisecond precision
//!
//! Text is not escaped. Do not feed untrusted input through this module.

use crate::error::{SelqError, SelqResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SecondsFormat, Utc};

/// A literal accepted by comparisons and `IN` lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    /// Unsigned integers above `i64::MAX`
    UInt(u64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl Value {
    /// Render the literal as SQL.
    ///
    /// Fails with [`SelqError::InvalidValueType`] for non-finite floats.
    pub fn to_sql(&self) -> SelqResult<String> {
        let mut out = String::new();
        self.write_sql(&mut out)?;
        Ok(out)
    }

    pub(crate) fn write_sql(&self, out: &mut String) -> SelqResult<()> {
        match self {
            Value::Null => out.push_str("null"),
            Value::Bool(true) => out.push_str("true"),
            Value::Bool(false) => out.push_str("false"),
            Value::Int(v) => out.push_str(&v.to_string()),
            Value::UInt(v) => out.push_str(&v.to_string()),
            Value::Float(v) => {
                if !v.is_finite() {
                    return Err(SelqError::invalid_value(format!(
                        "Value must be a string, number, boolean, date, or null, received: {v}"
                    )));
                }
                out.push_str(&v.to_string());
            }
            Value::Text(s) => {
                out.push('\'');
                out.push_str(s);
                out.push('\'');
            }
            Value::Timestamp(ts) => {
                out.push('\'');
                out.push_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true));
                out.push('\'');
            }
        }
        Ok(())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! int_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

int_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Value::UInt(v), Value::Int)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::from(v as u64)
    }
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

/// Keeps the digits of the `f32` literal rather than its widened binary value.
impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.to_string().parse().unwrap_or(f64::from(v)))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(v.with_timezone(&Utc))
    }
}

impl From<DateTime<Local>> for Value {
    fn from(v: DateTime<Local>) -> Self {
        Value::Timestamp(v.with_timezone(&Utc))
    }
}

/// Naive timestamps are taken to be UTC.
impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v.and_utc())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "json")]
impl TryFrom<serde_json::Value> for Value {
    type Error = SelqError;

    fn try_from(v: serde_json::Value) -> SelqResult<Self> {
        use serde_json::Value as Json;

        match v {
            Json::Null => Ok(Value::Null),
            Json::Bool(b) => Ok(Value::Bool(b)),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::UInt(u))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(SelqError::invalid_value(format!(
                        "number {n} has no SQL literal form"
                    )))
                }
            }
            Json::String(s) => Ok(Value::Text(s)),
            Json::Array(_) => Err(SelqError::invalid_value(
                "Value must be a string, number, boolean, date, or null, received: array",
            )),
            Json::Object(_) => Err(SelqError::invalid_value(
                "Value must be a string, number, boolean, date, or null, received: object",
            )),
        }
    }
}
