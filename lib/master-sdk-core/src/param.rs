//! Query parameter values and their canonical string forms.
//!
//! The master parses parameters with fixed formatting rules, so every value
//! is rendered through [`ParamValue`]:
//!
//! | kind | rendering |
//! |---|---|
//! | text | unchanged |
//! | bool | `true` / `false` |
//! | signed / unsigned integers | plain decimal |
//! | floats | fixed point, 6 fractional digits |
//!
//! ```
//! use master_sdk_core::ParamValue;
//!
//! assert_eq!(ParamValue::from(-5_i8).to_string(), "-5");
//! assert_eq!(ParamValue::from(1.23456789_f64).to_string(), "1.234568");
//! ```

use std::fmt;

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Text, sent unchanged.
    Text(String),
    /// Boolean.
    Bool(bool),
    /// Any signed integer width.
    Int(i64),
    /// Any unsigned integer width.
    Uint(u64),
    /// Any floating-point width.
    Float(f64),
}

impl ParamValue {
    /// The canonical wire form of this value.
    #[must_use]
    pub fn into_canonical(self) -> String {
        match self {
            Self::Text(text) => text,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Uint(value) => write!(f, "{value}"),
            Self::Float(value) => fmt_fixed(f, *value),
        }
    }
}

// The master parses `NaN`, `+Inf` and `-Inf` for non-finite floats.
fn fmt_fixed(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value.is_sign_positive() { "+Inf" } else { "-Inf" })
    } else {
        write!(f, "{value:.6}")
    }
}

macro_rules! impl_from_lossless {
    ($variant:ident($target:ty): $($source:ty),+) => {
        $(
            impl From<$source> for ParamValue {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_lossless!(Int(i64): i8, i16, i32, i64);
impl_from_lossless!(Uint(u64): u8, u16, u32, u64);
impl_from_lossless!(Float(f64): f32, f64);
impl_from_lossless!(Bool(bool): bool);
impl_from_lossless!(Text(String): String, &str, &String);

impl From<isize> for ParamValue {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for ParamValue {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

/// Rejected parameter input, carrying a rendering of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedParam(pub String);

/// Conversion into a [`ParamValue`].
///
/// Every scalar type converts infallibly. [`serde_json::Value`] is the dynamic
/// input: strings, booleans and numbers convert, while `null`, arrays and
/// objects are rejected.
pub trait IntoParamValue {
    /// Convert, or describe why the value has no parameter form.
    fn into_param_value(self) -> Result<ParamValue, UnsupportedParam>;
}

impl IntoParamValue for ParamValue {
    fn into_param_value(self) -> Result<ParamValue, UnsupportedParam> {
        Ok(self)
    }
}

macro_rules! impl_into_param_value {
    ($($source:ty),+) => {
        $(
            impl IntoParamValue for $source {
                fn into_param_value(self) -> Result<ParamValue, UnsupportedParam> {
                    Ok(ParamValue::from(self))
                }
            }
        )+
    };
}

impl_into_param_value!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, String, &str, &String
);

impl IntoParamValue for serde_json::Value {
    fn into_param_value(self) -> Result<ParamValue, UnsupportedParam> {
        use serde_json::Value;

        match self {
            Value::String(text) => Ok(ParamValue::Text(text)),
            Value::Bool(value) => Ok(ParamValue::Bool(value)),
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Ok(ParamValue::Int(value))
                } else if let Some(value) = number.as_u64() {
                    Ok(ParamValue::Uint(value))
                } else {
                    number
                        .as_f64()
                        .map(ParamValue::Float)
                        .ok_or_else(|| UnsupportedParam(number.to_string()))
                }
            }
            other @ (Value::Null | Value::Array(_) | Value::Object(_)) => {
                Err(UnsupportedParam(other.to_string()))
            }
        }
    }
}

impl IntoParamValue for &serde_json::Value {
    fn into_param_value(self) -> Result<ParamValue, UnsupportedParam> {
        self.clone().into_param_value()
    }
}
