//! Dynamic attribute values
//!
//! Model attributes are untyped: the same attribute may hold a string on one
//! model and a number on another. [`Value`] captures that, and
//! [`Value::coerce_text`] is the one place where non-string values are turned
//! into text for the string-shaped rules (`length`, `not_blank`).
//!
//! # Examples
//!
//! ```
//! use sluice::Value;
//!
//! assert_eq!(Value::from(123).coerce_text().as_deref(), Some("123"));
//! assert_eq!(Value::from(12.0).coerce_text().as_deref(), Some("12"));
//! assert_eq!(Value::from("Dave").coerce_text().as_deref(), Some("Dave"));
//! assert_eq!(Value::Null.coerce_text(), None);
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::attributes::Attributes;

/// A single attribute value.
///
/// `Object` and `List` exist so that related models and collections can be
/// stored as attribute values; the rule library treats them as opaque.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Missing or explicitly null
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integral number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Text(String),
    /// Ordered collection of values
    List(Vec<Value>),
    /// Nested attribute map (a related model)
    Object(Attributes),
}

impl Value {
    /// Check whether this value is null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the text if this is a `Text` value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical text form used by string-shaped rules.
    ///
    /// Numbers and booleans are formatted without regard to locale. Integral
    /// floats render without a fractional part and `-0.0` renders as `"0"`.
    /// Floats at or above `1e21`, or below `1e-6`, in magnitude use exponent
    /// form (`"1e+21"`, `"1e-7"`). Non-finite floats render as `"NaN"`,
    /// `"Infinity"` and `"-Infinity"`. Null, lists and objects have no text
    /// form.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::Value;
    ///
    /// assert_eq!(Value::from(12345).coerce_text().as_deref(), Some("12345"));
    /// assert_eq!(Value::from(1.5).coerce_text().as_deref(), Some("1.5"));
    /// assert_eq!(Value::from(-0.0).coerce_text().as_deref(), Some("0"));
    /// assert_eq!(Value::from(true).coerce_text().as_deref(), Some("true"));
    /// assert_eq!(Value::List(vec![]).coerce_text(), None);
    /// ```
    pub fn coerce_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Int(n) => Some(Cow::Owned(n.to_string())),
            Value::Float(n) => Some(Cow::Owned(float_text(*n))),
            Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Null | Value::List(_) | Value::Object(_) => None,
        }
    }

    /// Short name of the variant, for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }
}

fn float_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{:e}", n);
        // Positive exponents carry an explicit sign
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }
    n.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Object(attrs) => write!(f, "{{{} attributes}}", attrs.len()),
            other => match other.coerce_text() {
                Some(text) => write!(f, "{}", text),
                None => Ok(()),
            },
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<Attributes> for Value {
    fn from(value: Attributes) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

macro_rules! impl_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers stay `Int` when they fit and fall back to `Float`.
macro_rules! impl_from_wide_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(value: $t) -> Self {
                    i64::try_from(value).map_or(Value::Float(value as f64), Value::Int)
                }
            }
        )+
    };
}

impl_from_wide_int!(isize, usize, u64, i128, u128);
