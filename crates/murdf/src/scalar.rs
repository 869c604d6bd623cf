//! Numeric attribute values.
//!
//! URDF consumers compare attribute text, so a value keeps track of whether it
//! was written as an integer or a float: `1` renders as `"1"`, `1.0` as `"1.0"`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator placed between list elements in attribute values.
pub const LIST_SEPARATOR: &str = ", ";

/// A numeric attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Integer value, rendered without a decimal point.
    Int(i64),
    /// Integer above `i64::MAX`, rendered without a decimal point.
    UInt(u64),
    /// Floating point value, rendered in shortest round-trip form.
    Float(f64),
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Float(0.0)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(i64::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::Int(i64::from(v))
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Scalar::UInt(v), Scalar::Int)
    }
}

impl From<usize> for Scalar {
    fn from(v: usize) -> Self {
        Scalar::from(v as u64)
    }
}

// Goes through the shortest f32 text so 0.1f32 stays "0.1".
impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(v.to_string().parse().unwrap_or(f64::from(v)))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::UInt(v) => write!(f, "{v}"),
            Scalar::Float(v) => f.write_str(&format_float(v)),
        }
    }
}

/// Collect anything convertible into scalars.
pub fn scalars<I>(values: I) -> Vec<Scalar>
where
    I: IntoIterator,
    I::Item: Into<Scalar>,
{
    values.into_iter().map(Into::into).collect()
}

/// Render a list of scalars as `"a, b, c"`.
pub fn join(values: &[Scalar]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Shortest round-trip float text.
///
/// Positional notation for decimal exponents in `-4..16`, otherwise
/// `<mantissa>e<sign><exponent>` with at least two exponent digits.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf".into() } else { "-inf".into() };
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0.0".into() } else { "0.0".into() };
    }

    // `{:e}` yields the shortest digits, e.g. "1.5e16" or "-1e-7".
    let sci = format!("{v:e}");
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let positional = v.to_string();
        if positional.contains('.') {
            positional
        } else {
            positional + ".0"
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}
