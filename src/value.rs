// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Dynamically typed array elements.

use num_complex::Complex;
use num_traits::ToPrimitive;

/// A single array element as read by a getter or written by a setter.
///
/// Numeric storage decodes to `Number`, complex storage to one of the complex
/// variants, boolean storage to `Bool`. Generic sequences may hold any
/// variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Value
{
    Number(f64),
    Complex128(Complex<f64>),
    Complex64(Complex<f32>),
    Bool(bool),
    Text(String),
    Null,
}

impl Value
{
    /// Numeric coercion used when a value is stored into real-valued
    /// storage.
    ///
    /// Booleans become 0 or 1, `Null` and blank strings become 0. Other
    /// strings are read as a decimal literal, `Infinity` with an optional
    /// sign, or an unsigned `0x`/`0o`/`0b` integer, and give NaN otherwise
    /// (so `"inf"` and `"nan"` are NaN). Complex numbers have no real
    /// coercion and give NaN.
    pub fn to_number(&self) -> f64
    {
        match *self {
            Value::Number(x) => x,
            Value::Bool(b) => b as u8 as f64,
            Value::Null => 0.,
            Value::Text(ref s) => parse_number(s),
            Value::Complex128(_) | Value::Complex64(_) => f64::NAN,
        }
    }

    /// Coercion used when a value is stored into complex storage: complex
    /// values pass through, everything else becomes `(to_number(), 0)`.
    pub fn to_complex128(&self) -> Complex<f64>
    {
        match *self {
            Value::Complex128(z) => z,
            Value::Complex64(z) => Complex::new(f64::from(z.re), f64::from(z.im)),
            ref other => Complex::new(other.to_number(), 0.),
        }
    }

    pub fn to_complex64(&self) -> Complex<f32>
    {
        match *self {
            Value::Complex64(z) => z,
            ref other => {
                let z = other.to_complex128();
                Complex::new(z.re as f32, z.im as f32)
            }
        }
    }

    /// Truthiness used when a value is stored into boolean storage.
    pub fn is_truthy(&self) -> bool
    {
        match *self {
            Value::Number(x) => x != 0. && !x.is_nan(),
            Value::Bool(b) => b,
            Value::Text(ref s) => !s.is_empty(),
            Value::Null => false,
            Value::Complex128(_) | Value::Complex64(_) => true,
        }
    }

    pub fn as_number(&self) -> Option<f64>
    {
        match *self {
            Value::Number(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool>
    {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool
    {
        matches!(self, Value::Null)
    }

    /// Equality as used by searches: numbers compare by value (so NaN never
    /// matches), complex numbers of either width compare componentwise.
    pub fn same_value(&self, other: &Value) -> bool
    {
        match (self, other) {
            (Value::Complex128(_) | Value::Complex64(_), Value::Complex128(_) | Value::Complex64(_)) => {
                self.to_complex128() == other.to_complex128()
            }
            _ => self == other,
        }
    }
}

fn parse_number(s: &str) -> f64
{
    let s = s.trim();
    if s.is_empty() {
        return 0.;
    }
    let radix = match s.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => 10,
    };
    if radix != 10 {
        let digits = &s[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0., |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)))
            .unwrap_or(f64::NAN);
    }
    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if unsigned == "Infinity" {
        if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else if unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        s.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Reduce a number modulo 2^32 the way fixed-width integer storage does.
///
/// NaN and infinities store as 0, finite values are truncated toward zero
/// and wrapped.
pub(crate) fn wrap_u32(x: f64) -> u32
{
    if !x.is_finite() {
        return 0;
    }
    let t = x.trunc().rem_euclid(4294967296.);
    t.to_u32().unwrap_or(0)
}

pub(crate) fn to_int32(x: f64) -> i32
{
    wrap_u32(x) as i32
}

pub(crate) fn to_int16(x: f64) -> i16
{
    wrap_u32(x) as u16 as i16
}

pub(crate) fn to_int8(x: f64) -> i8
{
    wrap_u32(x) as u8 as i8
}

pub(crate) fn to_uint16(x: f64) -> u16
{
    wrap_u32(x) as u16
}

pub(crate) fn to_uint8(x: f64) -> u8
{
    wrap_u32(x) as u8
}

impl Default for Value
{
    fn default() -> Self
    {
        Value::Null
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
        impl From<$t> for Value
        {
            #[inline]
            fn from(x: $t) -> Self
            {
                Value::Number(f64::from(x))
            }
        }
        )*
    };
}

impl_from_number!(f64, f32, i32, i16, i8, u32, u16, u8);

impl From<bool> for Value
{
    fn from(b: bool) -> Self
    {
        Value::Bool(b)
    }
}

impl From<Complex<f64>> for Value
{
    fn from(z: Complex<f64>) -> Self
    {
        Value::Complex128(z)
    }
}

impl From<Complex<f32>> for Value
{
    fn from(z: Complex<f32>) -> Self
    {
        Value::Complex64(z)
    }
}

impl From<&str> for Value
{
    fn from(s: &str) -> Self
    {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value
{
    fn from(s: String) -> Self
    {
        Value::Text(s)
    }
}

impl<T> From<Option<T>> for Value
where T: Into<Value>
{
    fn from(x: Option<T>) -> Self
    {
        x.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn numeric_coercion()
    {
        assert_eq!(Value::Bool(true).to_number(), 1.);
        assert_eq!(Value::Null.to_number(), 0.);
        assert_eq!(Value::from(" 2.5 ").to_number(), 2.5);
        assert_eq!(Value::from("").to_number(), 0.);
        assert!(Value::from("beep").to_number().is_nan());
        assert!(Value::from(Complex::new(1., 2.)).to_number().is_nan());
    }

    #[test]
    fn string_coercion()
    {
        assert_eq!(Value::from("Infinity").to_number(), f64::INFINITY);
        assert_eq!(Value::from(" -Infinity").to_number(), f64::NEG_INFINITY);
        assert_eq!(Value::from("0x10").to_number(), 16.);
        assert_eq!(Value::from("0B101").to_number(), 5.);
        assert_eq!(Value::from("0o17").to_number(), 15.);
        assert_eq!(Value::from("-.5e1").to_number(), -5.);
        assert_eq!(Value::from("\n\t").to_number(), 0.);
        for s in ["inf", "infinity", "nan", "NaN", "+inf", "0x", "-0x10", "0x1g", "1e", ".", "1_000"] {
            assert!(Value::from(s).to_number().is_nan(), "{}", s);
        }
    }

    #[test]
    fn accessors_by_variant()
    {
        assert!(Value::Null.is_null());
        assert!(Value::default().is_null());
        assert!(!Value::from(0).is_null());
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(1).as_bool(), None);
        assert_eq!(Value::from(None::<f64>), Value::Null);
    }

    #[test]
    fn integer_wrapping()
    {
        assert_eq!(to_int8(128.), -128);
        assert_eq!(to_int8(-129.), 127);
        assert_eq!(to_uint8(256.), 0);
        assert_eq!(to_uint8(-1.), 255);
        assert_eq!(to_uint16(65537.9), 1);
        assert_eq!(to_int16(32768.), -32768);
        assert_eq!(to_int32(4294967295.), -1);
        assert_eq!(wrap_u32(f64::NAN), 0);
        assert_eq!(wrap_u32(f64::INFINITY), 0);
        assert_eq!(to_int32(-2.7), -2);
    }

    #[test]
    fn truthiness()
    {
        assert!(Value::from(3).is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from(Complex::new(0., 0.)).is_truthy());
    }

    #[test]
    fn complex_equality_across_widths()
    {
        let a = Value::from(Complex::new(1.5f64, -2.));
        let b = Value::from(Complex::new(1.5f32, -2.));
        assert!(a.same_value(&b));
        assert!(!Value::Number(f64::NAN).same_value(&Value::Number(f64::NAN)));
    }
}
