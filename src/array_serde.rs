// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use num_complex::Complex;
use num_traits::Float;

use crate::{BooleanArray, ComplexArray, DType, Value};

/// **Requires crate feature `"serde"`**
///
/// Serialized as the canonical string, e.g. `"complex128"`.
impl Serialize for DType
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        serializer.serialize_str(self.as_str())
    }
}

struct DTypeVisitor;

impl<'de> Visitor<'de> for DTypeVisitor
{
    type Value = DType;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        formatter.write_str("a data type name")
    }

    fn visit_str<E>(self, value: &str) -> Result<DType, E>
    where E: de::Error
    {
        value
            .parse()
            .map_err(|_| de::Error::unknown_variant(value, DTYPE_NAMES))
    }
}

static DTYPE_NAMES: &[&str] = &[
    "float64",
    "float32",
    "int32",
    "int16",
    "int8",
    "uint32",
    "uint16",
    "uint8",
    "complex128",
    "complex64",
    "bool",
    "generic",
];

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for DType
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        deserializer.deserialize_str(DTypeVisitor)
    }
}

/// **Requires crate feature `"serde"`**
///
/// Numbers, booleans and strings serialize as themselves, `Null` as unit and
/// complex numbers as a `[re, im]` pair. A pair deserializes as
/// `Complex128`, so `Complex64` values widen on a round trip.
impl Serialize for Value
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        match *self {
            Value::Number(x) => serializer.serialize_f64(x),
            Value::Bool(b) => serializer.serialize_bool(b),
            Value::Text(ref s) => serializer.serialize_str(s),
            Value::Null => serializer.serialize_unit(),
            Value::Complex128(z) => (z.re, z.im).serialize(serializer),
            Value::Complex64(z) => (z.re, z.im).serialize(serializer),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor
{
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        formatter.write_str("a number, boolean, string, null or [re, im] pair")
    }

    fn visit_bool<E>(self, b: bool) -> Result<Value, E>
    where E: de::Error
    {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E>(self, x: i64) -> Result<Value, E>
    where E: de::Error
    {
        Ok(Value::Number(x as f64))
    }

    fn visit_u64<E>(self, x: u64) -> Result<Value, E>
    where E: de::Error
    {
        Ok(Value::Number(x as f64))
    }

    fn visit_f64<E>(self, x: f64) -> Result<Value, E>
    where E: de::Error
    {
        Ok(Value::Number(x))
    }

    fn visit_str<E>(self, s: &str) -> Result<Value, E>
    where E: de::Error
    {
        Ok(Value::from(s))
    }

    fn visit_string<E>(self, s: String) -> Result<Value, E>
    where E: de::Error
    {
        Ok(Value::Text(s))
    }

    fn visit_unit<E>(self) -> Result<Value, E>
    where E: de::Error
    {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E>
    where E: de::Error
    {
        Ok(Value::Null)
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Value, V::Error>
    where V: SeqAccess<'de>
    {
        let re: f64 = visitor
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let im: f64 = visitor
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        if visitor.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }
        Ok(Value::Complex128(Complex::new(re, im)))
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Value
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// **Requires crate feature `"serde"`**
///
/// Serialized as the flat sequence of interleaved components.
impl<T> Serialize for ComplexArray<T>
where T: Float + Serialize
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        let buf = self.interleaved();
        let mut seq = serializer.serialize_seq(Some(buf.len()))?;
        for x in buf {
            seq.serialize_element(x)?;
        }
        seq.end()
    }
}

struct ComplexArrayVisitor<T>
{
    _marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for ComplexArrayVisitor<T>
where T: Float + Deserialize<'de>
{
    type Value = ComplexArray<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        formatter.write_str("a sequence of interleaved complex components")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<ComplexArray<T>, V::Error>
    where V: SeqAccess<'de>
    {
        let mut buf = Vec::with_capacity(visitor.size_hint().unwrap_or(0));
        while let Some(x) = visitor.next_element()? {
            buf.push(x);
        }
        ComplexArray::from_interleaved(buf).map_err(de::Error::custom)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de, T> Deserialize<'de> for ComplexArray<T>
where T: Float + Deserialize<'de>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        deserializer.deserialize_seq(ComplexArrayVisitor { _marker: PhantomData })
    }
}

/// **Requires crate feature `"serde"`**
///
/// Serialized as a sequence of booleans.
impl Serialize for BooleanArray
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        serializer.collect_seq(self.iter())
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for BooleanArray
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        Vec::<bool>::deserialize(deserializer).map(BooleanArray::from_bools)
    }
}
