// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Getter and setter resolution.
//!
//! Resolve once per call, then read and write elements in a loop through
//! plain function pointers. The pointer returned for a given data type is
//! always the same function, so callers may cache it.
//!
//! None of the functions check bounds: a read past the end gives `None` and
//! a write past the end does what the storage kind does naturally (see
//! [`Collection::assign`]).

use crate::dtype::IntoDType;
use crate::value::{to_int16, to_int32, to_int8, to_uint16, to_uint8, wrap_u32};
use crate::{Collection, DType, Value};

/// Read the element at an index.
pub type GetFn = fn(&Collection, usize) -> Option<Value>;

/// Write the element at an index.
pub type SetFn = fn(&mut Collection, usize, Value);

macro_rules! numeric_accessors {
    ($($variant:ident, $get:ident, $set:ident, |$x:ident| $convert:expr;)*) => {
        $(
        fn $get(x: &Collection, index: usize) -> Option<Value>
        {
            match x {
                Collection::$variant(v) => v.get(index).map(|&e| Value::from(e)),
                _ => x.index(index),
            }
        }

        fn $set(x: &mut Collection, index: usize, value: Value)
        {
            match x {
                Collection::$variant(v) => {
                    if let Some(slot) = v.get_mut(index) {
                        let $x = value.to_number();
                        *slot = $convert;
                    }
                }
                _ => x.assign(index, value),
            }
        }
        )*
    };
}

numeric_accessors! {
    Float64, get_float64, set_float64, |n| n;
    Float32, get_float32, set_float32, |n| n as f32;
    Int32, get_int32, set_int32, |n| to_int32(n);
    Int16, get_int16, set_int16, |n| to_int16(n);
    Int8, get_int8, set_int8, |n| to_int8(n);
    Uint32, get_uint32, set_uint32, |n| wrap_u32(n);
    Uint16, get_uint16, set_uint16, |n| to_uint16(n);
    Uint8, get_uint8, set_uint8, |n| to_uint8(n);
}

fn get_generic(x: &Collection, index: usize) -> Option<Value>
{
    match x {
        Collection::Generic(v) => v.get(index).cloned(),
        _ => x.index(index),
    }
}

fn set_generic(x: &mut Collection, index: usize, value: Value)
{
    x.assign(index, value)
}

fn get_complex128(x: &Collection, index: usize) -> Option<Value>
{
    match x {
        Collection::Complex128(c) => c.get(index).map(Value::Complex128),
        _ => get_accessor(x, index),
    }
}

fn set_complex128(x: &mut Collection, index: usize, value: Value)
{
    match x {
        Collection::Complex128(c) => c.set(index, value.to_complex128()),
        _ => set_accessor(x, index, value),
    }
}

fn get_complex64(x: &Collection, index: usize) -> Option<Value>
{
    match x {
        Collection::Complex64(c) => c.get(index).map(Value::Complex64),
        _ => get_accessor(x, index),
    }
}

fn set_complex64(x: &mut Collection, index: usize, value: Value)
{
    match x {
        Collection::Complex64(c) => c.set(index, value.to_complex64()),
        _ => set_accessor(x, index, value),
    }
}

fn get_bool(x: &Collection, index: usize) -> Option<Value>
{
    match x {
        Collection::Bool(b) => b.get(index).map(Value::Bool),
        _ => get_accessor(x, index),
    }
}

fn set_bool(x: &mut Collection, index: usize, value: Value)
{
    match x {
        Collection::Bool(b) => b.set(index, value.is_truthy()),
        _ => set_accessor(x, index, value),
    }
}

// Call through the protocol when `x` presents it, otherwise index directly.
fn get_accessor(x: &Collection, index: usize) -> Option<Value>
{
    match x.as_accessor() {
        Some(a) => a.get(index),
        None => x.index(index),
    }
}

fn set_accessor(x: &mut Collection, index: usize, value: Value)
{
    match x.as_accessor_mut() {
        Some(a) => a.set(index, value),
        None => x.assign(index, value),
    }
}

/// Return a function reading elements of arrays of the given data type by
/// plain indexing.
///
/// `dtype` may be a [`DType`], an `Option<DType>`, a dtype string or a
/// collection. Unknown or unparseable data types fall back to generic
/// indexing; this never fails. Complex and boolean data types decode their
/// own storage, the same way [`accessor_getter`] does.
///
/// ```
/// use array_base::{getter, Collection, Value};
///
/// let x: Collection = vec![1., 2., 3.].into();
/// let get = getter("float64");
/// assert_eq!(get(&x, 1), Some(Value::Number(2.)));
/// assert_eq!(get(&x, 3), None);
/// ```
pub fn getter<D: IntoDType>(dtype: D) -> GetFn
{
    match dtype.into_dtype() {
        Some(DType::Float64) => get_float64,
        Some(DType::Float32) => get_float32,
        Some(DType::Int32) => get_int32,
        Some(DType::Int16) => get_int16,
        Some(DType::Int8) => get_int8,
        Some(DType::Uint32) => get_uint32,
        Some(DType::Uint16) => get_uint16,
        Some(DType::Uint8) => get_uint8,
        Some(DType::Complex128) => get_complex128,
        Some(DType::Complex64) => get_complex64,
        Some(DType::Bool) => get_bool,
        Some(DType::Generic) | None => get_generic,
    }
}

/// Return a function writing elements of arrays of the given data type by
/// plain indexing.
///
/// Written values are coerced to the storage element type: numbers are
/// truncated and wrapped for integer storage, booleans store as 0 or 1.
/// Unknown data types fall back to generic indexing.
pub fn setter<D: IntoDType>(dtype: D) -> SetFn
{
    match dtype.into_dtype() {
        Some(DType::Float64) => set_float64,
        Some(DType::Float32) => set_float32,
        Some(DType::Int32) => set_int32,
        Some(DType::Int16) => set_int16,
        Some(DType::Int8) => set_int8,
        Some(DType::Uint32) => set_uint32,
        Some(DType::Uint16) => set_uint16,
        Some(DType::Uint8) => set_uint8,
        Some(DType::Complex128) => set_complex128,
        Some(DType::Complex64) => set_complex64,
        Some(DType::Bool) => set_bool,
        Some(DType::Generic) | None => set_generic,
    }
}

/// Return a function reading elements through the accessor protocol.
///
/// Complex getters return a two-component value built from adjacent
/// storage slots; the boolean getter decodes a 0/1 cell. Other and unknown
/// data types get a function calling the array's own `get`.
pub fn accessor_getter<D: IntoDType>(dtype: D) -> GetFn
{
    match dtype.into_dtype() {
        Some(DType::Complex128) => get_complex128,
        Some(DType::Complex64) => get_complex64,
        Some(DType::Bool) => get_bool,
        _ => get_accessor,
    }
}

/// Return a function writing elements through the accessor protocol.
pub fn accessor_setter<D: IntoDType>(dtype: D) -> SetFn
{
    match dtype.into_dtype() {
        Some(DType::Complex128) => set_complex128,
        Some(DType::Complex64) => set_complex64,
        Some(DType::Bool) => set_bool,
        _ => set_accessor,
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{BooleanArray, Complex128Array};
    use num_complex::Complex;

    #[test]
    fn generic_fallback()
    {
        let mut x: Collection = vec![Value::from(1), Value::from(2), Value::from(3)].into();
        assert_eq!(getter("generic")(&x, 1), Some(Value::from(2)));
        assert_eq!(getter(None::<DType>)(&x, 1), Some(Value::from(2)));
        assert_eq!(getter("not-a-dtype")(&x, 2), Some(Value::from(3)));
        setter(None::<DType>)(&mut x, 0, Value::from("a"));
        assert_eq!(getter(DType::Generic)(&x, 0), Some(Value::from("a")));
    }

    #[test]
    fn mismatched_getter_indexes_directly()
    {
        let x: Collection = vec![7i16, 8].into();
        assert_eq!(getter(DType::Float64)(&x, 1), Some(Value::from(8)));
        assert_eq!(accessor_getter(DType::Complex128)(&x, 0), Some(Value::from(7)));
    }

    #[test]
    fn integer_setters_wrap()
    {
        let mut x: Collection = vec![0i8; 2].into();
        let set = setter(&x);
        set(&mut x, 0, Value::from(200));
        set(&mut x, 1, Value::from(true));
        assert_eq!(getter(&x)(&x, 0), Some(Value::from(-56)));
        assert_eq!(getter(&x)(&x, 1), Some(Value::from(1)));
    }

    #[test]
    fn accessor_functions()
    {
        let mut c: Collection = Complex128Array::from_interleaved(vec![1., 2., 3., 4.])
            .unwrap()
            .into();
        let get = accessor_getter(DType::Complex128);
        assert_eq!(get(&c, 0), Some(Value::from(Complex::new(1., 2.))));
        accessor_setter("complex128")(&mut c, 1, Value::from(5));
        assert_eq!(get(&c, 1), Some(Value::from(Complex::new(5., 0.))));
        assert_eq!(get(&c, 2), None);

        let mut b: Collection = BooleanArray::new(2).into();
        accessor_setter(DType::Bool)(&mut b, 1, Value::from(0.5));
        assert_eq!(accessor_getter(DType::Bool)(&b, 1), Some(Value::Bool(true)));
        // generic accessor functions call through the array's own get
        assert_eq!(accessor_getter(None::<DType>)(&b, 1), Some(Value::Bool(true)));
    }

    #[test]
    fn complex_and_bool_tags_decode()
    {
        let mut b: Collection = BooleanArray::new(2).into();
        setter(DType::Bool)(&mut b, 0, Value::Bool(true));
        assert_eq!(getter(DType::Bool)(&b, 0), Some(Value::Bool(true)));

        let mut c: Collection = Complex128Array::zeros(1).into();
        setter("complex128")(&mut c, 0, Value::from(3));
        assert_eq!(getter("complex128")(&c, 0), Some(Value::from(Complex::new(3., 0.))));

        // plain storage under a complex tag is still indexed directly
        let x: Collection = vec![4u8].into();
        assert_eq!(getter(DType::Complex64)(&x, 0), Some(Value::from(4)));
    }

    #[test]
    fn resolution_is_stable()
    {
        for &dt in crate::dtypes() {
            assert!(getter(dt) as usize == getter(dt.as_str()) as usize);
            assert!(accessor_setter(dt) as usize == accessor_setter(Some(dt)) as usize);
        }
    }
}
