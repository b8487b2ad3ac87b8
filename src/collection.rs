// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runtime values that the accessor core can classify.

use std::collections::BTreeMap;
use std::fmt;

use crate::value::{to_int16, to_int32, to_int8, to_uint16, to_uint8, wrap_u32};
use crate::{AccessorProtocol, BooleanArray, Complex128Array, Complex64Array, Value};

/// A value handed to the accessor core.
///
/// The set of storage kinds is closed; classification is a match over the
/// variants. `Object`, `Custom` and `Buffer` have no data type of their
/// own, and `Buffer` is not array-like at all.
pub enum Collection
{
    /// Untyped, variable-length sequence.
    Generic(Vec<Value>),
    Float64(Vec<f64>),
    Float32(Vec<f32>),
    Int32(Vec<i32>),
    Int16(Vec<i16>),
    Int8(Vec<i8>),
    Uint32(Vec<u32>),
    Uint16(Vec<u16>),
    Uint8(Vec<u8>),
    Complex128(Complex128Array),
    Complex64(Complex64Array),
    Bool(BooleanArray),
    /// An object with a `length` and indexed elements.
    Object(ArrayLikeObject),
    /// A user-provided value presenting the accessor protocol.
    Custom(Box<dyn AccessorProtocol>),
    /// Raw binary data; has no `length` and no indexed elements.
    Buffer(Vec<u8>),
}

/// Longest generic sequence a write past the end may grow.
const MAX_GENERIC_LEN: usize = u32::MAX as usize;

/// An array-like object: a `length` plus whatever indexed elements have
/// been assigned.
///
/// Indices at or past `length` may hold elements; they are not counted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArrayLikeObject
{
    pub length: usize,
    pub elements: BTreeMap<usize, Value>,
}

impl ArrayLikeObject
{
    pub fn new(length: usize) -> Self
    {
        ArrayLikeObject {
            length,
            elements: BTreeMap::new(),
        }
    }

    pub fn from_values<I>(values: I) -> Self
    where I: IntoIterator<Item = Value>
    {
        let elements: BTreeMap<_, _> = values.into_iter().enumerate().collect();
        ArrayLikeObject {
            length: elements.len(),
            elements,
        }
    }
}

impl Collection
{
    /// Number of elements, or `None` if the value is not array-like.
    pub fn len(&self) -> Option<usize>
    {
        let n = match self {
            Collection::Generic(v) => v.len(),
            Collection::Float64(v) => v.len(),
            Collection::Float32(v) => v.len(),
            Collection::Int32(v) => v.len(),
            Collection::Int16(v) => v.len(),
            Collection::Int8(v) => v.len(),
            Collection::Uint32(v) => v.len(),
            Collection::Uint16(v) => v.len(),
            Collection::Uint8(v) => v.len(),
            Collection::Complex128(v) => v.len(),
            Collection::Complex64(v) => v.len(),
            Collection::Bool(v) => v.len(),
            Collection::Object(o) => o.length,
            Collection::Custom(c) => c.len(),
            Collection::Buffer(_) => return None,
        };
        Some(n)
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == Some(0)
    }

    /// Return `true` if the value has a length and indexed elements.
    pub fn is_array_like(&self) -> bool
    {
        self.len().is_some()
    }

    /// Borrow the value as an accessor-protocol array, if it is one.
    pub fn as_accessor(&self) -> Option<&dyn AccessorProtocol>
    {
        match self {
            Collection::Complex128(c) => Some(c),
            Collection::Complex64(c) => Some(c),
            Collection::Bool(b) => Some(b),
            Collection::Custom(c) => Some(&**c),
            _ => None,
        }
    }

    pub fn as_accessor_mut(&mut self) -> Option<&mut (dyn AccessorProtocol + 'static)>
    {
        match self {
            Collection::Complex128(c) => Some(c),
            Collection::Complex64(c) => Some(c),
            Collection::Bool(b) => Some(b),
            Collection::Custom(c) => Some(&mut **c),
            _ => None,
        }
    }

    /// Read element `index` by plain indexing.
    ///
    /// Accessor-protocol storage and raw buffers expose no indexed elements
    /// and always read as `None`. Out-of-bounds reads give `None`.
    pub fn index(&self, index: usize) -> Option<Value>
    {
        match self {
            Collection::Generic(v) => v.get(index).cloned(),
            Collection::Float64(v) => v.get(index).map(|&x| Value::from(x)),
            Collection::Float32(v) => v.get(index).map(|&x| Value::from(x)),
            Collection::Int32(v) => v.get(index).map(|&x| Value::from(x)),
            Collection::Int16(v) => v.get(index).map(|&x| Value::from(x)),
            Collection::Int8(v) => v.get(index).map(|&x| Value::from(x)),
            Collection::Uint32(v) => v.get(index).map(|&x| Value::from(x)),
            Collection::Uint16(v) => v.get(index).map(|&x| Value::from(x)),
            Collection::Uint8(v) => v.get(index).map(|&x| Value::from(x)),
            Collection::Object(o) => o.elements.get(&index).cloned(),
            Collection::Complex128(_)
            | Collection::Complex64(_)
            | Collection::Bool(_)
            | Collection::Custom(_)
            | Collection::Buffer(_) => None,
        }
    }

    /// Write element `index` by plain indexing.
    ///
    /// The value is coerced to the storage's element type. Out-of-bounds
    /// writes extend a generic sequence, filling any gap with `Value::Null`,
    /// up to a length of `u32::MAX` elements; a write past that limit, or
    /// one whose allocation fails, is ignored. Out-of-bounds writes are
    /// stored on an array-like object without changing its `length` and
    /// are ignored by fixed-width storage. Writes to accessor-protocol
    /// storage and raw buffers are ignored.
    pub fn assign(&mut self, index: usize, value: Value)
    {
        #[inline]
        fn store<T>(v: &mut [T], index: usize, x: T)
        {
            if let Some(slot) = v.get_mut(index) {
                *slot = x;
            }
        }

        match self {
            Collection::Generic(v) => {
                if index >= MAX_GENERIC_LEN {
                    return;
                }
                if index >= v.len() {
                    if v.try_reserve(index + 1 - v.len()).is_err() {
                        return;
                    }
                    v.resize(index + 1, Value::Null);
                }
                v[index] = value;
            }
            Collection::Float64(v) => store(v, index, value.to_number()),
            Collection::Float32(v) => store(v, index, value.to_number() as f32),
            Collection::Int32(v) => store(v, index, to_int32(value.to_number())),
            Collection::Int16(v) => store(v, index, to_int16(value.to_number())),
            Collection::Int8(v) => store(v, index, to_int8(value.to_number())),
            Collection::Uint32(v) => store(v, index, wrap_u32(value.to_number())),
            Collection::Uint16(v) => store(v, index, to_uint16(value.to_number())),
            Collection::Uint8(v) => store(v, index, to_uint8(value.to_number())),
            Collection::Object(o) => {
                o.elements.insert(index, value);
            }
            Collection::Complex128(_)
            | Collection::Complex64(_)
            | Collection::Bool(_)
            | Collection::Custom(_)
            | Collection::Buffer(_) => {}
        }
    }
}

impl fmt::Debug for Collection
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Collection::Generic(v) => f.debug_tuple("Generic").field(v).finish(),
            Collection::Float64(v) => f.debug_tuple("Float64").field(v).finish(),
            Collection::Float32(v) => f.debug_tuple("Float32").field(v).finish(),
            Collection::Int32(v) => f.debug_tuple("Int32").field(v).finish(),
            Collection::Int16(v) => f.debug_tuple("Int16").field(v).finish(),
            Collection::Int8(v) => f.debug_tuple("Int8").field(v).finish(),
            Collection::Uint32(v) => f.debug_tuple("Uint32").field(v).finish(),
            Collection::Uint16(v) => f.debug_tuple("Uint16").field(v).finish(),
            Collection::Uint8(v) => f.debug_tuple("Uint8").field(v).finish(),
            Collection::Complex128(v) => f.debug_tuple("Complex128").field(v).finish(),
            Collection::Complex64(v) => f.debug_tuple("Complex64").field(v).finish(),
            Collection::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Collection::Object(o) => f.debug_tuple("Object").field(o).finish(),
            Collection::Custom(c) => write!(f, "Custom(<accessor array, len={}>)", c.len()),
            Collection::Buffer(b) => write!(f, "Buffer(<{} bytes>)", b.len()),
        }
    }
}

macro_rules! impl_from_vec {
    ($($t:ty => $variant:ident),*) => {
        $(
        impl From<Vec<$t>> for Collection
        {
            fn from(v: Vec<$t>) -> Self
            {
                Collection::$variant(v)
            }
        }
        )*
    };
}

impl_from_vec!(
    Value => Generic,
    f64 => Float64,
    f32 => Float32,
    i32 => Int32,
    i16 => Int16,
    i8 => Int8,
    u32 => Uint32,
    u16 => Uint16,
    u8 => Uint8
);

impl From<Complex128Array> for Collection
{
    fn from(c: Complex128Array) -> Self
    {
        Collection::Complex128(c)
    }
}

impl From<Complex64Array> for Collection
{
    fn from(c: Complex64Array) -> Self
    {
        Collection::Complex64(c)
    }
}

impl From<BooleanArray> for Collection
{
    fn from(b: BooleanArray) -> Self
    {
        Collection::Bool(b)
    }
}

impl From<ArrayLikeObject> for Collection
{
    fn from(o: ArrayLikeObject) -> Self
    {
        Collection::Object(o)
    }
}

impl FromIterator<Value> for Collection
{
    fn from_iter<I>(iterable: I) -> Self
    where I: IntoIterator<Item = Value>
    {
        Collection::Generic(iterable.into_iter().collect())
    }
}
