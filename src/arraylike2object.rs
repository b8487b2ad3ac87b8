// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Normalize a collection into an accessor descriptor.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::resolve::{accessor_getter, accessor_setter, getter, setter, GetFn, SetFn};
use crate::{dtype, is_accessor_array, Collection, Value};

/// The accessor functions to use for a collection, and whether they go
/// through the accessor protocol.
#[derive(Copy, Clone)]
pub struct ArrayAccessors
{
    pub accessor_protocol: bool,
    /// `(get, set)`
    pub accessors: (GetFn, SetFn),
}

/// A collection together with its resolved accessor functions.
///
/// `data` is whatever reference the caller passed in (`&Collection`,
/// `&mut Collection`, `Box<Collection>`, ...); the elements are never
/// copied. The descriptor is meant to be built once at the top of an
/// operation and consumed by its inner loop.
pub struct ArrayObject<D>
{
    pub data: D,
    pub accessor_protocol: bool,
    /// `(get, set)`
    pub accessors: (GetFn, SetFn),
}

impl fmt::Debug for ArrayAccessors
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("ArrayAccessors")
            .field("accessor_protocol", &self.accessor_protocol)
            .finish_non_exhaustive()
    }
}

impl<D: fmt::Debug> fmt::Debug for ArrayObject<D>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("ArrayObject")
            .field("data", &self.data)
            .field("accessor_protocol", &self.accessor_protocol)
            .finish_non_exhaustive()
    }
}

/// Resolve the accessor functions for `x`.
///
/// If `x` uses the accessor protocol the pair comes from
/// [`accessor_getter`]/[`accessor_setter`], otherwise from
/// [`getter`]/[`setter`], in both cases keyed by the data type of `x`.
pub fn accessors(x: &Collection) -> ArrayAccessors
{
    let dt = dtype(x);
    if is_accessor_array(x) {
        ArrayAccessors {
            accessor_protocol: true,
            accessors: (accessor_getter(dt), accessor_setter(dt)),
        }
    } else {
        ArrayAccessors {
            accessor_protocol: false,
            accessors: (getter(dt), setter(dt)),
        }
    }
}

/// Bundle `x` with its resolved accessor functions.
///
/// ```
/// use array_base::{arraylike2object, Collection, Complex128Array, Value};
///
/// let x: Collection = vec![Value::from(1), Value::from(2)].into();
/// let obj = arraylike2object(&x);
/// assert!(!obj.accessor_protocol);
/// assert_eq!(obj.get(1), Some(Value::from(2)));
///
/// let c: Collection = Complex128Array::zeros(2).into();
/// assert!(arraylike2object(&c).accessor_protocol);
/// ```
pub fn arraylike2object<D>(x: D) -> ArrayObject<D>
where D: Deref<Target = Collection>
{
    let ArrayAccessors {
        accessor_protocol,
        accessors,
    } = self::accessors(&x);
    ArrayObject {
        data: x,
        accessor_protocol,
        accessors,
    }
}

impl<D> ArrayObject<D>
where D: Deref<Target = Collection>
{
    /// Number of elements, 0 if `data` is not array-like.
    #[inline]
    pub fn len(&self) -> usize
    {
        self.data.len().unwrap_or(0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Value>
    {
        (self.accessors.0)(&self.data, index)
    }
}

impl<D> ArrayObject<D>
where D: DerefMut<Target = Collection>
{
    #[inline]
    pub fn set(&mut self, index: usize, value: Value)
    {
        (self.accessors.1)(&mut self.data, index, value)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{ArrayLikeObject, BooleanArray};

    #[test]
    fn writes_reach_the_original()
    {
        let mut b: Collection = BooleanArray::new(3).into();
        {
            let mut obj = arraylike2object(&mut b);
            assert!(obj.accessor_protocol);
            obj.set(2, Value::from(1));
        }
        assert_eq!(crate::accessor_getter("bool")(&b, 2), Some(Value::Bool(true)));
    }

    #[test]
    fn unknown_dtype_uses_plain_indexing()
    {
        let o: Collection = ArrayLikeObject::from_values(vec![Value::from(4), Value::from(5)]).into();
        let obj = arraylike2object(&o);
        assert!(!obj.accessor_protocol);
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get(1), Some(Value::from(5)));
        assert_eq!(obj.get(2), None);
    }

    #[test]
    fn owned_handles()
    {
        let obj = arraylike2object(Box::new(Collection::from(vec![1u32, 2])));
        assert_eq!(obj.get(0), Some(Value::from(1)));
        assert_eq!(obj.data.len(), Some(2));
    }
}
