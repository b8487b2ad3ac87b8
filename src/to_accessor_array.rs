// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::error::not_array_like;
use crate::resolve::{getter, setter, GetFn, SetFn};
use crate::{dtype, AccessorProtocol, ArrayError, Collection, Value};

/// A collection presenting the accessor protocol.
///
/// Either the caller's collection, borrowed unchanged because it already
/// presents the protocol, or a thin wrapper that forwards `get`/`set` to
/// plain indexing. Neither variant copies elements: writes through the
/// accessor array land in the caller's storage.
pub enum AccessorArray<'a>
{
    Native(&'a mut Collection),
    Wrapped(IndexedArray<'a>),
}

/// Wrapper giving a plainly indexed collection the accessor protocol.
pub struct IndexedArray<'a>
{
    data: &'a mut Collection,
    get: GetFn,
    set: SetFn,
}

/// Conversion into an [`AccessorArray`], see [`to_accessor_array`].
pub trait IntoAccessorArray<'a>
{
    fn into_accessor_array(self) -> Result<AccessorArray<'a>, ArrayError>;
}

impl<'a> IntoAccessorArray<'a> for &'a mut Collection
{
    fn into_accessor_array(self) -> Result<AccessorArray<'a>, ArrayError>
    {
        if !self.is_array_like() {
            return Err(not_array_like("x", &*self));
        }
        if self.as_accessor().is_some() {
            return Ok(AccessorArray::Native(self));
        }
        let dt = dtype(self);
        Ok(AccessorArray::Wrapped(IndexedArray {
            get: getter(dt),
            set: setter(dt),
            data: self,
        }))
    }
}

impl<'a> IntoAccessorArray<'a> for AccessorArray<'a>
{
    #[inline]
    fn into_accessor_array(self) -> Result<AccessorArray<'a>, ArrayError>
    {
        Ok(self)
    }
}

/// Return a view of `x` presenting the accessor protocol.
///
/// Collections that already present it, and accessor arrays, come back
/// unchanged; anything else array-like is wrapped.
///
/// **Errors** with a type error (`ErrorKind::NotArrayLike`) if `x` is not
/// array-like.
///
/// ```
/// use array_base::{to_accessor_array, AccessorProtocol, Collection, Value};
///
/// let mut x: Collection = vec![1., 2.].into();
/// {
///     let mut a = to_accessor_array(&mut x).unwrap();
///     a.set(0, Value::from(10));
///     assert_eq!(a.get(1), Some(Value::from(2)));
/// }
/// assert_eq!(x.index(0), Some(Value::from(10)));
/// ```
pub fn to_accessor_array<'a, X>(x: X) -> Result<AccessorArray<'a>, ArrayError>
where X: IntoAccessorArray<'a>
{
    x.into_accessor_array()
}

impl<'a> AccessorArray<'a>
{
    /// Return `true` if a wrapper was allocated around the collection.
    pub fn is_wrapped(&self) -> bool
    {
        matches!(self, AccessorArray::Wrapped(_))
    }

    pub fn data(&self) -> &Collection
    {
        match self {
            AccessorArray::Native(data) => &**data,
            AccessorArray::Wrapped(w) => &*w.data,
        }
    }

    /// Give back the borrow of the underlying collection.
    pub fn into_inner(self) -> &'a mut Collection
    {
        match self {
            AccessorArray::Native(data) => data,
            AccessorArray::Wrapped(w) => w.data,
        }
    }
}

impl AccessorProtocol for IndexedArray<'_>
{
    fn len(&self) -> usize
    {
        self.data.len().unwrap_or(0)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Value>
    {
        (self.get)(&*self.data, index)
    }

    #[inline]
    fn set(&mut self, index: usize, value: Value)
    {
        (self.set)(&mut *self.data, index, value)
    }
}

impl AccessorProtocol for AccessorArray<'_>
{
    fn len(&self) -> usize
    {
        self.data().len().unwrap_or(0)
    }

    fn get(&self, index: usize) -> Option<Value>
    {
        match self {
            AccessorArray::Native(data) => data.as_accessor().and_then(|a| a.get(index)),
            AccessorArray::Wrapped(w) => w.get(index),
        }
    }

    fn set(&mut self, index: usize, value: Value)
    {
        match self {
            AccessorArray::Native(data) => {
                if let Some(a) = data.as_accessor_mut() {
                    a.set(index, value);
                }
            }
            AccessorArray::Wrapped(w) => w.set(index, value),
        }
    }
}

impl fmt::Debug for AccessorArray<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            AccessorArray::Native(data) => f.debug_tuple("Native").field(data).finish(),
            AccessorArray::Wrapped(w) => f.debug_tuple("Wrapped").field(&w.data).finish(),
        }
    }
}
