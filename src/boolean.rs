// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Boolean storage backed by one byte per element.

use crate::{AccessorProtocol, Value};

/// Booleans stored as `0`/`1` bytes.
///
/// Like the complex arrays, elements are read and written through `get` and
/// `set`, which decode a cell to a `bool` and normalize a stored value to
/// `0` or `1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BooleanArray
{
    buf: Vec<u8>,
}

impl BooleanArray
{
    /// Create an array of `len` elements, all `false`.
    pub fn new(len: usize) -> Self
    {
        BooleanArray { buf: vec![0; len] }
    }

    pub fn from_bools<I>(iterable: I) -> Self
    where I: IntoIterator<Item = bool>
    {
        BooleanArray {
            buf: iterable.into_iter().map(u8::from).collect(),
        }
    }

    /// Create an array over existing bytes; any nonzero byte is stored as 1.
    pub fn from_bytes(mut buf: Vec<u8>) -> Self
    {
        for b in &mut buf {
            *b = (*b != 0) as u8;
        }
        BooleanArray { buf }
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.buf.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<bool>
    {
        self.buf.get(index).map(|&b| b != 0)
    }

    /// Store `value` at `index`; out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool)
    {
        if let Some(b) = self.buf.get_mut(index) {
            *b = value as u8;
        }
    }

    /// The `0`/`1` cells backing the array.
    pub fn as_bytes(&self) -> &[u8]
    {
        &self.buf
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_
    {
        self.buf.iter().map(|&b| b != 0)
    }
}

impl FromIterator<bool> for BooleanArray
{
    fn from_iter<I>(iterable: I) -> Self
    where I: IntoIterator<Item = bool>
    {
        Self::from_bools(iterable)
    }
}

impl AccessorProtocol for BooleanArray
{
    fn len(&self) -> usize
    {
        self.buf.len()
    }

    fn get(&self, index: usize) -> Option<Value>
    {
        BooleanArray::get(self, index).map(Value::Bool)
    }

    fn set(&mut self, index: usize, value: Value)
    {
        BooleanArray::set(self, index, value.is_truthy())
    }
}
