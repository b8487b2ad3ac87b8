// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The accessor protocol.

use crate::{Collection, Value};

/// Element access through explicit `get`/`set` calls instead of plain
/// indexing.
///
/// Implemented by the complex and boolean arrays of this crate and by the
/// wrapper returned from [`to_accessor_array`](crate::to_accessor_array).
/// User types implementing it can be stored in [`Collection::Custom`].
///
/// Implementations do no bounds checking beyond what the storage needs:
/// `get` returns `None` past the end, and `set` past the end is whatever the
/// storage does naturally (the storage kinds in this crate ignore it).
pub trait AccessorProtocol
{
    /// Number of elements.
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<Value>;

    fn set(&mut self, index: usize, value: Value);

    fn is_empty(&self) -> bool
    {
        self.len() == 0
    }
}

impl<T> AccessorProtocol for Box<T>
where T: AccessorProtocol + ?Sized
{
    fn len(&self) -> usize
    {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<Value>
    {
        (**self).get(index)
    }

    fn set(&mut self, index: usize, value: Value)
    {
        (**self).set(index, value)
    }
}

/// Return `true` if elements of `x` must be accessed through the accessor
/// protocol.
///
/// This holds for complex and boolean storage and for custom accessor
/// values. Generic sequences, fixed-width numeric buffers, array-like
/// objects and raw buffers are accessed by plain indexing.
#[inline]
pub fn is_accessor_array(x: &Collection) -> bool
{
    x.as_accessor().is_some()
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{BooleanArray, Complex128Array};

    #[test]
    fn detection()
    {
        assert!(is_accessor_array(&Collection::from(Complex128Array::zeros(1))));
        assert!(is_accessor_array(&Collection::from(BooleanArray::new(1))));
        assert!(!is_accessor_array(&Collection::from(vec![1., 2., 3.])));
        assert!(!is_accessor_array(&Collection::from(vec![Value::from(1)])));
        assert!(!is_accessor_array(&Collection::Buffer(vec![1, 2])));
    }
}
