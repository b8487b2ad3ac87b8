// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interleaved complex-number storage.

use std::iter::FusedIterator;

use num_complex::Complex;
use num_traits::Float;

use crate::error::{with_detail, ArrayError, ErrorKind};
use crate::{AccessorProtocol, Value};

/// Complex numbers stored as interleaved `[re0, im0, re1, im1, ...]`
/// components.
///
/// Elements are not addressable by plain indexing; reads and writes go
/// through `get` and `set`, which build or split a two-component value from
/// two adjacent storage slots.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexArray<T>
{
    buf: Vec<T>,
}

/// Complex numbers with 64-bit components.
pub type Complex128Array = ComplexArray<f64>;
/// Complex numbers with 32-bit components.
pub type Complex64Array = ComplexArray<f32>;

impl<T> ComplexArray<T>
where T: Float
{
    /// Create an array of `len` zero-valued elements.
    pub fn zeros(len: usize) -> Self
    {
        ComplexArray {
            buf: vec![T::zero(); 2 * len],
        }
    }

    /// Create an array from interleaved real and imaginary components.
    ///
    /// **Errors** if `buf` has an odd number of components.
    pub fn from_interleaved(buf: Vec<T>) -> Result<Self, ArrayError>
    {
        if buf.len() % 2 != 0 {
            return Err(with_detail(
                ErrorKind::InvalidLength,
                format!("Length must be a multiple of two. Value: `{}`.", buf.len()),
            ));
        }
        Ok(ComplexArray { buf })
    }

    pub fn from_complex<I>(iterable: I) -> Self
    where I: IntoIterator<Item = Complex<T>>
    {
        let iter = iterable.into_iter();
        let mut buf = Vec::with_capacity(2 * iter.size_hint().0);
        for z in iter {
            buf.push(z.re);
            buf.push(z.im);
        }
        ComplexArray { buf }
    }

    /// Number of complex elements.
    #[inline]
    pub fn len(&self) -> usize
    {
        self.buf.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.buf.is_empty()
    }

    /// Return the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Complex<T>>
    {
        let i = index.checked_mul(2)?;
        match (self.buf.get(i), self.buf.get(i + 1)) {
            (Some(&re), Some(&im)) => Some(Complex::new(re, im)),
            _ => None,
        }
    }

    /// Store `z` at `index`; out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, z: Complex<T>)
    {
        if index < self.len() {
            self.buf[2 * index] = z.re;
            self.buf[2 * index + 1] = z.im;
        }
    }

    /// The interleaved components backing the array.
    pub fn interleaved(&self) -> &[T]
    {
        &self.buf
    }

    pub fn interleaved_mut(&mut self) -> &mut [T]
    {
        &mut self.buf
    }

    pub fn into_interleaved(self) -> Vec<T>
    {
        self.buf
    }

    pub fn iter(&self) -> Iter<'_, T>
    {
        Iter {
            chunks: self.buf.chunks_exact(2),
        }
    }
}

impl<T> FromIterator<Complex<T>> for ComplexArray<T>
where T: Float
{
    fn from_iter<I>(iterable: I) -> Self
    where I: IntoIterator<Item = Complex<T>>
    {
        Self::from_complex(iterable)
    }
}

/// Iterator over the elements of a `ComplexArray`.
#[derive(Clone, Debug)]
pub struct Iter<'a, T>
{
    chunks: std::slice::ChunksExact<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T>
where T: Copy
{
    type Item = Complex<T>;

    #[inline]
    fn next(&mut self) -> Option<Complex<T>>
    {
        self.chunks.next().map(|c| Complex::new(c[0], c[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        self.chunks.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> where T: Copy {}

impl<'a, T> FusedIterator for Iter<'a, T> where T: Copy {}

impl AccessorProtocol for Complex128Array
{
    fn len(&self) -> usize
    {
        ComplexArray::len(self)
    }

    fn get(&self, index: usize) -> Option<Value>
    {
        ComplexArray::get(self, index).map(Value::Complex128)
    }

    fn set(&mut self, index: usize, value: Value)
    {
        ComplexArray::set(self, index, value.to_complex128())
    }
}

impl AccessorProtocol for Complex64Array
{
    fn len(&self) -> usize
    {
        ComplexArray::len(self)
    }

    fn get(&self, index: usize) -> Option<Value>
    {
        ComplexArray::get(self, index).map(Value::Complex64)
    }

    fn set(&mut self, index: usize, value: Value)
    {
        ComplexArray::set(self, index, value.to_complex64())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn interleaved_layout()
    {
        let mut c = Complex128Array::from_interleaved(vec![1., 2., 3., 4.]).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(1), Some(Complex::new(3., 4.)));
        assert_eq!(c.get(2), None);
        c.set(0, Complex::new(-1., 0.5));
        assert_eq!(c.interleaved(), &[-1., 0.5, 3., 4.]);
        c.set(5, Complex::new(9., 9.));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn interleaved_views()
    {
        let mut c = Complex64Array::zeros(2);
        c.interleaved_mut()[3] = 1.5;
        assert_eq!(c.get(1), Some(Complex::new(0., 1.5)));
        assert_eq!(c.into_interleaved(), vec![0., 0., 0., 1.5]);
    }

    #[test]
    fn odd_length_is_rejected()
    {
        let err = Complex64Array::from_interleaved(vec![1., 2., 3.]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
        assert!(err.is_range_error());
    }

    #[test]
    fn collect_and_iterate()
    {
        let c: Complex64Array = (0..3).map(|i| Complex::new(i as f32, -(i as f32))).collect();
        assert_eq!(c.iter().len(), 3);
        assert_eq!(c.iter().last(), Some(Complex::new(2., -2.)));
        assert_eq!(Complex64Array::zeros(2).interleaved(), &[0.; 4]);
    }
}
