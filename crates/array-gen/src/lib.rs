// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Build test collections of any data type.

use array_base::{BooleanArray, Collection, ComplexArray, DType, Value};
use num_complex::Complex;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CollectionBuilder
{
    dtype: DType,
    len: usize,
    generator: ElementGenerator,
}

/// How to generate elements
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ElementGenerator
{
    /// `0, 1, 2, ...`; booleans alternate starting with `false`, complex
    /// elements get `k + 0i`.
    Sequential,
    Zero,
}

impl Default for CollectionBuilder
{
    fn default() -> Self
    {
        Self::new(DType::Generic, 0)
    }
}

impl CollectionBuilder
{
    pub fn new(dtype: DType, len: usize) -> Self
    {
        CollectionBuilder {
            dtype,
            len,
            generator: ElementGenerator::Sequential,
        }
    }

    pub fn generator(mut self, generator: ElementGenerator) -> Self
    {
        self.generator = generator;
        self
    }

    /// The number each element is derived from.
    fn seq(&self) -> impl Iterator<Item = usize>
    {
        let use_zeros = self.generator == ElementGenerator::Zero;
        (0..self.len).map(move |k| if use_zeros { 0 } else { k })
    }

    pub fn build(self) -> Collection
    {
        let seq = self.seq();
        match self.dtype {
            DType::Generic => seq.map(|k| Value::from(k as f64)).collect(),
            DType::Float64 => seq.map(|k| k as f64).collect::<Vec<_>>().into(),
            DType::Float32 => seq.map(|k| k as f32).collect::<Vec<_>>().into(),
            DType::Int32 => seq.map(|k| k as i32).collect::<Vec<_>>().into(),
            DType::Int16 => seq.map(|k| k as i16).collect::<Vec<_>>().into(),
            DType::Int8 => seq.map(|k| k as i8).collect::<Vec<_>>().into(),
            DType::Uint32 => seq.map(|k| k as u32).collect::<Vec<_>>().into(),
            DType::Uint16 => seq.map(|k| k as u16).collect::<Vec<_>>().into(),
            DType::Uint8 => seq.map(|k| k as u8).collect::<Vec<_>>().into(),
            DType::Complex128 => seq
                .map(|k| Complex::new(k as f64, 0.))
                .collect::<ComplexArray<f64>>()
                .into(),
            DType::Complex64 => seq
                .map(|k| Complex::new(k as f32, 0.))
                .collect::<ComplexArray<f32>>()
                .into(),
            DType::Bool => seq.map(|k| k % 2 == 1).collect::<BooleanArray>().into(),
        }
    }
}
