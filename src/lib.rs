// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "array_base"]
#![doc(html_root_url = "https://docs.rs/array-base/0.1/")]
#![allow(
    clippy::len_without_is_empty,
    clippy::new_without_default,
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `array-base` crate resolves data types and element accessors for
//! heterogeneous array storage.
//!
//! Array utilities receive arguments whose storage varies from call to
//! call: untyped sequences, fixed-width numeric buffers, boolean buffers,
//! interleaved complex buffers, array-like objects, or user types that
//! only expose `get`/`set`. This crate gives them one way in:
//!
//! - [`dtype`] classifies a [`Collection`] into a [`DType`], or `None` when
//!   it cannot.
//! - [`is_accessor_array`] tells whether elements must be accessed through
//!   the [`AccessorProtocol`] rather than plain indexing.
//! - [`getter`], [`setter`], [`accessor_getter`] and [`accessor_setter`]
//!   return plain function pointers specialized for a data type, falling
//!   back to generic indexing for anything unrecognized.
//! - [`accessors`] and [`arraylike2object`] bundle those decisions into a
//!   fixed-shape record, built once per call and used by the inner loop.
//! - [`to_accessor_array`] presents any array-like value through the
//!   accessor protocol without copying.
//!
//! The [`ops`] module has a few bulk operations written against these
//! contracts.
//!
//! ```
//! use array_base::{arraylike2object, Collection, Complex128Array, Value};
//! use num_complex::Complex;
//!
//! fn sum(x: &Collection) -> Complex<f64>
//! {
//!     let obj = arraylike2object(x);
//!     let (get, _) = obj.accessors;
//!     (0..obj.len())
//!         .filter_map(|i| get(obj.data, i))
//!         .map(|v| v.to_complex128())
//!         .sum()
//! }
//!
//! let real: Collection = vec![1., 2., 3.].into();
//! let cplx: Collection = Complex128Array::from_interleaved(vec![1., 1., 2., -1.]).unwrap().into();
//! assert_eq!(sum(&real), Complex::new(6., 0.));
//! assert_eq!(sum(&cplx), Complex::new(3., 0.));
//! ```
//!
//! ## Crate Feature Flags
//!
//! - `serde`
//!   - Enables serialization support for [`DType`], [`Value`], the complex
//!     arrays and [`BooleanArray`].

#[cfg(feature = "serde")]
mod array_serde;

mod accessor;
mod arraylike2object;
mod boolean;
mod collection;
mod complex;
mod dtype;
mod error;
pub mod ops;
mod resolve;
mod to_accessor_array;
mod value;

pub use crate::accessor::{is_accessor_array, AccessorProtocol};
pub use crate::arraylike2object::{accessors, arraylike2object, ArrayAccessors, ArrayObject};
pub use crate::boolean::BooleanArray;
pub use crate::collection::{ArrayLikeObject, Collection};
pub use crate::complex::{Complex128Array, Complex64Array, ComplexArray, Iter as ComplexIter};
pub use crate::dtype::{dtype, dtypes, DType, IntoDType};
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::resolve::{accessor_getter, accessor_setter, getter, setter, GetFn, SetFn};
pub use crate::to_accessor_array::{to_accessor_array, AccessorArray, IndexedArray, IntoAccessorArray};
pub use crate::value::Value;
