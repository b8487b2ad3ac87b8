// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Data type tags and data type resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::{with_detail, ArrayError, ErrorKind};
use crate::Collection;

/// Canonical tag for the element storage kind of an array.
///
/// The set is closed. Values that cannot be classified resolve to `None`
/// when an `Option<DType>` is expected, which is the "unknown" sentinel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType
{
    /// 64-bit IEEE 754 floating point
    Float64,
    /// 32-bit IEEE 754 floating point
    Float32,
    /// 32-bit signed integer
    Int32,
    /// 16-bit signed integer
    Int16,
    /// 8-bit signed integer
    Int8,
    /// 32-bit unsigned integer
    Uint32,
    /// 16-bit unsigned integer
    Uint16,
    /// 8-bit unsigned integer
    Uint8,
    /// complex number with 64-bit real and imaginary components
    Complex128,
    /// complex number with 32-bit real and imaginary components
    Complex64,
    /// boolean
    Bool,
    /// untyped, variable-length sequence
    Generic,
}

static DTYPES: [DType; 12] = [
    DType::Float64,
    DType::Float32,
    DType::Int32,
    DType::Int16,
    DType::Int8,
    DType::Uint32,
    DType::Uint16,
    DType::Uint8,
    DType::Complex128,
    DType::Complex64,
    DType::Bool,
    DType::Generic,
];

/// Return the list of supported data types.
pub fn dtypes() -> &'static [DType]
{
    &DTYPES
}

impl DType
{
    /// Return the canonical string form, e.g. `"float64"`.
    pub fn as_str(self) -> &'static str
    {
        match self {
            DType::Float64 => "float64",
            DType::Float32 => "float32",
            DType::Int32 => "int32",
            DType::Int16 => "int16",
            DType::Int8 => "int8",
            DType::Uint32 => "uint32",
            DType::Uint16 => "uint16",
            DType::Uint8 => "uint8",
            DType::Complex128 => "complex128",
            DType::Complex64 => "complex64",
            DType::Bool => "bool",
            DType::Generic => "generic",
        }
    }

    /// Number of bytes used to store one element, `None` for `Generic`.
    pub fn bytes_per_element(self) -> Option<usize>
    {
        let n = match self {
            DType::Float64 => 8,
            DType::Float32 => 4,
            DType::Int32 | DType::Uint32 => 4,
            DType::Int16 | DType::Uint16 => 2,
            DType::Int8 | DType::Uint8 => 1,
            DType::Complex128 => 16,
            DType::Complex64 => 8,
            DType::Bool => 1,
            DType::Generic => return None,
        };
        Some(n)
    }

    pub fn is_floating_point(self) -> bool
    {
        self.is_real_floating_point() || self.is_complex()
    }

    pub fn is_real_floating_point(self) -> bool
    {
        matches!(self, DType::Float64 | DType::Float32)
    }

    pub fn is_integer(self) -> bool
    {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    pub fn is_signed_integer(self) -> bool
    {
        matches!(self, DType::Int32 | DType::Int16 | DType::Int8)
    }

    pub fn is_unsigned_integer(self) -> bool
    {
        matches!(self, DType::Uint32 | DType::Uint16 | DType::Uint8)
    }

    /// Real-valued numeric: floating point or integer, not complex.
    pub fn is_real(self) -> bool
    {
        self.is_real_floating_point() || self.is_integer()
    }

    pub fn is_complex(self) -> bool
    {
        matches!(self, DType::Complex128 | DType::Complex64)
    }

    pub fn is_boolean(self) -> bool
    {
        self == DType::Bool
    }

    /// Return `true` if arrays of this type use the accessor protocol.
    pub fn uses_accessor_protocol(self) -> bool
    {
        self.is_complex() || self.is_boolean()
    }
}

impl fmt::Display for DType
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.as_str())
    }
}

impl FromStr for DType
{
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        DTYPES
            .iter()
            .copied()
            .find(|dt| dt.as_str() == s)
            .ok_or_else(|| with_detail(ErrorKind::UnknownDType, format!("Value: `{}`.", s)))
    }
}

/// Return the data type of a collection, or `None` if it cannot be
/// classified.
///
/// Generic sequences resolve to `DType::Generic`, which is distinct from the
/// unknown sentinel: an array-like object without a fixed element type, a
/// custom accessor value and a raw byte buffer all resolve to `None`.
///
/// ```
/// use array_base::{dtype, Collection, DType, Value};
///
/// let x = Collection::from(vec![Value::from(1.), Value::from(2.)]);
/// assert_eq!(dtype(&x), Some(DType::Generic));
/// assert_eq!(dtype(&Collection::Buffer(vec![0; 8])), None);
/// ```
pub fn dtype(x: &Collection) -> Option<DType>
{
    let dt = match x {
        Collection::Generic(_) => DType::Generic,
        Collection::Float64(_) => DType::Float64,
        Collection::Float32(_) => DType::Float32,
        Collection::Int32(_) => DType::Int32,
        Collection::Int16(_) => DType::Int16,
        Collection::Int8(_) => DType::Int8,
        Collection::Uint32(_) => DType::Uint32,
        Collection::Uint16(_) => DType::Uint16,
        Collection::Uint8(_) => DType::Uint8,
        Collection::Complex128(_) => DType::Complex128,
        Collection::Complex64(_) => DType::Complex64,
        Collection::Bool(_) => DType::Bool,
        Collection::Object(_) | Collection::Custom(_) | Collection::Buffer(_) => return None,
    };
    Some(dt)
}

/// Anything that names a data type: a tag, the unknown sentinel, a dtype
/// string or a collection whose data type is resolved.
///
/// Strings that do not parse resolve to `None` rather than failing.
pub trait IntoDType
{
    fn into_dtype(self) -> Option<DType>;
}

impl IntoDType for DType
{
    #[inline]
    fn into_dtype(self) -> Option<DType>
    {
        Some(self)
    }
}

impl IntoDType for Option<DType>
{
    #[inline]
    fn into_dtype(self) -> Option<DType>
    {
        self
    }
}

impl IntoDType for &str
{
    fn into_dtype(self) -> Option<DType>
    {
        self.parse().ok()
    }
}

impl IntoDType for &String
{
    fn into_dtype(self) -> Option<DType>
    {
        self.as_str().into_dtype()
    }
}

impl IntoDType for &Collection
{
    #[inline]
    fn into_dtype(self) -> Option<DType>
    {
        dtype(self)
    }
}

impl IntoDType for &mut Collection
{
    #[inline]
    fn into_dtype(self) -> Option<DType>
    {
        dtype(self)
    }
}
