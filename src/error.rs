// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error raised at the boundary of the accessor core.
///
/// The dispatch primitives themselves never fail; errors only come from
/// functions that need array-like input to be meaningful at all, from
/// checked index modes, and from malformed buffer construction.
#[derive(Clone, Debug)]
pub struct ArrayError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
    detail: Box<str>,
}

impl ArrayError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Create a new `ArrayError`
    pub fn from_kind(error: ErrorKind) -> Self
    {
        from_kind(error)
    }

    /// Return `true` for the kinds a caller should treat as type errors.
    pub fn is_type_error(&self) -> bool
    {
        matches!(self.repr, ErrorKind::NotArrayLike | ErrorKind::InvalidArgument)
    }

    /// Return `true` for the kinds a caller should treat as range errors.
    pub fn is_range_error(&self) -> bool
    {
        matches!(
            self.repr,
            ErrorKind::OutOfBounds | ErrorKind::IncompatibleShapes | ErrorKind::InvalidLength
        )
    }
}

/// Error code for an error raised by the accessor core.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug)]
pub enum ErrorKind
{
    /// argument is not array-like
    NotArrayLike,
    /// argument is not a collection where one is required
    InvalidArgument,
    /// index outside of the valid range
    OutOfBounds,
    /// incompatible lengths
    IncompatibleShapes,
    /// buffer length is not valid for the storage kind
    InvalidLength,
    /// string does not name a supported data type
    UnknownDType,
    #[doc(hidden)]
    __Incomplete,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ArrayError
{
    ArrayError {
        repr: k,
        detail: Box::from(""),
    }
}

#[inline]
pub(crate) fn with_detail(k: ErrorKind, detail: String) -> ArrayError
{
    ArrayError {
        repr: k,
        detail: detail.into_boxed_str(),
    }
}

impl PartialEq for ErrorKind
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        *self as u8 == *rhs as u8
    }
}

impl PartialEq for ArrayError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::NotArrayLike => "invalid argument, must be array-like",
            ErrorKind::InvalidArgument => "invalid argument, must be a collection",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::IncompatibleShapes => "incompatible shapes",
            ErrorKind::InvalidLength => "invalid buffer length",
            ErrorKind::UnknownDType => "unsupported data type",
            ErrorKind::__Incomplete => "this error variant is not in use",
        };
        if self.detail.is_empty() {
            write!(f, "{}", description)
        } else {
            write!(f, "{}. {}", description, self.detail)
        }
    }
}

pub(crate) fn not_array_like(name: &str, value: &dyn fmt::Debug) -> ArrayError
{
    with_detail(ErrorKind::NotArrayLike, format!("Argument `{}`: `{:?}`.", name, value))
}

pub(crate) fn invalid_argument(name: &str, value: &dyn fmt::Debug) -> ArrayError
{
    with_detail(ErrorKind::InvalidArgument, format!("Argument `{}`: `{:?}`.", name, value))
}

pub(crate) fn out_of_bounds(index: isize, len: usize) -> ArrayError
{
    with_detail(
        ErrorKind::OutOfBounds,
        format!("Index must be on the interval [0, {}). Value: `{}`.", len, index),
    )
}
