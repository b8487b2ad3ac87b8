// Copyright 2024 array-base developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bulk operations built on the accessor core.
//!
//! Each operation resolves its accessors once with
//! [`arraylike2object`](crate::arraylike2object) and then loops over
//! elements through the resolved function pair, whatever the storage kind.

use crate::error::{invalid_argument, out_of_bounds, with_detail, ArrayError, ErrorKind};
use crate::{arraylike2object, Collection, Value};

/// How an index outside of `[0, len)` is handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum IndexMode
{
    /// Fail with an out-of-bounds error.
    #[default]
    Throw,
    /// Count negative indices from the end, then fail if still out of bounds.
    Normalize,
    /// Clamp to the first or last element.
    Clamp,
    /// Wrap around modulo the length.
    Wrap,
}

/// Resolve `index` against an array of length `len`.
///
/// **Errors** if the index is out of bounds under `Throw` or `Normalize`,
/// and in every mode when `len` is zero.
pub fn resolve_index(index: isize, len: usize, mode: IndexMode) -> Result<usize, ArrayError>
{
    if len == 0 {
        return Err(out_of_bounds(index, len));
    }
    let n = isize_len(len);
    let resolved = match mode {
        IndexMode::Throw => index,
        IndexMode::Normalize => {
            if index < 0 {
                index + n
            } else {
                index
            }
        }
        IndexMode::Clamp => index.clamp(0, n - 1),
        IndexMode::Wrap => index.rem_euclid(n),
    };
    if resolved < 0 || resolved >= n {
        return Err(out_of_bounds(index, len));
    }
    Ok(resolved as usize)
}

// Indices are `isize`, so a longer array is addressed up to `isize::MAX`.
fn isize_len(len: usize) -> isize
{
    isize::try_from(len).unwrap_or(isize::MAX)
}

fn require_len(x: &Collection, name: &str) -> Result<usize, ArrayError>
{
    x.len().ok_or_else(|| invalid_argument(name, x))
}

// Normalize a relative `[start, end)` pair the way slice-style arguments are
// treated: negative values count from the end, then clamp to `[0, len]`.
fn normalize_range(start: isize, end: isize, len: usize) -> (usize, usize)
{
    let n = isize_len(len);
    let norm = |i: isize| {
        let i = if i < 0 { i + n } else { i };
        i.clamp(0, n) as usize
    };
    (norm(start), norm(end))
}

/// Fill elements `start..end` of `x` with `value`.
///
/// Negative bounds count from the end; bounds past either end are clamped.
/// The value is coerced to the storage's element type on every write.
///
/// **Errors** if `x` is not array-like.
pub fn fill(x: &mut Collection, value: Value, start: isize, end: isize) -> Result<(), ArrayError>
{
    let len = require_len(x, "x")?;
    let (start, end) = normalize_range(start, end, len);
    let mut obj = arraylike2object(x);
    for i in start..end {
        obj.set(i, value.clone());
    }
    Ok(())
}

/// Gather the elements of `x` at `indices` into a new generic sequence.
///
/// **Errors** if `x` is not array-like or an index is rejected by `mode`.
pub fn take(x: &Collection, indices: &[isize], mode: IndexMode) -> Result<Vec<Value>, ArrayError>
{
    let len = require_len(x, "x")?;
    let obj = arraylike2object(x);
    let mut out = Vec::with_capacity(indices.len());
    for &index in indices {
        let i = resolve_index(index, len, mode)?;
        out.push(obj.get(i).unwrap_or_default());
    }
    Ok(out)
}

/// Scatter `values` into `x` at `indices`.
///
/// A single value is broadcast to every index; otherwise `values` must have
/// as many elements as `indices`. Nothing is written if any index is
/// rejected.
///
/// **Errors** if `x` or `values` is not array-like, if the lengths are not
/// broadcast compatible, or if an index is rejected by `mode`.
pub fn put(
    x: &mut Collection, indices: &[isize], values: &Collection, mode: IndexMode,
) -> Result<(), ArrayError>
{
    let len = require_len(x, "x")?;
    let nvalues = require_len(values, "values")?;
    if nvalues != 1 && nvalues != indices.len() {
        return Err(with_detail(
            ErrorKind::IncompatibleShapes,
            format!(
                "`values` must be broadcast compatible with `indices`. Lengths: `{}`, `{}`.",
                nvalues,
                indices.len()
            ),
        ));
    }
    let resolved = indices
        .iter()
        .map(|&index| resolve_index(index, len, mode))
        .collect::<Result<Vec<_>, _>>()?;

    let src = arraylike2object(values);
    let mut dst = arraylike2object(x);
    for (k, &i) in resolved.iter().enumerate() {
        let j = if nvalues == 1 { 0 } else { k };
        dst.set(i, src.get(j).unwrap_or_default());
    }
    Ok(())
}

/// Copy the elements of `x` into a new generic sequence.
///
/// Elements with no value (holes in an array-like object) copy as
/// `Value::Null`.
///
/// **Errors** if `x` is not array-like.
pub fn to_generic(x: &Collection) -> Result<Vec<Value>, ArrayError>
{
    let len = require_len(x, "x")?;
    let obj = arraylike2object(x);
    Ok((0..len).map(|i| obj.get(i).unwrap_or_default()).collect())
}

/// Return the index of the first element equal to `value`, if any.
///
/// Complex values compare across widths; NaN never matches.
///
/// **Errors** if `x` is not array-like.
pub fn index_of(x: &Collection, value: &Value) -> Result<Option<usize>, ArrayError>
{
    let len = require_len(x, "x")?;
    let obj = arraylike2object(x);
    Ok((0..len).find(|&i| matches!(obj.get(i), Some(ref v) if v.same_value(value))))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn index_modes()
    {
        assert_eq!(resolve_index(-1, 3, IndexMode::Normalize), Ok(2));
        assert_eq!(resolve_index(5, 3, IndexMode::Clamp), Ok(2));
        assert_eq!(resolve_index(-4, 3, IndexMode::Clamp), Ok(0));
        assert_eq!(resolve_index(-4, 3, IndexMode::Wrap), Ok(2));
        assert_eq!(resolve_index(7, 3, IndexMode::Wrap), Ok(1));
        assert_eq!(resolve_index(3, 3, IndexMode::Throw).unwrap_err().kind(), ErrorKind::OutOfBounds);
        assert!(resolve_index(-1, 3, IndexMode::Throw).is_err());
        assert!(resolve_index(-4, 3, IndexMode::Normalize).is_err());
        assert!(resolve_index(0, 0, IndexMode::Clamp).is_err());
    }

    #[test]
    fn lengths_past_isize_saturate()
    {
        assert_eq!(resolve_index(0, usize::MAX, IndexMode::Clamp), Ok(0));
        assert_eq!(resolve_index(-1, usize::MAX, IndexMode::Clamp), Ok(0));
        assert_eq!(resolve_index(isize::MAX, usize::MAX, IndexMode::Clamp), Ok(isize::MAX as usize - 1));
        assert_eq!(resolve_index(-1, usize::MAX, IndexMode::Normalize), Ok(isize::MAX as usize - 1));
        assert_eq!(normalize_range(0, 1, usize::MAX), (0, 1));
        assert_eq!(normalize_range(-1, isize::MAX, usize::MAX), (isize::MAX as usize - 1, isize::MAX as usize));
    }

    #[test]
    fn range_normalization()
    {
        assert_eq!(normalize_range(0, 10, 4), (0, 4));
        assert_eq!(normalize_range(-2, 4, 4), (2, 4));
        assert_eq!(normalize_range(-10, -1, 4), (0, 3));
        assert_eq!(normalize_range(3, 1, 4), (3, 1));
    }
}
