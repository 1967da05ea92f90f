//! Conversions between a flat, row-major face and its rows or columns, and
//! reading/writing a single edge of a face.
//!
//! Every edge access is described by the same four parameters: which kind of
//! edge, how deep into the face, whether depth is counted from the near
//! (`forward`) or far side, and whether the stickers are read back to front
//! (`mirror`). The adjacency table only ever speaks in these terms.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::TransformError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    Row,
    Col,
}

/// The side length of a square face with `len` stickers.
///
/// # Errors
///
/// If `len` is not the square of a number that is at least two
pub fn side_length(len: usize) -> Result<usize, TransformError> {
    let side = len.isqrt();
    if side < 2 || side * side != len {
        return Err(TransformError::InvalidShape { len });
    }

    Ok(side)
}

/// Flat positions of the `index`th row or column, in reading order.
pub(crate) fn edge_positions(
    size: usize,
    kind: EdgeKind,
    index: usize,
) -> impl DoubleEndedIterator<Item = usize> {
    let (start, step) = match kind {
        EdgeKind::Row => (index * size, 1),
        EdgeKind::Col => (index, size),
    };
    (0..size).map(move |i| start + i * step)
}

/// Split a face into its rows (top to bottom) or columns (left to right).
pub fn chunk<T: Clone>(face: &[T], kind: EdgeKind) -> Result<Vec<Vec<T>>, TransformError> {
    let size = side_length(face.len())?;

    Ok((0..size)
        .map(|index| {
            edge_positions(size, kind, index)
                .map(|position| face[position].clone())
                .collect_vec()
        })
        .collect_vec())
}

/// Reassemble a face from the output of [`chunk`] with the same `kind`.
pub fn unchunk<T>(chunks: Vec<Vec<T>>, kind: EdgeKind) -> Result<Vec<T>, TransformError> {
    let size = chunks.len();
    if size < 2 {
        return Err(TransformError::InvalidShape {
            len: chunks.iter().map(Vec::len).sum(),
        });
    }
    if let Some(bad) = chunks.iter().find(|chunk| chunk.len() != size) {
        return Err(TransformError::LengthMismatch {
            expected: size,
            actual: bad.len(),
        });
    }

    match kind {
        EdgeKind::Row => Ok(chunks.into_iter().flatten().collect_vec()),
        EdgeKind::Col => {
            let mut columns = chunks.into_iter().map(Vec::into_iter).collect_vec();
            let mut face = Vec::with_capacity(size * size);
            for _ in 0..size {
                face.extend(columns.iter_mut().filter_map(Iterator::next));
            }
            Ok(face)
        }
    }
}

fn effective_index(size: usize, depth: usize, forward: bool) -> Result<usize, TransformError> {
    if depth >= size {
        return Err(TransformError::OutOfRange { depth, size });
    }

    Ok(if forward { depth } else { size - depth - 1 })
}

/// Read one row or column of a face.
///
/// With `forward` unset the depth is counted from the bottom row or the
/// rightmost column. With `mirror` set the stickers come back in reverse.
pub fn read_edge<T: Clone>(
    face: &[T],
    kind: EdgeKind,
    depth: usize,
    forward: bool,
    mirror: bool,
) -> Result<Vec<T>, TransformError> {
    let size = side_length(face.len())?;
    let index = effective_index(size, depth, forward)?;

    let positions = edge_positions(size, kind, index);
    let edge = if mirror {
        positions.rev().map(|position| face[position].clone()).collect_vec()
    } else {
        positions.map(|position| face[position].clone()).collect_vec()
    };

    Ok(edge)
}

/// Return a copy of `face` with one row or column replaced by `values`.
///
/// Takes the same edge description as [`read_edge`], so writing back what was
/// read leaves the face unchanged.
pub fn write_edge<T: Clone>(
    face: &[T],
    kind: EdgeKind,
    depth: usize,
    forward: bool,
    mirror: bool,
    values: &[T],
) -> Result<Vec<T>, TransformError> {
    let size = side_length(face.len())?;
    let index = effective_index(size, depth, forward)?;
    if values.len() != size {
        return Err(TransformError::LengthMismatch {
            expected: size,
            actual: values.len(),
        });
    }

    let mut out = face.to_vec();
    let positions = edge_positions(size, kind, index);
    if mirror {
        for (position, value) in positions.rev().zip(values) {
            out[position] = value.clone();
        }
    } else {
        for (position, value) in positions.zip(values) {
            out[position] = value.clone();
        }
    }

    Ok(out)
}
