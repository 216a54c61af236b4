//! Vector Similarity Functions
//!
//! Normalized Euclidean distance, for one pair or a whole batch at once.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

use crate::error::{LexiconError, Result};

/// L2 norm of a vector.
///
/// Components are scaled by the largest absolute value before squaring so
/// the sum neither overflows nor flushes to zero for any finite input.
pub fn magnitude(v: ArrayView1<'_, f32>) -> f32 {
    let scale = v.iter().fold(0.0f32, |m, x| m.max(x.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    scale * v.iter().map(|x| (x / scale).powi(2)).sum::<f32>().sqrt()
}

/// Unit-length copy of `v`.
///
/// Fails with `ZeroVector` when `v` has no magnitude.
pub fn normalized(v: ArrayView1<'_, f32>) -> Result<Array1<f32>> {
    let mag = magnitude(v);
    if mag > 0.0 {
        Ok(&v / mag)
    } else {
        Err(LexiconError::ZeroVector)
    }
}

/// Euclidean distance between the unit-normalized forms of `a` and `b`.
///
/// Ranges over [0, 2]: 0 for the same direction, 2 for opposite ones.
pub fn normalized_distance(a: ArrayView1<'_, f32>, b: ArrayView1<'_, f32>) -> Result<f32> {
    let distances = normalized_distance_batch(a, b.insert_axis(Axis(0)))?;
    Ok(distances[0])
}

/// Normalized distance from `a` to every row of `batch`, in row order.
///
/// Equivalent to calling [`normalized_distance`] once per row.
pub fn normalized_distance_batch(
    a: ArrayView1<'_, f32>,
    batch: ArrayView2<'_, f32>,
) -> Result<Array1<f32>> {
    if batch.nrows() == 0 {
        return Ok(Array1::zeros(0));
    }
    if a.len() != batch.ncols() {
        return Err(LexiconError::DimensionMismatch {
            expected: a.len(),
            found: batch.ncols(),
        });
    }

    let target = normalized(a)?;
    let norms = batch.map_axis(Axis(1), magnitude);
    if norms.iter().any(|&n| n <= 0.0) {
        return Err(LexiconError::ZeroVector);
    }

    let units = &batch / &norms.insert_axis(Axis(1));
    let diff = &target.insert_axis(Axis(0)) - &units;
    Ok(diff.map_axis(Axis(1), magnitude))
}
