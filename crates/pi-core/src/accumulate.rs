// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-worker midpoint-rule accumulation.
//!
//! Each partial result is already scaled by the rectangle width, so the
//! reducer only adds.

use crate::partition::StridePartition;

/// `f(x) = 4 / (1 + x²)`; its integral over `[0, 1]` is π.
#[inline]
pub fn integrand(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}

/// Midpoint of rectangle `i` for rectangles of width `width`.
#[inline]
#[allow(clippy::cast_precision_loss)] // i < MAX_STEP_COUNT = 2^53
pub fn midpoint(i: u64, width: f64) -> f64 {
    (i as f64 + 0.5) * width
}

/// Sums the integrand over `part` in ascending index order, then scales by
/// `width` once.
///
/// An empty partition yields exactly `0.0`.
pub fn accumulate(part: &StridePartition, width: f64) -> f64 {
    let mut sum = 0.0;
    for i in part.indices() {
        sum += integrand(midpoint(i, width));
    }
    sum * width
}

/// Unpartitioned midpoint sum over `[0, step_count)`.
///
/// Same formula and summation order as a single-worker run; used as the
/// independent baseline.
#[allow(clippy::cast_precision_loss)]
pub fn sequential_estimate(step_count: u64) -> f64 {
    let width = 1.0 / step_count as f64;
    let mut sum = 0.0;
    for i in 0..step_count {
        sum += integrand(midpoint(i, width));
    }
    sum * width
}
