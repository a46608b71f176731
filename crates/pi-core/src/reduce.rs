// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sequential reduction of partial results.

/// Sums per-worker partial results in worker-index order.
///
/// The order is fixed so that a given configuration always reduces to the
/// same bits.
pub fn reduce(slots: &[f64]) -> f64 {
    let mut total = 0.0;
    for v in slots {
        total += v;
    }
    total
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(reduce(&[]), 0.0);
    }

    #[test]
    fn sums_in_index_order() {
        // Left-to-right: (1e16 + 1) + 1 loses both ones; any other grouping
        // would keep one of them.
        let slots = [1e16, 1.0, 1.0];
        assert_eq!(reduce(&slots), (1e16 + 1.0) + 1.0);
        assert_ne!(reduce(&slots), 1e16 + (1.0 + 1.0));
    }

    #[test]
    fn zero_slots_are_neutral() {
        assert_eq!(reduce(&[0.75, 0.0, 0.0, 0.25]), 1.0);
    }
}
