//! Percentiles by linear interpolation between closest ranks.

/// Drop missing values and sort the rest ascending.
pub fn sorted_non_null(values: &[Option<f64>]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().flatten().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// The `p`-th percentile (0-100) of an ascending sample.
///
/// Uses `rank = p / 100 * (n - 1)` and interpolates linearly between the two
/// neighbouring order statistics, the default method of NumPy's `percentile`.
/// `p` is clamped to `[0, 100]`. Returns `None` for an empty sample.
///
/// ```
/// use olist_stats::percentile_linear;
///
/// let sample = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile_linear(&sample, 50.0), Some(2.5));
/// assert_eq!(percentile_linear(&sample, 100.0), Some(4.0));
/// assert_eq!(percentile_linear(&[], 50.0), None);
/// ```
pub fn percentile_linear(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = p.clamp(0.0, 100.0) / 100.0 * last as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(last);
    let fraction = rank - lo as f64;
    Some(sorted[lo] + fraction * (sorted[hi] - sorted[lo]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_value() {
        assert_eq!(percentile_linear(&[7.0], 25.0), Some(7.0));
        assert_eq!(percentile_linear(&[7.0], 75.0), Some(7.0));
    }

    #[test]
    fn test_quartiles_interpolate() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        assert_eq!(percentile_linear(&sample, 25.0), Some(3.25));
        assert_eq!(percentile_linear(&sample, 75.0), Some(7.75));
        assert_eq!(percentile_linear(&sample, 0.0), Some(1.0));
    }

    #[test]
    fn test_sorted_non_null_drops_missing() {
        let values = [Some(3.0), None, Some(1.0), Some(f64::NAN), Some(2.0)];
        assert_eq!(sorted_non_null(&values), vec![1.0, 2.0, 3.0]);
    }

    proptest! {
        #[test]
        fn percentile_stays_within_sample(
            mut values in proptest::collection::vec(-1.0e6f64..1.0e6, 1..50),
            p in 0.0f64..=100.0,
        ) {
            values.sort_by(f64::total_cmp);
            let q = percentile_linear(&values, p).unwrap();
            prop_assert!(q >= values[0] - 1e-9);
            prop_assert!(q <= values[values.len() - 1] + 1e-9);
        }
    }
}
