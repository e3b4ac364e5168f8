//! Count → visual size and count → share conversions.

use trace_report_analytics_models::{CategoryCount, ChartSlice, RadiusRange};

/// Linearly maps `counts` onto `range`: the smallest count becomes
/// `range.min`, the largest `range.max`.
///
/// When every count is equal there is no spread to scale and every radius
/// is `range.min`.
#[must_use]
pub fn min_max_scale(counts: &[u64], range: RadiusRange) -> Vec<f64> {
    let (Some(&lo), Some(&hi)) = (counts.iter().min(), counts.iter().max()) else {
        return Vec::new();
    };

    if lo == hi {
        return vec![range.min; counts.len()];
    }

    #[allow(clippy::cast_precision_loss)]
    let (lo, span) = (lo as f64, (hi - lo) as f64);

    counts
        .iter()
        .map(|&c| {
            #[allow(clippy::cast_precision_loss)]
            let c = c as f64;
            range.min + (c - lo) / span * (range.max - range.min)
        })
        .collect()
}

/// Attaches integer percentages to `counts`, computed against the total of
/// `counts` itself (the subset being displayed), not the full table.
#[must_use]
pub fn chart_slices(counts: &[CategoryCount]) -> Vec<ChartSlice> {
    let total: u64 = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }

    counts
        .iter()
        .map(|c| ChartSlice {
            label: c.label.clone(),
            count: c.count,
            percent: rounded_percent(c.count, total),
        })
        .collect()
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn rounded_percent(count: u64, total: u64) -> u32 {
    (count as f64 * 100.0 / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cc(label: &str, count: u64) -> CategoryCount {
        CategoryCount {
            label: label.to_string(),
            count,
        }
    }

    #[test]
    fn equal_counts_collapse_to_minimum() {
        let radii = min_max_scale(&[4, 4, 4], RadiusRange::MARKERS);
        assert_eq!(radii, vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn single_count_collapses_to_minimum() {
        assert_eq!(min_max_scale(&[17], RadiusRange::MARKERS), vec![5.0]);
    }

    #[test]
    fn extremes_map_to_range_bounds() {
        let radii = min_max_scale(&[1, 3, 5], RadiusRange::MARKERS);
        assert!((radii[0] - 5.0).abs() < f64::EPSILON);
        assert!((radii[1] - 12.5).abs() < f64::EPSILON);
        assert!((radii[2] - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_counts_scale_to_nothing() {
        assert!(min_max_scale(&[], RadiusRange::MARKERS).is_empty());
    }

    #[test]
    fn percentages_use_displayed_total() {
        let slices = chart_slices(&[cc("a", 2), cc("b", 1)]);
        assert_eq!(slices[0].percent, 67);
        assert_eq!(slices[1].percent, 33);
        assert_eq!(slices[0].count, 2);
    }

    #[test]
    fn no_slices_for_empty_input() {
        assert!(chart_slices(&[]).is_empty());
    }
}
