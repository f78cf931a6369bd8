//! Geometry - Chart Math
//!
//! Pure helpers behind the chart views: slice angles for the doughnut,
//! value ranges, bar heights, and tick positions for the bar chart.

use std::f32::consts::PI;

/// One doughnut slice as a start/end angle pair in radians.
/// Angles begin at twelve o'clock and run clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f32,
    pub end: f32,
}

/// Turn a dataset into contiguous slices proportional to each value
pub fn slice_angles(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = -PI / 2.0;
    values
        .iter()
        .map(|value| {
            let sweep = (value / total) as f32 * 2.0 * PI;
            let slice = Slice {
                start: angle,
                end: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

/// Slice index under the given angle (radians, `atan2` convention)
pub fn slice_at(slices: &[Slice], angle: f32) -> Option<usize> {
    let mut normalized = angle;
    while normalized < -PI / 2.0 {
        normalized += 2.0 * PI;
    }
    while normalized >= 3.0 * PI / 2.0 {
        normalized -= 2.0 * PI;
    }
    slices
        .iter()
        .position(|slice| normalized >= slice.start && normalized < slice.end)
}

/// Y-axis range for a bar series. With `begin_at_zero` false the floor sits
/// just under the smallest value so the year-over-year drop stays readable.
pub fn value_range(values: &[f64], begin_at_zero: bool) -> (f64, f64) {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    if begin_at_zero {
        (0.0, max)
    } else if (max - min).abs() < f64::EPSILON {
        (min * 0.9, max)
    } else {
        (min - (max - min) * 0.05, max)
    }
}

/// Normalized bar heights in `0.0..=1.0` against a range
pub fn bar_fractions(values: &[f64], min: f64, max: f64) -> Vec<f32> {
    let range = max - min;
    values
        .iter()
        .map(|value| {
            if range <= 0.0 {
                1.0
            } else {
                (((value - min) / range) as f32).clamp(0.0, 1.0)
            }
        })
        .collect()
}

/// Evenly spaced tick values from the floor to the ceiling, inclusive
pub fn tick_values(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![max];
    }
    (0..count)
        .map(|i| min + (max - min) * i as f64 / (count - 1) as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPLIT: [f64; 4] = [15.0, 40.0, 20.0, 25.0];

    #[test]
    fn test_slices_cover_full_circle() {
        let slices = slice_angles(&SPLIT);
        assert_eq!(slices.len(), 4);
        assert!((slices[0].start - (-PI / 2.0)).abs() < 1e-6);
        let sweep: f32 = slices.iter().map(|s| s.end - s.start).sum();
        assert!((sweep - 2.0 * PI).abs() < 1e-4);
        for pair in slices.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < 1e-6);
        }
    }

    #[test]
    fn test_slice_sweep_matches_share() {
        let slices = slice_angles(&SPLIT);
        let sweep = slices[1].end - slices[1].start;
        assert!((sweep - 0.40 * 2.0 * PI).abs() < 1e-4);
    }

    #[test]
    fn test_empty_dataset_has_no_slices() {
        assert!(slice_angles(&[]).is_empty());
        assert!(slice_angles(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_slice_hit_lookup() {
        let slices = slice_angles(&SPLIT);
        // Just past twelve o'clock, clockwise: the first slice.
        assert_eq!(slice_at(&slices, -PI / 2.0 + 0.01), Some(0));
        // Just before twelve o'clock: the last slice.
        assert_eq!(slice_at(&slices, -PI / 2.0 - 0.01), Some(3));
    }

    #[test]
    fn test_value_range_floors_under_minimum() {
        let (min, max) = value_range(&[100.0, 50.0], false);
        assert_eq!(max, 100.0);
        assert!(min < 50.0);
        assert!(min > 0.0);
    }

    #[test]
    fn test_single_point_fills_plot() {
        let values = [1_000_000_000.0];
        let (min, max) = value_range(&values, false);
        let fractions = bar_fractions(&values, min, max);
        assert_eq!(fractions, vec![1.0]);
    }

    #[test]
    fn test_bar_fractions_monotonic_for_decay() {
        let values: Vec<f64> = (0..=10).map(|i| 1e9 * 0.9f64.powi(i)).collect();
        let (min, max) = value_range(&values, false);
        let fractions = bar_fractions(&values, min, max);
        assert_eq!(fractions[0], 1.0);
        for pair in fractions.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert!(*fractions.last().expect("non-empty") >= 0.0);
    }

    #[test]
    fn test_tick_values_span_range() {
        let ticks = tick_values(0.0, 100.0, 5);
        assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }
}
