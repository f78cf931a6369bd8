//! Supply - Token Burn Simulation
//!
//! Pure decay arithmetic for the burn chart. Recomputed from scratch on
//! every simulate click; nothing is cached between runs.

/// A derived chart series: one label per value
#[derive(Debug, Clone, PartialEq)]
pub struct BurnSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Compute the supply decay series.
///
/// With `full` false the series is the single starting point. With `full`
/// true it holds `years + 1` points, each year keeping `rate` of the
/// previous supply. Floating point throughout; rounding happens at display.
pub fn compute_burn_series(
    initial_supply: f64,
    years: usize,
    rate: f64,
    full: bool,
    year0_label: &str,
    year_label: &str,
) -> BurnSeries {
    let mut labels = vec![year0_label.to_string()];
    let mut values = vec![initial_supply];

    if !full {
        return BurnSeries { labels, values };
    }

    let mut supply = initial_supply;
    for year in 1..=years {
        supply *= rate;
        labels.push(format!("{year_label} {year}"));
        values.push(supply);
    }

    BurnSeries { labels, values }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPPLY: f64 = 1_000_000_000.0;

    #[test]
    fn test_initial_series_is_single_point() {
        let series = compute_burn_series(SUPPLY, 10, 0.90, false, "Year 0", "Year");
        assert_eq!(series.labels, vec!["Year 0".to_string()]);
        assert_eq!(series.values, vec![SUPPLY]);
    }

    #[test]
    fn test_full_series_has_eleven_points() {
        let series = compute_burn_series(SUPPLY, 10, 0.90, true, "Year 0", "Year");
        assert_eq!(series.labels.len(), 11);
        assert_eq!(series.values.len(), 11);
        assert_eq!(series.labels[1], "Year 1");
        assert_eq!(series.labels[10], "Year 10");
    }

    #[test]
    fn test_final_value_compounds() {
        let series = compute_burn_series(SUPPLY, 10, 0.90, true, "Year 0", "Year");
        let expected = SUPPLY * 0.90f64.powi(10);
        assert!((series.values[10] - expected).abs() < 1e-3);
    }

    #[test]
    fn test_values_strictly_decrease() {
        let series = compute_burn_series(SUPPLY, 10, 0.90, true, "Year 0", "Year");
        for pair in series.values.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_labels_use_localized_year() {
        let series = compute_burn_series(SUPPLY, 2, 0.90, true, "ปีที่ 0", "ปีที่");
        assert_eq!(series.labels, vec!["ปีที่ 0", "ปีที่ 1", "ปีที่ 2"]);
    }
}
