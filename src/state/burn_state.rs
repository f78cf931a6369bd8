//! BurnState - Burn Chart Series State
//!
//! Tracks whether the burn chart shows the single starting point or the
//! full ten-year projection, and holds the series currently on screen.

use crate::constants::{BURN_RATE, BURN_YEARS, INITIAL_SUPPLY};
use crate::domain::supply::{compute_burn_series, BurnSeries};

/// State behind the burn chart
#[derive(Debug, Clone)]
pub struct BurnState {
    full: bool,
    series: BurnSeries,
}

impl Default for BurnState {
    fn default() -> Self {
        Self::new("Year 0", "Year")
    }
}

impl BurnState {
    /// Start with the single Year-0 point
    pub fn new(year0_label: &str, year_label: &str) -> Self {
        Self {
            full: false,
            series: compute_burn_series(
                INITIAL_SUPPLY,
                BURN_YEARS,
                BURN_RATE,
                false,
                year0_label,
                year_label,
            ),
        }
    }

    /// Whether the full projection is on screen
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// The series currently on screen
    pub fn series(&self) -> &BurnSeries {
        &self.series
    }

    /// Expand to the full ten-year projection (simulate click)
    pub fn simulate(&mut self, year0_label: &str, year_label: &str) {
        self.full = true;
        self.relabel(year0_label, year_label);
    }

    /// Recompute the current shape with new labels (language switch)
    pub fn relabel(&mut self, year0_label: &str, year_label: &str) {
        self.series = compute_burn_series(
            INITIAL_SUPPLY,
            BURN_YEARS,
            BURN_RATE,
            self.full,
            year0_label,
            year_label,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_single_point() {
        let state = BurnState::default();
        assert!(!state.is_full());
        assert_eq!(state.series().values, vec![INITIAL_SUPPLY]);
    }

    #[test]
    fn test_simulate_expands_to_full_projection() {
        let mut state = BurnState::default();
        state.simulate("Year 0", "Year");
        assert!(state.is_full());
        assert_eq!(state.series().values.len(), BURN_YEARS + 1);
    }

    #[test]
    fn test_simulate_recomputes_from_scratch() {
        let mut state = BurnState::default();
        state.simulate("Year 0", "Year");
        let first = state.series().clone();
        state.simulate("Year 0", "Year");
        assert_eq!(state.series(), &first);
    }

    #[test]
    fn test_relabel_keeps_shape() {
        let mut state = BurnState::default();
        state.relabel("ปีที่ 0", "ปีที่");
        assert_eq!(state.series().values.len(), 1);
        assert_eq!(state.series().labels[0], "ปีที่ 0");

        state.simulate("ปีที่ 0", "ปีที่");
        state.relabel("第 0 年", "第");
        assert_eq!(state.series().values.len(), BURN_YEARS + 1);
        assert_eq!(state.series().labels[1], "第 1");
    }
}
