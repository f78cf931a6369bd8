//! TierState - NFT Tier Selection
//!
//! Which Flash level is selected and the formatted cost/return strings the
//! readout panel shows.

use crate::domain::tier;
use crate::i18n::Lang;
use crate::utils::format::format_amount;

/// State for the tier selector
#[derive(Debug, Clone, Default)]
pub struct TierState {
    selected: Option<&'static str>,
    cost_text: String,
    payout_text: String,
}

impl TierState {
    /// Select a tier by name and format its amounts for the given language.
    /// Unknown names are a silent no-op; returns whether anything changed.
    pub fn select(&mut self, name: &str, lang: Lang) -> bool {
        let Some(tier) = tier::lookup(name) else {
            return false;
        };
        self.selected = Some(tier.name);
        self.cost_text = format_amount(tier.cost, lang);
        self.payout_text = format_amount(tier.payout, lang);
        true
    }

    /// Re-format the displayed amounts after a language switch
    pub fn refresh(&mut self, lang: Lang) {
        if let Some(name) = self.selected {
            self.select(name, lang);
        }
    }

    /// Currently selected tier name
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    /// Whether the named tier carries the active style
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected == Some(name)
    }

    /// Formatted cost (empty before the first selection)
    pub fn cost_text(&self) -> &str {
        &self.cost_text
    }

    /// Formatted guaranteed return (empty before the first selection)
    pub fn payout_text(&self) -> &str {
        &self.payout_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tier::TIERS;

    #[test]
    fn test_nothing_selected_initially() {
        let state = TierState::default();
        assert!(state.selected().is_none());
        assert_eq!(state.cost_text(), "");
        assert_eq!(state.payout_text(), "");
    }

    #[test]
    fn test_select_flash_5() {
        let mut state = TierState::default();
        assert!(state.select("Flash 5", Lang::En));
        assert_eq!(state.cost_text(), "150 USDT");
        assert_eq!(state.payout_text(), "600 USDT");
    }

    #[test]
    fn test_large_tier_gets_separators() {
        let mut state = TierState::default();
        assert!(state.select("Flash 10", Lang::Th));
        assert_eq!(state.cost_text(), "2,500 USDT");
        assert_eq!(state.payout_text(), "10,000 USDT");
    }

    #[test]
    fn test_unknown_tier_is_a_no_op() {
        let mut state = TierState::default();
        state.select("Flash 5", Lang::En);
        assert!(!state.select("Flash 99", Lang::En));
        assert_eq!(state.selected(), Some("Flash 5"));
        assert_eq!(state.cost_text(), "150 USDT");
    }

    #[test]
    fn test_exactly_one_tier_active() {
        let mut state = TierState::default();
        state.select("Flash 2", Lang::En);
        state.select("Flash 7", Lang::En);
        let active: Vec<_> = TIERS
            .iter()
            .filter(|tier| state.is_selected(tier.name))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Flash 7");
    }

    #[test]
    fn test_refresh_reformats_for_language() {
        let mut state = TierState::default();
        state.select("Flash 13", Lang::En);
        state.refresh(Lang::Zh);
        assert_eq!(state.cost_text(), "10,000 USDT");
        assert_eq!(state.selected(), Some("Flash 13"));
    }
}
