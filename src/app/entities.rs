//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access. State is
//! split by update frequency: a tier click never re-renders the charts and
//! a menu toggle never touches the text map.

use gpui::{App, AppContext, Entity, Global};

use crate::i18n::Bundles;
use crate::state::burn_state::BurnState;
use crate::state::locale_state::LocaleState;
use crate::state::nav_state::NavState;
use crate::state::tier_state::TierState;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Current language and displayed text
    pub locale: Entity<LocaleState>,
    /// NFT tier selection and formatted amounts
    pub tiers: Entity<TierState>,
    /// Burn chart series shape
    pub burn: Entity<BurnState>,
    /// Menu, dropdown, and scroll chrome
    pub nav: Entity<NavState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities. The tier and burn states follow the locale
    /// entity so a language switch re-formats amounts and chart labels.
    pub fn init(cx: &mut App) -> Self {
        let locale = cx.new(|_| LocaleState::new(Bundles::builtin()));

        let tiers = cx.new(|cx| {
            cx.observe(&locale, |tiers: &mut TierState, locale, cx| {
                let lang = locale.read(cx).lang();
                tiers.refresh(lang);
                cx.notify();
            })
            .detach();
            TierState::default()
        });

        let burn = cx.new(|cx| {
            cx.observe(&locale, |burn: &mut BurnState, locale, cx| {
                let (year0, year) = {
                    let locale = locale.read(cx);
                    (
                        locale.text("burnYear0").to_string(),
                        locale.text("burnYear").to_string(),
                    )
                };
                burn.relabel(&year0, &year);
                cx.notify();
            })
            .detach();
            BurnState::default()
        });

        let nav = cx.new(|_| NavState::default());

        Self {
            locale,
            tiers,
            burn,
            nav,
        }
    }
}
