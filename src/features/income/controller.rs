//! Income Controller
//!
//! Routes tier clicks into the tier state.

use gpui::App;

use crate::app::entities::AppEntities;

/// Income section controller
#[derive(Clone)]
pub struct IncomeController {
    entities: AppEntities,
}

impl IncomeController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Select a Flash level by name. Unknown names change nothing and
    /// trigger no re-render.
    pub fn select_tier(&self, name: &str, cx: &mut App) {
        let lang = self.entities.locale.read(cx).lang();
        self.entities.tiers.update(cx, |tiers, cx| {
            if tiers.select(name, lang) {
                cx.notify();
            }
        });
    }
}
