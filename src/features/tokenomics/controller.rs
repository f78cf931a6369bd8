//! Tokenomics Controller
//!
//! Drives the burn simulation behind the tokenomics section.

use gpui::App;

use crate::app::entities::AppEntities;

/// Tokenomics section controller
#[derive(Clone)]
pub struct TokenomicsController {
    entities: AppEntities,
}

impl TokenomicsController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Run the full ten-year burn projection. The series is recomputed from
    /// scratch and the chart view follows through its observer.
    pub fn simulate(&self, cx: &mut App) {
        let (year0, year) = {
            let locale = self.entities.locale.read(cx);
            (
                locale.text("burnYear0").to_string(),
                locale.text("burnYear").to_string(),
            )
        };
        self.entities.burn.update(cx, |burn, cx| {
            burn.simulate(&year0, &year);
            cx.notify();
        });
    }
}
