//! Colors - FlashMint Theme Colors

use gpui::{rgb, rgba, Hsla, Rgba};

/// FlashMint color palette - All colors are accessed via associated functions
pub struct FlashColors;

impl FlashColors {
    // Primary colors
    /// Primary accent - Indigo (buttons, active tier, community slice)
    pub fn indigo() -> Rgba { rgb(0x4f46e5) }
    /// Indigo hover shade
    pub fn indigo_hover() -> Rgba { rgb(0x4338ca) }
    /// Secondary accent - Blue (liquidity slice)
    pub fn blue() -> Rgba { rgb(0x3b82f6) }
    /// Amber (team slice)
    pub fn amber() -> Rgba { rgb(0xf59e0b) }
    /// Neutral gray (ecosystem slice, axis text)
    pub fn gray() -> Rgba { rgb(0x6b7280) }

    // Background colors
    /// Main page background
    pub fn background() -> Rgba { rgb(0xf9fafb) }
    /// Card / section background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Header background
    pub fn header_bg() -> Rgba { rgb(0xffffff) }
    /// Hero band background
    pub fn hero_bg() -> Rgba { rgb(0x1f2937) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Chart colors
    /// Axis/legend text on charts
    pub fn chart_text() -> Rgba { rgb(0x6b7280) }
    /// Chart grid lines
    pub fn chart_grid() -> Rgba { rgba(0x0000001a) }
    /// Doughnut slices at 80% opacity: indigo, blue, amber, gray
    pub fn distribution_slices() -> [Rgba; 4] {
        [
            rgba(0x4f46e5cc),
            rgba(0x3b82f6cc),
            rgba(0xf59e0bcc),
            rgba(0x6b7280cc),
        ]
    }
    /// Doughnut slice border
    pub fn slice_border() -> Rgba { rgb(0xffffff) }
    /// Burn bar fill at 70% opacity
    pub fn burn_fill() -> Rgba { rgba(0xdc2626b3) }
    /// Burn bar border
    pub fn burn_border() -> Rgba { rgb(0xdc2626) }
    /// Tooltip background
    pub fn tooltip_bg() -> Rgba { rgba(0x111827e6) }

    // Tier selector colors
    /// Idle tier button background
    pub fn tier_idle_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Idle tier button text
    pub fn tier_idle_text() -> Rgba { rgb(0x1f2937) }
    /// Active tier button background
    pub fn tier_active_bg() -> Rgba { rgb(0x4f46e5) }
    /// Active tier button text
    pub fn tier_active_text() -> Rgba { rgb(0xffffff) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Menu colors
    /// Dropdown / collapsed menu background
    pub fn menu_bg() -> Rgba { rgb(0xffffff) }
    /// Menu item hover
    pub fn menu_hover() -> Rgba { rgb(0xf3f4f6) }
}

/// Convert Rgba to Hsla for certain GPUI operations
impl FlashColors {
    pub fn indigo_hsla() -> Hsla {
        Hsla::from(Self::indigo())
    }
}
