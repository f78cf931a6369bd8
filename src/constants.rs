//! UI Constants
//!
//! Centralized constants for layout and for the token model shown on the page.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Fixed header height
pub const HEADER_HEIGHT: f32 = 56.0;

/// Below this window width the nav links collapse behind the menu button
pub const COMPACT_NAV_BREAKPOINT: f32 = 900.0;

/// Burn model: one billion FM, ten years, 10% burned per year
pub const INITIAL_SUPPLY: f64 = 1_000_000_000.0;
pub const BURN_YEARS: usize = 10;
pub const BURN_RATE: f64 = 0.90;

/// Token distribution split, percent: community, liquidity, team, ecosystem
pub const DISTRIBUTION_SPLIT: [f64; 4] = [15.0, 40.0, 20.0, 25.0];

/// Pricing unit for NFT tiers
pub const CURRENCY_SUFFIX: &str = "USDT";
/// Ticker symbol of the token
pub const TOKEN_SYMBOL: &str = "FM";

/// Display font used across the page
pub const DISPLAY_FONT: &str = "Kanit";

/// Plot area height of the burn chart
pub const BURN_PLOT_HEIGHT: f32 = 220.0;
/// Outer diameter of the distribution doughnut
pub const DOUGHNUT_SIZE: f32 = 260.0;

/// Per-frame easing factor for section scrolling
pub const SCROLL_EASE: f32 = 0.25;
/// Distance at which an animated scroll snaps to its target
pub const SCROLL_SNAP_EPSILON: f32 = 0.5;
