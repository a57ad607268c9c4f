//! Tuning constants for every scroll-linked behavior.

/// Scroll offset past which the header switches to its compact state.
pub const HEADER_SCROLL_THRESHOLD: f64 = 30.0;

/// Band biasing active-nav detection toward the middle of the viewport.
pub const ACTIVE_NAV_ROOT_MARGIN: &str = "-30% 0px -70% 0px";

pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const SECTION_ROOT_MARGIN: &str = "-5% 0px -5% 0px";
pub const SECTION_THRESHOLD: f64 = 0.08;

/// Speed applied when an element carries no usable `data-parallax` value.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.3;
pub const PARALLAX_DAMPING: f64 = 0.1;

/// Section parallax measures distance from a point 35% down the viewport.
pub const SECTION_PARALLAX_FOCAL: f64 = 0.35;
pub const SECTION_PARALLAX_FACTOR: f64 = 0.06;
pub const SECTION_PARALLAX_MAX_PX: f64 = 35.0;

/// How long the forms show their success label before resetting.
pub const FORM_RESET_DELAY_MS: u32 = 3000;
pub const FORM_SUCCESS_COLOR: &str = "#22c55e";

pub const COUNTER_TARGET: f64 = 15.0;
pub const COUNTER_DURATION_MS: f64 = 1500.0;
pub const COUNTER_TICK_MS: i32 = 16;
