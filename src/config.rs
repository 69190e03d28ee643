use log::Level;

pub const COMPANY_NAME: &str = "NexForge Software";

/// Delay before the simulated contact submission completes.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

// Navigation highlight follows the scroll position, sampled after the user
// stops scrolling for this long.
pub const SCROLL_DEBOUNCE_MS: u32 = 100;
pub const SCROLL_HIGHLIGHT_OFFSET: f64 = 100.0;

pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

// Scroll reveal
pub const REVEAL_MIN_VIEWPORT_WIDTH: f64 = 768.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_SECS: f64 = 0.1;
pub const REVEAL_TRANSITION_SECS: f64 = 0.6;
pub const REVEAL_OFFSET_PX: u32 = 30;

// Stat counters
pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0;
pub const COUNTER_GROUP_THRESHOLD: f64 = 0.5;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
