use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose trigger logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long each solution step stays highlighted, and how long the
/// all-steps pass lasts before the cycle restarts.
pub const HIGHLIGHT_INTERVAL_MS: u32 = 5000;

/// Smoothing applied to the follow cursor, in seconds.
pub const POINTER_SMOOTHING_SECS: f64 = 0.5;

/// Hover scramble on the hero buttons.
pub const SCRAMBLE_DURATION_MS: u32 = 600;
pub const SCRAMBLE_FRAME_MS: u32 = 30;

/// Time between two flips of a split-flap letter.
pub const SPLIT_FLAP_SPEED_MS: u32 = 80;
