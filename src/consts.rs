pub mod ui_consts {
    //! Console Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // EVENT LOOP
    // =============================================================================

    /// Interval between UI loop iterations (and animator ticks), in milliseconds.
    /// The background effect is decorative, so it is not frame-locked.
    pub const TICK_INTERVAL_MS: u64 = 100;

    /// How long the splash screen is shown before the dashboard mounts.
    pub const SPLASH_DURATION_SECS: u64 = 2;

    // =============================================================================
    // LIVE FEED
    // =============================================================================

    /// The maximum number of records to keep in the real-time feed.
    pub const MAX_FEED_RECORDS: usize = 50;

    /// Ticks between synthesized feed records (~9s at the 100ms tick).
    pub const FEED_EMIT_INTERVAL_TICKS: usize = 90;

    // =============================================================================
    // BACKGROUND ANIMATION
    // =============================================================================

    /// Terminal cells per rain column. Column count = width / cell width.
    pub const RAIN_CELL_WIDTH: u16 = 2;

    /// Rows of fading glyphs drawn behind each drop head.
    pub const RAIN_TRAIL_LEN: u16 = 10;

    /// Chance per tick that a drop past the bottom edge resets to the top.
    /// Kept small so columns restart out of phase with each other.
    pub const RAIN_RESET_CHANCE: f64 = 0.025;
}
