//! Session configuration constants
//!
//! Tunable parameters for the terminal session. Everything the engine waits
//! on, caps, or names lives here so the host and the tests agree on it.
//!
//! # Timing
//!
//! All delays are in milliseconds of host time (`Host::now_ms`). The engine
//! never sleeps; delays are turned into timer entries that `Session::tick`
//! fires once they are due.

#![allow(dead_code)]

// ============================================================================
// Identity
// ============================================================================

/// Name shown in the prompt and returned by `whoami`
pub const USER_NAME: &str = "rahil";

/// Home directory; the root node of the simulated file system is mounted here
pub const HOME_DIR: &str = "/home/rahil";

// ============================================================================
// History
// ============================================================================

/// Maximum number of entries kept in the history ledger
///
/// Older entries are dropped from the front once the ledger grows past this.
pub const HISTORY_CAPACITY: usize = 50;

// ============================================================================
// Delayed effects
// ============================================================================

/// How long `hack` keeps the loading spinner up
pub const LOADING_RESET_MS: u64 = 5_000;

/// How long `rain` keeps the matrix rain overlay up
pub const MATRIX_RAIN_MS: u64 = 5_000;

/// Delay before `sudo-random` opens its site
pub const SUDO_RANDOM_DELAY_MS: u64 = 1_500;

/// Delay between the `exit` farewell and the reload
pub const EXIT_RELOAD_DELAY_MS: u64 = 2_000;

// ============================================================================
// Live users counter
// ============================================================================

/// Smallest value the decorative live-user counter shows
pub const LIVE_USERS_MIN: u32 = 1;

/// Largest value the decorative live-user counter shows
pub const LIVE_USERS_MAX: u32 = 10;

/// Refresh period of the live-user counter
pub const LIVE_USERS_REFRESH_MS: u64 = 15_000;

// ============================================================================
// Boot pacing
// ============================================================================

/// Interval between loading-screen lines
pub const LOADING_LINE_INTERVAL_MS: u64 = 150;

/// Delay before each of the first `BOOT_SLOW_LINES` terminal banner lines
pub const BOOT_SLOW_DELAY_MS: u64 = 300;

/// Delay before every later terminal banner line
pub const BOOT_FAST_DELAY_MS: u64 = 100;

/// Number of banner lines revealed at the slow pace
pub const BOOT_SLOW_LINES: usize = 6;

// ============================================================================
// Output reveal
// ============================================================================

/// Pause between words while typing out an output line
pub const REVEAL_WORD_DELAY_MS: u64 = 50;

/// Pause between lines while typing out a multi-line block
pub const REVEAL_LINE_DELAY_MS: u64 = 100;

// ============================================================================
// Games
// ============================================================================

/// Snake step interval
pub const SNAKE_STEP_MS: u64 = 150;

/// How long a mismatched pair stays face up in the memory games
pub const CARD_FLIP_BACK_MS: u64 = 1_000;
