//! Application-level configuration constants.

// Track
pub const DEFAULT_LAP_LENGTH_M: f64 = 400.0;
pub const MIN_LAP_LENGTH_M: f64 = 1.0;
pub const MAX_LAP_LENGTH_M: f64 = 100_000.0;
/// Split tables longer than this are not built.
pub const MAX_SPLITS: u64 = 1_000;

// Timer sampling (display only, recorded segments use timestamps)
pub const TICK_INTERVAL_MS: u32 = 50;

// Timer groups
pub const DEFAULT_GROUP_PREFIX: &str = "Group";
pub const INITIAL_GROUP_COUNT: usize = 1;

// UI constants
pub const PLACEHOLDER: &str = "—";
