// Simulation timing constants
pub const TICK_INTERVAL_MS: u64 = 30;

// Terminal event polling cadence (shorter than a tick so input stays snappy)
pub const INPUT_POLL_MS: u64 = 10;
