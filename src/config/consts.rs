/// Default artificial delay for the slow admission check, in milliseconds
pub const DEFAULT_SLOW_OP_DELAY_MS: u64 = 50;
/// Default log sink path, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "processor.log";
