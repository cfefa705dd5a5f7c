/// Iterations in the default benchmark run
pub const DEFAULT_ITERATIONS: usize = 10_000;
/// Dead cells ahead of the pattern in the default benchmark tape
pub const DEFAULT_PADDING: usize = 1_000;
/// Pattern closing the default benchmark tape
pub const DEFAULT_PATTERN: [bool; 2] = [true, false];
/// Sections in the default benchmark run
pub const DEFAULT_SECTIONS: usize = 4;
/// Largest tape a configuration may request
pub const MAX_TAPE_LEN: usize = 1 << 28;
