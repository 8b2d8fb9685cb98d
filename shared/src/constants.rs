pub const INITIAL_BALANCE: f64 = 100.0;
pub const INITIAL_BET: i32 = 1;
pub const MIN_BET: i32 = 1;
pub const MAX_BET: i32 = 100;

pub const SPIN_DURATION_MS: u32 = 8000; // Matches the wheel's CSS transition
pub const MIN_FULL_TURNS: u32 = 3;
pub const MAX_FULL_TURNS: u32 = 5;
pub const DEGREES_PER_TURN: f64 = 360.0;

pub const SPIN_LABEL: &str = "SPIN!";
pub const SPINNING_LABEL: &str = "Spinning...";

// (id, label, multiplier) for the reference wheel
pub const DEFAULT_SEGMENTS: [(u32, &str, f64); 6] = [
    (1, "Face 1", 2.0),
    (2, "Face 2", 1.5),
    (3, "Face 3", 3.0),
    (4, "Face 4", 2.5),
    (5, "Face 5", 1.8),
    (6, "Center Face", 5.0),
];
