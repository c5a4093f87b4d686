//! Fixed world tuning. Everything is in logical pixels on the 400x600
//! play field, per frame at 60 Hz; the renderer scales to the terminal,
//! never the other way around.

/// Logical play field width in pixels.
pub const WIDTH: f64 = 400.0;
/// Logical play field height in pixels.
pub const HEIGHT: f64 = 600.0;
/// Frame rate the orchestrator paces to. Physics constants below are
/// per-frame steps at this rate.
pub const FPS: u64 = 60;

/// Downward acceleration added to the player's velocity each frame.
pub const GRAVITY: f64 = 0.25;
/// Velocity assigned (not added) by a flap. Negative is up.
pub const FLAP_STRENGTH: f64 = -7.0;
/// Fixed horizontal position of the player's left edge.
pub const PLAYER_X: f64 = 100.0;

/// Leftward pipe travel per frame.
pub const PIPE_SPEED: f64 = 3.0;
/// Vertical clearance between a pipe pair's top and bottom halves.
pub const PIPE_GAP: f64 = 150.0;
/// Pipe width; also sets how far past the left edge a pipe is kept.
pub const PIPE_WIDTH: f64 = 60.0;
/// Milliseconds between pipe spawns, measured on the wall clock so the
/// cadence holds even if frames are missed.
pub const PIPE_SPAWN_MS: u64 = 1800;
/// Inclusive range the gap-top height is drawn from.
pub const GAP_TOP_MIN: f64 = 100.0;
pub const GAP_TOP_MAX: f64 = 400.0;

/// Height of the bottom boundary band (ground or water, per theme).
pub const SHORE_HEIGHT: f64 = 100.0;
/// Top edge of that band: touching it ends the session.
pub const SHORE_Y: f64 = HEIGHT - SHORE_HEIGHT;

/// Milliseconds between cloud spawn checks (fish theme only).
pub const CLOUD_CHECK_MS: u64 = 3000;
/// Chance a passing check actually spawns a cloud.
pub const CLOUD_CHANCE: f64 = 0.5;
/// Clouds seeded into a fresh session when the theme has them.
pub const INITIAL_CLOUDS: usize = 3;

/// Water surface animation: phase step per frame, wrap point, wave
/// amplitude, wavelength divisor and horizontal sample step.
pub const WAVE_PHASE_STEP: f64 = 0.1;
pub const WAVE_PHASE_WRAP: f64 = 10.0;
pub const WAVE_AMPLITUDE: f64 = 5.0;
pub const WAVE_LENGTH: f64 = 50.0;
pub const WAVE_SAMPLE_STEP: f64 = 10.0;
