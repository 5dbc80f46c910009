//! Tuning constants for every page effect.
//!
//! Distances and sizes are CSS pixels, times are milliseconds. Keep magic
//! numbers here so the effects read as intent rather than arithmetic.

// Cursor follower
pub const CURSOR_EASE: f32 = 0.15; // fraction of the remaining distance covered per frame
pub const CURSOR_DOT_OFFSET: f32 = 3.0; // half the dot size, centres it on the pointer
pub const CURSOR_MIN_VIEWPORT_WIDTH: f64 = 769.0; // below this the custom cursor stays off

// Particle field
pub const PARTICLE_AREA_PER_PARTICLE: f32 = 15_000.0;
pub const PARTICLE_MAX_COUNT: usize = 80;
pub const PARTICLE_RADIUS_MIN: f32 = 0.5;
pub const PARTICLE_RADIUS_MAX: f32 = 2.0;
pub const PARTICLE_SPEED_MAX: f32 = 0.15; // per axis, per frame
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_MAX: f32 = 0.5;
pub const PARTICLE_RGB: [u8; 3] = [108, 99, 255];

// Connecting lines
pub const LINK_MAX_DISTANCE: f32 = 150.0;
pub const LINK_BASE_ALPHA: f32 = 0.06;
pub const LINK_LINE_WIDTH: f32 = 0.5;

// Navbar
pub const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;
pub const NAV_HEIGHT: f64 = 72.0; // anchor scroll lands this far above the target

// Typewriter
pub const TYPE_START_DELAY_MS: u32 = 1_000;
pub const TYPE_CHAR_DELAY_MS: u32 = 60;
pub const TYPE_DELETE_DELAY_MS: u32 = 30;
pub const TYPE_HOLD_DELAY_MS: u32 = 2_000;
pub const TYPE_NEXT_ROLE_DELAY_MS: u32 = 400;

// Terminal
pub const TERMINAL_START_DELAY_MS: u32 = 1_500;
pub const TERMINAL_KEY_DELAY_MIN_MS: u32 = 20;
pub const TERMINAL_KEY_DELAY_MAX_MS: u32 = 60;
pub const TERMINAL_OUTPUT_PAUSE_MS: u32 = 500;
pub const TERMINAL_LINE_DELAY_MS: u32 = 200;
pub const TERMINAL_NEXT_COMMAND_DELAY_MS: u32 = 1_000;
pub const TERMINAL_RESTART_DELAY_MS: u32 = 3_000;

// Intersection-driven effects
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SKILL_BAR_THRESHOLD: f64 = 0.3;
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0; // nominal frame length the step is derived from

// Contact form
pub const FORM_SEND_DELAY_MS: u32 = 1_500;
pub const FORM_RESTORE_DELAY_MS: u32 = 3_000;

// Parallax
pub const PARALLAX_FACTOR: f32 = 0.005;
