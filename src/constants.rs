/// Browser-host tuning: element ids, cursor dot sizing, colours and the hover
/// probe cadence. Field and trail physics live in `particles_core::constants`.
// Canvas the host draws into; it should be fixed, full-viewport and
// `pointer-events: none` so hover probing sees the page underneath.
pub const CANVAS_ID: &str = "cursor-fx-canvas";

// Cursor dot (CSS pixels)
pub const CURSOR_SIZE_PX: f32 = 20.0;
pub const CURSOR_HOVER_SIZE_PX: f32 = 15.0;
pub const CURSOR_PRESS_SCALE: f32 = 0.7; // dot shrinks while a button is held
pub const CURSOR_GLOW_PX: f64 = 10.0;

// Colours
pub const CURSOR_COLOR_HEX: u32 = 0xAF00F1;
pub const PARTICLE_COLOR_HEX: u32 = 0x5A5A5A;
pub const FALLBACK_BACKGROUND_HEX: u32 = 0x000000;

// Particles never draw smaller than this radius (CSS pixels)
pub const MIN_PARTICLE_RADIUS_PX: f32 = 0.75;

// Hover probing runs every N frames
pub const HOVER_CHECK_INTERVAL: u64 = 4;

// Clickable element detection
pub const CLICKABLE_ROLES: &[&str] = &["button", "link", "tab", "menuitem"];
pub const CLICKABLE_CLASS_MARKERS: &[&str] =
    &["w-button", "w-tab-link", "w-nav-link", "w-dropdown-toggle"];
pub const CLICKABLE_INPUT_TYPES: &[&str] = &["submit", "button"];
