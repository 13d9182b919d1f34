// Default tuning for the particle field and cursor trail. Distances are in
// world units unless noted; per-frame quantities assume one `advance` per
// display refresh.

// Field layout
pub const DEFAULT_PARTICLE_COUNT: usize = 550;
pub const WORLD_HALF_EXTENT: f32 = 5.0; // visible world spans [-5, 5] on both axes

// Cursor interaction radii
pub const INFLUENCE_RADIUS: f32 = 3.0; // free particles inside may attach
pub const DISPERSE_RADIUS: f32 = 2.0; // particles inside are pushed away

// Attraction while attached
pub const ATTRACTION_STRENGTH: f32 = 0.04;
pub const ATTACH_DECAY_PER_SEC: f32 = 0.1; // pull loses this fraction per second attached
pub const ATTACH_STRENGTH_FLOOR: f32 = 0.2;

// Release probability terms (per frame)
pub const TIME_RELEASE_RATE: f32 = 0.01; // per second attached
pub const TIME_RELEASE_CAP: f32 = 0.1;
pub const SPEED_RELEASE_GAIN: f32 = 2.0;
pub const DETACH_SCREEN_PX: f32 = 50.0; // cursor travel that always releases

// Dispersal
pub const DISPERSE_STRENGTH: f32 = 0.1;
pub const DISPERSE_DURATION_SEC: f32 = 2.0;
pub const DISPERSE_RETURN_FRACTION: f32 = 0.7; // return-to-rest resumes after this share

// Return to rest
pub const RETURN_STRENGTH: f32 = 0.003;

// Soft containment
pub const CONTAINMENT_RADIUS: f32 = 4.5;
pub const CONTAINMENT_LEAK: f32 = 0.0005; // fraction of offset removed per frame

// Cursor speed damping
pub const CURSOR_SPEED_DECAY: f32 = 0.95; // multiplied into speed each frame

// Breeze
pub const BREEZE_TICK: f32 = 0.01; // breeze clock advance per frame
pub const BREEZE_PERIOD: f32 = 5.0; // breeze reorients when its clock passes this
pub const BREEZE_MAGNITUDE: f32 = 0.0005; // full width of each component's range

// Idle motion frequencies (rad/sec of the host clock)
pub const BROWNIAN_FREQ_X: f32 = 0.3;
pub const BROWNIAN_FREQ_Y: f32 = 0.4;
pub const BREEZE_EFFECT_FREQ: f32 = 0.1;
pub const PHASE_Y_RATIO: f32 = 0.7;

// Per-particle random ranges, [min, max)
pub const DRIFT_SPEED_RANGE: (f32, f32) = (0.0002, 0.0007);
pub const OSCILLATION_SPEED_RANGE: (f32, f32) = (0.00015, 0.00045);
pub const OSCILLATION_AMPLITUDE_RANGE: (f32, f32) = (0.001, 0.003);
pub const RELEASE_CHANCE_RANGE: (f32, f32) = (0.01, 0.04);
pub const TIME_OFFSET_RANGE: (f32, f32) = (0.0, 1000.0);
pub const VELOCITY_RANGE: (f32, f32) = (-0.0005, 0.0005);
pub const SIZE_RANGE: (f32, f32) = (0.010, 0.020);

// Sprite opacity
pub const BASE_OPACITY: f32 = 0.8;
pub const TWINKLE_DEPTH: f32 = 0.15;

// Cursor trail (screen pixels)
pub const TRAIL_LENGTH: usize = 30;
pub const TRAIL_SMOOTHING: f32 = 0.45; // each point closes this share of the gap per frame
pub const TRAIL_START_WIDTH: f32 = 18.0;
pub const TRAIL_MAX_DISTANCE: f32 = 500.0;
pub const TRAIL_MIN_WIDTH: f32 = 0.3; // thinner segments are skipped
pub const TRAIL_MAX_ALPHA: f32 = 0.25;

// Colours
pub const TRAIL_START_HEX: u32 = 0xAF00F1;
pub const TRAIL_END_HEX: u32 = 0xE8E2D3;
pub const INK_LIGHT_HEX: u32 = 0xFFFFFF;
pub const INK_DARK_HEX: u32 = 0x343434;
pub const CONTRAST_LUMINANCE_THRESHOLD: f32 = 0.4;
pub const MIN_VISIBLE_ALPHA: f32 = 0.1; // more transparent backgrounds are ignored
