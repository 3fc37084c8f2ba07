// Shared tuning constants used by the web frontend. Values mirror the shipped
// page; anything a caller may reasonably want to vary is also exposed through
// the parameter structs in the sibling modules.

// ---------------- Text reveal ----------------

// Scramble alphabet: 26 uppercase letters + 10 digits.
pub const SCRAMBLE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
// Fixed tick interval for the shared reveal timer, in milliseconds.
pub const REVEAL_TICK_MS: u32 = 30;
// Cursor advance per tick; two ticks reveal one character.
pub const REVEAL_CURSOR_STEP: f32 = 0.5;

// ---------------- Particle backdrop ----------------

pub const PARTICLE_COUNT: usize = 1500;
pub const FIELD_HALF_EXTENT: f32 = 50.0; // +/- spawn range in X and Y
pub const FIELD_WRAP_DEPTH: f32 = 50.0; // recycle a particle once z passes this
pub const FIELD_SPAWN_DEPTH: f32 = -100.0; // depth a recycled particle restarts at
pub const PARTICLE_SPEED_MIN: f32 = 0.1;
pub const PARTICLE_SPEED_MAX: f32 = 0.6;
pub const PARTICLE_ADVANCE_FACTOR: f32 = 3.0; // depth units per speed unit per frame

pub const BACKDROP_FOV_DEG: f32 = 75.0;
pub const BACKDROP_CAMERA_Z: f32 = 50.0;
pub const BACKDROP_ZNEAR: f32 = 0.1;
pub const BACKDROP_ZFAR: f32 = 1000.0;

pub const PARTICLE_COLOR: [f32; 3] = [1.0, 0.333, 0.0]; // #ff5500
pub const PARTICLE_SIZE: f32 = 0.2; // world-space point diameter
pub const PARTICLE_OPACITY: f32 = 0.8;

// ---------------- Product viewer ----------------

pub const VIEWER_FOV_DEG: f32 = 45.0;
pub const VIEWER_CAMERA_DISTANCE: f32 = 5.0;
pub const VIEWER_ZNEAR: f32 = 0.1;
pub const VIEWER_ZFAR: f32 = 100.0;

// Uniform scale applied to the loaded model before recentering.
pub const MODEL_SCALE: f32 = 14.0;

// Orbit controls. Speed 2.0 completes one orbit every 30 seconds.
pub const AUTO_ROTATE_SPEED: f32 = 2.0;
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = AUTO_ROTATE_SPEED * std::f32::consts::TAU / 60.0;
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
// Keep the polar angle off the poles so the view basis stays well defined.
pub const ORBIT_POLAR_MARGIN: f32 = 0.01;

// Lighting: white ambient plus a cyan key light shining from (5, 5, 5).
pub const AMBIENT_LIGHT: [f32; 3] = [1.0, 1.0, 1.0];
pub const DIR_LIGHT_COLOR: [f32; 3] = [0.0, 0.953, 1.0]; // #00f3ff
pub const DIR_LIGHT_INTENSITY: f32 = 3.0;
pub const DIR_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

// Exp2 depth fog pulling the scene toward near-black with distance.
pub const FOG_COLOR: [f32; 3] = [0.0196, 0.0196, 0.0196]; // #050505
pub const FOG_DENSITY: f32 = 0.05;

// Fixed placeholder message shown when the asset fetch/decode fails.
pub const LOAD_FAILED_TEXT: &str = "MODEL LOAD FAILED";
