use glam::Vec3;

// Shared tuning constants for the page effects. The web frontend reads these
// directly; parameter structs (`FieldParams`, `MotionParams`, `TiltParams`)
// take their defaults from here.

// Typewriter
pub const TITLE_PHRASES: [&str; 3] = [
    "Aspiring AI & ML Engineer",
    "Internship-Ready Problem Solver",
    "Engineering Student with Build Experience",
];
pub const TYPE_STEP_MS: u32 = 60; // per character while typing
pub const TYPE_PAUSE_MS: u32 = 1200; // hold on the full phrase
pub const DELETE_STEP_MS: u32 = 35; // per character while deleting

// Copy email / footer
pub const CONTACT_EMAIL: &str = "r.jerphin@gmail.com";
pub const COPY_LABEL_IDLE: &str = "Copy Email";
pub const COPY_LABEL_DONE: &str = "Email Copied";
pub const COPY_LABEL_FAILED: &str = "Copy failed";
pub const COPY_LABEL_REVERT_MS: i32 = 1200;

// Intersection thresholds
pub const REVEAL_THRESHOLD: f64 = 0.18;
pub const SECTION_THRESHOLD: f64 = 0.35;
pub const HIGHLIGHT_SECTIONS: [&str; 4] = ["projects", "skills", "education", "contact"];
pub const REVEAL_CLASS: &str = "show";
pub const ACTIVE_CLASS: &str = "active";

// Pointer glow
pub const GLOW_OPACITY_VISIBLE: f32 = 0.55;

// Card tilt
pub const TILT_SELECTOR: &str =
    ".hero-text, .hero-card, .panel, .project-card, .readiness-card, .contact";
pub const TILT_BREAKPOINT_PX: f64 = 980.0; // tilt only above this viewport width
pub const TILT_SPAN_Y_DEG: f64 = 8.0; // full rotateY span across the panel width
pub const TILT_SPAN_X_DEG: f64 = 7.0; // full rotateX span across the panel height
pub const TILT_LIFT_PX: f64 = 4.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1200.0;

// Particle field
pub const PARTICLE_MIN_COUNT: usize = 60;
pub const PARTICLE_MAX_COUNT: usize = 120;
pub const PARTICLE_PX_PER_POINT: f64 = 12.0; // viewport width per particle
pub const PARTICLE_SPEED_SPAN: f32 = 0.55; // velocity components in ±span/2 px per frame
pub const PARTICLE_RADIUS_MIN: f32 = 0.7;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_WRAP_MARGIN: f32 = 20.0;
pub const POINTER_REPEL_RADIUS: f32 = 140.0;
pub const POINTER_REPEL_STRENGTH: f32 = 0.008;
pub const LINK_MAX_DISTANCE: f32 = 120.0;
pub const LINK_ALPHA_SCALE: f32 = 0.24;
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const FIELD_RESIZE_DEBOUNCE_MS: i32 = 120;

// Pointer pulse drawn on the field: radius = (BASE + sin(t * RATE) * SWING) * SCALE
pub const PULSE_BASE_PX: f32 = 34.0;
pub const PULSE_SWING_PX: f32 = 8.0;
pub const PULSE_RATE_PER_MS: f32 = 0.0024;
pub const PULSE_RADIUS_SCALE: f32 = 4.0;

// Field colours (CSS)
pub const PARTICLE_FILL: &str = "rgba(84, 240, 255, 0.58)";
pub const LINK_RGB: (u8, u8, u8) = (119, 167, 255);
pub const PULSE_STOPS: [(f32, &str); 3] = [
    (0.0, "rgba(84, 240, 255, 0.20)"),
    (0.45, "rgba(77, 216, 179, 0.08)"),
    (1.0, "rgba(84, 240, 255, 0)"),
];

// Avatar path and motion
pub const AVATAR_WAYPOINTS: [Vec3; 5] = [
    Vec3::new(2.2, 1.3, 0.0),
    Vec3::new(1.05, 0.7, 0.0),
    Vec3::new(-0.2, 0.2, 0.0),
    Vec3::new(1.3, -0.4, 0.0),
    Vec3::new(-1.5, -1.1, 0.0),
];
pub const PROGRESS_SMOOTHING: f32 = 0.06; // per frame, progress -> target
pub const POSITION_SMOOTHING: f32 = 0.08; // per frame, position -> path point
pub const FACING_LOOK_AHEAD: f32 = 0.014; // progress offset of the facing probe
pub const FACING_DEPTH_BIAS: f32 = 1.4; // keeps the figure turned towards the camera
pub const AVATAR_SCALE: f32 = 0.92;

// Scene gating
pub const SCENE_MIN_WIDTH_QUERY: &str = "(max-width: 640px)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Camera
pub const CAMERA_FOV_DEG: f32 = 36.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.1, 8.4);
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Lights (sRGB hex, intensity)
pub const SKY_LIGHT: (u32, f32) = (0x9ae9ff, 1.15);
pub const GROUND_LIGHT: u32 = 0x060b16;
pub const KEY_LIGHT: (u32, f32) = (0x89c4ff, 1.35);
pub const KEY_LIGHT_POS: Vec3 = Vec3::new(3.6, 4.5, 3.8);
pub const RIM_LIGHT: (u32, f32) = (0x4dd8b3, 1.5);
pub const RIM_LIGHT_POS: Vec3 = Vec3::new(-3.2, 1.8, 2.7);
pub const RIM_LIGHT_RANGE: f32 = 20.0;
pub const RIM_LIGHT_DECAY: f32 = 1.4;
