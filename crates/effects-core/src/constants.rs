// Shared tuning constants for the three effects. Hosts only need the glyph font.

// Frame timing
pub const DEFAULT_MAX_FRAME_DT: f32 = 0.1; // seconds; larger steps after a host stall are clamped

// Matrix rain
pub const MATRIX_COLUMN_WIDTH: f32 = 20.0; // horizontal slot per column and vertical glyph cadence
pub const MATRIX_FADE_PER_SEC: f32 = 0.8; // opacity lost per second by every glyph
pub const MATRIX_SPEED_MIN: i32 = 100; // pixels per second, inclusive
pub const MATRIX_SPEED_MAX: i32 = 400; // pixels per second, exclusive
pub const MATRIX_FONT_FAMILY: &str = "monospace";
pub const MATRIX_TEXT_SIZE: f32 = 18.0;

/// Katakana glyph set for the rain columns (the gojūon rows ア..ヲ).
pub const MATRIX_GLYPHS: [char; 45] = [
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ',
    'タ', 'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ',
    'マ', 'ミ', 'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ヲ',
];

// Recursive universe
pub const UNIVERSE_MAX_SHAPES: usize = 5;
pub const UNIVERSE_SPAWN_PROBABILITY: f64 = 0.02; // per frame while below the cap
pub const UNIVERSE_INITIAL_RADIUS: f32 = 1.0;
pub const UNIVERSE_EXPANSION_MIN: i32 = 50; // pixels per second, inclusive
pub const UNIVERSE_EXPANSION_MAX: i32 = 150; // pixels per second, exclusive
pub const UNIVERSE_SIDES_MIN: i32 = 3; // inclusive
pub const UNIVERSE_SIDES_MAX: i32 = 8; // exclusive
pub const UNIVERSE_HUE_TIME_RATE: f32 = 50.0; // degrees per second of universe time
pub const UNIVERSE_HUE_RADIUS_RATE: f32 = 0.5; // degrees per pixel of radius
pub const UNIVERSE_STROKE_WIDTH: f32 = 2.0;

// Fractal ornament
pub const FRACTAL_DEPTH: u32 = 3;
pub const FRACTAL_MIN_RADIUS: f32 = 5.0;
pub const FRACTAL_CHILD_SCALE: f32 = 0.4;
pub const FRACTAL_CHILD_ROTATION: f32 = 1.5;

// Butterfly swarm
pub const SWARM_GRID: usize = 5; // particles per axis; swarm size is GRID^3
pub const SWARM_DEPTH_TIER: f32 = 0.1; // z step between grid layers
pub const SWARM_ACCEL_XY_SPAN: f32 = 0.1; // initial ax/ay in [-span/2, span/2]
pub const SWARM_ACCEL_Z_SPAN: f32 = 0.01;
pub const SWARM_HUE_STEP: f32 = 72.0; // degrees between grid columns
pub const SWARM_SATURATION: f32 = 80.0;
pub const SWARM_LIGHTNESS: f32 = 60.0;
pub const SWARM_WING_RATE: f32 = 5.0; // radians per second
pub const SWARM_BOUNCE_DAMPING: f32 = 0.9;
pub const SWARM_DEPTH_WEIGHT: f32 = 100.0; // depth difference weight in the collision metric
pub const SWARM_COLLISION_RADIUS: f32 = 20.0;
pub const SWARM_EXCHANGE_FACTOR: f32 = 0.5;
pub const SWARM_CHAOS_KICK_SPAN: f32 = 5.0; // kick in [-span/2, span/2] per collision
