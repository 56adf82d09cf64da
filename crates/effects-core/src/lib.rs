//! Procedural canvas effects: matrix rain, a recursive expanding universe and
//! a colliding butterfly swarm, behind one frame-driven [`EffectEngine`].
//!
//! Hosts supply a [`Canvas`], the viewport size and frame timing; the engine
//! owns all simulation state.

pub mod butterfly;
pub mod canvas;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod engine;
pub mod fractal;
pub mod matrix;
pub mod random;
pub mod state;
pub mod universe;

pub use butterfly::{Butterfly, ButterflySwarm, SWARM_SIZE};
pub use canvas::{Canvas, DrawCall, Paint, PaintStyle, Path, PathCmd, RecordingCanvas, Rgba};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, EngineConfig};
pub use engine::{EffectEngine, Simulation};
pub use fractal::draw_recursive_polygon;
pub use matrix::{Glyph, MatrixColumn, MatrixRain};
pub use random::RandomSource;
pub use state::{EffectKind, Viewport};
pub use universe::{ExpandingShape, UniverseExpansion};
