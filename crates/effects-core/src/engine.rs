use crate::butterfly::ButterflySwarm;
use crate::canvas::{Canvas, Rgba};
use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, EngineConfig};
use crate::matrix::MatrixRain;
use crate::random::RandomSource;
use crate::state::{EffectKind, Viewport};
use crate::universe::UniverseExpansion;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Update-and-draw step shared by the three effects.
pub trait Simulation {
    /// Drop all transient state; the next step rebuilds it lazily.
    fn reset(&mut self);

    fn step<R: RandomSource, K: Canvas>(
        &mut self,
        canvas: &mut K,
        viewport: Viewport,
        dt: f32,
        rng: &mut R,
    );
}

/// Owns every simulator and decides which one runs each frame.
///
/// Only the current effect holds state; the others are kept reset until they
/// become current again.
pub struct EffectEngine<R = StdRng, C = SystemClock> {
    current: EffectKind,
    config: EngineConfig,
    rng: R,
    clock: C,
    last_frame: Instant,
    matrix: MatrixRain,
    universe: UniverseExpansion,
    swarm: ButterflySwarm,
}

impl EffectEngine {
    /// Entropy-seeded engine on the system clock with default config.
    pub fn new() -> Self {
        Self::with_parts(StdRng::from_entropy(), SystemClock)
    }
}

impl Default for EffectEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource, C: Clock> EffectEngine<R, C> {
    /// Starts on a uniformly random effect.
    pub fn with_parts(rng: R, clock: C) -> Self {
        Self::build(rng, clock, EngineConfig::default())
    }

    pub fn with_config(rng: R, clock: C, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(rng, clock, config))
    }

    fn build(mut rng: R, clock: C, config: EngineConfig) -> Self {
        let pick = rng.next_int(0, EffectKind::ALL.len() as i32);
        let current = EffectKind::from_index(pick as usize);
        let last_frame = clock.now();
        let mut swarm = ButterflySwarm::new();
        swarm.set_acceleration_limit(config.acceleration_limit);
        let mut engine = Self {
            current,
            config,
            rng,
            clock,
            last_frame,
            matrix: MatrixRain::new(),
            universe: UniverseExpansion::new(),
            swarm,
        };
        engine.reset(current);
        log::info!("[engine] starting with {}", current);
        engine
    }

    /// Switch to `kind` immediately, resetting both the outgoing and the
    /// incoming effect.
    pub fn with_effect(mut self, kind: EffectKind) -> Self {
        self.switch_to(kind);
        self
    }

    #[inline]
    pub fn current(&self) -> EffectKind {
        self.current
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn matrix(&self) -> &MatrixRain {
        &self.matrix
    }

    pub fn universe(&self) -> &UniverseExpansion {
        &self.universe
    }

    pub fn butterflies(&self) -> &ButterflySwarm {
        &self.swarm
    }

    /// Cycle to the next effect.
    pub fn advance(&mut self) {
        self.switch_to(self.current.next());
        log::info!("[engine] advanced to {}", self.current);
    }

    fn switch_to(&mut self, kind: EffectKind) {
        let outgoing = self.current;
        self.reset(outgoing);
        self.current = kind;
        self.reset(kind);
    }

    fn reset(&mut self, kind: EffectKind) {
        match kind {
            EffectKind::MatrixRain => self.matrix.reset(),
            EffectKind::RecursiveUniverse => self.universe.reset(),
            EffectKind::ButterflyEffect => self.swarm.reset(),
        }
    }

    /// Measure time since the previous frame and run one step.
    pub fn render_frame(&mut self, canvas: &mut impl Canvas, viewport: Viewport) {
        let now = self.clock.now();
        let elapsed = if now > self.last_frame {
            now - self.last_frame
        } else {
            Duration::ZERO
        };
        self.last_frame = now;

        let raw = elapsed.as_secs_f32();
        let dt = self.config.clamp_dt(raw);
        if dt < raw {
            log::warn!("[engine] frame delta {:.3}s clamped to {:.3}s", raw, dt);
        }
        self.step(canvas, viewport, dt);
    }

    /// Clear the canvas and run the current effect for `dt` seconds.
    pub fn step(&mut self, canvas: &mut impl Canvas, viewport: Viewport, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        canvas.clear(Rgba::BLACK);
        match self.current {
            EffectKind::MatrixRain => self.matrix.step(canvas, viewport, dt, &mut self.rng),
            EffectKind::RecursiveUniverse => {
                self.universe.step(canvas, viewport, dt, &mut self.rng)
            }
            EffectKind::ButterflyEffect => self.swarm.step(canvas, viewport, dt, &mut self.rng),
        }
    }
}
