//! Expanding, rotating fractal polygons with a hue that drifts over time.

use crate::canvas::{Canvas, Paint};
use crate::color::{channel, hsl};
use crate::constants::*;
use crate::engine::Simulation;
use crate::fractal::draw_recursive_polygon;
use crate::random::RandomSource;
use crate::state::Viewport;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct ExpandingShape {
    pub center: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub expansion_speed: f32,
    pub sides: u32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub hue_offset: f32,
}

impl ExpandingShape {
    pub fn spawn(viewport: Viewport, rng: &mut impl RandomSource) -> Self {
        let expansion_speed = rng.next_int(UNIVERSE_EXPANSION_MIN, UNIVERSE_EXPANSION_MAX) as f32;
        let sides = rng.next_int(UNIVERSE_SIDES_MIN, UNIVERSE_SIDES_MAX) as u32;
        let rotation_speed = (rng.next_f64() * 2.0 - 1.0) as f32;
        let hue_offset = rng.next_f64() as f32 * 360.0;
        Self {
            center: Vec2::new((viewport.width / 2) as f32, (viewport.height / 2) as f32),
            radius: UNIVERSE_INITIAL_RADIUS,
            max_radius: (viewport.min_side() / 2) as f32,
            expansion_speed,
            sides,
            rotation: 0.0,
            rotation_speed,
            hue_offset,
        }
    }

    /// Grow and turn; returns false once the shape has outgrown its bound.
    #[inline]
    pub fn advance(&mut self, dt: f32) -> bool {
        self.radius += self.expansion_speed * dt;
        self.rotation += self.rotation_speed * dt;
        self.radius <= self.max_radius
    }

    /// 1 at birth, 0 at `max_radius`.
    #[inline]
    pub fn opacity(&self) -> f32 {
        if self.max_radius > 0.0 {
            (1.0 - self.radius / self.max_radius).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn hue(&self, universe_time: f32) -> f32 {
        (universe_time * UNIVERSE_HUE_TIME_RATE
            + self.hue_offset
            + self.radius * UNIVERSE_HUE_RADIUS_RATE)
            .rem_euclid(360.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct UniverseExpansion {
    shapes: Vec<ExpandingShape>,
    time: f32,
}

impl UniverseExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[ExpandingShape] {
        &self.shapes
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Add a shape directly, ignoring the spawn probability but not the cap.
    pub fn push_shape(&mut self, shape: ExpandingShape) -> bool {
        if self.shapes.len() >= UNIVERSE_MAX_SHAPES {
            return false;
        }
        self.shapes.push(shape);
        true
    }

    pub fn update(&mut self, viewport: Viewport, dt: f32, rng: &mut impl RandomSource) {
        self.time += dt;

        if self.shapes.len() < UNIVERSE_MAX_SHAPES && rng.next_f64() < UNIVERSE_SPAWN_PROBABILITY {
            let shape = ExpandingShape::spawn(viewport, rng);
            log::trace!(
                "[universe] spawn sides={} speed={:.0} max_radius={:.0}",
                shape.sides,
                shape.expansion_speed,
                shape.max_radius
            );
            self.shapes.push(shape);
        }

        self.shapes.retain_mut(|shape| shape.advance(dt));
    }

    /// Newest shapes are drawn first so older, larger rings stay on top.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        let mut paint = Paint::stroke(Default::default(), UNIVERSE_STROKE_WIDTH);
        for shape in self.shapes.iter().rev() {
            paint.color = hsl(shape.hue(self.time), 100.0, 50.0)
                .with_alpha(channel(shape.opacity() * 255.0));
            draw_recursive_polygon(
                canvas,
                &paint,
                shape.center,
                shape.radius,
                shape.sides,
                shape.rotation,
                FRACTAL_DEPTH,
            );
        }
    }
}

impl Simulation for UniverseExpansion {
    fn reset(&mut self) {
        self.shapes.clear();
        self.time = 0.0;
    }

    fn step<R: RandomSource, K: Canvas>(
        &mut self,
        canvas: &mut K,
        viewport: Viewport,
        dt: f32,
        rng: &mut R,
    ) {
        self.update(viewport, dt, rng);
        self.draw(canvas);
    }
}
