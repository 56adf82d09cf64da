//! Grid-seeded butterfly swarm.
//!
//! 125 particles start on a 5x5x5 lattice with near-zero acceleration. Motion
//! is plain Euler integration with damped reflection at the viewport edges.
//! Close pairs swap velocity along their contact normal and receive a random
//! acceleration kick, which is what makes the initially ordered grid diverge.
//!
//! `z` is a depth tier rather than a position in space: it orders drawing,
//! scales the sprite and is weighted heavily in the collision metric so that
//! different tiers rarely touch.

use crate::canvas::{Canvas, Paint, Path, Rgba};
use crate::color::{channel, hsl};
use crate::constants::*;
use crate::engine::Simulation;
use crate::random::RandomSource;
use crate::state::Viewport;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

pub const SWARM_SIZE: usize = SWARM_GRID * SWARM_GRID * SWARM_GRID;

#[derive(Clone, Debug, PartialEq)]
pub struct Butterfly {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub color: Rgba,
    pub wing_phase: f32,
}

impl Butterfly {
    /// Euler step plus wing flap.
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.wing_phase += dt * SWARM_WING_RATE;
    }

    /// Reflect off the viewport edges. Depth is never clamped.
    #[inline]
    pub fn bounce(&mut self, viewport: Viewport) {
        let (w, h) = (viewport.width_f32(), viewport.height_f32());
        if self.position.x < 0.0 || self.position.x > w {
            self.velocity.x = -self.velocity.x * SWARM_BOUNCE_DAMPING;
            self.position.x = self.position.x.clamp(0.0, w);
        }
        if self.position.y < 0.0 || self.position.y > h {
            self.velocity.y = -self.velocity.y * SWARM_BOUNCE_DAMPING;
            self.position.y = self.position.y.clamp(0.0, h);
        }
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        1.0 + self.position.z * 0.5
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        channel(200.0 + self.position.z * 50.0)
    }

    /// Both wing lobes as one outline, each a pair of quadratic curves that
    /// leave the body, bulge outward by `wing_spread` and return.
    pub fn wing_path(&self) -> Path {
        let k = self.scale();
        let spread = self.wing_phase.sin() * 10.0 * k;
        let body = self.position.truncate();
        let mut path = Path::new();
        for side in [-1.0f32, 1.0] {
            let anchor = body + Vec2::new(side * 2.0 * k, 0.0);
            path.move_to(anchor)
                .quad_to(
                    body + Vec2::new(side * (15.0 * k + spread), -10.0 * k),
                    body + Vec2::new(side * (10.0 * k + spread), 5.0 * k),
                )
                .quad_to(body + Vec2::new(side * 5.0 * k, 3.0 * k), anchor);
        }
        path
    }
}

/// Offset from `a` to `b` in the collision metric: depth counts
/// [`SWARM_DEPTH_WEIGHT`] times as much as the planar axes.
#[inline]
pub fn weighted_offset(a: &Butterfly, b: &Butterfly) -> Vec3 {
    let d = b.position - a.position;
    Vec3::new(d.x, d.y, d.z * SWARM_DEPTH_WEIGHT)
}

/// Resolve one pair if it is within the collision radius. Returns whether the
/// pair collided.
///
/// Planar velocities are exchanged along the contact normal as if both had
/// unit mass. The normal is the planar offset divided by the weighted
/// distance; coincident particles get a zero normal and only the kick.
pub fn collide_pair(
    a: &mut Butterfly,
    b: &mut Butterfly,
    rng: &mut impl RandomSource,
    acceleration_limit: Option<f32>,
) -> bool {
    let d = weighted_offset(a, b);
    let dist_sq = d.length_squared();
    if !(dist_sq < SWARM_COLLISION_RADIUS * SWARM_COLLISION_RADIUS) {
        return false;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > f32::EPSILON {
        Vec2::new(d.x, d.y) / dist
    } else {
        Vec2::ZERO
    };

    let va = a.velocity.truncate().dot(normal);
    let vb = b.velocity.truncate().dot(normal);
    let exchange = normal * (vb - va) * SWARM_EXCHANGE_FACTOR;
    a.velocity += exchange.extend(0.0);
    b.velocity -= exchange.extend(0.0);

    for p in [a, b] {
        p.acceleration.x += chaos_kick(rng);
        p.acceleration.y += chaos_kick(rng);
        if let Some(limit) = acceleration_limit {
            p.acceleration.x = p.acceleration.x.clamp(-limit, limit);
            p.acceleration.y = p.acceleration.y.clamp(-limit, limit);
        }
    }
    true
}

#[inline]
fn chaos_kick(rng: &mut impl RandomSource) -> f32 {
    (rng.next_f64() - 0.5) as f32 * SWARM_CHAOS_KICK_SPAN
}

#[derive(Clone, Debug, Default)]
pub struct ButterflySwarm {
    butterflies: Vec<Butterfly>,
    initialized: bool,
    acceleration_limit: Option<f32>,
    last_collisions: usize,
    draw_order: Vec<usize>,
}

impl ButterflySwarm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swarm with a fixed set of particles, for driving the physics directly.
    pub fn from_butterflies(butterflies: Vec<Butterfly>) -> Self {
        Self {
            butterflies,
            initialized: true,
            ..Self::default()
        }
    }

    pub fn butterflies(&self) -> &[Butterfly] {
        &self.butterflies
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Pairs resolved during the last collision pass.
    pub fn last_collisions(&self) -> usize {
        self.last_collisions
    }

    pub fn acceleration_limit(&self) -> Option<f32> {
        self.acceleration_limit
    }

    pub fn set_acceleration_limit(&mut self, limit: Option<f32>) {
        self.acceleration_limit = limit;
    }

    /// Lattice spacing for a viewport; zero for an empty one.
    #[inline]
    pub fn grid_spacing(viewport: Viewport) -> f32 {
        viewport.min_side() as f32 / (SWARM_GRID + 1) as f32
    }

    pub fn initialize(&mut self, viewport: Viewport, rng: &mut impl RandomSource) {
        let spacing = Self::grid_spacing(viewport);
        self.butterflies.clear();
        self.butterflies.reserve(SWARM_SIZE);
        for ix in 0..SWARM_GRID {
            let color = hsl(ix as f32 * SWARM_HUE_STEP, SWARM_SATURATION, SWARM_LIGHTNESS);
            for iy in 0..SWARM_GRID {
                for iz in 0..SWARM_GRID {
                    let acceleration = Vec3::new(
                        rng.next_centered(SWARM_ACCEL_XY_SPAN),
                        rng.next_centered(SWARM_ACCEL_XY_SPAN),
                        rng.next_centered(SWARM_ACCEL_Z_SPAN),
                    );
                    self.butterflies.push(Butterfly {
                        position: Vec3::new(
                            (ix + 1) as f32 * spacing,
                            (iy + 1) as f32 * spacing,
                            iz as f32 * SWARM_DEPTH_TIER,
                        ),
                        velocity: Vec3::ZERO,
                        acceleration,
                        color,
                        wing_phase: rng.next_f32() * TAU,
                    });
                }
            }
        }
        self.initialized = true;
        log::debug!(
            "[swarm] seeded {} butterflies, spacing {:.1}",
            self.butterflies.len(),
            spacing
        );
    }

    pub fn update(&mut self, viewport: Viewport, dt: f32, rng: &mut impl RandomSource) {
        if !self.initialized {
            self.initialize(viewport, rng);
        }
        for b in &mut self.butterflies {
            b.integrate(dt);
            b.bounce(viewport);
        }
        self.last_collisions = self.resolve_collisions(rng);
    }

    /// Every unordered pair is visited exactly once per pass.
    pub fn resolve_collisions(&mut self, rng: &mut impl RandomSource) -> usize {
        let limit = self.acceleration_limit;
        let mut hits = 0;
        for i in 0..self.butterflies.len() {
            let (head, tail) = self.butterflies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                if collide_pair(a, b, rng, limit) {
                    hits += 1;
                }
            }
        }
        hits
    }

    /// Back to front by depth.
    pub fn draw(&mut self, canvas: &mut impl Canvas) {
        self.draw_order.clear();
        self.draw_order.extend(0..self.butterflies.len());
        let butterflies = &self.butterflies;
        self.draw_order
            .sort_by(|&i, &j| butterflies[i].position.z.total_cmp(&butterflies[j].position.z));

        let mut paint = Paint::fill(Rgba::BLACK);
        for &i in &self.draw_order {
            let b = &butterflies[i];
            paint.color = b.color.with_alpha(b.alpha());
            canvas.draw_circle(b.position.x, b.position.y, 3.0 * b.scale(), &paint);
            canvas.draw_path(&b.wing_path(), &paint);
        }
    }
}

impl Simulation for ButterflySwarm {
    fn reset(&mut self) {
        self.butterflies.clear();
        self.initialized = false;
        self.last_collisions = 0;
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
