//! Falling katakana columns.
//!
//! Each column drops its leading edge at a fixed speed and lays a glyph every
//! [`MATRIX_COLUMN_WIDTH`] pixels of travel. Glyphs trail above the leading
//! edge, fade with age and are dropped once they fall past the bottom of the
//! viewport. A column with nothing left to show respawns above the top.

use crate::canvas::{Canvas, Paint, Rgba};
use crate::color::channel;
use crate::constants::*;
use crate::engine::Simulation;
use crate::random::RandomSource;
use crate::state::Viewport;

/// One glyph of a column's trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    /// 1.0 when laid, decays to 0.0.
    pub opacity: f32,
    /// Screen position computed on the last update.
    pub y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct MatrixColumn {
    pub x: f32,
    /// Leading edge; only grows until the column respawns.
    pub y: f32,
    pub speed: f32,
    pub last_glyph_y: f32,
    /// Oldest first; the newest glyph sits at the leading edge.
    pub history: Vec<Glyph>,
}

impl MatrixColumn {
    fn spawn(index: usize, viewport: Viewport, rng: &mut impl RandomSource) -> Self {
        Self {
            x: index as f32 * MATRIX_COLUMN_WIDTH + MATRIX_COLUMN_WIDTH / 2.0,
            y: rng.next_int(-viewport.height_i32(), 0) as f32,
            speed: rng.next_int(MATRIX_SPEED_MIN, MATRIX_SPEED_MAX) as f32,
            last_glyph_y: 0.0,
            history: Vec::new(),
        }
    }

    fn respawn(&mut self, viewport: Viewport, rng: &mut impl RandomSource) {
        self.y = rng.next_int(-viewport.height_i32() / 2, 0) as f32;
        self.speed = rng.next_int(MATRIX_SPEED_MIN, MATRIX_SPEED_MAX) as f32;
    }

    /// Advance one frame: move, lay a glyph if due, trim and fade the trail,
    /// respawn when the trail is empty.
    pub fn update(&mut self, viewport: Viewport, dt: f32, rng: &mut impl RandomSource) {
        self.y += self.speed * dt;

        if self.history.is_empty() || self.y - self.last_glyph_y > MATRIX_COLUMN_WIDTH {
            let ch = rng.choose(&MATRIX_GLYPHS).copied().unwrap_or(MATRIX_GLYPHS[0]);
            self.history.push(Glyph {
                ch,
                opacity: 1.0,
                y: self.y,
            });
            self.last_glyph_y = self.y;
        }

        // Positions are fixed by each glyph's place in the trail at the start
        // of the pass, so removing one never shifts the ones after it.
        let count = self.history.len();
        let head = self.y;
        let limit = viewport.height_f32() + MATRIX_COLUMN_WIDTH;
        let fade = dt * MATRIX_FADE_PER_SEC;
        let mut index = 0usize;
        self.history.retain_mut(|glyph| {
            let behind = (count - 1 - index) as f32;
            index += 1;
            let y = head - behind * MATRIX_COLUMN_WIDTH;
            if y > limit {
                return false;
            }
            glyph.y = y;
            glyph.opacity = (glyph.opacity - fade).clamp(0.0, 1.0);
            true
        });

        if self.history.is_empty() {
            self.respawn(viewport, rng);
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas, paint: &mut Paint) {
        let mut buf = [0u8; 4];
        for glyph in &self.history {
            paint.color = glyph_color(glyph.opacity);
            canvas.draw_text(glyph.ch.encode_utf8(&mut buf), self.x, glyph.y, paint);
        }
    }
}

/// Acid green that fades towards a dim, transparent green.
#[inline]
pub fn glyph_color(opacity: f32) -> Rgba {
    Rgba::new(
        channel(opacity * 50.0),
        channel(150.0 + opacity * 105.0),
        0,
        channel(opacity * 255.0),
    )
}

/// Number of columns that fit the viewport width.
#[inline]
pub fn column_count(viewport: Viewport) -> usize {
    (viewport.width_f32() / MATRIX_COLUMN_WIDTH).floor() as usize
}

#[derive(Clone, Debug, Default)]
pub struct MatrixRain {
    columns: Vec<MatrixColumn>,
}

impl MatrixRain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[MatrixColumn] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [MatrixColumn] {
        &mut self.columns
    }

    /// Lays out columns for the viewport if none exist yet. The count is kept
    /// for the rest of the activation even if the viewport is resized.
    fn seed(&mut self, viewport: Viewport, rng: &mut impl RandomSource) {
        if !self.columns.is_empty() {
            return;
        }
        let count = column_count(viewport);
        self.columns = (0..count)
            .map(|i| MatrixColumn::spawn(i, viewport, rng))
            .collect();
        if count > 0 {
            log::debug!(
                "[matrix] seeded {} columns for {}x{}",
                count,
                viewport.width,
                viewport.height
            );
        }
    }

    pub fn update(&mut self, viewport: Viewport, dt: f32, rng: &mut impl RandomSource) {
        self.seed(viewport, rng);
        for column in &mut self.columns {
            column.update(viewport, dt, rng);
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let mut paint = Paint::text(MATRIX_FONT_FAMILY, MATRIX_TEXT_SIZE);
        for column in &self.columns {
            column.draw(canvas, &mut paint);
        }
    }
}

impl Simulation for MatrixRain {
    fn reset(&mut self) {
        self.columns.clear();
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
