use crate::css::{css_color, css_font};
use effects_core::{Canvas, Paint, PaintStyle, Path, PathCmd, Rgba};
use std::f64::consts::TAU;
use web_sys as web;

/// [`Canvas`] over a browser 2D context. The context antialiases every draw,
/// so `Paint::anti_alias` has nothing to switch.
pub struct Canvas2dSurface {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Canvas2dSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f64;
        self.height = height as f64;
    }

    fn apply(&self, paint: &Paint) {
        let color = css_color(paint.color);
        match paint.style {
            PaintStyle::Fill => self.ctx.set_fill_style_str(&color),
            PaintStyle::Stroke => {
                self.ctx.set_stroke_style_str(&color);
                self.ctx.set_line_width(paint.stroke_width as f64);
            }
        }
    }

    fn finish(&self, paint: &Paint) {
        match paint.style {
            PaintStyle::Fill => self.ctx.fill(),
            PaintStyle::Stroke => self.ctx.stroke(),
        }
    }
}

impl Canvas for Canvas2dSurface {
    fn clear(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) {
        self.ctx.set_font(&css_font(paint));
        self.ctx.set_fill_style_str(&css_color(paint.color));
        _ = self.ctx.fill_text(text, x as f64, y as f64);
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.ctx.begin_path();
        for cmd in path.commands() {
            match *cmd {
                PathCmd::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathCmd::LineTo(p) => self.ctx.line_to(p.x as f64, p.y as f64),
                PathCmd::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathCmd::Close => self.ctx.close_path(),
            }
        }
        self.apply(paint);
        self.finish(paint);
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, paint: &Paint) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x as f64, y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.apply(paint);
        self.finish(paint);
    }
}
