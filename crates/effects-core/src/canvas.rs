//! Drawing surface capability.
//!
//! The core never rasterizes anything itself. It builds [`Paint`] and [`Path`]
//! values and hands them to whatever [`Canvas`] the host provides: a browser 2D
//! context, a recorder in tests, a counter in the headless runner.

use glam::Vec2;
use smallvec::SmallVec;

/// 8-bit straight-alpha colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Paint state passed with every draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub anti_alias: bool,
    pub color: Rgba,
    pub font_family: &'static str,
    pub text_size: f32,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            style: PaintStyle::Fill,
            stroke_width: 1.0,
            anti_alias: true,
            color: Rgba::BLACK,
            font_family: "sans-serif",
            text_size: 12.0,
        }
    }
}

impl Paint {
    pub fn fill(color: Rgba) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn stroke(color: Rgba, width: f32) -> Self {
        Self {
            style: PaintStyle::Stroke,
            stroke_width: width,
            color,
            ..Self::default()
        }
    }

    pub fn text(font_family: &'static str, text_size: f32) -> Self {
        Self {
            font_family,
            text_size,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

/// Outline built from move/line/quad segments. Small outlines stay inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    cmds: SmallVec<[PathCmd; 8]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.cmds.push(PathCmd::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.cmds.push(PathCmd::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) -> &mut Self {
        self.cmds.push(PathCmd::QuadTo { ctrl, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    #[inline]
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    /// Points visited by the outline, control points excluded.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.cmds.iter().filter_map(|c| match *c {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => Some(p),
            PathCmd::QuadTo { to, .. } => Some(to),
            PathCmd::Close => None,
        })
    }
}

/// The only drawing operations the core issues.
pub trait Canvas {
    fn clear(&mut self, color: Rgba);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint);
    fn draw_path(&mut self, path: &Path, paint: &Paint);
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, paint: &Paint);
}

/// One captured call on a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    Text {
        text: String,
        x: f32,
        y: f32,
        paint: Paint,
    },
    Path {
        path: Path,
        paint: Paint,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        paint: Paint,
    },
}

/// Canvas that keeps every call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, f32, f32, &Paint)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, x, y, paint } => Some((text.as_str(), *x, *y, paint)),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = (&Path, &Paint)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Path { path, paint } => Some((path, paint)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (f32, f32, f32, &Paint)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Circle {
                x,
                y,
                radius,
                paint,
            } => Some((*x, *y, *radius, paint)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            x,
            y,
            paint: paint.clone(),
        });
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.calls.push(DrawCall::Path {
            path: path.clone(),
            paint: paint.clone(),
        });
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, paint: &Paint) {
        self.calls.push(DrawCall::Circle {
            x,
            y,
            radius,
            paint: paint.clone(),
        });
    }
}
