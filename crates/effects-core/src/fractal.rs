//! Self-similar polygon ornament.

use crate::canvas::{Canvas, Paint, Path};
use crate::constants::{FRACTAL_CHILD_ROTATION, FRACTAL_CHILD_SCALE, FRACTAL_MIN_RADIUS};
use glam::Vec2;
use std::f32::consts::TAU;

/// Vertex `i` of a regular polygon.
#[inline]
pub fn polygon_vertex(center: Vec2, radius: f32, sides: u32, rotation: f32, i: u32) -> Vec2 {
    let angle = rotation + i as f32 * TAU / sides as f32;
    center + radius * Vec2::new(angle.cos(), angle.sin())
}

/// Stroke a regular polygon and, while `depth > 1`, a smaller copy centred on
/// each of its vertices. Children are drawn as their vertex is visited, before
/// the parent outline. Returns the number of outlines drawn.
///
/// Recursion stops at `depth == 0` or once the radius drops below
/// [`FRACTAL_MIN_RADIUS`], so at most `sides^(depth-1)` leaves are produced.
pub fn draw_recursive_polygon(
    canvas: &mut impl Canvas,
    paint: &Paint,
    center: Vec2,
    radius: f32,
    sides: u32,
    rotation: f32,
    depth: u32,
) -> usize {
    // NaN radius fails the comparison and stops here as well.
    if depth == 0 || sides == 0 || !(radius >= FRACTAL_MIN_RADIUS) {
        return 0;
    }

    let mut drawn = 0;
    let mut path = Path::new();
    for i in 0..sides {
        let vertex = polygon_vertex(center, radius, sides, rotation, i);
        if i == 0 {
            path.move_to(vertex);
        } else {
            path.line_to(vertex);
        }
        if depth > 1 {
            drawn += draw_recursive_polygon(
                canvas,
                paint,
                vertex,
                radius * FRACTAL_CHILD_SCALE,
                sides,
                rotation * FRACTAL_CHILD_ROTATION,
                depth - 1,
            );
        }
    }
    path.close();
    canvas.draw_path(&path, paint);
    drawn + 1
}

/// Outlines [`draw_recursive_polygon`] would draw, without a canvas.
pub fn recursive_polygon_count(radius: f32, sides: u32, depth: u32) -> usize {
    if depth == 0 || sides == 0 || !(radius >= FRACTAL_MIN_RADIUS) {
        return 0;
    }
    let children = if depth > 1 {
        sides as usize * recursive_polygon_count(radius * FRACTAL_CHILD_SCALE, sides, depth - 1)
    } else {
        0
    };
    1 + children
}
