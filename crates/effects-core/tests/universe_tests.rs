use effects_core::canvas::PathCmd;
use effects_core::fractal::{polygon_vertex, recursive_polygon_count};
use effects_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn shape(radius: f32, max_radius: f32, speed: f32, tag: f32) -> ExpandingShape {
    ExpandingShape {
        center: Vec2::new(400.0, 300.0),
        radius,
        max_radius,
        expansion_speed: speed,
        sides: 4,
        rotation: 0.0,
        rotation_speed: 0.5,
        hue_offset: tag,
    }
}

#[test]
fn thousand_frames_never_exceed_five_shapes() {
    for seed in 0..8 {
        let mut universe = UniverseExpansion::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut canvas = RecordingCanvas::new();
        let mut peak = 0;
        for _ in 0..1000 {
            universe.step(&mut canvas, Viewport::new(800, 600), 0.016, &mut rng);
            canvas.reset();
            assert!(universe.shapes().len() <= 5);
            peak = peak.max(universe.shapes().len());
            for s in universe.shapes() {
                assert!(s.radius <= s.max_radius);
                assert!((3..8).contains(&s.sides));
                assert!((-1.0..1.0).contains(&s.rotation_speed));
                assert!((0.0..360.0).contains(&s.hue_offset));
                assert!((50.0..150.0).contains(&s.expansion_speed));
            }
        }
        assert!(peak > 0, "seed {seed} never spawned");
    }
}

#[test]
fn spawned_shapes_centre_on_the_viewport() {
    let mut rng = StdRng::seed_from_u64(0);
    let s = ExpandingShape::spawn(Viewport::new(800, 600), &mut rng);
    assert_eq!(s.center, Vec2::new(400.0, 300.0));
    assert_eq!(s.max_radius, 300.0);
    assert_eq!(s.radius, 1.0);
}

#[test]
fn shape_is_dropped_the_frame_it_crosses_max_radius() {
    let mut s = shape(94.0, 100.0, 50.0, -1.0);
    assert!(s.advance(0.1)); // 99.0
    assert!(!s.advance(0.1)); // 104.0, past the bound
}

#[test]
fn removing_a_shape_does_not_skip_its_successor() {
    let mut universe = UniverseExpansion::new();
    assert!(universe.push_shape(shape(99.0, 100.0, 50.0, -1.0)));
    assert!(universe.push_shape(shape(99.5, 100.0, 50.0, -2.0)));
    assert!(universe.push_shape(shape(10.0, 100.0, 50.0, -3.0)));
    assert!(universe.push_shape(shape(99.9, 100.0, 50.0, -4.0)));

    let mut rng = StdRng::seed_from_u64(4);
    universe.update(Viewport::new(800, 600), 0.1, &mut rng);

    let tags: Vec<f32> = universe
        .shapes()
        .iter()
        .map(|s| s.hue_offset)
        .filter(|h| *h < 0.0)
        .collect();
    assert_eq!(tags, vec![-3.0]);
}

#[test]
fn push_shape_respects_the_cap() {
    let mut universe = UniverseExpansion::new();
    for i in 0..5 {
        assert!(universe.push_shape(shape(1.0, 100.0, 50.0, i as f32)));
    }
    assert!(!universe.push_shape(shape(1.0, 100.0, 50.0, 9.0)));
    assert_eq!(universe.shapes().len(), 5);
}

#[test]
fn opacity_and_hue_follow_radius_and_time() {
    let s = shape(50.0, 100.0, 50.0, 10.0);
    assert!((s.opacity() - 0.5).abs() < 1e-6);
    // 2s * 50 + 10 + 50 * 0.5 = 135
    assert!((s.hue(2.0) - 135.0).abs() < 1e-4);
    // 8s * 50 + 10 + 25 = 435, wrapped to 75
    assert!((s.hue(8.0) - 75.0).abs() < 1e-3);
    let degenerate = shape(1.0, 0.0, 50.0, 0.0);
    assert_eq!(degenerate.opacity(), 0.0);
}

#[test]
fn shapes_are_stroked_with_width_two() {
    let mut universe = UniverseExpansion::new();
    universe.push_shape(shape(50.0, 100.0, 0.0, 0.0));
    let mut canvas = RecordingCanvas::new();
    universe.draw(&mut canvas);
    let (_, paint) = canvas.paths().next().expect("a path");
    assert_eq!(paint.style, PaintStyle::Stroke);
    assert_eq!(paint.stroke_width, 2.0);
    assert_eq!(paint.color.a, 127);
}

#[test]
fn fractal_draws_one_outline_per_node() {
    let mut canvas = RecordingCanvas::new();
    let paint = Paint::stroke(Rgba::BLACK, 2.0);
    // radii 100, 40, 16: all three levels draw
    let n = draw_recursive_polygon(&mut canvas, &paint, Vec2::ZERO, 100.0, 3, 0.0, 3);
    assert_eq!(n, 1 + 3 + 9);
    assert_eq!(canvas.paths().count(), 13);
    assert_eq!(recursive_polygon_count(100.0, 3, 3), 13);

    // radii 20, 8, 3.2: the last level is below the minimum radius
    assert_eq!(recursive_polygon_count(20.0, 3, 3), 4);
}

#[test]
fn fractal_terminates_for_small_radius_and_depth() {
    let mut canvas = RecordingCanvas::new();
    let paint = Paint::stroke(Rgba::BLACK, 2.0);
    for depth in 0..8 {
        for radius in [0.0, 1.0, 4.99, f32::NAN] {
            let n = draw_recursive_polygon(&mut canvas, &paint, Vec2::ZERO, radius, 5, 0.3, depth);
            assert_eq!(n, 0);
        }
    }
    assert_eq!(draw_recursive_polygon(&mut canvas, &paint, Vec2::ZERO, 100.0, 5, 0.0, 0), 0);
    assert!(canvas.calls.is_empty());
}

#[test]
fn fractal_depth_is_bounded_by_shrinking_radius() {
    // 1000 * 0.4^k drops below 5 at k = 6, so only six levels draw
    assert_eq!(recursive_polygon_count(1000.0, 3, 50), 1 + 3 + 9 + 27 + 81 + 243);
    // worst case used by the universe: 7 sides, depth 3
    assert!(recursive_polygon_count(1000.0, 7, 3) <= 512);
}

#[test]
fn children_are_drawn_before_their_parent() {
    let mut canvas = RecordingCanvas::new();
    let paint = Paint::stroke(Rgba::BLACK, 2.0);
    let center = Vec2::new(50.0, 50.0);
    draw_recursive_polygon(&mut canvas, &paint, center, 100.0, 4, 0.0, 2);
    let paths: Vec<&Path> = canvas.paths().map(|(p, _)| p).collect();
    assert_eq!(paths.len(), 5);

    // First child sits on vertex 0 of the parent
    let first_child_start = paths[0].points().next().expect("point");
    let child_center = center + Vec2::new(100.0, 0.0);
    assert!((first_child_start - (child_center + Vec2::new(40.0, 0.0))).length() < 1e-3);

    // Parent outline last: MoveTo, three LineTo, Close
    let parent = paths[4].commands();
    assert_eq!(parent.len(), 5);
    assert!(matches!(parent[0], PathCmd::MoveTo(_)));
    assert!(matches!(parent[4], PathCmd::Close));
}

#[test]
fn child_rotation_is_one_and_a_half_times_parent() {
    let mut canvas = RecordingCanvas::new();
    let paint = Paint::stroke(Rgba::BLACK, 2.0);
    let rotation = 0.4;
    draw_recursive_polygon(&mut canvas, &paint, Vec2::ZERO, 100.0, 3, rotation, 2);
    let first_child = canvas.paths().next().expect("child").0;
    let vertex0 = polygon_vertex(Vec2::ZERO, 100.0, 3, rotation, 0);
    let expected = polygon_vertex(vertex0, 40.0, 3, rotation * 1.5, 0);
    let start = first_child.points().next().expect("point");
    assert!((start - expected).length() < 1e-3);
}

#[test]
fn polygon_vertices_lie_on_the_circle() {
    let v = polygon_vertex(Vec2::ZERO, 10.0, 4, 0.0, 1);
    assert!((v - Vec2::new(0.0, 10.0)).length() < 1e-4);
    for i in 0..7 {
        let v = polygon_vertex(Vec2::new(3.0, -2.0), 5.0, 7, 1.2, i);
        assert!(((v - Vec2::new(3.0, -2.0)).length() - 5.0).abs() < 1e-4);
    }
}
