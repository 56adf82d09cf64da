use effects_core::constants::{MATRIX_FONT_FAMILY, MATRIX_GLYPHS, MATRIX_TEXT_SIZE};
use effects_core::matrix::{column_count, glyph_color};
use effects_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn column_with_trail(y: f32, count: usize) -> MatrixColumn {
    MatrixColumn {
        x: 10.0,
        y,
        speed: 0.0,
        last_glyph_y: y,
        history: (0..count)
            .map(|i| Glyph {
                ch: MATRIX_GLYPHS[i % MATRIX_GLYPHS.len()],
                opacity: 1.0,
                y: 0.0,
            })
            .collect(),
    }
}

#[test]
fn column_count_is_floor_of_width_over_20() {
    assert_eq!(column_count(Viewport::new(800, 600)), 40);
    assert_eq!(column_count(Viewport::new(819, 600)), 40);
    assert_eq!(column_count(Viewport::new(820, 600)), 41);
    assert_eq!(column_count(Viewport::new(19, 600)), 0);
    assert_eq!(column_count(Viewport::new(0, 0)), 0);
}

#[test]
fn opacity_stays_in_unit_range_over_many_frames() {
    let mut rain = MatrixRain::new();
    let mut rng = StdRng::seed_from_u64(42);
    let viewport = Viewport::new(800, 600);
    for _ in 0..2000 {
        rain.update(viewport, 0.016, &mut rng);
        for column in rain.columns() {
            for glyph in &column.history {
                assert!((0.0..=1.0).contains(&glyph.opacity), "{glyph:?}");
                assert!(glyph.y <= viewport.height_f32() + 20.0);
                assert!(MATRIX_GLYPHS.contains(&glyph.ch));
            }
        }
    }
}

#[test]
fn trail_is_spaced_every_20_pixels_behind_the_head() {
    let mut column = column_with_trail(300.0, 4);
    let mut rng = StdRng::seed_from_u64(1);
    column.update(Viewport::new(800, 600), 0.0, &mut rng);
    let ys: Vec<f32> = column.history.iter().map(|g| g.y).collect();
    assert_eq!(ys, vec![240.0, 260.0, 280.0, 300.0]);
}

#[test]
fn glyphs_fade_by_point_eight_per_second() {
    let mut column = column_with_trail(100.0, 2);
    let mut rng = StdRng::seed_from_u64(1);
    column.update(Viewport::new(800, 600), 0.5, &mut rng);
    for glyph in &column.history {
        assert!((glyph.opacity - 0.6).abs() < 1e-6);
    }
    for _ in 0..10 {
        column.update(Viewport::new(800, 600), 0.5, &mut rng);
    }
    assert_eq!(column.history.len(), 2);
    assert!(column.history.iter().all(|g| g.opacity == 0.0));
}

#[test]
fn glyphs_below_the_viewport_are_removed() {
    // Head at 650 with a 600 px viewport: glyphs at 630 and 650 pass the
    // 620 limit, the two above stay.
    let mut column = column_with_trail(650.0, 4);
    let mut rng = StdRng::seed_from_u64(1);
    column.update(Viewport::new(800, 600), 0.0, &mut rng);
    let ys: Vec<f32> = column.history.iter().map(|g| g.y).collect();
    assert_eq!(ys, vec![590.0, 610.0]);
}

#[test]
fn removing_a_glyph_does_not_skip_its_successor() {
    let mut column = column_with_trail(700.0, 6);
    // Tag each glyph so survivors can be identified
    for (i, g) in column.history.iter_mut().enumerate() {
        g.ch = MATRIX_GLYPHS[i];
    }
    let mut rng = StdRng::seed_from_u64(1);
    column.update(Viewport::new(800, 600), 0.0, &mut rng);
    // Positions 600, 620 survive; 640, 660, 680, 700 are all dropped
    let kept: Vec<char> = column.history.iter().map(|g| g.ch).collect();
    assert_eq!(kept, vec![MATRIX_GLYPHS[0], MATRIX_GLYPHS[1]]);
}

#[test]
fn empty_column_respawns_above_the_viewport() {
    for seed in 0..50 {
        let mut column = column_with_trail(700.0, 3);
        let mut rng = StdRng::seed_from_u64(seed);
        column.update(Viewport::new(800, 600), 0.0, &mut rng);
        assert!(column.history.is_empty());
        assert!(column.y >= -300.0 && column.y < 0.0, "y={}", column.y);
        assert!(column.speed >= 100.0 && column.speed < 400.0);
        assert_eq!(column.speed.fract(), 0.0);
    }
}

#[test]
fn empty_history_gets_a_glyph_immediately() {
    let mut column = column_with_trail(-50.0, 0);
    column.speed = 200.0;
    let mut rng = StdRng::seed_from_u64(3);
    column.update(Viewport::new(800, 600), 0.01, &mut rng);
    assert_eq!(column.history.len(), 1);
    assert_eq!(column.history[0].y, column.y);
    assert_eq!(column.last_glyph_y, column.y);
}

#[test]
fn new_glyph_only_after_20_pixels_of_travel() {
    let mut column = column_with_trail(0.0, 1);
    column.speed = 100.0;
    let mut rng = StdRng::seed_from_u64(3);
    column.update(Viewport::new(800, 600), 0.1, &mut rng); // 10 px
    assert_eq!(column.history.len(), 1);
    column.update(Viewport::new(800, 600), 0.15, &mut rng); // 25 px total
    assert_eq!(column.history.len(), 2);
    assert_eq!(column.last_glyph_y, column.y);
}

#[test]
fn initial_columns_start_above_the_viewport() {
    let mut rain = MatrixRain::new();
    let mut rng = StdRng::seed_from_u64(8);
    rain.update(Viewport::new(800, 600), 0.0, &mut rng);
    for column in rain.columns() {
        assert!(column.y >= -600.0 && column.y < 0.0);
        assert!(column.speed >= 100.0 && column.speed < 400.0);
    }
}

#[test]
fn glyph_colour_fades_from_acid_green() {
    assert_eq!(glyph_color(1.0), Rgba::new(50, 255, 0, 255));
    assert_eq!(glyph_color(0.0), Rgba::new(0, 150, 0, 0));
    let mid = glyph_color(0.5);
    assert_eq!(mid.r, 25);
    assert_eq!(mid.b, 0);
    assert!(mid.g > 150 && mid.g < 255);
}

#[test]
fn glyphs_are_drawn_in_monospace_at_column_x() {
    let mut rain = MatrixRain::new();
    let mut rng = StdRng::seed_from_u64(5);
    let mut canvas = RecordingCanvas::new();
    rain.step(&mut canvas, Viewport::new(100, 600), 0.016, &mut rng);
    let texts: Vec<_> = canvas.texts().collect();
    assert_eq!(texts.len(), 5);
    for (i, (text, x, _, paint)) in texts.iter().enumerate() {
        assert_eq!(text.chars().count(), 1);
        assert_eq!(*x, i as f32 * 20.0 + 10.0);
        assert_eq!(paint.font_family, MATRIX_FONT_FAMILY);
        assert_eq!(paint.text_size, MATRIX_TEXT_SIZE);
        assert!(paint.anti_alias);
    }
}

#[test]
fn glyph_set_has_45_distinct_symbols() {
    let mut glyphs = MATRIX_GLYPHS.to_vec();
    glyphs.sort_unstable();
    glyphs.dedup();
    assert_eq!(glyphs.len(), 45);
}
