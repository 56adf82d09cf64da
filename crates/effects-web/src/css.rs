use effects_core::{Paint, Rgba};

/// CSS `rgba()` string; alpha is written as a 0..1 fraction.
pub fn css_color(c: Rgba) -> String {
    format!(
        "rgba({},{},{},{:.3})",
        c.r,
        c.g,
        c.b,
        c.a as f32 / 255.0
    )
}

/// CSS font shorthand for a text paint, e.g. `18px monospace`.
pub fn css_font(paint: &Paint) -> String {
    format!("{}px {}", paint.text_size, paint.font_family)
}
