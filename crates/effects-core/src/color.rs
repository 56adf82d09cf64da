use crate::canvas::Rgba;

/// Convert HSL to RGB. `h` in degrees (any value, wrapped), `s` and `l` in percent.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let h = h.rem_euclid(360.0);
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [unit_to_byte(r + m), unit_to_byte(g + m), unit_to_byte(b + m)]
}

/// Opaque colour from HSL components.
#[inline]
pub fn hsl(h: f32, s: f32, l: f32) -> Rgba {
    let [r, g, b] = hsl_to_rgb(h, s, l);
    Rgba::new(r, g, b, 255)
}

/// Map `[0, 1]` to a channel byte, saturating outside the range.
#[inline]
pub fn unit_to_byte(v: f32) -> u8 {
    channel(v * 255.0)
}

/// Saturating, truncating float-to-channel conversion; NaN maps to 0.
#[inline]
pub fn channel(v: f32) -> u8 {
    if v.is_nan() {
        0
    } else {
        v.clamp(0.0, 255.0) as u8
    }
}
