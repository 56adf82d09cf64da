// Keys that cycle to the next effect, alongside tapping the canvas.
#[inline]
pub fn is_advance_key(key: &str) -> bool {
    matches!(key, " " | "Enter" | "ArrowRight" | "n" | "N")
}
