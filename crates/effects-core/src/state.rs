//! Engine-side state types shared with the hosts.
//!
//! These types avoid platform APIs so the web and native hosts can both hand
//! the engine a viewport and read back which effect is showing.

use std::fmt;

/// The closed, cyclic set of effects. The successor of the last is the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    MatrixRain,
    RecursiveUniverse,
    ButterflyEffect,
}

impl EffectKind {
    pub const ALL: [EffectKind; 3] = [
        EffectKind::MatrixRain,
        EffectKind::RecursiveUniverse,
        EffectKind::ButterflyEffect,
    ];

    /// Next effect in cycle order.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            EffectKind::MatrixRain => EffectKind::RecursiveUniverse,
            EffectKind::RecursiveUniverse => EffectKind::ButterflyEffect,
            EffectKind::ButterflyEffect => EffectKind::MatrixRain,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            EffectKind::MatrixRain => 0,
            EffectKind::RecursiveUniverse => 1,
            EffectKind::ButterflyEffect => 2,
        }
    }

    /// Wraps any index onto the cycle.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub const fn name(self) -> &'static str {
        match self {
            EffectKind::MatrixRain => "matrix rain",
            EffectKind::RecursiveUniverse => "recursive universe",
            EffectKind::ButterflyEffect => "butterfly effect",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Drawable area in pixels as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }

    /// Height as a signed value for random ranges; saturates at `i32::MAX`.
    #[inline]
    pub fn height_i32(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    #[inline]
    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }
}
