//! Injected randomness.
//!
//! Every simulator draws from a [`RandomSource`] handed to it by the engine, so
//! tests can seed the sequence while production code uses entropy.

use rand::Rng;

/// Uniform random numbers used by the simulators.
pub trait RandomSource {
    /// Integer in `[lo, hi)`. An empty range yields `lo`.
    fn next_int(&mut self, lo: i32, hi: i32) -> i32;
    /// Float in `[0, 1)`.
    fn next_f32(&mut self) -> f32;
    /// Double in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Float in `[-span/2, span/2)`.
    #[inline]
    fn next_centered(&mut self, span: f32) -> f32 {
        (self.next_f32() - 0.5) * span
    }

    /// Picks one element uniformly; `None` for an empty slice.
    #[inline]
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        let len = i32::try_from(items.len()).unwrap_or(i32::MAX);
        items.get(self.next_int(0, len) as usize)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next_int(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.gen_range(lo..hi)
    }

    #[inline]
    fn next_f32(&mut self) -> f32 {
        self.gen::<f32>()
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}
