//! Fixed kernel geometry for the two separable blur passes.
//!
//! The tap weights are the 5-tap binomial approximation of a Gaussian,
//! `[1, 4, 6, 4, 1] / 16`. Tap spacing and edge margin are baked per axis
//! rather than derived from a kernel radius: the horizontal pass spreads its
//! taps 3 columns apart and skips a 9-column border even though the taps only
//! reach 6 columns out. That wider margin is part of the reference contract
//! and is reproduced verbatim.

/// Tap weights, centre tap in the middle.
pub const TAPS: [i64; 5] = [1, 4, 6, 4, 1];

/// Normalization divisor (sum of [`TAPS`]).
pub const DIVISOR: i64 = 16;

/// Tap placement along one axis.
#[derive(Clone, Copy, Debug)]
pub struct AxisKernel {
    /// Distance between adjacent taps, in pixels.
    pub spacing: usize,
    /// Untouched border on each side of the axis, in pixels.
    pub margin: usize,
}

impl AxisKernel {
    /// First index past the left/top margin, and one past the last blurred
    /// index. Empty (or inverted) when the extent is smaller than twice the
    /// margin; callers treat that as a no-op, not an error.
    #[inline]
    pub fn blur_range(&self, extent: usize) -> std::ops::Range<usize> {
        self.margin..extent.saturating_sub(self.margin)
    }
}

/// Horizontal pass: taps at column offsets `{-6, -3, 0, +3, +6}`.
pub const HORIZONTAL: AxisKernel = AxisKernel {
    spacing: 3,
    margin: 9,
};

/// Vertical pass: taps at row offsets `{-2, -1, 0, +1, +2}`.
pub const VERTICAL: AxisKernel = AxisKernel {
    spacing: 1,
    margin: 3,
};

/// Apply the tap weights to five samples and divide, truncating.
///
/// Accumulates in `i64` so the weighted sum cannot overflow for any `i32`
/// input. Division truncates toward zero, which matches the reference for
/// the non-negative pixel values it was defined on.
#[inline]
pub fn weigh(samples: [i32; 5]) -> i32 {
    let mut acc = 0i64;
    for (tap, v) in TAPS.iter().zip(samples) {
        acc += tap * v as i64;
    }
    (acc / DIVISOR) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taps_sum_to_divisor() {
        assert_eq!(TAPS.iter().sum::<i64>(), DIVISOR);
    }

    #[test]
    fn weigh_is_identity_on_constant_samples() {
        assert_eq!(weigh([42; 5]), 42);
        assert_eq!(weigh([0; 5]), 0);
    }

    #[test]
    fn weigh_truncates_division() {
        // 1*16 + 4*32 + 6*48 + 4*8 + 1*4 = 468; 468 / 16 = 29.25
        assert_eq!(weigh([16, 32, 48, 8, 4]), 29);
    }

    #[test]
    fn weigh_handles_extreme_values_without_overflow() {
        assert_eq!(weigh([i32::MAX; 5]), i32::MAX);
        assert_eq!(weigh([i32::MIN; 5]), i32::MIN);
    }

    #[test]
    fn blur_range_is_empty_for_narrow_extents() {
        assert!(HORIZONTAL.blur_range(10).is_empty());
        assert!(HORIZONTAL.blur_range(18).is_empty());
        assert_eq!(HORIZONTAL.blur_range(19), 9..10);
        assert!(VERTICAL.blur_range(5).is_empty());
        assert_eq!(VERTICAL.blur_range(8), 3..5);
    }
}
