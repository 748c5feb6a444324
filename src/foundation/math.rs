/// Exact per-unit rate `num/den`, used for "frames per character" style constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rate {
    pub num: u64,
    pub den: u64,
}

impl Rate {
    pub const fn new(num: u64, den: u64) -> Self {
        Self { num, den }
    }

    /// `ceil(count * num / den)` in integer arithmetic, saturating on overflow.
    pub fn ceil_mul(self, count: u64) -> u64 {
        if self.den == 0 {
            return 0;
        }
        let scaled = u128::from(count) * u128::from(self.num);
        let den = u128::from(self.den);
        let out = scaled.div_ceil(den);
        u64::try_from(out).unwrap_or(u64::MAX)
    }

    /// `ceil(count / (num / den))`, i.e. how many frames it takes to reveal `count` units at
    /// `num/den` units per frame.
    pub fn ceil_div(self, count: u64) -> u64 {
        Rate::new(self.den, self.num).ceil_mul(count)
    }

    pub fn as_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

/// Piecewise-linear interpolation over ascending `input` knots with clamped extrapolation.
///
/// `input` and `output` must have the same length (at least 2); degenerate segments resolve to
/// the segment's right-hand output.
pub fn interpolate_clamped(x: f64, input: &[f64], output: &[f64]) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    let n = input.len().min(output.len());
    if n == 0 {
        return 0.0;
    }
    if x <= input[0] {
        return output[0];
    }
    if x >= input[n - 1] {
        return output[n - 1];
    }
    for i in 1..n {
        let (x0, x1) = (input[i - 1], input[i]);
        if x < x1 {
            let span = x1 - x0;
            if span <= 0.0 {
                return output[i];
            }
            let t = (x - x0) / span;
            return output[i - 1] + (output[i] - output[i - 1]) * t;
        }
    }
    output[n - 1]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
