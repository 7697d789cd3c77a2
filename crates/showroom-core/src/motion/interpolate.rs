//! Piecewise-linear interpolation over breakpoints
//!
//! Every scroll-driven style in the application is a pure mapping from one
//! input value onto an output range through a small set of breakpoints.

/// What happens outside the first/last breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Pin to the nearest boundary output
    #[default]
    Clamp,
    /// Continue the first/last segment linearly
    Extend,
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Interpolate `x` over `input` breakpoints onto `output`
///
/// Returns `None` when the ranges differ in length, hold fewer than two
/// breakpoints, are not sorted ascending, or `x` is NaN.
pub fn try_interpolate(
    x: f64,
    input: &[f64],
    output: &[f64],
    extrapolation: Extrapolation,
) -> Option<f64> {
    if input.len() < 2 || input.len() != output.len() || x.is_nan() {
        return None;
    }
    if input.windows(2).any(|w| w[1] < w[0]) {
        return None;
    }

    let last = input.len() - 1;

    if extrapolation == Extrapolation::Clamp {
        if x <= input[0] {
            return Some(output[0]);
        }
        if x >= input[last] {
            return Some(output[last]);
        }
    }

    // Segment containing x; outer segments are reused when extending
    let mut segment = last - 1;
    for i in 0..last {
        if x <= input[i + 1] {
            segment = i;
            break;
        }
    }

    let (x0, x1) = (input[segment], input[segment + 1]);
    let (y0, y1) = (output[segment], output[segment + 1]);
    let span = x1 - x0;
    if span == 0.0 {
        return Some(y0);
    }

    Some(lerp(y0, y1, (x - x0) / span))
}

/// Interpolate, falling back to the first output on malformed ranges
pub fn interpolate(x: f64, input: &[f64], output: &[f64], extrapolation: Extrapolation) -> f64 {
    try_interpolate(x, input, output, extrapolation)
        .unwrap_or_else(|| output.first().copied().unwrap_or(0.0))
}

/// Clamped interpolation, the mode used by every derived style
#[inline]
pub fn interpolate_clamped(x: f64, input: &[f64], output: &[f64]) -> f64 {
    interpolate(x, input, output, Extrapolation::Clamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const INPUT: [f64; 3] = [-100.0, 0.0, 100.0];
    const OUTPUT: [f64; 3] = [0.88, 1.0, 0.88];

    #[test]
    fn test_exact_breakpoints() {
        for (x, y) in INPUT.iter().zip(OUTPUT.iter()) {
            assert!((interpolate_clamped(*x, &INPUT, &OUTPUT) - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_midpoint() {
        let v = interpolate_clamped(50.0, &INPUT, &OUTPUT);
        assert!((v - 0.94).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_vs_extend() {
        assert_eq!(interpolate(300.0, &INPUT, &OUTPUT, Extrapolation::Clamp), 0.88);
        assert_eq!(interpolate(-300.0, &INPUT, &OUTPUT, Extrapolation::Clamp), 0.88);
        let extended = interpolate(200.0, &INPUT, &OUTPUT, Extrapolation::Extend);
        assert!((extended - 0.76).abs() < 1e-9);
        let extended = interpolate(-200.0, &INPUT, &OUTPUT, Extrapolation::Extend);
        assert!((extended - 0.76).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_ranges() {
        assert_eq!(try_interpolate(0.0, &[0.0], &[1.0], Extrapolation::Clamp), None);
        assert_eq!(try_interpolate(0.0, &[0.0, 1.0], &[1.0], Extrapolation::Clamp), None);
        assert_eq!(try_interpolate(0.0, &[1.0, 0.0], &[1.0, 2.0], Extrapolation::Clamp), None);
        assert_eq!(try_interpolate(f64::NAN, &INPUT, &OUTPUT, Extrapolation::Clamp), None);
        assert_eq!(interpolate(0.0, &[1.0, 0.0], &[5.0, 2.0], Extrapolation::Clamp), 5.0);
    }

    #[test]
    fn test_zero_width_segment() {
        let v = interpolate_clamped(0.0, &[0.0, 0.0, 10.0], &[3.0, 4.0, 5.0]);
        assert_eq!(v, 3.0);
    }

    proptest! {
        #[test]
        fn prop_clamped_stays_within_outputs(x in -10_000.0f64..10_000.0) {
            let v = interpolate_clamped(x, &INPUT, &OUTPUT);
            prop_assert!((0.88..=1.0).contains(&v));
        }

        #[test]
        fn prop_monotonic_within_segment(a in -100.0f64..0.0, b in -100.0f64..0.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            // Rising segment
            prop_assert!(interpolate_clamped(lo, &INPUT, &OUTPUT) <= interpolate_clamped(hi, &INPUT, &OUTPUT));
            // Falling segment
            prop_assert!(
                interpolate_clamped(lo + 100.0, &INPUT, &OUTPUT)
                    >= interpolate_clamped(hi + 100.0, &INPUT, &OUTPUT)
            );
        }

        #[test]
        fn prop_outside_range_pins_to_boundary(x in 100.0f64..1e9) {
            prop_assert_eq!(interpolate_clamped(x, &INPUT, &OUTPUT), OUTPUT[2]);
            prop_assert_eq!(interpolate_clamped(-x, &INPUT, &OUTPUT), OUTPUT[0]);
        }
    }
}
