//! Numeric helpers shared by the polygon builder and the raster surface.
//!
//! This module provides:
//! - Evenly spaced sampling grids
//! - "Pretty" axis tick positions and their labels

// ============================================================================
// Sampling
// ============================================================================

/// Returns `n + 1` evenly spaced values from `lo` to `hi` inclusive.
///
/// The last value is exactly `hi` (not accumulated), so polygon edges line up
/// with the requested region bounds. A zero-width range yields `n + 1` copies
/// of `lo`.
///
/// # Arguments
/// * `lo` - First value
/// * `hi` - Last value
/// * `n` - Number of intervals (must be at least 1)
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    debug_assert!(n >= 1);
    let step = (hi - lo) / n as f64;
    (0..=n)
        .map(|i| if i == n { hi } else { lo + step * i as f64 })
        .collect()
}

// ============================================================================
// Axis Ticks
// ============================================================================

/// Computes round tick positions covering `[min, max]`.
///
/// Picks a step of 1, 2 or 5 times a power of ten so that roughly `target`
/// intervals fit in the range, then returns every multiple of that step that
/// lies inside the range.
///
/// # Returns
/// `(ticks, step)`. For an empty or inverted range the single value `min` is
/// returned with a step of 0.
pub fn pretty_ticks(min: f64, max: f64, target: usize) -> (Vec<f64>, f64) {
    if !(max > min) || !min.is_finite() || !max.is_finite() {
        return (vec![min], 0.0);
    }

    let raw = (max - min) / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let step = magnitude
        * if normalized < 1.5 {
            1.0
        } else if normalized < 3.0 {
            2.0
        } else if normalized < 7.0 {
            5.0
        } else {
            10.0
        };

    let tolerance = step * 1e-9;
    let first = (min / step - 1e-9).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    let ticks = (first..=last)
        .map(|i| {
            let value = i as f64 * step;
            // Avoid printing "-0"
            if value.abs() < tolerance { 0.0 } else { value }
        })
        .collect();

    (ticks, step)
}

/// Formats a tick value with as many decimals as its step needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let xs = linspace(-3.0, 3.0, 3);
        assert_eq!(xs, vec![-3.0, -1.0, 1.0, 3.0]);
    }

    #[test]
    fn linspace_handles_zero_width() {
        let xs = linspace(2.0, 2.0, 4);
        assert_eq!(xs.len(), 5);
        assert!(xs.iter().all(|x| *x == 2.0));
    }

    #[test]
    fn pretty_ticks_for_standard_normal_range() {
        let (ticks, step) = pretty_ticks(-3.0, 3.0, 5);
        assert_eq!(step, 1.0);
        assert_eq!(ticks, vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn pretty_ticks_for_density_heights() {
        let (ticks, step) = pretty_ticks(-0.016, 0.415, 5);
        assert!((step - 0.1).abs() < 1e-12);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], 0.0);
        assert!((ticks[4] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn pretty_ticks_degenerate_range() {
        let (ticks, step) = pretty_ticks(1.0, 1.0, 5);
        assert_eq!(ticks, vec![1.0]);
        assert_eq!(step, 0.0);
    }

    #[test]
    fn format_tick_uses_step_precision() {
        assert_eq!(format_tick(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick(2.0, 1.0), "2");
        assert_eq!(format_tick(0.05, 0.05), "0.05");
        assert_eq!(format_tick(250.0, 50.0), "250");
    }
}
