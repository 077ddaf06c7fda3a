// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1/2/5 steps).

/// Round a raw tick spacing up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick values covering `[min, max]` with roughly `target` intervals.
/// Ticks are multiples of the nice step, so `min`/`max` themselves are
/// included only when they fall on the step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || target == 0 {
        return vec![min];
    }
    let step = nice_step((max - min) / target as f64);
    let first = (min / step).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Widen `[min, max]` outward to the nearest nice tick boundaries.
pub fn nice_bounds(min: f64, max: f64, target: usize) -> (f64, f64) {
    if !(max > min) || target == 0 {
        return (min, max);
    }
    let step = nice_step((max - min) / target as f64);
    ((min / step).floor() * step, (max / step).ceil() * step)
}

/// Format a tick value without trailing zeros.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
