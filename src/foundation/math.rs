pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Map `value` through a piecewise-linear curve given as `(input, output)`
/// stops with strictly covering input order. Values outside the first/last
/// stop clamp to the corresponding output.
pub(crate) fn piecewise_map(value: f64, stops: &[(f64, f64)]) -> f64 {
    debug_assert!(stops.len() >= 2, "piecewise_map needs at least two stops");

    let (first_in, first_out) = stops[0];
    if value <= first_in {
        return first_out;
    }
    let (last_in, last_out) = stops[stops.len() - 1];
    if value >= last_in {
        return last_out;
    }

    for pair in stops.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if value <= x1 {
            let dx = x1 - x0;
            if dx <= 0.0 {
                return y1;
            }
            let t = (value - x0) / dx;
            return lerp(y0, y1, t);
        }
    }
    last_out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
