/// normalize arbitrary angles to [-π, π):
pub fn normalize_symmetric(angle: f64) -> f64 {
    use std::f64::consts::PI;
    let angle = (angle + PI) % (2.0 * PI);
    angle - PI * angle.signum()
}

/// Wrap an angle in degrees to the half open interval (-180, 180].
///
/// Angles already inside the interval are returned untouched, so
/// wrapping never adds roundoff to well behaved input.
pub fn wrap180(degrees: f64) -> f64 {
    if degrees > -180. && degrees <= 180. {
        return degrees;
    }
    let angle = degrees.rem_euclid(360.);
    if angle > 180. {
        return angle - 360.;
    }
    angle
}

/// Wrap an angle in degrees to the half open interval [0, 360).
pub fn wrap360(degrees: f64) -> f64 {
    if (0. ..360.).contains(&degrees) {
        return degrees;
    }
    let angle = degrees.rem_euclid(360.);
    // rem_euclid rounds tiny negative angles up to exactly 360
    if angle >= 360. {
        return 0.;
    }
    angle
}

/// A direction in radians, as a compass bearing in degrees, [0, 360)
pub fn bearing(radians: f64) -> f64 {
    wrap360(radians.to_degrees())
}

/// Longitude difference `to - from`, in degrees. If `wrap` is set, the
/// difference is unrolled into (-180, 180], i.e. taken the short way
/// round, across the antimeridian if need be.
///
/// Returns the (possibly unrolled) difference and the correspondingly
/// unrolled version of `to`.
pub fn unroll180(from: f64, to: f64, wrap: bool) -> (f64, f64) {
    let delta = to - from;
    if wrap && delta.abs() > 180. {
        let unrolled = wrap180(delta);
        if unrolled != delta {
            return (unrolled, from + unrolled);
        }
    }
    (delta, to)
}

// ----- Tests ---------------------------------------------------------------------
