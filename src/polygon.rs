use crate::angular::wrap180;
use crate::compute_inverse;
use crate::ellipsoid::COINCIDENCE;
use crate::geodesic::compatible;
use crate::point::checked;
use crate::Error;
use crate::GeodesicOptions;
use crate::GeodeticPosition;
use log::debug;

/// Does the closed polygon `points` enclose the North or the South Pole?
///
/// The closing edge, from the last point back to the first, is implicit,
/// although an explicit repetition of the first point is also accepted.
/// With `wrap` set, longitude differences are unrolled across the
/// antimeridian.
///
/// Walking around a polygon not enclosing a pole, the bearing turns a
/// full circle: the turns at the vertices and along the edges sum to
/// ±360°. Walking around a pole, the bearing ends up where it started,
/// and the sum is 0°. See [Pilone (2014)](crate::Bibliography::Pil14).
///
/// Polygons passing exactly through a pole, or intersecting themselves,
/// are not handled.
///
/// # Examples
///
/// ```rust
/// use vincenty::prelude::*;
///
/// let arctic: Vec<_> = [0., 90., 180., 270.]
///     .iter()
///     .map(|&lon| GeodeticPoint::wgs84(80., lon))
///     .collect::<Result<_, _>>()?;
/// assert!(encloses_pole(&arctic, false)?);
/// # Ok::<(), vincenty::Error>(())
/// ```
pub fn encloses_pole<P: GeodeticPosition>(points: &[P], wrap: bool) -> Result<bool, Error> {
    encloses_pole_with(points, &GeodesicOptions::default().with_wrap(wrap))
}

/// [`encloses_pole`], with explicit solver options
pub fn encloses_pole_with<P: GeodeticPosition>(
    points: &[P],
    options: &GeodesicOptions,
) -> Result<bool, Error> {
    // Check everything before computing anything
    let Some(first) = points.first() else {
        return Err(Error::InsufficientPoints { found: 0 });
    };
    let (_, _, datum) = checked(first)?;
    for point in points {
        let (_, _, other) = checked(point)?;
        compatible(datum, other)?;
    }
    let found = distinct(points);
    if found < 3 {
        return Err(Error::InsufficientPoints { found });
    }

    // Initial and final bearing along each edge
    let n = points.len();
    let mut edges = Vec::with_capacity(n);
    for i in 0..n {
        let (p1, p2) = (&points[i], &points[(i + 1) % n]);
        match compute_inverse(p1, p2, options) {
            Ok(geodesic) => edges.push((geodesic.initial_bearing, geodesic.final_bearing)),
            Err(Error::CoincidentPoints(_)) => {
                debug!("Skipping duplicate vertex #{}", (i + 1) % n);
            }
            Err(e) => return Err(e),
        }
    }
    if edges.len() < 3 {
        return Err(Error::InsufficientPoints { found: edges.len() });
    }

    Ok(turning(&edges).abs() < 180.)
}

// The number of distinct vertices among `points`. Longitudes are compared
// modulo 360, and ignored at the poles.
fn distinct<P: GeodeticPosition>(points: &[P]) -> usize {
    let eps = COINCIDENCE.to_degrees();
    let mut seen: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for point in points {
        let (lat, lon) = (point.latitude(), point.longitude());
        let known = seen.iter().any(|&(other_lat, other_lon)| {
            (lat - other_lat).abs() < eps
                && (90. - lat.abs() < eps || wrap180(lon - other_lon).abs() < eps)
        });
        if !known {
            seen.push((lat, lon));
        }
    }
    seen.len()
}

// The total turning, in degrees, when walking along the closed sequence
// of `edges`, given by their initial and final bearings.
fn turning(edges: &[(f64, f64)]) -> f64 {
    let Some(&(_, mut previous)) = edges.last() else {
        return 0.;
    };
    let mut sum = 0.;
    for &(initial, last) in edges {
        // At the vertex, then along the edge
        sum += wrap180(initial - previous);
        sum += wrap180(last - initial);
        previous = last;
    }
    sum
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datum;
    use crate::Datum;
    use crate::GeodeticPoint;
    use float_eq::assert_float_eq;

    fn wgs84(coordinates: &[(f64, f64)]) -> Result<Vec<GeodeticPoint<'static>>, Error> {
        coordinates
            .iter()
            .map(|&(lat, lon)| GeodeticPoint::wgs84(lat, lon))
            .collect()
    }

    #[test]
    fn polar() -> Result<(), Error> {
        let arctic = wgs84(&[(80., 0.), (80., 90.), (80., 180.), (80., 270.)])?;
        assert!(encloses_pole(&arctic, false)?);
        assert!(encloses_pole(&arctic, true)?);

        let antarctic = wgs84(&[(-80., 0.), (-80., 90.), (-80., 180.), (-80., 270.)])?;
        assert!(encloses_pole(&antarctic, false)?);

        // A triangle will do
        let triangle = wgs84(&[(80., 0.), (80., 120.), (80., 240.)])?;
        assert!(encloses_pole(&triangle, false)?);

        // The southern ocean, 20 degrees at a time
        let ring: Vec<_> = (0..18)
            .map(|i| GeodeticPoint::wgs84(-75., -180. + 20. * i as f64))
            .collect::<Result<_, _>>()?;
        assert!(encloses_pole(&ring, true)?);
        Ok(())
    }

    #[test]
    fn not_polar() -> Result<(), Error> {
        let box1 = wgs84(&[(0., 0.), (0., 1.), (1., 1.), (1., 0.)])?;
        assert!(!encloses_pole(&box1, false)?);

        let mut reversed = box1.clone();
        reversed.reverse();
        assert!(!encloses_pole(&reversed, false)?);

        // Straddling the antimeridian
        let box2 = wgs84(&[(0., 179.), (0., -179.), (1., -179.), (1., 179.)])?;
        assert!(!encloses_pole(&box2, true)?);

        let box3 = wgs84(&[(50., -10.), (60., -10.), (60., 10.), (50., 10.)])?;
        assert!(!encloses_pole(&box3, false)?);
        Ok(())
    }

    #[test]
    fn turning_sums() -> Result<(), Error> {
        let options = GeodesicOptions::default();
        let edges = |points: &[GeodeticPoint]| -> Result<Vec<(f64, f64)>, Error> {
            let n = points.len();
            (0..n)
                .map(|i| {
                    let g = compute_inverse(&points[i], &points[(i + 1) % n], &options)?;
                    Ok((g.initial_bearing, g.final_bearing))
                })
                .collect()
        };

        // Clockwise, seen from above
        let box1 = wgs84(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)])?;
        assert_float_eq!(turning(&edges(&box1)?), 360., abs <= 1e-9);

        // Counterclockwise
        let box1 = wgs84(&[(0., 0.), (0., 1.), (1., 1.), (1., 0.)])?;
        assert_float_eq!(turning(&edges(&box1)?), -360., abs <= 1e-9);

        let arctic = wgs84(&[(80., 0.), (80., 90.), (80., 180.), (80., 270.)])?;
        assert_float_eq!(turning(&edges(&arctic)?), 0., abs <= 1e-9);

        assert_eq!(turning(&[]), 0.);
        Ok(())
    }

    #[test]
    fn duplicates() -> Result<(), Error> {
        // Repeated vertices, and an explicitly closed ring
        let box1 = wgs84(&[(0., 0.), (0., 1.), (0., 1.), (1., 1.), (1., 0.), (0., 0.)])?;
        assert!(!encloses_pole(&box1, false)?);

        let arctic = wgs84(&[
            (80., 0.),
            (80., 90.),
            (80., 180.),
            (80., 180.),
            (80., 270.),
            (80., 360.),
        ])?;
        assert!(encloses_pole(&arctic, false)?);

        // Too few distinct points
        let segment = wgs84(&[(0., 0.), (0., 1.), (0., 1.), (0., 0.)])?;
        assert!(matches!(
            encloses_pole(&segment, false),
            Err(Error::InsufficientPoints { found: 2 })
        ));

        // Back and forth along the same edge: many edges, but only two points
        let segment = wgs84(&[(0., 0.), (0., 1.), (0., 0.), (0., 1.)])?;
        assert!(matches!(
            encloses_pole(&segment, false),
            Err(Error::InsufficientPoints { found: 2 })
        ));
        let shuttle = wgs84(&[
            (80., 0.),
            (80., 90.),
            (80., 360.),
            (80., 90.),
            (80., 0.),
            (80., -270.),
        ])?;
        assert!(matches!(
            encloses_pole(&shuttle, false),
            Err(Error::InsufficientPoints { found: 2 })
        ));

        // At a pole, longitude does not matter
        let polar = wgs84(&[(90., 0.), (90., 90.), (80., 0.), (90., 180.)])?;
        assert!(matches!(
            encloses_pole(&polar, false),
            Err(Error::InsufficientPoints { found: 2 })
        ));

        let segment = wgs84(&[(0., 0.), (0., 1.)])?;
        assert!(matches!(
            encloses_pole(&segment, false),
            Err(Error::InsufficientPoints { found: 2 })
        ));
        let point = wgs84(&[(10., 20.), (10., 380.)])?;
        assert!(matches!(
            encloses_pole(&point, false),
            Err(Error::InsufficientPoints { found: 1 })
        ));
        let nothing: [GeodeticPoint; 0] = [];
        assert!(matches!(
            encloses_pole(&nothing, false),
            Err(Error::InsufficientPoints { found: 0 })
        ));
        Ok(())
    }

    #[test]
    fn contract_violations() -> Result<(), Error> {
        struct Unbound;
        impl GeodeticPosition for Unbound {
            fn latitude(&self) -> f64 {
                80.
            }
            fn longitude(&self) -> f64 {
                180.
            }
            fn datum(&self) -> Option<&Datum> {
                None
            }
        }

        let a = GeodeticPoint::wgs84(80., 0.)?;
        let b = GeodeticPoint::wgs84(80., 90.)?;
        let c = GeodeticPoint::wgs84(80., 270.)?;
        let points: [&dyn GeodeticPosition; 4] = [&a, &b, &Unbound, &c];
        assert!(matches!(encloses_pole(&points, false), Err(Error::Contract(_))));

        let ed50 = GeodeticPoint::new(80., 180., datum("ED50")?)?;
        let points: [&dyn GeodeticPosition; 4] = [&a, &b, &ed50, &c];
        assert!(matches!(
            encloses_pole(&points, false),
            Err(Error::MismatchedDatum(..))
        ));

        // With a proper point in its place, all is well
        let d = GeodeticPoint::wgs84(80., 180.)?;
        let points: [&dyn GeodeticPosition; 4] = [&a, &b, &d, &c];
        assert!(encloses_pole(&points, false)?);
        Ok(())
    }
}
