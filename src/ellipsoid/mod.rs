mod constants;
mod geodesics;
mod latitudes;

pub(crate) use geodesics::COINCIDENCE;

use crate::math::angular;
use crate::Error;
use float_eq::float_eq;

/// An ellipsoid of revolution, given by its semimajor axis, *a*, and its
/// semiminor axis, *b*. The flattening, *f*, is derived from, and kept
/// consistent with, the axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    b: f64,
    f: f64,
}

/// WGS84 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        let a = 6_378_137.0;
        let f = 1. / 298.257_223_563;
        Ellipsoid { a, b: a * (1. - f), f }
    }
}

/// Build an ellipsoid from its semimajor and semiminor axes.
/// Equivalent to [`Ellipsoid::new`].
pub fn make_ellipsoid(semimajor_axis: f64, semiminor_axis: f64) -> Result<Ellipsoid, Error> {
    Ellipsoid::new(semimajor_axis, semiminor_axis)
}

/// Constructors for `Ellipsoid`
impl Ellipsoid {
    /// User defined ellipsoid, from its semimajor and semiminor axes,
    /// which must satisfy `0 < b <= a`.
    pub fn new(semimajor_axis: f64, semiminor_axis: f64) -> Result<Ellipsoid, Error> {
        let (a, b) = (semimajor_axis, semiminor_axis);
        if !(a.is_finite() && b.is_finite()) {
            return Err(Error::InvalidEllipsoid(format!("non-finite axes ({a}, {b})")));
        }
        if a <= 0. || b <= 0. {
            return Err(Error::InvalidEllipsoid(format!("non-positive axes ({a}, {b})")));
        }
        if b > a {
            return Err(Error::InvalidEllipsoid(format!(
                "semiminor axis {b} exceeds semimajor axis {a}"
            )));
        }
        Ok(Ellipsoid { a, b, f: (a - b) / a })
    }

    /// User defined ellipsoid, from its semimajor axis and flattening,
    /// `0 <= f < 1`.
    pub fn from_flattening(semimajor_axis: f64, flattening: f64) -> Result<Ellipsoid, Error> {
        let (a, f) = (semimajor_axis, flattening);
        if !(a.is_finite() && f.is_finite()) || a <= 0. {
            return Err(Error::InvalidEllipsoid(format!("bad semimajor axis {a}")));
        }
        if !(0. ..1.).contains(&f) {
            return Err(Error::InvalidEllipsoid(format!("flattening {f} outside [0, 1)")));
        }
        Ok(Ellipsoid { a, b: a * (1. - f), f })
    }

    /// Predefined ellipsoid, or one given as a string formatted
    /// (a, rf) tuple, e.g. "6378137, 298.25"
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        // Is it one of the few builtins?
        if let Some(e) = constants::ELLIPSOID_LIST
            .iter()
            .find(|ellps| ellps.0 == name)
        {
            // EPSG convention: zero reciproque flattening indicates zero flattening
            let f = if e.2 != 0.0 { 1.0 / e.2 } else { e.2 };
            return Ellipsoid::from_flattening(e.1, f);
        }

        // Remove optional parenthesis
        let name = name
            .strip_prefix('(')
            .and_then(|n| n.strip_suffix(')'))
            .unwrap_or(name);

        // The "semimajor, reciproque-flattening" form, e.g. "6378137, 298.3"
        let a_and_rf = name.split(',').collect::<Vec<_>>();
        if a_and_rf.len() == 2_usize {
            if let (Ok(a), Ok(rf)) = (
                a_and_rf[0].trim().parse::<f64>(),
                a_and_rf[1].trim().parse::<f64>(),
            ) {
                let f = if rf != 0.0 { 1.0 / rf } else { rf };
                return Ellipsoid::from_flattening(a, f);
            }
        }

        Err(Error::NotFound(format!("ellipsoid {name}")))
    }
}

impl Ellipsoid {
    // ----- Size --------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.b
    }

    // ----- Shape -------------------------------------------------------------------

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The aspect ratio, *b / a  =  1 - f  =  sqrt(1 - e²)*
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        1.0 - self.f
    }

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    /// Two ellipsoids are compatible if they agree in size and shape to
    /// well below the millimeter level, irrespective of whether they
    /// were defined from the semiminor axis or from the flattening.
    #[must_use]
    pub fn is_compatible_with(&self, other: &Ellipsoid) -> bool {
        float_eq!(self.a, other.a, rmax <= 1e-12) && float_eq!(self.b, other.b, rmax <= 1e-12)
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *N*.
    /// See [Rapp (1991)](crate::Bibliography::Rap91), §3.5
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        if self.f == 0.0 {
            return self.a;
        }
        self.a / (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).sqrt()
    }

    /// The meridian radius of curvature, *M*
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        if self.f == 0.0 {
            return self.a;
        }
        let num = self.a * (1.0 - self.eccentricity_squared());
        let denom = (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).powf(1.5);
        num / denom
    }

    /// Local, flat earth approximation of the distance and initial bearing
    /// between two points, given in degrees, using the radii of curvature
    /// at the first point. The longitude difference is taken the short way
    /// round.
    ///
    /// Suitable only for short distances, up to a few hundred km, and
    /// only between points not too close to the poles.
    ///
    /// Returns the distance in meters, and the bearing in compass degrees.
    #[must_use]
    pub fn distance2(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
        let phi = lat1.to_radians();
        let (dlon, _) = angular::unroll180(lon1, lon2, true);
        let north = self.meridian_radius_of_curvature(phi) * (lat2 - lat1).to_radians();
        let east = self.prime_vertical_radius_of_curvature(phi) * phi.cos() * dlon.to_radians();
        (north.hypot(east), angular::bearing(east.atan2(north)))
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_ellipsoid() -> Result<(), Error> {
        // Constructors
        let ellps = Ellipsoid::named("intl")?;
        assert_eq!(ellps.flattening(), 1. / 297.);

        let ellps = Ellipsoid::named("6378137, 298.25")?;
        assert_eq!(ellps.semimajor_axis(), 6378137.0);
        assert_eq!(ellps.flattening(), 1. / 298.25);

        let ellps = Ellipsoid::named("(6378137, 298.25)")?;
        assert_eq!(ellps.semimajor_axis(), 6378137.0);
        assert_eq!(ellps.flattening(), 1. / 298.25);

        let ellps = Ellipsoid::named("GRS80")?;
        assert_eq!(ellps.semimajor_axis(), 6378137.0);
        assert_eq!(ellps.flattening(), 1. / 298.257_222_100_882_7);

        assert!(matches!(Ellipsoid::named("pear"), Err(Error::NotFound(_))));
        assert_eq!(Ellipsoid::named("WGS84")?, Ellipsoid::default());
        Ok(())
    }

    #[test]
    fn axes_and_flattening() -> Result<(), Error> {
        let ellps = make_ellipsoid(6_378_137.0, 6_356_752.314_245)?;
        assert_float_eq!(ellps.flattening(), 1. / 298.257_223_563, rmax <= 1e-9);
        assert_float_eq!(ellps.eccentricity_squared(), 0.006_694_379_990_14, abs <= 1e-12);

        let grs80 = Ellipsoid::named("GRS80")?;
        assert_float_eq!(grs80.eccentricity(), 0.081819191, abs <= 1e-9);
        assert_float_eq!(grs80.semiminor_axis(), 6_356_752.314_140_347, abs <= 1e-6);
        assert_eq!(grs80.aspect_ratio(), 1. - grs80.flattening());

        // Defined from the semiminor axis or from the flattening: Same thing
        let b = Ellipsoid::default().semiminor_axis();
        let wgs84 = make_ellipsoid(6_378_137.0, b)?;
        assert!(wgs84.is_compatible_with(&Ellipsoid::default()));
        assert!(!wgs84.is_compatible_with(&grs80));

        // A sphere is a degenerate, but valid, ellipsoid
        let sphere = make_ellipsoid(6_371_000., 6_371_000.)?;
        assert_eq!(sphere.flattening(), 0.);
        Ok(())
    }

    #[test]
    fn invalid_ellipsoids() {
        let bad = [
            (0., 0.),
            (-1., -2.),
            (6e6, 7e6),
            (6e6, -1.),
            (f64::NAN, 1.),
            (f64::INFINITY, 1.),
        ];
        for (a, b) in bad {
            assert!(
                matches!(make_ellipsoid(a, b), Err(Error::InvalidEllipsoid(_))),
                "({a}, {b}) should be rejected"
            );
        }
        assert!(Ellipsoid::from_flattening(6e6, 1.).is_err());
        assert!(Ellipsoid::from_flattening(6e6, -0.1).is_err());
        assert!(Ellipsoid::from_flattening(-6e6, 0.1).is_err());
    }

    #[test]
    fn curvatures() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;
        // The curvatures at the North Pole
        let pole = 90_f64.to_radians();
        assert_float_eq!(ellps.meridian_radius_of_curvature(pole), 6_399_593.6259, abs <= 1e-4);
        assert_float_eq!(
            ellps.prime_vertical_radius_of_curvature(pole),
            ellps.meridian_radius_of_curvature(pole),
            abs <= 1e-5
        );

        // The curvatures at the Equator
        assert_float_eq!(ellps.meridian_radius_of_curvature(0.0), 6_335_439.3271, abs <= 1e-4);
        assert_float_eq!(
            ellps.prime_vertical_radius_of_curvature(0.0),
            ellps.semimajor_axis(),
            abs <= 1e-4
        );
        Ok(())
    }

    #[test]
    fn flat_earth_distance() {
        let ellps = Ellipsoid::default();

        // Land's End to John o' Groats
        let (d, b) = ellps.distance2(50.06632, -5.71475, 58.64402, -3.07009);
        assert_float_eq!(d, 972_708.161_74, abs <= 1e-3);
        assert_float_eq!(b, 11.225_02, abs <= 1e-5);

        // Cambridge to Paris
        let (d, b) = ellps.distance2(52.205, 0.119, 48.857, 2.351);
        assert_float_eq!(d, 402_574.597_287, abs <= 1e-3);
        assert_float_eq!(b, 157.726_344, abs <= 1e-6);
    }
}
