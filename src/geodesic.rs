use crate::angular;
use crate::point::checked;
use crate::Datum;
use crate::Error;
use crate::GeodeticPoint;
use crate::GeodeticPosition;

/// Tuning of the iterative solvers.
///
/// `tolerance` is the convergence criterion, in radians on the auxiliary
/// sphere: 1e-12 corresponds to about 6 µm on the earth. `max_iterations`
/// bounds the work done before giving up with [`Error::Convergence`].
/// With `wrap` set, longitude differences are unrolled into (-180, 180],
/// so the inverse problem is always solved the short way round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicOptions {
    pub tolerance: f64,
    pub max_iterations: usize,
    pub wrap: bool,
}

impl Default for GeodesicOptions {
    fn default() -> GeodesicOptions {
        GeodesicOptions {
            tolerance: 1e-12,
            max_iterations: 100,
            wrap: false,
        }
    }
}

impl GeodesicOptions {
    #[must_use]
    pub fn with_tolerance(self, tolerance: f64) -> GeodesicOptions {
        GeodesicOptions { tolerance, ..self }
    }

    #[must_use]
    pub fn with_max_iterations(self, max_iterations: usize) -> GeodesicOptions {
        GeodesicOptions {
            max_iterations,
            ..self
        }
    }

    #[must_use]
    pub fn with_wrap(self, wrap: bool) -> GeodesicOptions {
        GeodesicOptions { wrap, ..self }
    }

    /// Both solvers validate their options before use
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.) {
            return Err(Error::BadParam(
                "tolerance".to_string(),
                self.tolerance.to_string(),
            ));
        }
        if self.max_iterations < 1 {
            return Err(Error::BadParam(
                "max_iterations".to_string(),
                self.max_iterations.to_string(),
            ));
        }
        Ok(())
    }
}

/// Length of the geodesic, in meters, and its compass bearings, in
/// degrees [0, 360), at departure and at arrival.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseResult {
    pub distance: f64,
    pub initial_bearing: f64,
    pub final_bearing: f64,
    /// Number of solver iterations spent
    pub iterations: usize,
}

/// The destination point, its longitude wrapped to (-180, 180], and the
/// compass bearing of arrival, in degrees [0, 360).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectResult<'a> {
    pub destination: GeodeticPoint<'a>,
    pub final_bearing: f64,
    /// Number of solver iterations spent
    pub iterations: usize,
}

/// The inverse geodesic problem: Distance, initial bearing and final
/// bearing from `p1` to `p2`.
///
/// # Errors
///
/// - [`Error::Contract`] if a point is not bound to a datum, or has
///   invalid coordinates
/// - [`Error::MismatchedDatum`] if the points refer to different ellipsoids
/// - [`Error::CoincidentPoints`] if the points coincide, making the
///   bearings undefined
/// - [`Error::Convergence`] if the iteration gives up, typically
///   for near-antipodal points
///
/// # Examples
///
/// Cambridge to Paris, as in [Veness (2019)](crate::Bibliography::Ven19):
///
/// ```rust
/// use vincenty::prelude::*;
///
/// let cambridge = GeodeticPoint::wgs84(52.205, 0.119)?;
/// let paris = GeodeticPoint::wgs84(48.857, 2.351)?;
/// let geodesic = compute_inverse(&cambridge, &paris, &GeodesicOptions::default())?;
/// assert!((geodesic.distance - 404_607.806).abs() < 1e-3);
/// assert!((geodesic.initial_bearing - 156.110_640).abs() < 1e-6);
/// # Ok::<(), vincenty::Error>(())
/// ```
pub fn compute_inverse<P, Q>(
    p1: &P,
    p2: &Q,
    options: &GeodesicOptions,
) -> Result<InverseResult, Error>
where
    P: GeodeticPosition + ?Sized,
    Q: GeodeticPosition + ?Sized,
{
    options.validate()?;
    let (lat1, lon1, datum1) = checked(p1)?;
    let (lat2, lon2, datum2) = checked(p2)?;
    compatible(datum1, datum2)?;

    let (dlon, _) = angular::unroll180(lon1, lon2, options.wrap);
    let ellps = datum1.ellipsoid();
    let solution = ellps.geodesic_inv(
        lat1.to_radians(),
        lat2.to_radians(),
        dlon.to_radians(),
        options,
    )?;

    Ok(InverseResult {
        distance: solution.distance,
        initial_bearing: angular::bearing(solution.azimuth1),
        final_bearing: angular::bearing(solution.azimuth2),
        iterations: solution.iterations,
    })
}

/// The direct geodesic problem: The destination reached by travelling
/// `distance` meters from `p0`, setting out at the compass bearing
/// `initial_bearing` (degrees), and the bearing of arrival.
///
/// The destination is bound to the datum of `p0`.
///
/// # Errors
///
/// - [`Error::Contract`] if `p0` is not bound to a datum, or has
///   invalid coordinates
/// - [`Error::BadParam`] for a negative or non-finite distance, or a
///   non-finite bearing
/// - [`Error::Convergence`] if the iteration gives up
///
/// # Examples
///
/// ```rust
/// use vincenty::prelude::*;
///
/// let flinders_peak = GeodeticPoint::wgs84(-37.95103342, 144.42486789)?;
/// let options = GeodesicOptions::default();
/// let result = compute_direct(&flinders_peak, 306.86816, 54_972.271, &options)?;
/// let buninyong = result.destination;
/// assert!((buninyong.latitude() + 37.652_821).abs() < 1e-6);
/// assert!((buninyong.longitude() - 143.926_496).abs() < 1e-6);
/// # Ok::<(), vincenty::Error>(())
/// ```
pub fn compute_direct<'a, P>(
    p0: &'a P,
    initial_bearing: f64,
    distance: f64,
    options: &GeodesicOptions,
) -> Result<DirectResult<'a>, Error>
where
    P: GeodeticPosition + ?Sized,
{
    options.validate()?;
    let (lat, lon, datum) = checked(p0)?;
    if !(distance.is_finite() && distance >= 0.) {
        return Err(Error::BadParam("distance".to_string(), distance.to_string()));
    }
    if !initial_bearing.is_finite() {
        return Err(Error::BadParam(
            "initial_bearing".to_string(),
            initial_bearing.to_string(),
        ));
    }

    let ellps = datum.ellipsoid();
    let solution = ellps.geodesic_fwd(
        lat.to_radians(),
        initial_bearing.to_radians(),
        distance,
        options,
    )?;

    let latitude = solution.latitude.to_degrees().clamp(-90., 90.);
    let longitude = angular::wrap180(lon + solution.longitude_delta.to_degrees());
    Ok(DirectResult {
        destination: GeodeticPoint::raw(latitude, longitude, datum),
        final_bearing: angular::bearing(solution.azimuth2),
        iterations: solution.iterations,
    })
}

// Geodesics are only defined between points on the same ellipsoid
pub(crate) fn compatible(datum1: &Datum, datum2: &Datum) -> Result<(), Error> {
    if datum1.ellipsoid().is_compatible_with(datum2.ellipsoid()) {
        return Ok(());
    }
    Err(Error::MismatchedDatum(
        datum1.name().to_string(),
        datum2.name().to_string(),
    ))
}

// ----- Tests ---------------------------------------------------------------------
