use crate::angular;
use crate::compute_direct;
use crate::compute_inverse;
use crate::datum;
use crate::geodesic::compatible;
use crate::Datum;
use crate::Ellipsoid;
use crate::Error;
use crate::GeodesicOptions;

/// The capability required from anything handed to the geodesic solvers:
/// a latitude and a longitude, in degrees, bound to a datum.
///
/// Implementors not (yet) bound to a datum return `None` from
/// [`datum`](GeodeticPosition::datum), and are rejected by the solvers
/// with [`Error::Contract`].
pub trait GeodeticPosition {
    /// Latitude in degrees, [-90, 90]
    fn latitude(&self) -> f64;

    /// Longitude in degrees
    fn longitude(&self) -> f64;

    fn datum(&self) -> Option<&Datum>;

    fn ellipsoid(&self) -> Option<&Ellipsoid> {
        self.datum().map(Datum::ellipsoid)
    }
}

impl<T: GeodeticPosition + ?Sized> GeodeticPosition for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }

    fn datum(&self) -> Option<&Datum> {
        (**self).datum()
    }
}

/// Check that `position` lives up to the [`GeodeticPosition`] contract,
/// and hand back its coordinates and datum.
pub(crate) fn checked<P>(position: &P) -> Result<(f64, f64, &Datum), Error>
where
    P: GeodeticPosition + ?Sized,
{
    let (lat, lon) = (position.latitude(), position.longitude());
    let Some(datum) = position.datum() else {
        return Err(Error::Contract(format!(
            "position ({lat}, {lon}) is not bound to a datum"
        )));
    };
    if !(lat.is_finite() && (-90. ..=90.).contains(&lat)) {
        return Err(Error::Contract(format!("latitude {lat} outside [-90, 90]")));
    }
    if !lon.is_finite() {
        return Err(Error::Contract(format!("non-finite longitude {lon}")));
    }
    Ok((lat, lon, datum))
}

/// Latitude and longitude, in degrees, bound by reference to a [`Datum`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticPoint<'a> {
    latitude: f64,
    longitude: f64,
    datum: &'a Datum,
}

impl GeodeticPosition for GeodeticPoint<'_> {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn datum(&self) -> Option<&Datum> {
        Some(self.datum)
    }
}

impl<'a> GeodeticPoint<'a> {
    /// The latitude must be inside [-90, 90]. Any finite longitude
    /// is accepted as is.
    pub fn new(latitude: f64, longitude: f64, datum: &'a Datum) -> Result<Self, Error> {
        if !(latitude.is_finite() && (-90. ..=90.).contains(&latitude)) {
            return Err(Error::BadParam(
                "latitude".to_string(),
                format!("{latitude} outside [-90, 90]"),
            ));
        }
        if !longitude.is_finite() {
            return Err(Error::BadParam("longitude".to_string(), longitude.to_string()));
        }
        Ok(GeodeticPoint {
            latitude,
            longitude,
            datum,
        })
    }

    /// Already validated coordinates, as produced by the solvers
    pub(crate) fn raw(latitude: f64, longitude: f64, datum: &'a Datum) -> Self {
        GeodeticPoint {
            latitude,
            longitude,
            datum,
        }
    }

    /// The datum this point refers to, with the lifetime of the binding
    #[must_use]
    pub fn datum_ref(&self) -> &'a Datum {
        self.datum
    }
}

impl GeodeticPoint<'static> {
    /// A point on the WGS84 datum
    pub fn wgs84(latitude: f64, longitude: f64) -> Result<Self, Error> {
        GeodeticPoint::new(latitude, longitude, datum("WGS84")?)
    }
}

// ----- Geodesics -------------------------------------------------------------

impl<'a> GeodeticPoint<'a> {
    /// Distance in meters to `other`. Unlike [`compute_inverse`],
    /// coincident points are not an error: their distance is zero.
    pub fn distance_to<P: GeodeticPosition + ?Sized>(&self, other: &P) -> Result<f64, Error> {
        match compute_inverse(self, other, &GeodesicOptions::default()) {
            Ok(geodesic) => Ok(geodesic.distance),
            Err(Error::CoincidentPoints(_)) => Ok(0.),
            Err(e) => Err(e),
        }
    }

    /// Distance, initial and final bearing to `other`. With `wrap`
    /// set, the geodesic is taken the short way round in longitude.
    pub fn distance_to3<P>(&self, other: &P, wrap: bool) -> Result<(f64, f64, f64), Error>
    where
        P: GeodeticPosition + ?Sized,
    {
        let options = GeodesicOptions::default().with_wrap(wrap);
        let geodesic = compute_inverse(self, other, &options)?;
        Ok((
            geodesic.distance,
            geodesic.initial_bearing,
            geodesic.final_bearing,
        ))
    }

    /// Initial and final bearing, in compass degrees, to `other`
    pub fn bearings_to<P>(&self, other: &P, wrap: bool) -> Result<(f64, f64), Error>
    where
        P: GeodeticPosition + ?Sized,
    {
        let (_, initial, last) = self.distance_to3(other, wrap)?;
        Ok((initial, last))
    }

    pub fn initial_bearing_to<P>(&self, other: &P, wrap: bool) -> Result<f64, Error>
    where
        P: GeodeticPosition + ?Sized,
    {
        Ok(self.bearings_to(other, wrap)?.0)
    }

    pub fn final_bearing_to<P>(&self, other: &P, wrap: bool) -> Result<f64, Error>
    where
        P: GeodeticPosition + ?Sized,
    {
        Ok(self.bearings_to(other, wrap)?.1)
    }

    /// The point reached by travelling `distance` meters from this point,
    /// setting out at the compass `bearing`.
    pub fn destination(&self, bearing: f64, distance: f64) -> Result<GeodeticPoint<'a>, Error> {
        Ok(self.destination2(bearing, distance)?.0)
    }

    /// The destination, and the bearing of arrival
    pub fn destination2(
        &self,
        bearing: f64,
        distance: f64,
    ) -> Result<(GeodeticPoint<'a>, f64), Error> {
        let result = compute_direct(self, bearing, distance, &GeodesicOptions::default())?;
        let destination = result.destination;
        Ok((
            GeodeticPoint::raw(destination.latitude, destination.longitude, self.datum),
            result.final_bearing,
        ))
    }

    /// The bearing of arrival after travelling `distance` meters,
    /// setting out at the compass `bearing`
    pub fn final_bearing_on(&self, bearing: f64, distance: f64) -> Result<f64, Error> {
        Ok(self.destination2(bearing, distance)?.1)
    }

    /// Flat earth approximation of the distance and initial bearing
    /// to `other`. See [`Ellipsoid::distance2`].
    pub fn distance_to2<P>(&self, other: &P) -> Result<(f64, f64), Error>
    where
        P: GeodeticPosition + ?Sized,
    {
        let (lat, lon, datum) = checked(other)?;
        compatible(self.datum, datum)?;
        let ellps = self.datum.ellipsoid();
        Ok(ellps.distance2(self.latitude, self.longitude, lat, lon))
    }
}

// ----- Antipodes and coincidence -----------------------------------------------

impl<'a> GeodeticPoint<'a> {
    /// The point diametrically opposite this one, on the same datum
    #[must_use]
    pub fn antipode(&self) -> GeodeticPoint<'a> {
        GeodeticPoint::raw(
            -self.latitude,
            angular::wrap180(self.longitude + 180.),
            self.datum,
        )
    }

    /// Is `other` within `eps` degrees of the antipode of this point?
    #[must_use]
    pub fn is_antipode_of<P: GeodeticPosition + ?Sized>(&self, other: &P, eps: f64) -> bool {
        self.antipode().is_coincident_with(other, eps)
    }

    /// Are latitude and longitude both within `eps` degrees of `other`'s?
    /// Longitudes are compared modulo 360, and at the poles they are
    /// ignored altogether.
    #[must_use]
    pub fn is_coincident_with<P: GeodeticPosition + ?Sized>(&self, other: &P, eps: f64) -> bool {
        let lat = other.latitude();
        if (self.latitude - lat).abs() >= eps {
            return false;
        }
        if 90. - self.latitude.abs() < eps {
            return true;
        }
        angular::wrap180(other.longitude() - self.longitude).abs() < eps
    }
}

// ----- Tests ---------------------------------------------------------------------
