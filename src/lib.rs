//! *Geodesics on the ellipsoid of revolution, computed using the
//! iterative formulae of Thaddeus Vincenty*.
//!
//! Distances and bearings
//! ======================
//!
//! The crate solves the two classical geodetic problems:
//!
//! - The **inverse** problem: given two points, find the length of the
//!   geodesic between them, and its azimuths at both ends
//!   ([`compute_inverse`]).
//! - The **direct** problem: given a point, an azimuth and a distance,
//!   find the destination point, and the azimuth at arrival
//!   ([`compute_direct`]).
//!
//! Both are solved by fixed point iteration on an auxiliary sphere,
//! following [Vincenty (1975)](crate::Bibliography::Vin75). The same
//! machinery is used by [`encloses_pole`] to decide whether a closed
//! sequence of points encircles one of the poles.
//!
//! Points are [`GeodeticPoint`]s: latitude and longitude in degrees, bound
//! by reference to a [`Datum`], which in turn carries the [`Ellipsoid`].
//!
//! ```rust
//! use vincenty::prelude::*;
//!
//! let wgs84 = datum("WGS84")?;
//! let newport = GeodeticPoint::new(41.49008, -71.312796, wgs84)?;
//! let cleveland = GeodeticPoint::new(41.499498, -81.695391, wgs84)?;
//!
//! let geodesic = compute_inverse(&newport, &cleveland, &GeodesicOptions::default())?;
//! assert!((geodesic.distance - 866_455.433).abs() < 0.01);
//! # Ok::<(), vincenty::Error>(())
//! ```

mod bibliography;
mod datum;
mod ellipsoid;
mod geodesic;
mod math;
mod point;
mod polygon;

pub use bibliography::Bibliography;
pub use datum::datum;
pub use datum::Datum;
pub use ellipsoid::make_ellipsoid;
pub use ellipsoid::Ellipsoid;
pub use geodesic::compute_direct;
pub use geodesic::compute_inverse;
pub use geodesic::DirectResult;
pub use geodesic::GeodesicOptions;
pub use geodesic::InverseResult;
pub use math::angular;
pub use point::GeodeticPoint;
pub use point::GeodeticPosition;
pub use polygon::encloses_pole;
pub use polygon::encloses_pole_with;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::compute_direct;
    pub use crate::compute_inverse;
    pub use crate::datum;
    pub use crate::encloses_pole;
    pub use crate::encloses_pole_with;
    pub use crate::make_ellipsoid;
    pub use crate::Datum;
    pub use crate::DirectResult;
    pub use crate::Direction;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::GeodesicOptions;
    pub use crate::GeodeticPoint;
    pub use crate::GeodeticPosition;
    pub use crate::InverseResult;
}

/// `Fwd`: The *direct* (forward) geodesic problem.
/// `Inv`: The *inverse* geodesic problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Fwd,
    Inv,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Fwd => write!(f, "direct"),
            Direction::Inv => write!(f, "inverse"),
        }
    }
}

/// The *Vincenty Geodesy* error messaging enumeration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid ellipsoid: {0}")]
    InvalidEllipsoid(String),

    #[error("ellipsoid mismatch: {0} vs {1}")]
    MismatchedDatum(String, String),

    #[error("coincident points: {0}")]
    CoincidentPoints(String),

    /// `last` is the final estimate of λ (inverse) or σ (direct), in radians.
    /// `near_antipodal` is set when the inverse problem was attempted for
    /// points within a degree of being antipodal.
    #[error(
        "no convergence for the {direction} problem after {iterations} iterations (last value {last})"
    )]
    Convergence {
        direction: Direction,
        last: f64,
        iterations: usize,
        near_antipodal: bool,
    },

    #[error("insufficient points: {found} given, at least 3 distinct required")]
    InsufficientPoints { found: usize },

    #[error("contract violation: {0}")]
    Contract(String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),

    #[error("{0} not found")]
    NotFound(String),
}
