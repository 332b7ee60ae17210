use super::latitudes::ReducedLatitude;
use super::*;
use crate::math::taylor::horner;
use crate::Direction;
use crate::GeodesicOptions;
use log::trace;
use log::warn;
use std::f64::consts::PI;

/// Points closer than this on the auxiliary sphere (radians, ~6 µm on
/// the earth) are coincident.
pub(crate) const COINCIDENCE: f64 = 1e-12;

/// Below this value of cos²α, the geodesic runs along the equator.
const EQUATORIAL: f64 = 1e-15;

/// One degree, in radians: the slack allowed when flagging points
/// as near-antipodal in convergence diagnostics.
const NEAR_ANTIPODAL: f64 = 0.017_453_292_519_943_295;

/// Solution of the inverse geodesic problem. Angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct InverseSolution {
    pub distance: f64,
    pub azimuth1: f64,
    pub azimuth2: f64,
    pub iterations: usize,
}

/// Solution of the direct geodesic problem. Angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DirectSolution {
    pub latitude: f64,
    pub longitude_delta: f64,
    pub azimuth2: f64,
    pub iterations: usize,
}

/// The geodesic, as seen on the auxiliary sphere
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Auxiliary {
    /// σ, the angular length of the geodesic, with its sine and cosine
    pub ss: f64,
    pub sssin: f64,
    pub sscos: f64,
    /// α, the azimuth of the geodesic at the equator: sin α and cos²α
    pub aasin: f64,
    pub aacos2: f64,
    /// cos 2σₘ, where σₘ is the angular distance from the equator to the midpoint
    pub ssmx2cos: f64,
}

/// The two forms of the λ update in the inverse iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Path {
    /// cos²α ≈ 0: The geodesic follows the equator, and cos 2σₘ is undefined
    Equatorial,
    General,
}

/// One round of the inverse iteration: the auxiliary sphere quantities
/// for the current λ, and the next estimate of λ
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct InverseStep {
    pub path: Path,
    pub aux: Auxiliary,
    pub lambda: f64,
}

// ----- Geodesics -------------------------------------------------------------
impl Ellipsoid {
    /// For general geodesics, we use the algorithm by Vincenty
    /// ([1975](crate::Bibliography::Vin75)).
    /// The Vincenty algorithm is relatively simple to implement, but for near-antipodal
    /// cases, it suffers from lack of convergence and loss of accuracy. Lack
    /// of convergence is reported as [`Error::Convergence`](crate::Error::Convergence).
    ///
    /// Karney ([2012](crate::Bibliography::Kar12), [2013](crate::Bibliography::Kar13))
    /// presented an algorithm which is exact to machine precision, and converges everywhere.
    ///
    /// `latitude` and `azimuth` in radians, `distance` in meters. The
    /// longitude of the destination is returned relative to the origin.
    #[allow(non_snake_case)] // make it possible to mimic math notation from Vincenty's paper
    pub(crate) fn geodesic_fwd(
        &self,
        latitude: f64,
        azimuth: f64,
        distance: f64,
        options: &GeodesicOptions,
    ) -> Result<DirectSolution, Error> {
        // The latitude of P1 projected onto the auxiliary sphere
        let u1 = self.reduced_latitude_trig(latitude);

        // σ_1, here ss1, is the angular distance on the aux sphere from P1 to equator
        let (azisin, azicos) = azimuth.sin_cos();
        let ss1 = u1.tan.atan2(azicos);

        // α, the forward azimuth of the geodesic at equator
        let aasin = u1.cos * azisin;
        let mut aacos2 = 1. - aasin * aasin;
        let (A, B) = if aacos2 < EQUATORIAL {
            aacos2 = 0.;
            (1., 0.)
        } else {
            self.vincenty_a_b(aacos2)
        };

        // Initial estimate for σ, the angular distance on the auxiliary sphere
        let ss0 = distance / (self.b * A);
        let mut ss = ss0;
        let mut iterations = 0_usize;

        loop {
            if iterations >= options.max_iterations {
                warn!("Vincenty direct: no convergence after {iterations} iterations");
                return Err(Error::Convergence {
                    direction: Direction::Fwd,
                    last: ss,
                    iterations,
                    near_antipodal: false,
                });
            }
            iterations += 1;

            // 2σ_m, where σ_m is the latitude of the midpoint on the aux sphere
            let (sssin, sscos) = ss.sin_cos();
            let aux = Auxiliary {
                ss,
                sssin,
                sscos,
                aasin,
                aacos2,
                ssmx2cos: (2. * ss1 + ss).cos(),
            };
            let next = ss0 + sigma_correction(B, &aux);

            // Stop criterion: Last update of σ made little difference
            let delta = (next - ss).abs();
            ss = next;
            if delta < options.tolerance {
                break;
            }
        }

        let (sssin, sscos) = ss.sin_cos();
        let aux = Auxiliary {
            ss,
            sssin,
            sscos,
            aasin,
            aacos2,
            ssmx2cos: (2. * ss1 + ss).cos(),
        };

        // Latitude of destination
        let t = u1.sin * sssin - u1.cos * sscos * azicos;
        let latitude = (u1.sin * sscos + u1.cos * sssin * azicos)
            .atan2((1. - self.f) * aasin.hypot(t));

        // Longitude of destination, relative to the origin
        let ll = (sssin * azisin).atan2(u1.cos * sscos - u1.sin * sssin * azicos);
        let longitude_delta = ll - self.longitude_correction(&aux);

        // Return azimuth
        let azimuth2 = aasin.atan2(-t);

        trace!("Vincenty direct: converged after {iterations} iterations");
        Ok(DirectSolution {
            latitude,
            longitude_delta,
            azimuth2,
            iterations,
        })
    }

    /// See [`geodesic_fwd`](crate::Ellipsoid::geodesic_fwd)
    ///
    /// `lat1`, `lat2` and the longitude difference `dlon` in radians.
    /// For nearly antipodal points, λ may oscillate rather than converge
    /// ([Vincenty, 1976](crate::Bibliography::Vin76)). Then the error
    /// reports whether the points were within a degree of being antipodal.
    /// Coincident points are reported as
    /// [`Error::CoincidentPoints`](crate::Error::CoincidentPoints) before any
    /// iteration is attempted: their azimuths are undefined.
    #[allow(non_snake_case)] // allow math-like notation
    pub(crate) fn geodesic_inv(
        &self,
        lat1: f64,
        lat2: f64,
        dlon: f64,
        options: &GeodesicOptions,
    ) -> Result<InverseSolution, Error> {
        let u1 = self.reduced_latitude_trig(lat1);
        let u2 = self.reduced_latitude_trig(lat2);
        let L = dlon;

        // Initial estimate for λ, the longitude on the auxiliary sphere, is L
        let mut step = self.inverse_step(&u1, &u2, L, L);

        let dU = (u2.tan.atan() - u1.tan.atan()).abs();
        let same_spot = step.aux.sssin < COINCIDENCE && step.aux.sscos > 0.;
        if (dU < COINCIDENCE && L.abs() < COINCIDENCE) || same_spot {
            return Err(Error::CoincidentPoints(format!(
                "latitudes {} and {}, longitude difference {} [deg]",
                lat1.to_degrees(),
                lat2.to_degrees(),
                L.to_degrees()
            )));
        }

        let mut lambda = L;
        let mut iterations = 1_usize;
        loop {
            let delta = (step.lambda - lambda).abs();
            lambda = step.lambda;
            if delta < options.tolerance {
                break;
            }
            if iterations >= options.max_iterations {
                let near_antipodal = (lat1 + lat2).abs() < NEAR_ANTIPODAL
                    && PI - angular::normalize_symmetric(L).abs() < NEAR_ANTIPODAL;
                warn!(
                    "Vincenty inverse: no convergence after {iterations} iterations{}",
                    if near_antipodal { " (near-antipodal points)" } else { "" }
                );
                return Err(Error::Convergence {
                    direction: Direction::Inv,
                    last: lambda,
                    iterations,
                    near_antipodal,
                });
            }
            step = self.inverse_step(&u1, &u2, L, lambda);
            iterations += 1;
        }

        // The difference between the dist on the aux sphere and on the ellipsoid.
        let aux = step.aux;
        let (A, B) = self.vincenty_a_b(aux.aacos2);
        let dss = sigma_correction(B, &aux);

        // Distance, forward azimuth, return azimuth
        let distance = self.b * A * (aux.ss - dss);
        let (llsin, llcos) = lambda.sin_cos();
        let azimuth1 = (u2.cos * llsin).atan2(u1.cos * u2.sin - u1.sin * u2.cos * llcos);
        let azimuth2 = (u1.cos * llsin).atan2(-u1.sin * u2.cos + u1.cos * u2.sin * llcos);

        trace!(
            "Vincenty inverse: converged after {iterations} iterations ({:?})",
            step.path
        );
        Ok(InverseSolution {
            distance,
            azimuth1,
            azimuth2,
            iterations,
        })
    }

    /// One round of the inverse fixed point iteration: Evaluate the
    /// auxiliary sphere quantities for the current estimate, `lambda`,
    /// and from those, the next estimate.
    #[allow(non_snake_case)]
    pub(crate) fn inverse_step(
        &self,
        u1: &ReducedLatitude,
        u2: &ReducedLatitude,
        L: f64,
        lambda: f64,
    ) -> InverseStep {
        // σ, the angular separation between the points
        let (llsin, llcos) = lambda.sin_cos();
        let sssin = (u2.cos * llsin).hypot(u1.cos * u2.sin - u2.cos * u1.sin * llcos);
        let sscos = u1.sin * u2.sin + u1.cos * u2.cos * llcos;
        let ss = sssin.atan2(sscos);

        // α, the forward azimuth of the geodesic at equator
        let aasin = u1.cos * u2.cos * llsin / sssin;
        let aacos2 = 1. - aasin * aasin;

        if aacos2.abs() < EQUATORIAL {
            let aux = Auxiliary {
                ss,
                sssin,
                sscos,
                aasin,
                aacos2: 0.,
                ssmx2cos: 0.,
            };
            return InverseStep {
                path: Path::Equatorial,
                aux,
                lambda: self.lambda_equatorial(L, &aux),
            };
        }

        // cosine of 2 times σ_m, the angular separation from the midpoint to the equator
        let aux = Auxiliary {
            ss,
            sssin,
            sscos,
            aasin,
            aacos2,
            ssmx2cos: sscos - 2. * u1.sin * u2.sin / aacos2,
        };
        InverseStep {
            path: Path::General,
            aux,
            lambda: self.lambda_general(L, &aux),
        }
    }

    /// The λ update along the equator, where C and cos 2σₘ vanish
    #[allow(non_snake_case)]
    pub(crate) fn lambda_equatorial(&self, L: f64, aux: &Auxiliary) -> f64 {
        L + self.f * aux.aasin * aux.ss
    }

    /// The λ update for all other geodesics
    #[allow(non_snake_case)]
    pub(crate) fn lambda_general(&self, L: f64, aux: &Auxiliary) -> f64 {
        L + self.longitude_correction(aux)
    }

    /// The difference between the longitude on the auxiliary sphere
    /// and on the ellipsoid
    #[allow(non_snake_case)]
    fn longitude_correction(&self, aux: &Auxiliary) -> f64 {
        let f = self.f;
        let ssmx2cos = aux.ssmx2cos;
        let C = (4. + f * (4. - 3. * aux.aacos2)) * f * aux.aacos2 / 16.;
        let cos_term = C * aux.sscos * (-1. + 2. * ssmx2cos * ssmx2cos);
        (1. - C) * f * aux.aasin * (aux.ss + C * aux.sssin * (ssmx2cos + cos_term))
    }

    /// Vincenty's A and B, from u² = cos²α · e'²
    #[allow(non_snake_case)]
    fn vincenty_a_b(&self, aacos2: f64) -> (f64, f64) {
        let us = aacos2 * self.second_eccentricity_squared();
        let A = horner(us, &[16384., 4096., -768., 320., -175.]) / 16384.;
        let B = horner(us, &[0., 256., -128., 74., -47.]) / 1024.;
        (A, B)
    }
}

/// Δσ, the correction from the angular distance on the auxiliary sphere
/// to the (normalized) distance on the ellipsoid
#[allow(non_snake_case)]
fn sigma_correction(B: f64, aux: &Auxiliary) -> f64 {
    let (sssin, sscos, ssmx2cos) = (aux.sssin, aux.sscos, aux.ssmx2cos);
    let t1 = -1. + 2. * ssmx2cos * ssmx2cos;
    let t2 = -3. + 4. * sssin * sssin;
    let t3 = -3. + 4. * ssmx2cos * ssmx2cos;
    B * sssin * (ssmx2cos + B / 4. * (sscos * t1 - B / 6. * ssmx2cos * t2 * t3))
}

// ----- Tests ---------------------------------------------------------------------
