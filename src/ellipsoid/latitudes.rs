use super::*;

// ----- Latitudes -------------------------------------------------------------
impl Ellipsoid {
    /// Geographic latitude, 𝜙, to reduced (parametric) latitude, 𝛽,
    /// i.e. the latitude of the corresponding point on the auxiliary sphere.
    #[must_use]
    pub fn latitude_geographic_to_reduced(&self, latitude: f64) -> f64 {
        latitude.tan().atan2(1. / (1. - self.f))
    }

    /// Reduced latitude, 𝛽, to geographic latitude, 𝜙
    #[must_use]
    pub fn latitude_reduced_to_geographic(&self, latitude: f64) -> f64 {
        latitude.tan().atan2(1. - self.f)
    }

    /// The cosine, sine and tangent of the reduced latitude corresponding
    /// to the geographic `latitude`, computed without evaluating the
    /// reduced latitude itself.
    pub(crate) fn reduced_latitude_trig(&self, latitude: f64) -> ReducedLatitude {
        let tan = (1. - self.f) * latitude.tan();
        let cos = 1. / tan.hypot(1.);
        ReducedLatitude {
            cos,
            sin: tan * cos,
            tan,
        }
    }
}

/// Trigonometric functions of a reduced latitude
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ReducedLatitude {
    pub cos: f64,
    pub sin: f64,
    pub tan: f64,
}

// ----- Tests ---------------------------------------------------------------------
