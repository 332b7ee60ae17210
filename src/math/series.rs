// --- Polynomial evaluation ----

pub mod taylor {
    /// Evaluate Σ cᵢ · xⁱ using Horner's scheme. The coefficients are
    /// given in order of increasing power.
    pub fn horner(arg: f64, coefficients: &[f64]) -> f64 {
        let mut coefficients = coefficients.iter().rev();
        let Some(first) = coefficients.next() else {
            return 0.;
        };
        let mut value = *first;
        for c in coefficients {
            value = value.mul_add(arg, *c);
        }
        value
    }
}

// ----- Tests ---------------------------------------------------------------------
