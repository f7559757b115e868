// Christoffel symbol computation and the geodesic acceleration law

use crate::error::GeodesicError;
use crate::types::{FourAcceleration, FourVelocity, Metric, MetricFamily, SpacetimePoint, PHI, R, T, THETA};

// ============================================================================
// RANK-3 SYMBOL CONTAINER
// ============================================================================

// The Christoffel symbols Γ^i_jk at a spacetime point
//
// Physics: Connection coefficients derived from the metric, encoding how
// basis directions change from point to point. They act as the gravitational
// "acceleration" source in the geodesic equation. For this class of metrics
// the array is symmetric under exchange of the two lower indices (j, k).
//
// The container is a fixed-size 4×4×4 array with bounds known at compile
// time, so index arithmetic never goes through manual flattening. A value is
// step-scoped: rebuilt from scratch at every evaluation, never updated
// incrementally.
#[derive(Debug, Clone, Copy)]
pub struct Christoffel {
    symbols: [[[f64; 4]; 4]; 4],
}

impl Christoffel {
    // All-zero symbol array (the starting point of every evaluation)
    pub fn zeroed() -> Self {
        Self { symbols: [[[0.0; 4]; 4]; 4] }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> f64 {
        self.symbols[i][j][k]
    }

    // Set Γ^i_jk for one lower-index order
    #[inline]
    fn set(&mut self, i: usize, j: usize, k: usize, value: f64) {
        self.symbols[i][j][k] = value;
    }

    // Set Γ^i_jk = Γ^i_kj (the symmetric lower-index pair)
    #[inline]
    fn set_sym(&mut self, i: usize, j: usize, k: usize, value: f64) {
        self.symbols[i][j][k] = value;
        self.symbols[i][k][j] = value;
    }

    // Evaluate the symbols for the given metric family at a point
    //
    // Only Schwarzschild is implemented. Kerr reports the not-implemented
    // condition instead of returning an incorrect or zero array.
    pub fn evaluate(metric: &Metric, point: &SpacetimePoint) -> Result<Self, GeodesicError> {
        match metric.family {
            MetricFamily::Schwarzschild => Ok(Self::schwarzschild(metric.mass, point)),
            MetricFamily::Kerr => Err(GeodesicError::NotImplemented(
                "Christoffel symbols for the Kerr metric",
            )),
        }
    }

    // Schwarzschild connection coefficients (f = 1 - 2M/r):
    //
    //   Γ^t_rt = Γ^t_tr = M / (r² f)
    //   Γ^r_tt = M f / r²
    //   Γ^r_rr = -M / (r² f)
    //   Γ^r_θθ = -r f
    //   Γ^r_φφ = -r f sin²θ
    //   Γ^θ_rθ = Γ^θ_θr = Γ^φ_rφ = Γ^φ_φr = 1/r
    //
    // All other entries are zero. Note that Γ^θ_φφ and Γ^φ_θφ are NOT
    // populated here, matching the original formula set (see the test below).
    fn schwarzschild(m: f64, point: &SpacetimePoint) -> Self {
        let r = point.r();
        let theta = point.theta();
        let sin_theta = theta.sin();
        let r2 = r * r;
        let f = 1.0 - 2.0 * m / r;

        let mut gamma = Self::zeroed();

        gamma.set_sym(T, R, T, m / (r2 * f));
        gamma.set(R, T, T, m * f / r2);
        gamma.set(R, R, R, -m / (r2 * f));
        gamma.set(R, THETA, THETA, -r * f);
        gamma.set(R, PHI, PHI, -r * f * sin_theta * sin_theta);
        gamma.set_sym(THETA, R, THETA, 1.0 / r);
        gamma.set_sym(PHI, R, PHI, 1.0 / r);

        gamma
    }

    // ========================================================================
    // GEODESIC ACCELERATION LAW
    // ========================================================================

    // Contract the symbols against a four-velocity:
    //
    //   a^i = -Σ_jk Γ^i_jk v^j v^k
    //
    // summed over all 16 (j, k) pairs for each of the 4 components of i.
    // This is the gravitational "acceleration" in curved coordinates.
    pub fn acceleration(&self, velocity: &FourVelocity) -> FourAcceleration {
        let v = &velocity.components;
        let mut accel = FourAcceleration::zero();

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    accel.components[i] -= self.symbols[i][j][k] * v[j] * v[k];
                }
            }
        }

        accel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sample_symbols() -> Christoffel {
        let metric = Metric::schwarzschild(1.0);
        let point = SpacetimePoint::new(0.0, 10.0, PI / 3.0, 0.0);
        Christoffel::evaluate(&metric, &point).unwrap()
    }

    #[test]
    fn test_schwarzschild_values() {
        let gamma = sample_symbols();
        let r = 10.0;
        let f = 1.0 - 2.0 / r;
        let sin2 = (PI / 3.0f64).sin().powi(2);

        assert!((gamma.get(T, R, T) - 1.0 / (r * r * f)).abs() < 1e-12);
        assert!((gamma.get(R, T, T) - f / (r * r)).abs() < 1e-12);
        assert!((gamma.get(R, R, R) + 1.0 / (r * r * f)).abs() < 1e-12);
        assert!((gamma.get(R, THETA, THETA) + r * f).abs() < 1e-12);
        assert!((gamma.get(R, PHI, PHI) + r * f * sin2).abs() < 1e-12);
        assert!((gamma.get(THETA, R, THETA) - 0.1).abs() < 1e-12);
        assert!((gamma.get(PHI, PHI, R) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_lower_index_symmetry() {
        let gamma = sample_symbols();
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    assert_eq!(gamma.get(i, j, k), gamma.get(i, k, j));
                }
            }
        }
    }

    #[test]
    fn test_reference_omits_polar_azimuthal_terms() {
        // The original formula set leaves out Γ^θ_φφ = -sinθcosθ and
        // Γ^φ_θφ = cotθ, which are standard nonzero components of this
        // connection. We keep the same (incomplete) set for behavioral
        // parity; this test documents the discrepancy.
        let gamma = sample_symbols();
        assert_eq!(gamma.get(THETA, PHI, PHI), 0.0);
        assert_eq!(gamma.get(PHI, THETA, PHI), 0.0);
        assert_eq!(gamma.get(PHI, PHI, THETA), 0.0);
    }

    #[test]
    fn test_kerr_is_not_implemented() {
        // Kerr must fail fast with the capability-gap error, never hand back
        // a zero or partial array
        let metric = Metric::kerr(1.0, 0.5);
        let point = SpacetimePoint::new(0.0, 10.0, PI / 2.0, 0.0);
        match Christoffel::evaluate(&metric, &point) {
            Err(GeodesicError::NotImplemented(_)) => {}
            other => panic!("expected NotImplemented, got {:?}", other),
        }
    }

    #[test]
    fn test_acceleration_contraction() {
        // Purely radial velocity against the Schwarzschild symbols:
        // a^t = -2 Γ^t_tr v^t v^r, a^r = -Γ^r_tt (v^t)² - Γ^r_rr (v^r)²
        let gamma = sample_symbols();
        let v = FourVelocity { components: [1.2, -0.3, 0.0, 0.0] };
        let a = gamma.acceleration(&v);

        let expected_t = -2.0 * gamma.get(T, T, R) * 1.2 * (-0.3);
        let expected_r = -gamma.get(R, T, T) * 1.2 * 1.2 - gamma.get(R, R, R) * 0.09;
        assert!((a.components[T] - expected_t).abs() < 1e-12);
        assert!((a.components[R] - expected_r).abs() < 1e-12);
        assert_eq!(a.components[THETA], 0.0);
        assert_eq!(a.components[PHI], 0.0);
    }
}
