// Metric tensor evaluation for Schwarzschild and Kerr spacetimes

use crate::types::{Metric, MetricFamily, SpacetimePoint, PHI, R, T, THETA};

// ============================================================================
// METRIC TENSOR
// ============================================================================

// The 4×4 metric tensor g_μν at a spacetime point, indexed (t, r, θ, φ)
//
// Physics: The metric encodes distances and intervals between nearby
// spacetime points. For these two families it is symmetric and mostly
// diagonal; the only off-diagonal term is g_tφ, the Kerr frame-dragging term.
//
// A tensor value is step-scoped: it is rebuilt fresh from the current point
// at every evaluation and never mutated in place across steps.
#[derive(Debug, Clone, Copy)]
pub struct MetricTensor {
    pub components: [[f64; 4]; 4],
}

impl MetricTensor {
    // Evaluate g_μν for the given metric family at a point
    //
    // point.r must be nonzero (division by r and r² occurs below)
    pub fn evaluate(metric: &Metric, point: &SpacetimePoint) -> Self {
        let m = metric.mass;
        let a = metric.spin;
        let r = point.r();
        let theta = point.theta();

        let sin_theta = theta.sin();
        let cos_theta = theta.cos();
        let sin2 = sin_theta * sin_theta;
        let cos2 = cos_theta * cos_theta;
        let r2 = r * r;
        let a2 = a * a;

        // Σ = r² + a²cos²θ and Δ = r² - 2Mr + a² (Kerr helper scalars)
        let sigma = r2 + a2 * cos2;
        let delta = r2 - 2.0 * m * r + a2;

        let mut components = [[0.0; 4]; 4];

        match metric.family {
            MetricFamily::Schwarzschild => {
                components[T][T] = -(1.0 - 2.0 * m / r);
                components[R][R] = 1.0 / (1.0 - 2.0 * m / r);
                components[THETA][THETA] = r2;
                components[PHI][PHI] = r2 * sin2;
            }
            MetricFamily::Kerr => {
                components[T][T] = -(1.0 - 2.0 * m * r / sigma);
                components[R][R] = sigma / delta;
                components[THETA][THETA] = sigma;
                components[PHI][PHI] = (r2 + a2 + 2.0 * m * a2 * r * sin2 / sigma) * sin2;
                // Frame-dragging term, the one off-diagonal entry
                components[T][PHI] = -2.0 * m * a * r * sin2 / sigma;
                components[PHI][T] = components[T][PHI];
            }
        }

        Self { components }
    }

    #[inline]
    pub fn g(&self, mu: usize, nu: usize) -> f64 {
        self.components[mu][nu]
    }
}
