// Four-velocity normalization against the timelike unit-norm constraint

use crate::error::GeodesicError;
use crate::metric::MetricTensor;
use crate::types::{FourVelocity, T};

// ============================================================================
// NORMALIZATION
// ============================================================================

// Fill in the time component of a four-velocity whose spatial components are
// already set, enforcing g_μν v^μ v^ν = -1
//
// Algorithm: with S = Σ_ij g_ij v^i v^j over the spatial indices (the purely
// spatial quadratic form), the constraint reads g_tt (v⁰)² + S = -1, so
// (v⁰)² = (-1 - S) / g_tt. The positive root is taken (future-directed).
//
// Both failure modes are fatal and carry the offending computed value:
// - (v⁰)² < 0: the time component would be complex (non-physical state)
// - local 3-velocity ≥ 1 in units where c = 1 (superluminal)
// The velocity is never silently clamped into admissibility.
pub fn normalize(velocity: &mut FourVelocity, g: &MetricTensor) -> Result<(), GeodesicError> {
    let sum_spatial = spatial_quadratic_form(velocity, g);

    let v0_squared = (-1.0 - sum_spatial) / g.g(T, T);
    if v0_squared < 0.0 {
        return Err(GeodesicError::NonPhysicalVelocity { v0_squared });
    }
    velocity.components[T] = v0_squared.sqrt();

    // Velocity measured by a local static observer, in units of c
    let v_local_sq = sum_spatial / (-g.g(T, T) * v0_squared);
    let v_local = v_local_sq.sqrt();
    if v_local >= 1.0 {
        return Err(GeodesicError::SuperluminalVelocity { v_local });
    }

    Ok(())
}

// S = Σ_ij g_ij v^i v^j over the spatial indices 1..3
fn spatial_quadratic_form(velocity: &FourVelocity, g: &MetricTensor) -> f64 {
    let v = &velocity.components;
    let mut sum = 0.0;
    for i in 1..4 {
        for j in 1..4 {
            sum += g.g(i, j) * v[i] * v[j];
        }
    }
    sum
}

// Full contraction g_μν v^μ v^ν over all four indices
//
// Exactly -1 for a freshly normalized velocity; during integration it drifts
// and the drift is a numerical-quality signal (see validation::NormDriftStats)
pub fn norm(velocity: &FourVelocity, g: &MetricTensor) -> f64 {
    let v = &velocity.components;
    let mut sum = 0.0;
    for mu in 0..4 {
        for nu in 0..4 {
            sum += g.g(mu, nu) * v[mu] * v[nu];
        }
    }
    sum
}
