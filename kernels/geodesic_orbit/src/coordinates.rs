// Coordinate conversion for trajectory output

use crate::types::SpacetimePoint;

// ============================================================================
// SPHERICAL → CARTESIAN
// ============================================================================

// Convert the spatial part of a spacetime point to Cartesian (x, y, z)
//
// Relations:
// - x = r sin(θ) cos(φ)
// - y = r sin(θ) sin(φ)
// - z = r cos(θ)
//
// Samples are emitted in Cartesian form so a trajectory file can be plotted
// directly without knowing the coordinate chart.
pub fn spherical_to_cartesian(point: &SpacetimePoint) -> (f64, f64, f64) {
    let r = point.r();
    let theta = point.theta();
    let phi = point.phi();

    let sin_theta = theta.sin();

    let x = r * sin_theta * phi.cos();
    let y = r * sin_theta * phi.sin();
    let z = r * theta.cos();

    (x, y, z)
}
