// Type definitions for geodesic orbit simulation

use std::f64::consts::PI;

// ============================================================================
// COORDINATE INDICES
// ============================================================================

// Named indices into four-component coordinate arrays (t, r, θ, φ)
// Using these instead of raw literals keeps the tensor bookkeeping readable
pub const T: usize = 0;
pub const R: usize = 1;
pub const THETA: usize = 2;
pub const PHI: usize = 3;

// ============================================================================
// METRIC CONFIGURATION
// ============================================================================

// Which spacetime geometry the particle moves through
//
// Physics: The metric family determines the shape of spacetime around the
// central body. Schwarzschild describes a non-rotating mass; Kerr adds spin
// (frame-dragging), which shows up as the g_tφ off-diagonal metric term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFamily {
    // Non-rotating spherically symmetric mass (a=0)
    Schwarzschild,

    // Rotating mass with spin parameter a ∈ [0, M)
    // Metric evaluation is implemented; Christoffel symbols are not yet
    Kerr,
}

// A central mass with a chosen metric family
//
// Physics concepts:
// - Mass (M): Sets the size scale. We use M=1 in "geometric units" where G=c=1
// - Spin (a): Angular momentum per unit mass, a = J/M. Valid range 0 ≤ a < M.
//   - a=0: Schwarzschild
//   - a→M: maximum possible spin ("extremal")
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    // Which metric family to evaluate
    pub family: MetricFamily,

    // Mass in geometric units (we typically use M=1 to make math simpler)
    pub mass: f64,

    // Spin parameter a ∈ [0, M); always 0 for Schwarzschild
    pub spin: f64,
}

impl Metric {
    // Create a metric with given family, mass and spin
    pub fn new(family: MetricFamily, mass: f64, spin: f64) -> Self {
        assert!(mass > 0.0, "Mass must be positive");
        assert!(spin >= 0.0 && spin < mass, "Spin must be in [0, M)");
        if family == MetricFamily::Schwarzschild {
            assert!(spin == 0.0, "Schwarzschild metric has no spin");
        }
        Self { family, mass, spin }
    }

    // Create a Schwarzschild metric (no rotation)
    pub fn schwarzschild(mass: f64) -> Self {
        Self::new(MetricFamily::Schwarzschild, mass, 0.0)
    }

    // Create a Kerr metric with given spin
    pub fn kerr(mass: f64, spin: f64) -> Self {
        Self::new(MetricFamily::Kerr, mass, spin)
    }

    // Get the spin parameter a
    #[inline]
    pub fn a(&self) -> f64 {
        self.spin
    }

    // Check if this metric has no spin
    #[inline]
    pub fn is_schwarzschild(&self) -> bool {
        self.spin.abs() < 1e-10
    }

    // Calculate the event horizon radius r₊
    //
    // Math: r₊ = M + √(M² - a²)
    //
    // Physics: The event horizon is the "point of no return" - once crossed,
    // nothing escapes, even at light speed.
    //
    // Spin dependence:
    // - a=0 (Schwarzschild): r₊ = 2M
    // - a→M (extremal): r₊ → M
    #[inline]
    pub fn horizon_radius(&self) -> f64 {
        let m = self.mass;
        let a = self.spin;
        m + (m * m - a * a).sqrt()
    }
}

// ============================================================================
// KINEMATIC STATE TYPES
// ============================================================================

// A point in spacetime, ordered (t, r, θ, φ)
//
// Coordinates are spherical-like: coordinate time t, radial coordinate r
// (NOT Euclidean distance near the mass!), polar angle θ ∈ [0, π] and
// azimuthal angle φ. Index with the T/R/THETA/PHI constants.
#[derive(Debug, Clone, Copy)]
pub struct SpacetimePoint {
    pub coords: [f64; 4],
}

impl SpacetimePoint {
    // Create a point from individual coordinates
    pub fn new(t: f64, r: f64, theta: f64, phi: f64) -> Self {
        Self { coords: [t, r, theta, phi] }
    }

    #[inline]
    pub fn t(&self) -> f64 {
        self.coords[T]
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.coords[R]
    }

    #[inline]
    pub fn theta(&self) -> f64 {
        self.coords[THETA]
    }

    #[inline]
    pub fn phi(&self) -> f64 {
        self.coords[PHI]
    }
}

// Four-velocity dx^μ/dτ, one component per coordinate
//
// Physics: A massive particle's four-velocity satisfies the timelike
// unit-norm constraint g_μν v^μ v^ν = -1 (signature -+++). We enforce this
// at initialization only; drift during integration is measured, not fixed.
#[derive(Debug, Clone, Copy)]
pub struct FourVelocity {
    pub components: [f64; 4],
}

impl FourVelocity {
    // Create a velocity with given spatial components and v⁰ left at zero
    // (the time component is filled in by normalization)
    pub fn from_spatial(vr: f64, vtheta: f64, vphi: f64) -> Self {
        Self { components: [0.0, vr, vtheta, vphi] }
    }
}

// Four-acceleration d²x^μ/dτ², one component per coordinate
//
// Computed each step from the geodesic equation a^i = -Γ^i_jk v^j v^k
#[derive(Debug, Clone, Copy)]
pub struct FourAcceleration {
    pub components: [f64; 4],
}

impl FourAcceleration {
    // Zero acceleration (also the initial condition before the first step)
    pub fn zero() -> Self {
        Self { components: [0.0; 4] }
    }
}

// ============================================================================
// SCENARIO CONFIGURATION
// ============================================================================

// Full configuration of a single integration run
//
// The reference scenario (radial infall from 20M) is the `Default`; every
// field is adjustable through the CLI.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    // Spacetime geometry and central mass parameters
    pub metric: Metric,

    // Starting spacetime point (t, r, θ, φ)
    pub initial_point: SpacetimePoint,

    // Starting spatial velocity (v^r, v^θ, v^φ); v^t comes from normalization
    pub initial_spatial_velocity: [f64; 3],

    // Proper-time step dτ
    pub dtau: f64,

    // Integrate until τ reaches this bound
    pub tau_final: f64,

    // Emit a trajectory sample every this many steps
    pub sample_every: usize,

    // Optional hard bound on step count (cancellation hook); None = unbounded
    pub max_steps: Option<usize>,
}

impl Scenario {
    // Total number of steps the proper-time bound allows
    #[inline]
    pub fn step_count(&self) -> usize {
        (self.tau_final / self.dtau).ceil() as usize
    }
}

impl Default for Scenario {
    // Reference scenario: radial infall from r=20M in Schwarzschild, M=1
    fn default() -> Self {
        let metric = Metric::schwarzschild(1.0);
        Self {
            metric,
            initial_point: SpacetimePoint::new(0.0, 20.0 * metric.mass, PI / 4.0, 0.0),
            initial_spatial_velocity: [0.0, 0.0, 0.0],
            dtau: 1e-5,
            tau_final: 500.0,
            sample_every: 50_000,
            max_steps: None,
        }
    }
}
