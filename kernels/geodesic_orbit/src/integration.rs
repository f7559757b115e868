// Geodesic integration using a synchronized leapfrog scheme

use crate::christoffel::Christoffel;
use crate::coordinates::spherical_to_cartesian;
use crate::error::GeodesicError;
use crate::metric::MetricTensor;
use crate::types::{FourAcceleration, FourVelocity, Scenario, SpacetimePoint};
use crate::validation::NormDriftStats;
use crate::velocity;

// ============================================================================
// TRAJECTORY OUTPUT COLLABORATOR
// ============================================================================

// One emitted trajectory point: proper time plus Cartesian position
#[derive(Debug, Clone, Copy)]
pub struct TrajectorySample {
    pub tau: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

// Receiver for trajectory samples at the configured cadence
//
// The integrator never touches the output medium directly; the file writer
// (output::TrajectoryFile) and an in-memory Vec (tests) both implement this.
pub trait TrajectorySink {
    fn record(&mut self, sample: TrajectorySample) -> Result<(), GeodesicError>;
}

impl TrajectorySink for Vec<TrajectorySample> {
    fn record(&mut self, sample: TrajectorySample) -> Result<(), GeodesicError> {
        self.push(sample);
        Ok(())
    }
}

// ============================================================================
// SIMULATION STATE
// ============================================================================

// The mutable state advanced by the integrator
//
// Owned exclusively by GeodesicIntegrator: created at run start, mutated in
// place each step, discarded at termination. Proper time advances
// monotonically until a terminal condition is hit.
#[derive(Debug, Clone, Copy)]
pub struct SimulationState {
    pub tau: f64,
    pub step: usize,
    pub point: SpacetimePoint,
    pub velocity: FourVelocity,
    pub acceleration: FourAcceleration,
}

// Why a run ended
//
// Horizon crossing is a normal termination path with its own reporting, not
// an error. StepLimitReached is only reachable when a step bound is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    // τ reached the configured bound
    ProperTimeReached,

    // r dropped below the horizon radius; carries the proper time of crossing
    HorizonCrossed { tau: f64 },

    // The optional max_steps cancellation bound was hit
    StepLimitReached,
}

// Summary of a completed run
#[derive(Debug)]
pub struct RunSummary {
    pub termination: Termination,
    pub steps: usize,
    pub samples_written: usize,
    pub drift: NormDriftStats,
    pub final_state: SimulationState,
}

// ============================================================================
// GEODESIC INTEGRATOR
// ============================================================================

// The orchestrating loop: advances (position, velocity, acceleration) through
// proper time with a fixed-step synchronized leapfrog, recomputing the
// Christoffel field every step, until horizon crossing or the proper-time
// bound. Single-shot: a run goes from initial state to terminal state once,
// with no resume.
pub struct GeodesicIntegrator {
    scenario: Scenario,
    state: SimulationState,
    christoffel: Christoffel,
    drift: NormDriftStats,
}

impl GeodesicIntegrator {
    // Build the initial simulation state
    //
    // Evaluates the metric at the initial point, normalizes the
    // four-velocity, and evaluates the initial Christoffel field. Any error
    // here is fatal and aborts before the loop starts - in particular, this
    // is where a Kerr run fails fast on the unimplemented symbols.
    //
    // The initial acceleration is zero (not the contracted field): the first
    // drift therefore uses a = 0, matching the reference integrator.
    pub fn new(scenario: Scenario) -> Result<Self, GeodesicError> {
        let g = MetricTensor::evaluate(&scenario.metric, &scenario.initial_point);

        let [vr, vtheta, vphi] = scenario.initial_spatial_velocity;
        let mut initial_velocity = FourVelocity::from_spatial(vr, vtheta, vphi);
        velocity::normalize(&mut initial_velocity, &g)?;

        let christoffel = Christoffel::evaluate(&scenario.metric, &scenario.initial_point)?;

        Ok(Self {
            scenario,
            state: SimulationState {
                tau: 0.0,
                step: 0,
                point: scenario.initial_point,
                velocity: initial_velocity,
                acceleration: FourAcceleration::zero(),
            },
            christoffel,
            drift: NormDriftStats::new(),
        })
    }

    // Read access to the prepared initial state (useful before run())
    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    // Run the integration loop to termination
    //
    // Per step:
    // 1. stop if τ reached the bound (or the optional step limit was hit)
    // 2. stop if r crossed the horizon; the check precedes emission, so no
    //    sample can ever carry a position inside the horizon
    // 3. emit (τ, x, y, z) to the sink at the configured cadence, measure
    //    norm drift there, and report progress
    // 4. advance the state by one leapfrog step
    //
    // `progress` is called with the current step at every cadence point.
    pub fn run<S: TrajectorySink>(
        mut self,
        sink: &mut S,
        mut progress: impl FnMut(usize),
    ) -> Result<RunSummary, GeodesicError> {
        let dtau = self.scenario.dtau;
        let horizon_radius = self.scenario.metric.horizon_radius();
        let mut samples_written = 0usize;

        let termination = loop {
            if self.state.tau >= self.scenario.tau_final {
                break Termination::ProperTimeReached;
            }
            if let Some(max_steps) = self.scenario.max_steps {
                if self.state.step >= max_steps {
                    break Termination::StepLimitReached;
                }
            }
            if self.state.point.r() < horizon_radius {
                break Termination::HorizonCrossed { tau: self.state.tau };
            }

            if self.state.step % self.scenario.sample_every == 0 {
                let (x, y, z) = spherical_to_cartesian(&self.state.point);
                sink.record(TrajectorySample { tau: self.state.tau, x, y, z })?;
                samples_written += 1;

                let g = MetricTensor::evaluate(&self.scenario.metric, &self.state.point);
                self.drift.update(velocity::norm(&self.state.velocity, &g));

                progress(self.state.step);
            }

            self.advance(dtau)?;
        };

        Ok(RunSummary {
            termination,
            steps: self.state.step,
            samples_written,
            drift: self.drift,
            final_state: self.state,
        })
    }

    // One synchronized leapfrog step (kick-drift-kick, fixed dτ)
    //
    // The drift reuses the pre-kick acceleration for its quadratic term; the
    // velocity entering the drift is already half-kicked.
    fn advance(&mut self, dtau: f64) -> Result<(), GeodesicError> {
        let v = &mut self.state.velocity.components;
        let a = &self.state.acceleration.components;
        let x = &mut self.state.point.coords;

        // Half-step velocity kick, then full-step position drift
        for i in 0..4 {
            v[i] += 0.5 * a[i] * dtau;
            x[i] += v[i] * dtau + 0.5 * a[i] * dtau * dtau;
        }

        // Recompute the connection at the new position, then the geodesic
        // acceleration a^i = -Γ^i_jk v^j v^k (zeroed before contraction)
        self.christoffel = Christoffel::evaluate(&self.scenario.metric, &self.state.point)?;
        self.state.acceleration = self.christoffel.acceleration(&self.state.velocity);

        // Second half-step velocity kick
        let v = &mut self.state.velocity.components;
        let a = &self.state.acceleration.components;
        for i in 0..4 {
            v[i] += 0.5 * a[i] * dtau;
        }

        self.state.tau += dtau;
        self.state.step += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeodesicError;
    use crate::types::Metric;
    use std::f64::consts::PI;

    // Shortened radial-infall scenario: same physics as the reference, with
    // a coarser step so tests stay fast
    fn infall_scenario(r0: f64, dtau: f64, tau_final: f64, sample_every: usize) -> Scenario {
        let metric = Metric::schwarzschild(1.0);
        Scenario {
            metric,
            initial_point: SpacetimePoint::new(0.0, r0, PI / 4.0, 0.0),
            initial_spatial_velocity: [0.0, 0.0, 0.0],
            dtau,
            tau_final,
            sample_every,
            max_steps: None,
        }
    }

    #[test]
    fn test_first_sample_matches_initial_point() {
        // With φ=0 the first emitted sample (step 0) must be exactly
        // (τ=0, r₀ sin θ₀, 0, r₀ cos θ₀)
        let scenario = infall_scenario(20.0, 1e-3, 0.01, 1);
        let mut samples: Vec<TrajectorySample> = Vec::new();
        GeodesicIntegrator::new(scenario)
            .unwrap()
            .run(&mut samples, |_| {})
            .unwrap();

        let first = samples[0];
        assert_eq!(first.tau, 0.0);
        assert!((first.x - 20.0 * (PI / 4.0f64).sin()).abs() < 1e-12);
        assert!(first.y.abs() < 1e-12);
        assert!((first.z - 20.0 * (PI / 4.0f64).cos()).abs() < 1e-12);
    }

    #[test]
    fn test_proper_time_termination() {
        let scenario = infall_scenario(20.0, 1e-3, 0.0105, 1);
        let mut samples: Vec<TrajectorySample> = Vec::new();
        let summary = GeodesicIntegrator::new(scenario)
            .unwrap()
            .run(&mut samples, |_| {})
            .unwrap();

        assert_eq!(summary.termination, Termination::ProperTimeReached);
        assert_eq!(summary.steps, 11);
        assert_eq!(summary.samples_written, 11);
        assert!(summary.final_state.tau >= 0.0105);
    }

    #[test]
    fn test_horizon_detection() {
        // Radial infall from r=5 reaches the horizon well before τ=50; the
        // run must terminate on crossing and no emitted sample may sit
        // inside r=2M
        let scenario = infall_scenario(5.0, 1e-3, 50.0, 1);
        let mut samples: Vec<TrajectorySample> = Vec::new();
        let summary = GeodesicIntegrator::new(scenario)
            .unwrap()
            .run(&mut samples, |_| {})
            .unwrap();

        match summary.termination {
            Termination::HorizonCrossed { tau } => {
                assert!(tau > 0.0 && tau < 50.0);
            }
            other => panic!("expected horizon crossing, got {:?}", other),
        }
        assert!(summary.final_state.point.r() < 2.0);

        for sample in &samples {
            let radius = (sample.x * sample.x + sample.y * sample.y + sample.z * sample.z).sqrt();
            assert!(radius >= 2.0, "sample inside horizon at tau={}", sample.tau);
        }
    }

    #[test]
    fn test_reference_infall_crosses_horizon() {
        // The reference infall (M=1, rest at r=20), run at a coarser step:
        // the cycloid solution puts the crossing near tau ≈ 97.9, so the
        // reported crossing time must land close by and well before the
        // tau = 500 bound
        let scenario = infall_scenario(20.0, 1e-4, 500.0, 50_000);
        let summary = GeodesicIntegrator::new(scenario)
            .unwrap()
            .run(&mut Vec::new(), |_| {})
            .unwrap();

        match summary.termination {
            Termination::HorizonCrossed { tau } => {
                assert!(tau > 90.0 && tau < 105.0, "crossing tau = {}", tau);
            }
            other => panic!("expected horizon crossing, got {:?}", other),
        }
        assert!(summary.final_state.point.r() < 2.0);
    }

    #[test]
    fn test_infall_moves_inward() {
        // From rest, gravity pulls the particle radially inward; θ and φ
        // stay fixed for a purely radial trajectory
        let scenario = infall_scenario(20.0, 1e-3, 5.0, 1000);
        let summary = GeodesicIntegrator::new(scenario)
            .unwrap()
            .run(&mut Vec::new(), |_| {})
            .unwrap();

        let end = summary.final_state.point;
        assert!(end.r() < 20.0);
        assert!((end.theta() - PI / 4.0).abs() < 1e-9);
        assert!(end.phi().abs() < 1e-9);
    }

    #[test]
    fn test_norm_drift_stays_bounded() {
        // Symplectic-scheme quality check: the unit-norm constraint must
        // hold to well under 1e-3 over a long stretch of the infall
        let scenario = infall_scenario(20.0, 1e-3, 20.0, 1000);
        let summary = GeodesicIntegrator::new(scenario)
            .unwrap()
            .run(&mut Vec::new(), |_| {})
            .unwrap();

        assert!(summary.drift.sample_count > 0);
        assert!(
            summary.drift.max_drift < 1e-3,
            "norm drift too large: {}",
            summary.drift.max_drift
        );
    }

    #[test]
    fn test_kerr_fails_before_the_loop() {
        // The Kerr Christoffel gap must surface during setup, never as a
        // silent zero field
        let scenario = Scenario {
            metric: Metric::kerr(1.0, 0.9),
            ..infall_scenario(20.0, 1e-3, 1.0, 1)
        };
        match GeodesicIntegrator::new(scenario) {
            Err(GeodesicError::NotImplemented(_)) => {}
            other => panic!("expected NotImplemented, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_step_limit_cancellation() {
        let mut scenario = infall_scenario(20.0, 1e-3, 500.0, 100);
        scenario.max_steps = Some(5);
        let summary = GeodesicIntegrator::new(scenario)
            .unwrap()
            .run(&mut Vec::new(), |_| {})
            .unwrap();

        assert_eq!(summary.termination, Termination::StepLimitReached);
        assert_eq!(summary.steps, 5);
    }

    #[test]
    fn test_progress_reported_at_cadence() {
        let scenario = infall_scenario(20.0, 1e-3, 0.0101, 5);
        let mut reported = Vec::new();
        GeodesicIntegrator::new(scenario)
            .unwrap()
            .run(&mut Vec::new(), |step| reported.push(step))
            .unwrap();

        assert_eq!(reported, vec![0, 5, 10]);
    }
}
