// Trajectory file writing and run manifest

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::GeodesicError;
use crate::integration::{RunSummary, Termination, TrajectorySample, TrajectorySink};
use crate::types::Scenario;

// ============================================================================
// TRAJECTORY FILE WRITER
// ============================================================================

// Plain-text trajectory writer: one line per sample, `tau x y z `
// (whitespace-separated, six decimal places, one trailing space), lines in
// increasing τ order, no header. The file is truncated on creation, so each
// run starts fresh.
//
// Writes go through a BufWriter so the periodic sample write never stalls
// the integration cadence; finish() flushes the final sample out.
pub struct TrajectoryFile {
    writer: BufWriter<File>,
}

impl TrajectoryFile {
    pub fn create(path: &Path) -> Result<Self, GeodesicError> {
        let file = File::create(path)?;
        Ok(Self { writer: BufWriter::new(file) })
    }

    // Flush buffered samples and close the file
    pub fn finish(mut self) -> Result<(), GeodesicError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl TrajectorySink for TrajectoryFile {
    fn record(&mut self, sample: TrajectorySample) -> Result<(), GeodesicError> {
        writeln!(
            self.writer,
            "{:.6} {:.6} {:.6} {:.6} ",
            sample.tau, sample.x, sample.y, sample.z
        )?;
        Ok(())
    }
}

// ============================================================================
// RUN MANIFEST
// ============================================================================

// Summary metadata for a completed run
// This gets serialized to JSON when a manifest path is requested
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    pub metric_family: String,
    pub mass: f64,
    pub spin: f64,
    pub initial_r: f64,
    pub initial_theta: f64,
    pub initial_phi: f64,
    pub initial_spatial_velocity: [f64; 3],
    pub dtau: f64,
    pub tau_final: f64,
    pub sample_every: usize,
    pub termination: String,
    pub horizon_crossing_tau: Option<f64>,
    pub steps: usize,
    pub samples_written: usize,
    pub final_tau: f64,
    pub final_r: f64,
    pub max_norm_drift: f64,
    pub mean_norm_drift: f64,
}

impl RunManifest {
    pub fn new(scenario: &Scenario, summary: &RunSummary) -> Self {
        let (termination, horizon_crossing_tau) = match summary.termination {
            Termination::ProperTimeReached => ("proper-time-reached", None),
            Termination::HorizonCrossed { tau } => ("horizon-crossed", Some(tau)),
            Termination::StepLimitReached => ("step-limit-reached", None),
        };

        Self {
            metric_family: format!("{:?}", scenario.metric.family),
            mass: scenario.metric.mass,
            spin: scenario.metric.spin,
            initial_r: scenario.initial_point.r(),
            initial_theta: scenario.initial_point.theta(),
            initial_phi: scenario.initial_point.phi(),
            initial_spatial_velocity: scenario.initial_spatial_velocity,
            dtau: scenario.dtau,
            tau_final: scenario.tau_final,
            sample_every: scenario.sample_every,
            termination: termination.to_string(),
            horizon_crossing_tau,
            steps: summary.steps,
            samples_written: summary.samples_written,
            final_tau: summary.final_state.tau,
            final_r: summary.final_state.point.r(),
            max_norm_drift: summary.drift.max_drift,
            mean_norm_drift: summary.drift.mean_drift,
        }
    }
}
