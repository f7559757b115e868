// Unit-norm drift tracking for integration quality

// ============================================================================
// NORM DRIFT STATISTICS
// ============================================================================

// Track how far g_μν v^μ v^ν wanders from -1 during a run
//
// Physics: The timelike unit-norm constraint is enforced only at
// initialization; the leapfrog scheme is expected to keep the norm close to
// -1 over long integrations, and the size of the drift is the main
// numerical-quality signal for a run. Drift is measured, never corrected.
#[derive(Debug, Default)]
pub struct NormDriftStats {
    pub max_drift: f64,
    pub mean_drift: f64,
    pub sample_count: usize,
}

impl NormDriftStats {
    pub fn new() -> Self {
        Self {
            max_drift: 0.0,
            mean_drift: 0.0,
            sample_count: 0,
        }
    }

    // Record one norm measurement (the raw contraction g_μν v^μ v^ν)
    pub fn update(&mut self, norm: f64) {
        let drift = (norm + 1.0).abs();
        self.max_drift = self.max_drift.max(drift);

        // Running mean calculation
        let n = self.sample_count as f64;
        self.mean_drift = (self.mean_drift * n + drift) / (n + 1.0);

        self.sample_count += 1;
    }

    pub fn report(&self) -> String {
        format!(
            "Norm drift: max={:.2e}, mean={:.2e}, samples={}",
            self.max_drift, self.mean_drift, self.sample_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drift_stats() {
        let mut stats = NormDriftStats::new();

        stats.update(-1.0 - 1e-10);
        stats.update(-1.0 + 2e-10);
        stats.update(-1.0 - 3e-10);

        assert_eq!(stats.sample_count, 3);
        assert!((stats.max_drift - 3e-10).abs() < 1e-15);
        assert!((stats.mean_drift - 2e-10).abs() < 1e-15);
    }

    #[test]
    fn test_exact_norm_has_zero_drift() {
        let mut stats = NormDriftStats::new();
        stats.update(-1.0);
        assert_eq!(stats.max_drift, 0.0);
    }
}
