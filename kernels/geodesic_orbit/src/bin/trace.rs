// Geodesic Trajectory Tracer CLI
//
// This binary integrates a single timelike geodesic through a chosen
// spacetime and writes the time-stamped Cartesian trajectory to disk.
// Defaults reproduce the reference radial-infall scenario.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

use geodesic_orbit::*;

/// CLI arguments for the trajectory tracer
#[derive(Parser, Debug)]
#[command(name = "trace")]
#[command(about = "Integrate a timelike geodesic around a massive body", long_about = None)]
struct Args {
    /// Metric family ("schwarzschild" or "kerr")
    #[arg(short, long, default_value = "schwarzschild")]
    metric: String,

    /// Central mass M in geometric units
    #[arg(long, default_value_t = 1.0)]
    mass: f64,

    /// Spin parameter a (Kerr only; must satisfy 0 <= a < M)
    #[arg(long, default_value_t = 0.0)]
    spin: f64,

    /// Initial radial coordinate r
    #[arg(long, default_value_t = 20.0)]
    r0: f64,

    /// Initial polar angle theta in radians
    #[arg(long, default_value_t = std::f64::consts::FRAC_PI_4)]
    theta0: f64,

    /// Initial azimuthal angle phi in radians
    #[arg(long, default_value_t = 0.0)]
    phi0: f64,

    /// Initial radial velocity component v^r
    #[arg(long, default_value_t = 0.0)]
    vr: f64,

    /// Initial polar velocity component v^theta
    #[arg(long, default_value_t = 0.0)]
    vtheta: f64,

    /// Initial azimuthal velocity component v^phi
    #[arg(long, default_value_t = 0.0)]
    vphi: f64,

    /// Proper-time step dtau
    #[arg(long, default_value_t = 1e-5)]
    dtau: f64,

    /// Integrate until proper time reaches this bound
    #[arg(long, default_value_t = 500.0)]
    tau_final: f64,

    /// Emit a trajectory sample every this many steps
    #[arg(long, default_value_t = 50_000)]
    cadence: usize,

    /// Optional hard bound on the number of steps (external cancellation)
    #[arg(long)]
    max_steps: Option<usize>,

    /// Trajectory output file
    #[arg(short, long, default_value = "geodesic.txt")]
    output: PathBuf,

    /// Write a JSON run manifest to this path
    #[arg(long)]
    manifest: Option<PathBuf>,
}

/// Parse the metric family from the CLI string
/// The single-letter forms match the original selector characters
fn parse_metric_family(name: &str) -> Result<MetricFamily, String> {
    match name {
        "schwarzschild" | "S" => Ok(MetricFamily::Schwarzschild),
        "kerr" | "K" => Ok(MetricFamily::Kerr),
        _ => Err(format!(
            "Unknown metric type: '{}'. Must be one of: schwarzschild, kerr",
            name
        )),
    }
}

/// Validate parameter ranges and assemble the metric
/// Range errors are configuration errors, distinct from physics errors
fn build_metric(family: MetricFamily, mass: f64, spin: f64) -> Result<Metric, GeodesicError> {
    if mass <= 0.0 {
        return Err(GeodesicError::Config(format!("mass must be positive, got {}", mass)));
    }
    if spin < 0.0 || spin >= mass {
        return Err(GeodesicError::Config(format!(
            "spin must be in [0, M), got a={} with M={}",
            spin, mass
        )));
    }
    if family == MetricFamily::Schwarzschild && spin != 0.0 {
        return Err(GeodesicError::Config(
            "the Schwarzschild metric has no spin; use --metric kerr".to_string(),
        ));
    }
    Ok(Metric::new(family, mass, spin))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let family = parse_metric_family(&args.metric).map_err(GeodesicError::Config)?;
    let metric = build_metric(family, args.mass, args.spin)?;

    if args.dtau <= 0.0 || args.tau_final <= 0.0 {
        return Err(GeodesicError::Config("dtau and tau_final must be positive".to_string()).into());
    }
    if args.cadence == 0 {
        return Err(GeodesicError::Config("cadence must be at least 1".to_string()).into());
    }

    let scenario = Scenario {
        metric,
        initial_point: SpacetimePoint::new(0.0, args.r0, args.theta0, args.phi0),
        initial_spatial_velocity: [args.vr, args.vtheta, args.vphi],
        dtau: args.dtau,
        tau_final: args.tau_final,
        sample_every: args.cadence,
        max_steps: args.max_steps,
    };

    // Print configuration
    println!("\nGeodesic Trajectory Tracer");
    println!("=======================================");
    println!("  Metric: {:?} (M={}, a={})", metric.family, metric.mass, metric.spin);
    println!("  Horizon radius: {:.6}", metric.horizon_radius());
    println!(
        "  Initial point: r={}, theta={:.6}, phi={:.6}",
        args.r0, args.theta0, args.phi0
    );
    println!("  Step: dtau={:e}, tau_final={}", args.dtau, args.tau_final);
    println!("  Sample cadence: every {} steps", args.cadence);
    println!("  Output: {}", args.output.display());
    println!("=======================================\n");

    log::info!(
        "setting up scenario: {:?} M={} r0={} dtau={:e}",
        metric.family,
        metric.mass,
        args.r0,
        args.dtau
    );

    // Build the initial state; physics and capability errors surface here,
    // before any output is written
    let integrator = GeodesicIntegrator::new(scenario)?;
    log::info!(
        "initial four-velocity: {:?}",
        integrator.state().velocity.components
    );

    let mut sink = TrajectoryFile::create(&args.output)?;

    // Progress bar over the proper-time step budget
    let total_steps = scenario.step_count().min(args.max_steps.unwrap_or(usize::MAX));
    let pb = ProgressBar::new(total_steps as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} steps ({percent}%)")?
            .progress_chars("█▓▒░ "),
    );

    println!("Integrating geodesic...");
    let summary = integrator.run(&mut sink, |step| pb.set_position(step as u64))?;
    sink.finish()?;

    pb.finish_with_message("integration complete");

    // Report the outcome
    match summary.termination {
        Termination::HorizonCrossed { tau } => {
            println!("\nParticle crossed the event horizon at tau = {:.6}", tau);
        }
        Termination::ProperTimeReached => {
            println!("\nReached the proper-time bound tau = {}", scenario.tau_final);
        }
        Termination::StepLimitReached => {
            println!("\nStopped at the step limit after {} steps", summary.steps);
        }
    }

    println!("\nStatistics:");
    println!("  Steps taken: {}", summary.steps);
    println!("  Samples written: {}", summary.samples_written);
    println!("  Final r: {:.6}", summary.final_state.point.r());
    println!("  {}", summary.drift.report());

    // Write the run manifest if requested
    if let Some(manifest_path) = &args.manifest {
        let manifest = RunManifest::new(&scenario, &summary);
        let manifest_json = serde_json::to_string_pretty(&manifest)?;
        fs::write(manifest_path, manifest_json)?;
        println!("  Wrote manifest: {}", manifest_path.display());
    }

    println!("\nTrajectory written to {}\n", args.output.display());

    Ok(())
}
