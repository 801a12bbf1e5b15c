// demos/random_walk.rs
//! One generation-and-plot cycle: load a config, draw a walk, write CSV and SVG.
//!
//! ```text
//! cargo run --example random_walk -- [config.toml] [output_dir]
//! ```
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wiener_walk::analytics::path_stats::{increment_stats, quadratic_variation};
use wiener_walk::mc::ensemble::generate_ensemble;
use wiener_walk::output;
use wiener_walk::plot;
use wiener_walk::rng;
use wiener_walk::{WalkConfig, WalkResult};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> WalkResult<()> {
    let args: Vec<String> = std::env::args().collect();

    let config = match args.get(1) {
        Some(file) => WalkConfig::load(file)?,
        None => {
            warn!("no config file given, using defaults");
            WalkConfig::default()
        }
    };
    config.validate()?;

    let output_dir = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("results"));
    std::fs::create_dir_all(&output_dir)?;

    println!("Running wiener-walk demo\n");
    println!("dt = {}, x0 = {}, steps = {}, seed = {}", config.dt, config.x0, config.steps, config.seed);

    let walk = config.walk()?;
    let steps = config.steps()?;
    let mut rng = rng::seed_rng_from_u64(config.seed);
    let path = walk.generate(steps, &mut rng)?;

    let qv = quadratic_variation(path.values());
    println!("Terminal value: {:.6}", path.terminal());
    println!("Quadratic variation: {:.6} (N·dt² = {:.6})", qv, steps as f64 * config.dt * config.dt);

    let mut summary = vec![
        ("dt", config.dt.to_string()),
        ("x0", config.x0.to_string()),
        ("steps", steps.to_string()),
        ("seed", config.seed.to_string()),
        ("terminal", path.terminal().to_string()),
        ("quadratic_variation", qv.to_string()),
    ];
    if let Some(stats) = increment_stats(&path) {
        println!("Increment mean: {:.6}, std dev: {:.6} (dt = {})", stats.mean, stats.std_dev(), config.dt);
        summary.push(("increment_mean", stats.mean.to_string()));
        summary.push(("increment_std_dev", stats.std_dev().to_string()));
    }

    output::write_path_to_csv(output_dir.join("path.csv"), &path)?;
    output::write_summary_to_csv(output_dir.join("summary.csv"), &summary)?;
    plot::save_path_svg(&path, output_dir.join("path.svg"), &config.title, plot::DEFAULT_SIZE)?;

    if config.paths > 1 {
        let ensemble = generate_ensemble(&walk, steps, config.paths, config.seed)?;
        let (mean, variance) = ensemble.terminal_moments();
        println!(
            "\nEnsemble of {} paths: terminal mean {:.6}, variance {:.6} (N·dt² = {:.6})",
            ensemble.paths(),
            mean,
            variance,
            steps as f64 * config.dt * config.dt
        );

        let svg = plot::render_ensemble_svg(&ensemble, 20, &config.title, plot::DEFAULT_SIZE)?;
        std::fs::write(output_dir.join("ensemble.svg"), svg)?;
    }

    info!(dir = %output_dir.display(), "demo complete");
    println!("\nResults written to {}", output_dir.display());
    Ok(())
}
