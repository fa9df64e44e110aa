//! Chopthin resampling demo.
//!
//! Generates a log-normal weight vector, resamples it, and prints a summary
//! of what was chopped and thinned.
//!
//! Run with: cargo run --bin chopthin_demo -- --particles 1000 --target 1000
//! Optional flags: --seed N, --eta X, --json

use std::env;

use chopthin_rs::{
    effective_sample_size, solve_bounds, systematic_resample, ChopthinConfig, Rng, SimpleRng,
    DEFAULT_ETA,
};

struct DemoOptions {
    seed: u64,
    particles: usize,
    target: usize,
    eta: f64,
    json: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            particles: 1000,
            target: 1000,
            eta: DEFAULT_ETA,
            json: false,
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn parse_args() -> Result<DemoOptions, String> {
    let mut opts = DemoOptions::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match arg.as_str() {
            "--seed" => opts.seed = value("--seed")?.parse().map_err(|e| format!("--seed: {e}"))?,
            "--particles" => {
                opts.particles = value("--particles")?
                    .parse()
                    .map_err(|e| format!("--particles: {e}"))?
            }
            "--target" => {
                opts.target = value("--target")?
                    .parse()
                    .map_err(|e| format!("--target: {e}"))?
            }
            "--eta" => opts.eta = value("--eta")?.parse().map_err(|e| format!("--eta: {e}"))?,
            "--json" => opts.json = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(opts)
}

fn run() -> Result<(), String> {
    let opts = parse_args()?;
    let mut rng = SimpleRng::new(opts.seed);

    // Log-normal weights: a typical post-update importance weight profile,
    // with a handful of particles carrying most of the mass.
    let weights: Vec<f64> = (0..opts.particles)
        .map(|_| (1.5 * rng.randn()).exp())
        .collect();

    let config = ChopthinConfig::new(opts.target, opts.eta);
    config.validate().map_err(|e| e.to_string())?;

    let bounds =
        solve_bounds(&mut rng, &weights, opts.target, opts.eta).map_err(|e| e.to_string())?;
    let resampled = systematic_resample(&mut rng, &weights, opts.target, bounds)
        .map_err(|e| e.to_string())?;

    let chopped = weights.iter().filter(|&&w| w < bounds.lower).count();
    let thinned = weights.iter().filter(|&&w| w > bounds.upper).count();
    let mut survivors: Vec<usize> = resampled.indices.clone();
    survivors.dedup();

    println!("Chopthin resampling demo");
    println!("========================\n");
    println!("input particles:     {}", opts.particles);
    println!("target particles:    {}", opts.target);
    println!("eta:                 {}", opts.eta);
    println!("ESS before:          {:.1}", effective_sample_size(&weights));
    println!("ESS after:           {:.1}", effective_sample_size(&resampled.weights));
    println!("clipping floor:      {:.6e}", bounds.lower);
    println!("clipping ceiling:    {:.6e}", bounds.upper);
    println!("chopped below floor: {}", chopped);
    println!("thinned above ceil:  {}", thinned);
    println!("distinct survivors:  {}", survivors.len());
    println!("output mass:         {:.12}", resampled.total_weight());

    if opts.json {
        let json = serde_json::to_string_pretty(&resampled)
            .map_err(|e| format!("failed to serialize JSON: {e}"))?;
        println!("\n{json}");
    }

    Ok(())
}
