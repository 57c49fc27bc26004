//! Orbitfield CLI - headless driver for the orbiter simulation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orbitfield_sdf::{FieldEvaluator, FieldModel};
use orbitfield_sim::probe::{DEFAULT_PROBE_EXTENT, DEFAULT_PROBE_SAMPLES, probe_field};
use orbitfield_sim::switcher::ModelSwitcher;
use orbitfield_sim::{OrbiterSettings, Simulation, load_settings, save_settings};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "orbitfield")]
#[command(about = "Particles attracted to animated distance fields", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation without a window and print statistics
    Run {
        /// Number of ticks to run
        #[arg(short, long, default_value = "600")]
        ticks: usize,

        /// Seconds per tick
        #[arg(long, default_value = "0.016666668")]
        dt: f32,

        /// Orbiter count (overrides the settings file)
        #[arg(short, long)]
        count: Option<usize>,

        /// Settings JSON file
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Pin a model instead of cycling (e.g. sphere-plane)
        #[arg(short, long)]
        model: Option<FieldModel>,

        /// Seed for spawning and model switching
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print statistics every N ticks
        #[arg(long, default_value = "60")]
        report_every: usize,
    },

    /// Sample a model at random points and report the interior
    Probe {
        /// Model to sample
        #[arg(short, long, default_value = "metaballs")]
        model: FieldModel,

        /// Field time
        #[arg(short, long, default_value = "0")]
        time: f32,

        /// Number of sample points
        #[arg(long, default_value_t = DEFAULT_PROBE_SAMPLES)]
        samples: usize,

        /// Half-width of the sampled cube
        #[arg(long, default_value_t = DEFAULT_PROBE_EXTENT)]
        extent: f32,

        /// Sampling seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Write the full report (including interior points) as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the default settings, or write them to a file
    Settings {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the available field models
    Models,
}

fn main() -> Result<()> {
    // stdout carries command output, logs go to stderr
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            ticks,
            dt,
            count,
            settings,
            model,
            seed,
            report_every,
        } => {
            run_simulation(
                ticks,
                dt,
                count,
                settings.as_deref(),
                model,
                seed,
                report_every,
            )?;
        }
        Commands::Probe {
            model,
            time,
            samples,
            extent,
            seed,
            output,
        } => {
            run_probe(model, time, samples, extent, seed, output.as_deref())?;
        }
        Commands::Settings { output } => {
            write_default_settings(output.as_deref())?;
        }
        Commands::Models => {
            for model in FieldModel::ALL {
                println!("{:>2}  {}", model.index(), model);
            }
        }
    }

    Ok(())
}

fn run_simulation(
    ticks: usize,
    dt: f32,
    count: Option<usize>,
    settings_path: Option<&Path>,
    model: Option<FieldModel>,
    seed: u64,
    report_every: usize,
) -> Result<()> {
    let mut settings = match settings_path {
        Some(path) => load_settings(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => OrbiterSettings::default(),
    };
    if let Some(count) = count {
        settings.particle_count = count;
    }

    let mut sim = Simulation::new(settings, seed).context("Invalid simulation settings")?;
    if let Some(model) = model {
        sim = sim.with_switcher(ModelSwitcher::fixed(model));
    }

    println!(
        "Running {} ticks of {} orbiters (dt = {}s, model = {})",
        ticks,
        sim.settings().particle_count,
        dt,
        model.map_or_else(|| "cycling".to_string(), |m| m.to_string())
    );

    let report_every = report_every.max(1);
    let mut last = None;
    for tick in 1..=ticks {
        let report = sim.step(dt);
        if let Some(model) = report.switched {
            println!("tick {:>6}: switched to {}", tick, model);
        }
        if tick % report_every == 0 || tick == ticks {
            let stats = report.stats;
            println!(
                "tick {:>6}: {} | {} orbiters | {} non-finite | mean speed {:.4} | bounds {:.1?}..{:.1?}",
                tick,
                report.tick.model,
                stats.count,
                stats.non_finite,
                stats.mean_speed,
                stats.min.to_array(),
                stats.max.to_array()
            );
        }
        last = Some(report);
    }

    if let Some(report) = last {
        println!(
            "Done: {} instances in {} draw batches",
            sim.instances().len(),
            report.batches
        );
    }

    Ok(())
}

fn run_probe(
    model: FieldModel,
    time: f32,
    samples: usize,
    extent: f32,
    seed: u64,
    output: Option<&Path>,
) -> Result<()> {
    let evaluator = FieldEvaluator::new();
    let report = probe_field(&evaluator, model, time, samples, extent, seed)?;

    println!(
        "{} at t={}: {}/{} samples inside ({:.1}%), distance range {:.3}..{:.3}",
        model,
        time,
        report.interior.len(),
        report.samples,
        report.interior_fraction() * 100.0,
        report.min_distance,
        report.max_distance
    );

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write probe report to {}", path.display()))?;
        println!("Saved to: {}", path.display());
    }

    Ok(())
}

fn write_default_settings(output: Option<&Path>) -> Result<()> {
    let settings = OrbiterSettings::default();
    match output {
        Some(path) => {
            save_settings(path, &settings)
                .with_context(|| format!("Failed to write settings to {}", path.display()))?;
            println!("Saved to: {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&settings)?),
    }
    Ok(())
}
