use gravsim::{bench_direct, ConsoleSink, CsvSink, MultiSink, RunSummary, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gravsim", about = "Fixed-step 2D gravitational N-body simulator")]
struct Args {
    /// Scenario YAML; bare names are also looked up in the crate's scenarios/ directory
    #[arg(short, long = "file")]
    file_name: Option<String>,

    /// Write the CSV table here instead of the scenario's destination
    #[arg(long, conflicts_with = "no_csv")]
    csv: Option<PathBuf>,

    /// Don't write a CSV table
    #[arg(long)]
    no_csv: bool,

    /// Don't print per-step positions
    #[arg(short, long)]
    quiet: bool,

    /// Run the force/step scaling benchmark and exit
    #[arg(long)]
    bench: bool,

    /// Replay the run in a window afterwards
    #[cfg(feature = "viewer")]
    #[arg(long)]
    view: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.exists() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path).with_context(|| format!("cannot open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader).with_context(|| format!("cannot parse scenario {}", config_path.display()))?;

    info!("loaded scenario {} ({} bodies)", config_path.display(), scenario_cfg.bodies.len());
    Ok(scenario_cfg)
}

fn report(summary: &RunSummary) {
    for (i, b) in summary.system.bodies.iter().enumerate() {
        info!("body {} final position ({:.3}, {:.3})", i + 1, b.x.x, b.x.y);
    }
    println!("Execution time: {:.3} seconds", summary.elapsed.as_secs_f64());
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_direct()?;
        return Ok(());
    }

    let scenario_cfg = match &args.file_name {
        Some(name) => load_scenario_from_yaml(name)?,
        None => ScenarioConfig::reference(),
    };

    let scenario = Scenario::build_scenario(scenario_cfg);

    // Sinks are opened before the engine exists: a bad destination aborts the run
    let mut sinks = MultiSink::new();
    let csv_path = if args.no_csv {
        None
    } else {
        args.csv.clone().or_else(|| scenario.output.csv.clone())
    };
    if let Some(path) = csv_path {
        sinks = sinks.with(CsvSink::create(&path).context("cannot set up CSV output")?);
    }
    if scenario.output.console && !args.quiet {
        sinks = sinks.with(ConsoleSink::stdout());
    }

    let engine = scenario.into_engine().context("scenario rejected")?;

    #[cfg(feature = "viewer")]
    if args.view {
        let mut trajectory = gravsim::Trajectory::new();
        let summary = engine.run(&mut (&mut sinks, &mut trajectory)).context("simulation aborted")?;
        report(&summary);
        gravsim::run_2d(trajectory);
        return Ok(());
    }

    let summary = engine.run(&mut sinks).context("simulation aborted")?;
    report(&summary);

    Ok(())
}
