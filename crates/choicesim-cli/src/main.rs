use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::Level;

use choicesim_core::ports::{RowSink, SystemClock, UlidGenerator};
use choicesim_core::{ResultRow, RunManifest, SimError, SimulationBuilder, SimulationConfig};

const EPISODIC_FILE: &str = "episodic_model_sim.jsonl";
const FEATURE_FILE: &str = "feature_model_sim.jsonl";
const MANIFEST_FILE: &str = "run.json";

#[derive(Debug, Parser)]
#[command(
    name = "choicesim",
    about = "Episodic vs feature-based decision model simulator",
    version
)]
struct Args {
    /// Number of trials (overrides the config file; default 1000).
    #[arg(long)]
    trials: Option<usize>,

    /// Deterministic seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file. Missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the result tables and run.json.
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// Verbosity: -v, -vv
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// One result table as JSON Lines.
struct JsonLinesSink {
    path: PathBuf,
    out: BufWriter<File>,
}

impl JsonLinesSink {
    fn create(path: PathBuf) -> Result<Self> {
        let file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self {
            path,
            out: BufWriter::new(file),
        })
    }

    fn sink_error(&self, e: impl std::fmt::Display) -> SimError {
        SimError::Sink(format!("{}: {e}", self.path.display()))
    }

    fn finish(mut self) -> Result<()> {
        self.out
            .flush()
            .with_context(|| format!("failed to flush {}", self.path.display()))
    }
}

impl RowSink for JsonLinesSink {
    fn write_row(&mut self, row: ResultRow) -> Result<(), SimError> {
        serde_json::to_writer(&mut self.out, &row).map_err(|e| self.sink_error(e))?;
        self.out.write_all(b"\n").map_err(|e| self.sink_error(e))
    }
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SimulationConfig::from_json_str(&raw)?
        }
        None => SimulationConfig::default(),
    };

    // CLI > config file > defaults
    if let Some(trials) = args.trials {
        config.n_trials = trials;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn write_manifest(path: &Path, manifest: &RunManifest) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, manifest)
        .with_context(|| format!("failed to write {}", path.display()))?;
    out.flush().with_context(|| format!("failed to flush {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    let mut sim = SimulationBuilder::new().config(config).build()?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create output dir {}", args.out_dir.display()))?;

    let clock = SystemClock;
    let ids = UlidGenerator::new(SystemClock);
    let mut manifest = RunManifest::start(&ids, &clock, sim.seed(), sim.config().clone());
    tracing::info!(
        run_id = %manifest.run_id,
        seed = manifest.seed,
        out_dir = %args.out_dir.display(),
        "run started"
    );

    let mut episodic = JsonLinesSink::create(args.out_dir.join(EPISODIC_FILE))?;
    let mut feature = JsonLinesSink::create(args.out_dir.join(FEATURE_FILE))?;

    let n_trials = sim.config().n_trials;
    let stats = sim.run_into(n_trials, &mut episodic, &mut feature)?;
    episodic.finish()?;
    feature.finish()?;

    manifest.finish(&clock, stats);
    write_manifest(&args.out_dir.join(MANIFEST_FILE), &manifest)?;

    tracing::info!(
        run_id = %manifest.run_id,
        trials = stats.trials,
        episodic_rows = stats.episodic_rows,
        feature_rows = stats.feature_rows,
        "run finished"
    );
    Ok(())
}
