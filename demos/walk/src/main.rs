//! walk — drive one robot around a random color grid and watch the belief
//! converge.
//!
//! ```text
//! walk [--config run.json] [--colors map.csv] [--script "up up k left"]
//!      [--random N] [--out DIR]
//! ```
//!
//! Without `--script` the robot takes `--random` uniformly random moves
//! (default 20); `--script` and `--random` are mutually exclusive.  Belief snapshots and per-step summaries are written as CSV
//! under `--out` (default `output/walk`).  Set `RUST_LOG=debug` for one log
//! line per belief step.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mg_belief::{BeliefGrid, StepReport};
use mg_control::{Controller, RandomWalk, ScriptedController};
use mg_core::{Cell, Direction, LocalizationConfig};
use mg_output::{BeliefOutputObserver, CsvWriter, OutputWriter, render_grid};
use mg_session::{SessionBuilder, SessionObserver};
use mg_world::{ColorMap, load_color_map_csv};

#[cfg(test)]
mod tests;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_RANDOM_MOVES: u64  = 20;
const DEFAULT_OUT_DIR:      &str = "output/walk";

// ── Command line ──────────────────────────────────────────────────────────────

/// Drive one robot around a color grid and print the belief.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON run configuration (defaults to the stock 8x10 scene)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV color map with `row,col,class` records
    #[arg(long)]
    colors: Option<PathBuf>,

    /// Command script, e.g. "up up k left ? setup"
    #[arg(short, long, conflicts_with = "random")]
    script: Option<String>,

    /// Number of random moves when no script is given
    #[arg(short, long, default_value_t = DEFAULT_RANDOM_MOVES)]
    random: u64,

    /// Output directory for the CSV files
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,
}

fn init_logging() {
    let mut filter = EnvFilter::from_default_env();
    for directive in ["walk=info", "mg_session=info"] {
        if let Ok(d) = directive.parse() {
            filter = filter.add_directive(d);
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(path: Option<&Path>) -> Result<LocalizationConfig> {
    let Some(path) = path else {
        return Ok(LocalizationConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Observer wrapper to print steps ──────────────────────────────────────────

struct PrintingObserver<W: OutputWriter> {
    inner:         BeliefOutputObserver<W>,
    summary_rows:  usize,
    snapshot_rows: usize,
    blocked:       usize,
    kicks:         usize,
}

impl<W: OutputWriter> PrintingObserver<W> {
    fn new(inner: BeliefOutputObserver<W>) -> Self {
        Self { inner, summary_rows: 0, snapshot_rows: 0, blocked: 0, kicks: 0 }
    }
}

impl<W: OutputWriter> SessionObserver for PrintingObserver<W> {
    fn on_step(&mut self, step: u64, report: &StepReport, belief: &BeliefGrid) {
        println!(
            "{:>4}  {:<5}  robot {:<8}  saw {:<5}  best {:<8} p={:.5}{}",
            step,
            report.direction,
            report.agent.to_string(),
            report.observed,
            report.best.to_string(),
            report.best_probability,
            if report.reset { "  (reset)" } else { "" },
        );
        self.summary_rows += 1;
        self.inner.on_step(step, report, belief);
    }

    fn on_snapshot(&mut self, step: u64, belief: &BeliefGrid, colors: &ColorMap, robot: Cell) {
        self.snapshot_rows += belief.dims().cell_count();
        self.inner.on_snapshot(step, belief, colors, robot);
    }

    fn on_blocked(&mut self, direction: Direction, robot: Cell) {
        println!("      {direction:<5}  blocked at {robot}");
        self.blocked += 1;
    }

    fn on_kick(&mut self, from: Cell, to: Cell) {
        println!("      kick   {from} -> {to}");
        self.kicks += 1;
    }

    fn on_setup(&mut self, colors: &ColorMap, robot: Cell) {
        println!("      setup  robot at {robot}");
        println!("{colors}");
    }

    fn on_run_end(&mut self, issued: u64) {
        self.inner.on_run_end(issued);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    // 1. Config.
    let config = load_config(args.config.as_deref())?;
    println!("=== walk — markov_grid localization ===");
    println!(
        "Grid: {}x{}  |  Seed: {}  |  Dark fraction: {}",
        config.rows, config.cols, config.seed, config.dark_fraction
    );
    println!();

    // 2. Session.
    let mut builder = SessionBuilder::new(config.clone());
    if let Some(path) = &args.colors {
        builder = builder.colors(load_color_map_csv(path, config.dims()?)?);
    }
    let mut session = builder.build()?;
    println!("Color map (. light, # dark), robot at {}:", session.robot());
    println!("{}", session.colors());

    // 3. Controller.
    let mut controller: Box<dyn Controller> = match &args.script {
        Some(script) => Box::new(script.parse::<ScriptedController>()?),
        None => Box::new(RandomWalk::new(args.random)),
    };

    // 4. Output.
    let out = args.out;
    std::fs::create_dir_all(&out)?;
    let writer = CsvWriter::new(&out)?;
    let mut obs = PrintingObserver::new(BeliefOutputObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    let issued = session.run(&mut controller, &mut obs)?;
    let elapsed = t0.elapsed();
    info!(issued, steps = session.steps(), "run complete");

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!("{issued} commands in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  moves: {}  blocked: {}  kicks: {}", obs.summary_rows, obs.blocked, obs.kicks);
    println!("  {} : {} rows", out.join(mg_output::csv::SNAPSHOT_FILE).display(), obs.snapshot_rows);
    println!("  {} : {} rows", out.join(mg_output::csv::SUMMARY_FILE).display(), obs.summary_rows);
    println!();

    // 7. Final belief.
    let (best, p) = session.belief().most_likely();
    println!("Final belief (robot bracketed), best guess {best} at {p:.5}:");
    print!("{}", render_grid(session.belief(), session.colors(), Some(session.robot())));

    Ok(())
}
