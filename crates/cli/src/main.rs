use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use reuse_inventory::ComponentScanner;
use reuse_protocol::{CheckReport, ScanEntry, ScanReport};
use reuse_similarity::{EngineConfig, NormalizedKey, SimilarityEngine, Taxonomy};
use std::path::PathBuf;

mod hook;
mod render;

#[derive(Parser)]
#[command(name = "reuse-advisor")]
#[command(about = "Duplicate-detection advisor for UI component files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Similarity threshold below which matches are discarded
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Maximum number of ranked matches to report
    #[arg(long, global = true)]
    max_results: Option<usize>,

    /// Alternate taxonomy JSON file (concept tag -> synonym tokens)
    #[arg(long, global = true)]
    taxonomy: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a candidate component name against an existing component tree
    Check(CheckArgs),

    /// Run as an editor hook: JSON request on stdin, JSON response on stdout
    Hook(HookArgs),

    /// List the component inventory a check would run against
    Scan(ScanArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// Candidate component file name (e.g. ConfirmModal.tsx)
    name: String,

    /// Components directory to search
    #[arg(long, default_value = "src/components")]
    components_dir: PathBuf,

    /// Emit the machine-readable report instead of the advisory text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct HookArgs {
    /// Project root that relative hook paths resolve against
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

#[derive(Args)]
struct ScanArgs {
    /// Components directory to scan
    #[arg(long, default_value = "src/components")]
    components_dir: PathBuf,

    /// Emit the inventory as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hook mode always talks JSON on stdout; keep logs on stderr and quiet.
    let json_output = match &cli.command {
        Commands::Hook(_) => true,
        Commands::Check(args) => args.json,
        Commands::Scan(args) => args.json,
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || json_output {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let engine = build_engine(&cli)?;

    match cli.command {
        Commands::Check(args) => run_check(args, &engine),
        Commands::Hook(args) => hook::run(&args.root, &engine),
        Commands::Scan(args) => run_scan(args),
    }
}

fn build_engine(cli: &Cli) -> Result<SimilarityEngine> {
    let taxonomy = match &cli.taxonomy {
        Some(path) => Taxonomy::from_file(path)
            .with_context(|| format!("Failed to load taxonomy {}", path.display()))?,
        None => Taxonomy::builtin_ui(),
    };

    let mut config = EngineConfig::default();
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    if let Some(max_results) = cli.max_results {
        config.max_results = max_results;
    }

    Ok(SimilarityEngine::new(taxonomy, config))
}

fn run_check(args: CheckArgs, engine: &SimilarityEngine) -> Result<()> {
    let inventory = ComponentScanner::new(&args.components_dir).collect();
    let matches = engine.rank(&args.name, &inventory);

    if args.json {
        let report = CheckReport {
            target: args.name.clone(),
            normalized: NormalizedKey::from_raw(&args.name).as_str().to_string(),
            matches: matches.iter().map(render::to_match_entry).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No similar components found for '{}'.", args.name);
    } else {
        println!("{}", render::check_advisory(&args.name, &matches));
    }
    Ok(())
}

fn run_scan(args: ScanArgs) -> Result<()> {
    let inventory = ComponentScanner::new(&args.components_dir).collect();

    if args.json {
        let report = ScanReport {
            root: args.components_dir.display().to_string(),
            components: inventory
                .iter()
                .map(|item| ScanEntry {
                    name: item.display_name.clone(),
                    path: item.relative_path.clone(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} component(s) under {}",
        inventory.len(),
        args.components_dir.display()
    );
    for item in &inventory {
        println!("  {}", item.relative_path);
    }
    Ok(())
}
