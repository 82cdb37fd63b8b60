mod logging;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use kira_scorethresh::input::load_scores;
use kira_scorethresh::numeric::decompose::DecompositionMethod;
use kira_scorethresh::report::ThresholdReport;
use kira_scorethresh::report::json::render_report_json;
use kira_scorethresh::report::text::render_report_text;
use kira_scorethresh::thresholds::{
    DEFAULT_SEED, HistMethodKind, METHOD_NAMES, ThresholderConfig,
};

#[derive(Debug, Parser)]
#[command(name = "kira-scorethresh")]
#[command(version, about = "Unsupervised thresholding of outlier decision scores")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Label a score file as inliers (0) and outliers (1)
    Run(RunArgs),
    /// List the available threshold methods
    Methods,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Aucp,
    Decomp,
    Fgd,
    Hist,
    Mcst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Score file: JSON array or whitespace/comma separated numbers (.gz allowed)
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = MethodArg::Hist)]
    method: MethodArg,

    #[arg(long, default_value_t = HistMethodKind::Otsu)]
    hist_method: HistMethodKind,

    /// Histogram bins (default: round(0.7 * n))
    #[arg(long)]
    nbins: Option<usize>,

    #[arg(long, default_value_t = DecompositionMethod::Pca)]
    decomp_method: DecompositionMethod,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// JSON method configuration, overrides the method flags
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Methods => {
            for name in METHOD_NAMES {
                println!("{name}");
            }
            for kind in HistMethodKind::ALL {
                println!("hist:{kind}");
            }
            Ok(())
        }
        Commands::Run(args) => run_threshold(&args),
    }
}

fn run_threshold(args: &RunArgs) -> Result<(), String> {
    let config = resolve_config(args)?;
    let scores = load_scores(&args.input).map_err(|e| e.to_string())?;

    let mut thresholder = config.build();
    let labels = thresholder.eval(&scores).map_err(|e| e.to_string())?;
    let threshold = thresholder
        .thresh()
        .ok_or_else(|| "threshold was not set".to_string())?;

    let report = ThresholdReport::new(&config, threshold, labels);
    tracing::info!(
        method = thresholder.name(),
        threshold,
        n_outliers = report.n_outliers,
        "thresholding finished"
    );

    let rendered = match args.format {
        ReportFormat::Text => render_report_text(&report),
        ReportFormat::Json => render_report_json(&report).map_err(|e| e.to_string())?,
    };
    write_output(args.out.as_deref(), &rendered)
}

fn resolve_config(args: &RunArgs) -> Result<ThresholderConfig, String> {
    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        return ThresholderConfig::from_json(&text)
            .map_err(|e| format!("invalid config {}: {e}", path.display()));
    }

    if args.nbins == Some(0) {
        return Err("--nbins must be at least 1".to_string());
    }

    Ok(match args.method {
        MethodArg::Aucp => ThresholderConfig::Aucp,
        MethodArg::Decomp => ThresholderConfig::Decomp {
            decomp_method: args.decomp_method,
        },
        MethodArg::Fgd => ThresholderConfig::Fgd,
        MethodArg::Hist => ThresholderConfig::Hist {
            hist_method: args.hist_method,
            nbins: args.nbins,
        },
        MethodArg::Mcst => ThresholderConfig::Mcst { seed: args.seed },
    })
}

fn write_output(out: Option<&Path>, rendered: &str) -> Result<(), String> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
            }
            std::fs::write(path, rendered)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))
        }
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
