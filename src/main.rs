#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bench_viewer::config::{ViewerConfig, load_config};
use bench_viewer::publish::FsSink;
use bench_viewer::{ViewerResult, ingest_cmd, now_string, pages_cmd, render_cmd, scan_cmd};

#[derive(Parser, Debug)]
#[command(name = "bench-viewer")]
#[command(about = "Index and publish benchmark result artifacts as a static site", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set BENCH_VIEWER_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    /// Path to config file (default: ./bench-viewer.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rebuild index.json and mirror result files and code snippets
    Ingest {
        /// Directory containing the benchmark result files
        #[arg(long)]
        artifacts: Option<PathBuf>,
        /// Publish directory for result files and index.json
        #[arg(long)]
        data: Option<PathBuf>,
        /// Benchmark source directory
        #[arg(long)]
        code_src: Option<PathBuf>,
        /// Publish directory for code snippets
        #[arg(long)]
        code: Option<PathBuf>,
        /// Highlight theme name
        #[arg(long)]
        theme: Option<String>,
        /// External highlighter command template (placeholders: {lang},{theme})
        #[arg(long)]
        highlight_command: Option<String>,
    },

    /// Render a report markdown file to an HTML fragment
    Render {
        /// Path to the markdown report (e.g., *-report-github.md)
        input: PathBuf,
        /// Write the fragment to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List how files in the artifacts directory are classified
    Scan {
        /// Directory to scan (default: artifacts_dir from config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Generate static entry pages from index.json
    Pages {
        /// Data directory holding index.json (default: data_dir from config)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Output directory for the pages
        #[arg(long, default_value = "public/pages")]
        out: PathBuf,
        /// Data directory href as seen from the pages
        #[arg(long, default_value = "../data")]
        data_href: String,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("BENCH_VIEWER_LOG").unwrap_or_else(|_| {
        if verbose { "bench_viewer=debug".to_string() } else { "bench_viewer=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn ingest(
    mut cfg: ViewerConfig,
    artifacts: Option<PathBuf>,
    data: Option<PathBuf>,
    code_src: Option<PathBuf>,
    code: Option<PathBuf>,
    theme: Option<String>,
    highlight_command: Option<String>,
) -> ViewerResult<()> {
    if let Some(v) = artifacts {
        cfg.artifacts_dir = v;
    }
    if let Some(v) = data {
        cfg.data_dir = v;
    }
    if let Some(v) = code_src {
        cfg.code_src_dir = v;
    }
    if let Some(v) = code {
        cfg.code_dir = v;
    }
    if let Some(v) = theme {
        cfg.highlight_theme = v;
    }
    if highlight_command.is_some() {
        cfg.highlight_command = highlight_command;
    }

    let highlighter = cfg.highlighter();
    let mut sink = FsSink::new();
    let summary = ingest_cmd::run(&cfg, highlighter.as_ref(), &mut sink, &now_string())?;

    eprintln!(
        "Indexed {} result(s) ({} skipped), mirrored {} file(s), published {} snippet(s) ({} highlighted)",
        summary.indexed,
        summary.skipped.len(),
        summary.results.copied,
        summary.code.copied,
        summary.code.highlighted
    );
    Ok(())
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|cfg| match cli.command {
        Commands::Ingest { artifacts, data, code_src, code, theme, highlight_command } => {
            ingest(cfg, artifacts, data, code_src, code, theme, highlight_command)
        }
        Commands::Render { input, out } => render_cmd::run(input, out),
        Commands::Scan { dir } => scan_cmd::run(dir.unwrap_or(cfg.artifacts_dir)),
        Commands::Pages { data, out, data_href } => {
            pages_cmd::run(data.unwrap_or(cfg.data_dir), out, data_href).map(|_| ())
        }
    });

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
