use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use nc_core::inspect::LayerKind;
use nc_core::ports::{AppDirsPort, ScanViewPort};
use nc_core::ScanContext;
use nc_host::adapters::ConsoleView;
use nc_host::bootstrap::{
    config::{load_config_or_default, resolve_config_path},
    tracing::init_tracing_subscriber,
    wiring::{app_dirs_adapter, resolve_app_paths},
};
use nc_host::commands::{dto, history, model_info, report, scan};
use nc_host::AppRuntime;
use nc_infra::DirsAppDirsAdapter;

#[derive(Parser)]
#[command(name = "notecheck")]
#[command(version, about = "Currency note authenticity scanner", long_about = None)]
struct Cli {
    /// Config file; defaults to $NC_CONFIG, then config.toml in the data dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print command output as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a note image
    Scan {
        file: PathBuf,
        /// Context label sent with the image
        #[arg(short, long, default_value = "default")]
        context: String,
    },
    /// Scan the server's reference note
    Demo,
    /// Show scan history, most recent first
    History {
        /// Read the history kept by the classification service
        #[arg(long)]
        server: bool,
    },
    /// Show session counters
    Stats,
    /// Clear history and session counters
    ClearHistory,
    /// Scan a note and print its authenticity report
    Report {
        file: PathBuf,
        /// Forensic layer to compare against: edges, heatmap, noise, contrast
        #[arg(short, long)]
        layer: Option<LayerKind>,
        #[arg(short, long, default_value = "default")]
        context: String,
    },
    /// Describe the classification model
    ModelInfo,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => resolve_config_path(&DirsAppDirsAdapter::new())?,
    };
    let config = load_config_or_default(config_path)?;

    let paths = resolve_app_paths(&config)?;
    if let Err(err) = init_tracing_subscriber(&paths.logs_dir) {
        eprintln!("Failed to initialize tracing: {err}");
    }
    info!(
        data_dir = %app_dirs_adapter(&config)
            .get_app_dirs()
            .map(|d| d.app_data_root.display().to_string())
            .unwrap_or_default(),
        "notecheck starting"
    );

    // JSON mode keeps stdout for the DTO alone.
    let view: Arc<dyn ScanViewPort> = if cli.json {
        Arc::new(ConsoleView::with_writer(Box::new(std::io::sink())))
    } else {
        Arc::new(ConsoleView::stdout())
    };
    let runtime = AppRuntime::new(config, view).await?;

    let outcome = run(&runtime, cli.command, cli.json).await;
    if let Err(message) = &outcome {
        error!(%message, "command failed");
    }
    outcome.map_err(|message| anyhow!(message))
}

async fn run(runtime: &AppRuntime, command: Commands, json: bool) -> Result<(), String> {
    match command {
        Commands::Scan { file, context } => {
            let result = scan::scan_file(runtime, &file, ScanContext::from(context)).await?;
            if json {
                print_json(&result)?;
            }
        }
        Commands::Demo => {
            let result = scan::scan_demo(runtime).await?;
            if json {
                print_json(&result)?;
            }
        }
        Commands::History { server: false } => {
            let listed = history::list_history(runtime).await?;
            if json {
                print_json(&listed)?;
            } else {
                print_entries(&listed.entries);
                println!(
                    "{} real, {} fake · session: {} scans, {} verified, {} total",
                    listed.real,
                    listed.fake,
                    listed.session.scans,
                    listed.session.rate_text,
                    listed.session.total_text
                );
            }
        }
        Commands::History { server: true } => {
            let entries = history::list_server_history(runtime).await?;
            if json {
                print_json(&entries)?;
            } else {
                print_entries(&entries);
            }
        }
        Commands::Stats => {
            let stats = history::session_stats(runtime).await?;
            if json {
                print_json(&stats)?;
            } else {
                println!("Notes scanned : {}", stats.scans);
                println!("Verified rate : {}", stats.rate_text);
                println!("Verified total: {}", stats.total_text);
            }
        }
        Commands::ClearHistory => {
            let cleared = history::clear_history(runtime).await?;
            if json {
                print_json(&cleared)?;
            } else {
                println!("History cleared.");
            }
        }
        Commands::Report {
            file,
            layer,
            context,
        } => {
            let report =
                report::inspect_file(runtime, &file, ScanContext::from(context), layer).await?;
            if json {
                print_json(&report)?;
            } else {
                println!("\n{}", report.certificate);
                println!(
                    "Comparison: original vs {} (slider at {:.0}px)",
                    report.comparison.overlay, report.comparison.slider_position
                );
                if let Some(warning) = &report.comparison.warning {
                    println!("Warning: {warning}");
                }
            }
        }
        Commands::ModelInfo => {
            let info = model_info::get_model_info(runtime).await?;
            if json {
                print_json(&info)?;
            } else {
                println!("Model   : {} {}", info.model_type, info.version);
                println!(
                    "Accuracy: {}",
                    info.accuracy.as_deref().unwrap_or("unknown")
                );
                for limitation in &info.limitations {
                    println!("  - {limitation}");
                }
            }
        }
    }
    Ok(())
}

fn print_entries(entries: &[dto::HistoryEntryDto]) {
    if entries.is_empty() {
        println!("No scans yet.");
        return;
    }
    for entry in entries {
        println!(
            "{}  {:<4} {:>5.1}%  {}{}",
            entry.timestamp,
            entry.label,
            entry.confidence,
            entry.scan_id,
            entry
                .denomination
                .as_deref()
                .map(|d| format!("  ({d})"))
                .unwrap_or_default()
        );
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}
