use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use event_report_rust::{app, cli, config, error, export, lifecycle, store};

use cli::{Cli, Commands};
use config::Config;
use error::{ReportError, Result};
use lifecycle::Finalizer;
use store::ReportStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    // Per-invocation override; not written back to the config file.
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    match cli.command {
        Commands::New { photo, no_delay } => {
            println!("📋 event-report - New Event Report\n");

            let mut store = ReportStore::open(config.reports_path()?);
            let mut finalizer = Finalizer::new();
            let delay = if no_delay {
                Duration::ZERO
            } else {
                Duration::from_millis(config.submit_delay_ms)
            };

            app::run_new_report(&mut store, &mut finalizer, delay, photo.as_deref()).await?;

            println!("\n✅ Saved ({} reports total)", store.len());
        }

        Commands::Recent { count } => {
            let store = ReportStore::open(config.reports_path()?);
            let n = count.unwrap_or(config.recent_count);
            let recent = store.recent(n);

            println!("🕒 Recent Reports ({} of {})\n", recent.len(), store.len());
            for report in recent {
                app::print_report_card(report);
            }
        }

        Commands::List => {
            let store = ReportStore::open(config.reports_path()?);

            println!("📚 All Reports ({})\n", store.len());
            for report in store.all() {
                app::print_report_card(report);
            }
        }

        Commands::Export { id, format, output } => {
            let store = ReportStore::open(config.reports_path()?);
            let report = store
                .get(&id)
                .ok_or_else(|| ReportError::ReportNotFound(id.clone()))?;

            println!("📄 Exporting report {} ({})\n", report.id, format);
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            let written = export::export_report(report, format, &output)?;

            for path in &written {
                println!("✔ Wrote {}", path.display());
            }
        }

        Commands::Config { set_data_dir, show } => {
            let mut config = config;

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ Data directory updated");
            }

            if show {
                println!("Settings:");
                println!("  Config file: {}", Config::config_path()?.display());
                println!("  Data directory: {}", config.data_dir()?.display());
                println!("  Recent view count: {}", config.recent_count);
                println!("  Submit delay: {}ms", config.submit_delay_ms);
            }
        }
    }

    Ok(())
}
