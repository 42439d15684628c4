//! Church Admin - desktop console for members, departments, events and prayer requests.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use church_admin::config::{AppConfig, ConfigLoadResult};
use church_admin::ui::App;

/// Desktop administrative console for a church.
#[derive(Parser)]
#[command(name = "church-admin")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,
}

/// Log to stderr and, when the log directory is writable, to a daily file.
fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_dir = AppConfig::log_dir();
    let file = match std::fs::create_dir_all(&log_dir) {
        Ok(()) => Some(tracing_appender::non_blocking(tracing_appender::rolling::daily(
            &log_dir,
            "church-admin.log",
        ))),
        Err(e) => {
            eprintln!("File logging disabled, cannot create {}: {e}", log_dir.display());
            None
        }
    };
    let (writer, guard) = match file {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(writer.map(|w| fmt::layer().with_writer(w).with_ansi(false).with_target(false)))
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging();

    tracing::info!("Church Admin starting...");

    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let (config, warning) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            (config, None)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, writing defaults");
            let config = AppConfig::default();
            if let Err(e) = config.save(&config_path) {
                tracing::warn!("Could not write default config: {}", e);
            }
            (config, None)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid, using defaults: {}", e);
            (AppConfig::default(), Some(e.to_string()))
        }
    };

    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        tracing::error!("Failed to create tokio runtime: {}", e);
        eframe::Error::AppCreation(Box::new(e))
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.ui.organization_name.clone())
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "church-admin",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(App::new(config, rt, warning)))
        }),
    )
}
