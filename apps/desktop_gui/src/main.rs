mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::MicrogenApp;

/// Desktop window for generating SEO content briefs and articles.
#[derive(Parser, Debug)]
#[command(name = "microgen-gui")]
struct Args {
    /// Base URL of the generation service.
    #[arg(long)]
    service_url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();
    let settings = load_settings(args.service_url.as_deref())?;
    tracing::info!(service_url = %settings.service_url, "starting microgen-gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.service_url.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("microgen - Content Brief Generator")
            .with_inner_size([1024.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    let service_url = settings.service_url;
    eframe::run_native(
        "microgen",
        options,
        Box::new(move |cc| Ok(Box::new(MicrogenApp::new(cc, cmd_tx, ui_rx, service_url)))),
    )
    .map_err(|err| anyhow!("gui event loop failed: {err}"))
}
