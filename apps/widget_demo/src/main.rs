mod controller;
mod ui;

use anyhow::Context as _;
use clap::Parser;
use eframe::egui;
use shared::settings::load_settings;

use crate::ui::{window_defaults, WidgetDemoApp, WINDOW_TITLE};

#[derive(Parser, Debug)]
struct Args {
    /// Log filter directive, e.g. `debug`.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(window_defaults());
    if let Some(filter) = args.log_level {
        settings.log_filter = filter;
    }

    shared::telemetry::init(&settings.log_filter)?;
    settings.validate().context("invalid widget demo settings")?;
    tracing::info!(
        background = %settings.background,
        foreground = %settings.foreground,
        "starting widget demo window"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&settings.window_title)
            .with_inner_size(settings.inner_size())
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(WidgetDemoApp::new(&settings)))),
    )
    .map_err(|err| anyhow::anyhow!("widget demo window failed: {err}"))?;

    tracing::info!("widget demo window closed");
    Ok(())
}
