mod app;
mod paint;

use anyhow::Context as _;
use clap::Parser;
use eframe::egui;
use shared::settings::load_settings;

use crate::app::{window_defaults, AnimatedLabelApp, WINDOW_TITLE};

#[derive(Parser, Debug)]
struct Args {
    /// Milliseconds between repaints.
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Log filter directive, e.g. `debug` or `animation=trace`.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(window_defaults());
    if let Some(tick_ms) = args.tick_ms {
        settings.tick_ms = tick_ms;
    }
    if let Some(filter) = args.log_level {
        settings.log_filter = filter;
    }

    shared::telemetry::init(&settings.log_filter)?;
    settings.validate().context("invalid animated label settings")?;
    tracing::info!(
        tick_ms = settings.tick_ms,
        background = %settings.background,
        foreground = %settings.foreground,
        "starting animated label window"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&settings.window_title)
            .with_inner_size(settings.inner_size()),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(AnimatedLabelApp::new(&cc.egui_ctx, &settings)?))),
    )
    .map_err(|err| anyhow::anyhow!("animated label window failed: {err}"))?;

    tracing::info!("animated label window closed");
    Ok(())
}
