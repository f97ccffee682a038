use kaizen_hub::app::HubApp;
use kaizen_hub::logging;
use kaizen_hub::session::SessionState;
use kaizen_hub::settings::{Settings, MIN_WINDOW_SIZE, SETTINGS_FILE};

use eframe::egui;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(
        settings.debug_logging,
        settings.log_file.as_deref().map(PathBuf::from),
    );
    tracing::info!("starting continuous improvement knowledge hub");

    let (width, height) = settings.window_size();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([MIN_WINDOW_SIZE.0, MIN_WINDOW_SIZE.1]),
        ..Default::default()
    };

    let session = SessionState::new();
    eframe::run_native(
        "Kaizen Knowledge Hub",
        native_options,
        Box::new(move |cc| Box::new(HubApp::new(&cc.egui_ctx, &settings, session))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start the UI: {err}"))?;

    Ok(())
}
