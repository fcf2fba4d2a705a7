mod app;
mod config;
mod document;
mod editor;
mod host;
mod model;

use app::ParamEditApp;
use config::AppConfig;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load();
    let document_path = config::resolve_document_path(
        std::env::args().nth(1),
        std::env::var(config::DOCUMENT_ENV).ok(),
        &config,
    );
    if let Some(path) = &document_path {
        tracing::info!(path = %path.display(), "opening document");
    }

    let width = config.window_width.unwrap_or(900.0);
    let height = config.window_height.unwrap_or(520.0);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Parameter Editor")
            .with_app_id("paramedit")
            .with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "paramedit",
        native_options,
        Box::new(|cc| Ok(Box::new(ParamEditApp::new(cc, config, document_path)))),
    )
}
