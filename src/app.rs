use std::path::PathBuf;

use crate::{config::AppConfig, host::Host};

pub struct ParamEditApp {
    host: Host,
    config: AppConfig,
}

impl ParamEditApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        document_path: Option<PathBuf>,
    ) -> Self {
        let host = Host::open(document_path.as_deref(), Some(cc.egui_ctx.clone()));
        Self { host, config }
    }
}

impl eframe::App for ParamEditApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window size for saving on exit
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_width = Some(rect.width());
            self.config.window_height = Some(rect.height());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.host.show(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(path) = self.host.loaded_path() {
            self.config.document_path = Some(path.to_path_buf());
        }
        self.config.save();
    }
}
