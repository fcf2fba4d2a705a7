use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::editor::Editor;

const EMPTY_EXPORT_HINT: &str = "Press \"Export\" to see the current model";

/// Owns the editor and the text of the last export.
pub struct Host {
    editor: Editor,
    display: String,
    status: String,
    document_input: String,
    loaded_path: Option<PathBuf>,
    repaint: Option<egui::Context>,
}

impl Host {
    pub fn new(document: Document, repaint: Option<egui::Context>) -> Self {
        let editor = build_editor(document, repaint.as_ref());
        Self {
            editor,
            display: String::new(),
            status: String::new(),
            document_input: String::new(),
            loaded_path: None,
            repaint,
        }
    }

    /// Starts from the document at `path`, or the sample when there is none or it fails to load.
    pub fn open(path: Option<&Path>, repaint: Option<egui::Context>) -> Self {
        let mut host = Self::new(Document::sample(), repaint);
        if let Some(path) = path {
            host.document_input = path.display().to_string();
            host.try_load(path);
        }
        host
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn loaded_path(&self) -> Option<&Path> {
        self.loaded_path.as_deref()
    }

    /// Serializes the editor's current model into the display text.
    pub fn export(&mut self) -> anyhow::Result<()> {
        let model = self.editor().model();
        self.display = serde_json::to_string_pretty(&model)?;
        tracing::debug!(values = model.param_values.len(), "model exported");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.display.clear();
    }

    /// Swaps in a document read from `path`. On failure the current editor stays.
    pub fn load_document(&mut self, path: &Path) -> anyhow::Result<()> {
        let document = Document::load(path)?;
        tracing::info!(path = %path.display(), params = document.params.len(), "document loaded");
        self.editor = build_editor(document, self.repaint.as_ref());
        self.display.clear();
        self.loaded_path = Some(path.to_path_buf());
        self.document_input = path.display().to_string();
        self.status = format!("Loaded {}", path.display());
        Ok(())
    }

    fn load_from_input(&mut self) {
        let raw = self.document_input.trim().to_string();
        if raw.is_empty() {
            self.status = "Document path is empty".to_string();
            return;
        }
        self.try_load(Path::new(&raw));
    }

    fn try_load(&mut self, path: &Path) {
        if let Err(err) = self.load_document(path) {
            tracing::warn!("failed to load document: {err:#}");
            self.status = format!("Could not load document: {err:#}");
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Product parameter editor");
        ui.horizontal(|ui| {
            ui.label("Document");
            ui.add(
                egui::TextEdit::singleline(&mut self.document_input)
                    .hint_text("path/to/document.json")
                    .desired_width(320.0)
                    .font(egui::TextStyle::Monospace),
            );
            if ui.button("Load").clicked() {
                self.load_from_input();
            }
        });
        if !self.status().is_empty() {
            ui.label(egui::RichText::new(self.status()).weak());
        }
        ui.separator();

        ui.columns(2, |cols| {
            self.editor_mut().show(&mut cols[0]);

            let ui = &mut cols[1];
            ui.horizontal(|ui| {
                if ui.button("Export").clicked() {
                    if let Err(err) = self.export() {
                        tracing::warn!("export failed: {err:#}");
                        self.status = format!("Export failed: {err:#}");
                    }
                }
                if ui.button("Clear").clicked() {
                    self.clear();
                }
                if ui
                    .add_enabled(!self.display().is_empty(), egui::Button::new("Copy"))
                    .clicked()
                {
                    ui.ctx().copy_text(self.display().to_string());
                }
            });
            ui.add_space(8.0);

            if self.display().is_empty() {
                ui.label(egui::RichText::new(EMPTY_EXPORT_HINT).weak());
            } else {
                egui::ScrollArea::vertical()
                    .id_salt("export_scroll")
                    .show(ui, |ui| {
                        ui.monospace(self.display());
                    });
            }
        });
    }
}

fn build_editor(document: Document, repaint: Option<&egui::Context>) -> Editor {
    let mut editor = Editor::new(document.params, document.model);
    if let Some(ctx) = repaint {
        let ctx = ctx.clone();
        editor.subscribe(move |_, _| ctx.request_repaint());
    }
    editor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn display_starts_empty() {
        let host = Host::new(Document::sample(), None);
        assert!(host.display().is_empty());
        assert!(host.loaded_path().is_none());
    }

    #[test]
    fn export_renders_pretty_json_of_current_model() {
        let mut host = Host::new(Document::sample(), None);
        host.editor_mut().on_change(2, "midi");
        host.export().unwrap();

        let parsed: Model = serde_json::from_str(host.display()).unwrap();
        assert_eq!(parsed, host.editor().model());
        assert!(host.display().contains("\"paramValues\""));
        assert!(host.display().contains("\"midi\""));
        assert!(host.display().contains('\n'));
    }

    #[test]
    fn clear_empties_display() {
        let mut host = Host::new(Document::sample(), None);
        host.export().unwrap();
        assert!(!host.display().is_empty());
        host.clear();
        assert!(host.display().is_empty());
    }

    #[test]
    fn export_does_not_change_editor_state() {
        let mut host = Host::new(Document::sample(), None);
        let before = host.editor().model();
        host.export().unwrap();
        host.export().unwrap();
        assert_eq!(host.editor().model(), before);
    }

    #[test]
    fn failed_load_keeps_current_editor() {
        let mut host = Host::new(Document::sample(), None);
        host.editor_mut().on_change(1, "office");
        host.export().unwrap();

        let missing = std::env::temp_dir().join("paramedit-no-such-document.json");
        assert!(host.load_document(&missing).is_err());
        assert_eq!(host.editor().values().get(1), Some("office"));
        assert!(!host.display().is_empty());
    }

    #[test]
    fn load_replaces_editor_and_clears_display() {
        let dir = std::env::temp_dir().join(format!("paramedit-host-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("coat.json");
        std::fs::write(
            &path,
            r#"{"params": [{"id": 7, "name": "Lining", "type": "string"}]}"#,
        )
        .unwrap();

        let mut host = Host::new(Document::sample(), None);
        host.export().unwrap();
        host.load_document(&path).unwrap();

        assert!(host.display().is_empty());
        assert_eq!(host.loaded_path(), Some(path.as_path()));
        assert_eq!(host.editor().params().len(), 1);
        assert_eq!(host.editor().values().get(7), Some(""));
        assert!(host.status().starts_with("Loaded"));
    }

    #[test]
    fn blank_input_reports_status() {
        let mut host = Host::new(Document::sample(), None);
        host.document_input = "   ".to_string();
        host.load_from_input();
        assert_eq!(host.status(), "Document path is empty");
    }

    #[test]
    fn open_without_path_uses_sample() {
        let host = Host::open(None, None);
        assert_eq!(host.editor().model(), Document::sample().model);
        assert!(host.status().is_empty());
    }

    #[test]
    fn open_with_unreadable_path_explains_fallback() {
        let missing = std::env::temp_dir().join("paramedit-missing-at-startup.json");
        let host = Host::open(Some(&missing), None);

        assert!(host.status().starts_with("Could not load document"));
        assert!(host.status().contains("paramedit-missing-at-startup.json"));
        assert!(host.loaded_path().is_none());
        assert_eq!(host.editor().model(), Document::sample().model);
        assert_eq!(host.document_input, missing.display().to_string());
    }
}
