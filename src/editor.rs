use std::collections::BTreeMap;

use crate::model::{Color, Model, ParamId, Parameter, ParameterValue};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Current text of every known parameter, keyed by id.
///
/// The key set is fixed at construction; edits only ever replace values.
pub struct ParamValues {
    values: BTreeMap<ParamId, String>,
}

impl ParamValues {
    /// Seeds one entry per parameter, taking the model's value when present.
    pub fn new(params: &[Parameter], model: &Model) -> Self {
        let mut values: BTreeMap<ParamId, String> =
            params.iter().map(|p| (p.id, String::new())).collect();
        // Later duplicates overwrite earlier ones.
        for pv in &model.param_values {
            if let Some(slot) = values.get_mut(&pv.param_id) {
                slot.clone_from(&pv.value);
            }
        }
        Self { values }
    }

    pub fn get(&self, id: ParamId) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Replaces the value for `id`. Returns false for unknown ids.
    pub fn apply_change(&mut self, id: ParamId, value: &str) -> bool {
        match self.values.get_mut(&id) {
            Some(slot) => {
                slot.clear();
                slot.push_str(value);
                true
            }
            None => false,
        }
    }

    /// Flattens the mapping back into a model, in ascending id order.
    pub fn to_model(&self, colors: &[Color]) -> Model {
        Model {
            param_values: self
                .values
                .iter()
                .map(|(&param_id, value)| ParameterValue {
                    param_id,
                    value: value.clone(),
                })
                .collect(),
            colors: colors.to_vec(),
        }
    }
}

type ChangeListener = Box<dyn FnMut(ParamId, &str)>;

/// Widget id of the text input bound to parameter `id`.
pub fn input_id(id: ParamId) -> egui::Id {
    egui::Id::new(("param_input", id))
}

/// Form over a fixed parameter list. Rendering is separate from the state it edits.
pub struct Editor {
    params: Vec<Parameter>,
    values: ParamValues,
    colors: Vec<Color>,
    listeners: Vec<ChangeListener>,
}

impl Editor {
    pub fn new(params: Vec<Parameter>, model: Model) -> Self {
        let values = ParamValues::new(&params, &model);
        tracing::debug!(params = values.len(), "editor initialized");
        Self {
            params,
            values,
            colors: model.colors,
            listeners: Vec::new(),
        }
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn values(&self) -> &ParamValues {
        &self.values
    }

    /// Registers a callback fired after every accepted edit.
    pub fn subscribe(&mut self, listener: impl FnMut(ParamId, &str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn on_change(&mut self, id: ParamId, value: &str) -> bool {
        if !self.values.apply_change(id, value) {
            tracing::debug!(id, "ignoring change for unknown parameter");
            return false;
        }
        tracing::debug!(id, value, "parameter changed");
        for listener in &mut self.listeners {
            listener(id, value);
        }
        true
    }

    pub fn model(&self) -> Model {
        self.values.to_model(&self.colors)
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Parameters");
        ui.separator();

        let mut edits: Vec<(ParamId, String)> = Vec::new();
        egui::Grid::new("param_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for param in self.params() {
                    ui.label(&param.name);
                    let mut text = self.values().get(param.id).unwrap_or_default().to_string();
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut text)
                            .id(input_id(param.id))
                            .desired_width(240.0),
                    );
                    if resp.changed() {
                        edits.push((param.id, text));
                    }
                    ui.end_row();
                }
            });

        for (id, text) in edits {
            self.on_change(id, &text);
        }
    }
}
