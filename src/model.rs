use serde::{Deserialize, Serialize};

pub type ParamId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Value kind of a parameter. Only free-text parameters exist today.
pub enum ParamType {
    #[default]
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Definition of one editable field.
pub struct Parameter {
    pub id: ParamId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ParamType,
}

impl Parameter {
    pub fn text(id: ParamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ParamType::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterValue {
    pub param_id: ParamId,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Opaque color entry carried through the editor unchanged.
pub struct Color {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// The edited payload: current parameter values plus passthrough colors.
pub struct Model {
    pub param_values: Vec<ParameterValue>,
    pub colors: Vec<Color>,
}
