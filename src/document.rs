use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::model::{Model, Parameter, ParameterValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Parameter definitions together with the model a form starts from.
pub struct Document {
    pub params: Vec<Parameter>,
    #[serde(default)]
    pub model: Model,
}

impl Document {
    /// Built-in dress catalogue entry used when no document is configured.
    pub fn sample() -> Self {
        Self {
            params: vec![Parameter::text(1, "Purpose"), Parameter::text(2, "Length")],
            model: Model {
                param_values: vec![
                    ParameterValue {
                        param_id: 1,
                        value: "casual".to_string(),
                    },
                    ParameterValue {
                        param_id: 2,
                        value: "maxi".to_string(),
                    },
                ],
                colors: Vec::new(),
            },
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let doc = serde_json::from_str(&json)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(doc)
    }
}
