use crate::parser::DataInput;
use crate::registry::Registry;
use crate::widget::Widget;
use crate::RenderOptions;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Widget data in a config file: delimited text or a JSON array of numbers.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DataSpec {
    Text(String),
    Values(Vec<f64>),
}

/// A whole widget described as JSON, e.g.
/// `{"tag": "wc-bar", "data": "1,-2,3", "attributes": {"height": 24}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    pub tag: String,
    #[serde(default)]
    pub data: Option<DataSpec>,
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    #[serde(default)]
    pub render: RenderOptions,
}

impl WidgetConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid widget config")
    }

    /// Build a connected widget: attributes are applied first, then the data
    /// is attached the way an element's text content would be.
    pub fn build(&self, registry: &Registry) -> Result<Widget> {
        let mut widget = registry.create(&self.tag)?;

        for (name, value) in &self.attributes {
            let value = attribute_string(name, value)?;
            widget
                .attribute_changed(name, None, Some(&value))
                .with_context(|| format!("Failed to apply attribute '{}'", name))?;
        }

        match &self.data {
            Some(DataSpec::Text(text)) => widget.connect(text)?,
            Some(DataSpec::Values(values)) => {
                widget.connect("")?;
                widget.set_data(DataInput::Values(values.clone()))?;
            }
            None => widget.connect("")?,
        }

        Ok(widget)
    }
}

/// Convert a JSON attribute value into the string an element attribute holds.
pub fn attribute_string(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(_) => Ok(value.to_string()),
        _ => Err(anyhow!("Unsupported value type for attribute '{}'", name)),
    }
}
