//! Option keys, typed values and the per-widget option store.
//!
//! Every widget owns one [`OptionStore`]. Writes go through [`coerce`], which
//! turns raw attribute or property input into the value type the key
//! declares. Reads that miss the store fall back to the chart variant's
//! defaults (see [`crate::variant`]).

use crate::error::WidgetError;
use crate::parser::{parse_data, parse_fill, DataInput, DEFAULT_DELIMITER};
use std::collections::BTreeMap;

/// The fixed vocabulary of option keys across all chart variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    Data,
    Delimiter,
    Fill,
    Height,
    Width,
    Radius,
    InnerRadius,
    Max,
    Min,
    Stroke,
    StrokeWidth,
    Padding,
}

/// The declared type of an option's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Numbers,
    Text,
    Colors,
    Number,
}

impl OptionKey {
    pub const ALL: [OptionKey; 12] = [
        OptionKey::Data,
        OptionKey::Delimiter,
        OptionKey::Fill,
        OptionKey::Height,
        OptionKey::Width,
        OptionKey::Radius,
        OptionKey::InnerRadius,
        OptionKey::Max,
        OptionKey::Min,
        OptionKey::Stroke,
        OptionKey::StrokeWidth,
        OptionKey::Padding,
    ];

    /// The camelCase key, as used by properties.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Data => "data",
            OptionKey::Delimiter => "delimiter",
            OptionKey::Fill => "fill",
            OptionKey::Height => "height",
            OptionKey::Width => "width",
            OptionKey::Radius => "radius",
            OptionKey::InnerRadius => "innerRadius",
            OptionKey::Max => "max",
            OptionKey::Min => "min",
            OptionKey::Stroke => "stroke",
            OptionKey::StrokeWidth => "strokeWidth",
            OptionKey::Padding => "padding",
        }
    }

    pub fn from_key(key: &str) -> Option<OptionKey> {
        OptionKey::ALL.into_iter().find(|k| k.as_str() == key)
    }

    pub fn value_type(self) -> ValueType {
        match self {
            OptionKey::Data => ValueType::Numbers,
            OptionKey::Delimiter | OptionKey::Stroke => ValueType::Text,
            OptionKey::Fill => ValueType::Colors,
            _ => ValueType::Number,
        }
    }
}

/// A stored, typed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Numbers(Vec<f64>),
    Text(String),
    Colors(Vec<String>),
    Number(f64),
}

impl OptionValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            OptionValue::Numbers(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_colors(&self) -> Option<&[String]> {
        match self {
            OptionValue::Colors(v) => Some(v),
            _ => None,
        }
    }

    /// Attribute-string form of the value.
    pub fn to_attribute(&self) -> String {
        match self {
            OptionValue::Number(n) => n.to_string(),
            OptionValue::Text(s) => s.clone(),
            OptionValue::Numbers(v) => v.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(","),
            OptionValue::Colors(v) => serde_json::to_string(v).unwrap_or_default(),
        }
    }
}

/// Input to an option write, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
    Numbers(Vec<f64>),
    Colors(Vec<String>),
}

impl RawValue {
    fn type_name(&self) -> &'static str {
        match self {
            RawValue::Text(_) => "text",
            RawValue::Number(_) => "number",
            RawValue::Numbers(_) => "number list",
            RawValue::Colors(_) => "color list",
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<Vec<f64>> for RawValue {
    fn from(value: Vec<f64>) -> Self {
        RawValue::Numbers(value)
    }
}

/// Coerce a raw value into the type `key` declares.
///
/// `delimiter` is only consulted for data written as text.
pub fn coerce(key: OptionKey, raw: RawValue, delimiter: &str) -> Result<OptionValue, WidgetError> {
    let option = key.as_str();
    match (key.value_type(), raw) {
        (ValueType::Number, RawValue::Number(n)) => Ok(OptionValue::Number(n)),
        (ValueType::Number, RawValue::Text(text)) => crate::parser::lexer::number_token(&text)
            .map(OptionValue::Number)
            .ok_or(WidgetError::InvalidNumber { option, value: text }),
        (ValueType::Text, RawValue::Text(text)) => Ok(OptionValue::Text(text)),
        (ValueType::Text, RawValue::Number(n)) => Ok(OptionValue::Text(n.to_string())),
        (ValueType::Numbers, RawValue::Numbers(values)) => {
            Ok(OptionValue::Numbers(parse_data(&DataInput::Values(values), delimiter)?))
        }
        (ValueType::Numbers, RawValue::Text(text)) => {
            match parse_data(&DataInput::Text(text), delimiter) {
                Ok(values) => Ok(OptionValue::Numbers(values)),
                Err(crate::DataError::Empty) => Ok(OptionValue::Numbers(Vec::new())),
                Err(e) => Err(e.into()),
            }
        }
        (ValueType::Colors, RawValue::Colors(colors)) => Ok(OptionValue::Colors(colors)),
        (ValueType::Colors, RawValue::Text(text)) => Ok(OptionValue::Colors(parse_fill(&text)?)),
        (_, raw) => Err(WidgetError::TypeMismatch { option, got: raw.type_name() }),
    }
}

/// Per-widget mapping from option key to stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionStore {
    values: BTreeMap<OptionKey, OptionValue>,
}

impl OptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: OptionKey) -> Option<&OptionValue> {
        self.values.get(&key)
    }

    pub fn insert(&mut self, key: OptionKey, value: OptionValue) {
        self.values.insert(key, value);
    }

    /// The stored delimiter, or the default when unset or empty.
    pub fn delimiter(&self) -> &str {
        match self.get(OptionKey::Delimiter).and_then(OptionValue::as_text) {
            Some(d) if !d.is_empty() => d,
            _ => DEFAULT_DELIMITER,
        }
    }
}
