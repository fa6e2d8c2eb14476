// Fill palette parser

use crate::error::WidgetError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FillSpec {
    Many(Vec<String>),
    One(String),
}

/// Parse a fill attribute into a palette.
///
/// Accepts a JSON array of colors (`["red", "#eee"]`), a JSON string, or a
/// bare color name.
pub fn parse_fill(text: &str) -> Result<Vec<String>, WidgetError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(WidgetError::InvalidFill {
            value: text.to_string(),
            reason: "palette is empty".to_string(),
        });
    }

    if !trimmed.starts_with('[') && !trimmed.starts_with('"') {
        return Ok(vec![trimmed.to_string()]);
    }

    let spec: FillSpec = serde_json::from_str(trimmed).map_err(|e| WidgetError::InvalidFill {
        value: text.to_string(),
        reason: e.to_string(),
    })?;

    Ok(match spec {
        FillSpec::Many(colors) => colors,
        FillSpec::One(color) => vec![color],
    })
}
