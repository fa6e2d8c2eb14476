// Data parser: delimited text or explicit values into a chart dataset

use super::lexer::number_token;
use crate::error::DataError;

/// Ordered chart values, in source order.
pub type Dataset = Vec<f64>;

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = ",";

/// A data assignment, either free text or already-typed values.
#[derive(Debug, Clone, PartialEq)]
pub enum DataInput {
    Text(String),
    Values(Vec<f64>),
}

impl From<&str> for DataInput {
    fn from(text: &str) -> Self {
        DataInput::Text(text.to_string())
    }
}

impl From<Vec<f64>> for DataInput {
    fn from(values: Vec<f64>) -> Self {
        DataInput::Values(values)
    }
}

/// Turn a data assignment into a dataset.
///
/// Values are copied through untouched; text goes through [`parse_dataset`].
pub fn parse_data(input: &DataInput, delimiter: &str) -> Result<Dataset, DataError> {
    match input {
        DataInput::Values(values) => Ok(values.clone()),
        DataInput::Text(text) => parse_dataset(text, delimiter),
    }
}

/// Parse delimited text into a dataset.
///
/// When the delimiter does not split the text, `a/b` ratio notation is tried
/// and expands to `[a/b, (b-a)/b]`. Anything else must be a single number.
pub fn parse_dataset(text: &str, delimiter: &str) -> Result<Dataset, DataError> {
    if text.trim().is_empty() {
        return Err(DataError::Empty);
    }

    let delimiter = if delimiter.is_empty() { DEFAULT_DELIMITER } else { delimiter };
    let tokens: Vec<&str> = text.split(delimiter).collect();

    if tokens.len() == 1 {
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() == 2 {
            return parse_ratio(text, parts[0], parts[1]);
        }
        return Ok(vec![parse_token(text, 0)?]);
    }

    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| parse_token(token, index))
        .collect()
}

fn parse_ratio(text: &str, numerator: &str, denominator: &str) -> Result<Dataset, DataError> {
    let a = parse_token(numerator, 0)?;
    let b = parse_token(denominator, 1)?;

    if b == 0.0 {
        return Err(DataError::ZeroDenominator { text: text.trim().to_string() });
    }

    Ok(vec![a / b, (b - a) / b])
}

fn parse_token(token: &str, index: usize) -> Result<f64, DataError> {
    number_token(token).ok_or_else(|| DataError::Malformed {
        token: token.trim().to_string(),
        index,
    })
}
