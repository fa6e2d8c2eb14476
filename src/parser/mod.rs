// Text parsers for widget data, fill palettes and attribute names

pub mod attribute;
pub mod dataset;
pub mod fill;
pub mod lexer;

// Public API re-exports
pub use attribute::camel_case;
pub use dataset::{parse_data, parse_dataset, DataInput, Dataset, DEFAULT_DELIMITER};
pub use fill::parse_fill;
