//! Chart variants.
//!
//! A [`ChartKind`] carries everything that differs between pie, donut, line
//! and bar widgets: the default option table, computed defaults, the
//! observed attribute vocabulary and whether the surface is isolated.

use crate::options::{OptionKey, OptionStore, OptionValue};
use crate::parser::DEFAULT_DELIMITER;
use crate::widget::Isolation;

const BASE_FILL: [&str; 3] = ["#ff9900", "#fff4dd", "#ffd592"];
const BASE_SIZE: f64 = 16.0;
const PIE_RADIUS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Pie,
    Donut,
    Line,
    Bar,
}

impl ChartKind {
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Donut => "donut",
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        }
    }

    pub fn from_name(name: &str) -> Option<ChartKind> {
        match name.to_ascii_lowercase().as_str() {
            "pie" => Some(ChartKind::Pie),
            "donut" => Some(ChartKind::Donut),
            "line" => Some(ChartKind::Line),
            "bar" => Some(ChartKind::Bar),
            _ => None,
        }
    }

    /// Option keys that attribute changes may write.
    pub fn observed(self) -> &'static [OptionKey] {
        use OptionKey::*;
        match self {
            ChartKind::Pie => &[Delimiter, Fill, Height, Radius, Width],
            ChartKind::Donut => &[Delimiter, Fill, Height, Radius, Width, InnerRadius],
            ChartKind::Line => &[Delimiter, Fill, Height, Max, Min, Stroke, StrokeWidth, Width],
            ChartKind::Bar => &[Delimiter, Fill, Height, Max, Min, Padding, Width],
        }
    }

    /// Whether `key` belongs to this variant at all (observed or property-only).
    pub fn accepts(self, key: OptionKey) -> bool {
        key == OptionKey::Data || self.observed().contains(&key)
    }

    pub fn isolation(self) -> Isolation {
        match self {
            ChartKind::Line => Isolation::Light,
            _ => Isolation::Shadow,
        }
    }

    /// The options a freshly constructed widget starts with.
    pub fn initial_options(self) -> OptionStore {
        let mut store = OptionStore::new();
        store.insert(OptionKey::Data, OptionValue::Numbers(Vec::new()));

        let fill: &[&str] = match self {
            ChartKind::Pie | ChartKind::Donut => &BASE_FILL,
            ChartKind::Line => &["#c6d9fd"],
            ChartKind::Bar => &["#4d89f9"],
        };
        store.insert(OptionKey::Fill, colors(fill));

        match self {
            ChartKind::Pie | ChartKind::Donut => {
                store.insert(OptionKey::Radius, OptionValue::Number(PIE_RADIUS));
            }
            ChartKind::Line => {
                set_sparkline_frame(&mut store);
                store.insert(OptionKey::Stroke, OptionValue::Text("#4d89f9".to_string()));
                store.insert(OptionKey::StrokeWidth, OptionValue::Number(1.0));
            }
            ChartKind::Bar => {
                set_sparkline_frame(&mut store);
                store.insert(OptionKey::Padding, OptionValue::Number(0.1));
            }
        }

        store
    }

    /// Resolve `key` against `store`, falling back to this variant's
    /// defaults. Computed defaults are evaluated on every call.
    pub fn resolve(self, key: OptionKey, store: &OptionStore) -> Option<OptionValue> {
        if key == OptionKey::InnerRadius && self == ChartKind::Pie {
            return Some(OptionValue::Number(0.0));
        }

        if let Some(value) = store.get(key) {
            return Some(value.clone());
        }

        let radius = || self.number(OptionKey::Radius, store).unwrap_or(PIE_RADIUS);
        match (self, key) {
            (_, OptionKey::Delimiter) => Some(OptionValue::Text(DEFAULT_DELIMITER.to_string())),
            (ChartKind::Pie | ChartKind::Donut, OptionKey::Width | OptionKey::Height) => {
                Some(OptionValue::Number(radius() * 2.0))
            }
            (_, OptionKey::Width | OptionKey::Height) => Some(OptionValue::Number(BASE_SIZE)),
            (ChartKind::Pie | ChartKind::Donut, OptionKey::Radius) => Some(OptionValue::Number(PIE_RADIUS)),
            (ChartKind::Donut, OptionKey::InnerRadius) => Some(OptionValue::Number(radius() / 2.0)),
            _ => None,
        }
    }

    pub fn number(self, key: OptionKey, store: &OptionStore) -> Option<f64> {
        self.resolve(key, store).and_then(|v| v.as_number())
    }
}

fn colors(values: &[&str]) -> OptionValue {
    OptionValue::Colors(values.iter().map(|s| s.to_string()).collect())
}

fn set_sparkline_frame(store: &mut OptionStore) {
    store.insert(OptionKey::Delimiter, OptionValue::Text(DEFAULT_DELIMITER.to_string()));
    store.insert(OptionKey::Height, OptionValue::Number(16.0));
    store.insert(OptionKey::Width, OptionValue::Number(32.0));
    store.insert(OptionKey::Min, OptionValue::Number(0.0));
}
