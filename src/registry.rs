use crate::error::RegistryError;
use crate::variant::ChartKind;
use crate::widget::Widget;
use std::collections::BTreeMap;
use tracing::debug;

/// Tag names registered by [`Registry::standard`].
pub const STANDARD_TAGS: [(&str, ChartKind); 4] = [
    ("wc-pie", ChartKind::Pie),
    ("wc-donut", ChartKind::Donut),
    ("wc-line", ChartKind::Line),
    ("wc-bar", ChartKind::Bar),
];

/// Explicit mapping from element tag names to chart variants.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tags: BTreeMap<String, ChartKind>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the four built-in widgets.
    pub fn standard() -> Self {
        let mut registry = Registry::new();
        for (tag, kind) in STANDARD_TAGS {
            registry.tags.insert(tag.to_string(), kind);
        }
        registry
    }

    /// Register `tag`. Tags are lowercase, must contain a hyphen and can
    /// only be registered once.
    pub fn register(&mut self, tag: &str, kind: ChartKind) -> Result<(), RegistryError> {
        if !is_valid_tag(tag) {
            return Err(RegistryError::InvalidName(tag.to_string()));
        }
        if self.tags.contains_key(tag) {
            return Err(RegistryError::AlreadyRegistered(tag.to_string()));
        }
        debug!(tag, kind = kind.name(), "registered widget");
        self.tags.insert(tag.to_string(), kind);
        Ok(())
    }

    pub fn lookup(&self, tag: &str) -> Option<ChartKind> {
        self.tags.get(&tag.to_ascii_lowercase()).copied()
    }

    /// Construct a widget for `tag`.
    pub fn create(&self, tag: &str) -> Result<Widget, RegistryError> {
        self.lookup(tag)
            .map(Widget::new)
            .ok_or_else(|| RegistryError::UnknownTag(tag.to_string()))
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, ChartKind)> {
        self.tags.iter().map(|(tag, kind)| (tag.as_str(), *kind))
    }
}

fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && tag.contains('-')
        && tag.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' || c == '.')
}
