//! The reactive widget: option reconciliation, lifecycle and rendering.
//!
//! Attribute changes and property writes funnel into one entry point,
//! [`Widget::set_option`]. Every successful write re-renders the surface
//! synchronously, from a full clear.

use crate::compiler::compile_scene;
use crate::error::WidgetError;
use crate::ir::Scene;
use crate::options::{coerce, OptionKey, OptionStore, OptionValue, RawValue};
use crate::parser::{camel_case, DataInput};
use crate::svg::to_svg;
use crate::variant::ChartKind;
use tracing::{debug, warn};

/// Where the widget's drawing lives relative to the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Isolation {
    /// Encapsulated shadow root.
    Shadow,
    /// Directly inside the element (light DOM).
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Constructed,
    Connected,
    Disconnected,
}

/// The widget's owned drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    isolation: Isolation,
    scene: Option<Scene>,
    markup: String,
    revision: u64,
}

impl Surface {
    fn new(isolation: Isolation) -> Self {
        Surface {
            isolation,
            scene: None,
            markup: String::new(),
            revision: 0,
        }
    }

    pub fn isolation(&self) -> Isolation {
        self.isolation
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// SVG markup, empty when nothing is drawn.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn is_blank(&self) -> bool {
        self.scene.is_none()
    }

    /// Number of renders performed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn clear(&mut self) {
        self.scene = None;
        self.markup.clear();
    }
}

#[derive(Debug, Clone)]
pub struct Widget {
    kind: ChartKind,
    options: OptionStore,
    lifecycle: Lifecycle,
    surface: Surface,
}

impl Widget {
    pub fn new(kind: ChartKind) -> Self {
        Widget {
            kind,
            options: kind.initial_options(),
            lifecycle: Lifecycle::Constructed,
            surface: Surface::new(kind.isolation()),
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Insertion into the document: the text content becomes the dataset.
    pub fn connect(&mut self, text_content: &str) -> Result<(), WidgetError> {
        self.lifecycle = Lifecycle::Connected;
        self.set_data(DataInput::Text(text_content.to_string()))
    }

    pub fn disconnect(&mut self) {
        self.lifecycle = Lifecycle::Disconnected;
    }

    /// Attribute-change notification from the host.
    ///
    /// Names are camel-cased first; names outside the variant's observed
    /// vocabulary are ignored.
    pub fn attribute_changed(
        &mut self,
        name: &str,
        _old_value: Option<&str>,
        new_value: Option<&str>,
    ) -> Result<(), WidgetError> {
        let key_name = camel_case(name);
        let Some(key) = OptionKey::from_key(&key_name).filter(|k| self.kind.observed().contains(k)) else {
            debug!(widget = self.kind.name(), attribute = name, "ignoring unobserved attribute");
            return Ok(());
        };
        self.set_option(key, new_value.map(RawValue::from))
    }

    /// Canonical option write, shared by attribute and property paths.
    ///
    /// `None` is a no-op. A value that cannot be coerced leaves the store
    /// and surface untouched. Otherwise the value is stored and the widget
    /// re-renders, even if the value did not change.
    pub fn set_option(&mut self, key: OptionKey, value: Option<RawValue>) -> Result<(), WidgetError> {
        let Some(raw) = value else {
            return Ok(());
        };
        if !self.kind.accepts(key) {
            debug!(widget = self.kind.name(), option = key.as_str(), "ignoring unknown option");
            return Ok(());
        }

        let coerced = coerce(key, raw, self.options.delimiter()).map_err(|e| {
            warn!(widget = self.kind.name(), option = key.as_str(), error = %e, "rejected option write");
            e
        })?;
        self.options.insert(key, coerced);
        self.render();
        Ok(())
    }

    /// Current value of an option, falling back to (computed) defaults.
    pub fn get_option(&self, key: OptionKey) -> Option<OptionValue> {
        self.kind.resolve(key, &self.options)
    }

    /// Attribute-string form of a stored option, for reflection.
    pub fn attribute(&self, name: &str) -> Option<String> {
        let key = OptionKey::from_key(&camel_case(name))?;
        if !self.kind.observed().contains(&key) {
            return None;
        }
        self.options.get(key).map(OptionValue::to_attribute)
    }

    /// Rebuild the surface from the current options.
    pub fn render(&mut self) {
        self.surface.clear();
        self.surface.revision += 1;

        if let Some(scene) = compile_scene(self.kind, &self.options) {
            self.surface.markup = to_svg(&scene);
            self.surface.scene = Some(scene);
        }

        debug!(
            widget = self.kind.name(),
            revision = self.surface.revision,
            blank = self.surface.is_blank(),
            "rendered"
        );
    }

    // -------------------------------------------------------------------------
    // Property accessors
    // -------------------------------------------------------------------------

    pub fn data(&self) -> Vec<f64> {
        self.get_option(OptionKey::Data)
            .and_then(|v| v.as_numbers().map(<[f64]>::to_vec))
            .unwrap_or_default()
    }

    pub fn set_data(&mut self, input: impl Into<DataInput>) -> Result<(), WidgetError> {
        let raw = match input.into() {
            DataInput::Text(text) => RawValue::Text(text),
            DataInput::Values(values) => RawValue::Numbers(values),
        };
        self.set_option(OptionKey::Data, Some(raw))
    }

    pub fn delimiter(&self) -> String {
        self.options.delimiter().to_string()
    }

    pub fn set_delimiter(&mut self, delimiter: &str) -> Result<(), WidgetError> {
        self.set_option(OptionKey::Delimiter, Some(RawValue::from(delimiter)))
    }

    pub fn fill(&self) -> Vec<String> {
        self.get_option(OptionKey::Fill)
            .and_then(|v| v.as_colors().map(<[String]>::to_vec))
            .unwrap_or_default()
    }

    pub fn set_fill<S: Into<String>>(&mut self, colors: impl IntoIterator<Item = S>) -> Result<(), WidgetError> {
        let colors = colors.into_iter().map(Into::into).collect();
        self.set_option(OptionKey::Fill, Some(RawValue::Colors(colors)))
    }

    pub fn number(&self, key: OptionKey) -> Option<f64> {
        self.get_option(key).and_then(|v| v.as_number())
    }

    pub fn set_number(&mut self, key: OptionKey, value: f64) -> Result<(), WidgetError> {
        self.set_option(key, Some(RawValue::Number(value)))
    }

    pub fn width(&self) -> f64 {
        self.number(OptionKey::Width).unwrap_or_default()
    }

    pub fn height(&self) -> f64 {
        self.number(OptionKey::Height).unwrap_or_default()
    }

    pub fn radius(&self) -> Option<f64> {
        self.number(OptionKey::Radius)
    }

    pub fn inner_radius(&self) -> Option<f64> {
        self.number(OptionKey::InnerRadius)
    }

    pub fn stroke(&self) -> Option<String> {
        self.get_option(OptionKey::Stroke)
            .and_then(|v| v.as_text().map(str::to_string))
    }
}
