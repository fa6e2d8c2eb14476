// Library exports for sparkgraph

pub mod color;
pub mod config;
pub mod error;
pub mod options;
pub mod parser;
pub mod registry;
pub mod telemetry;
pub mod variant;
pub mod widget;

// Rendering pipeline
pub mod compiler;
pub mod ir;
pub mod raster;
pub mod scale;
pub mod svg;

pub use error::{DataError, RegistryError, WidgetError};
pub use options::{OptionKey, OptionValue, RawValue};
pub use registry::Registry;
pub use variant::ChartKind;
pub use widget::{Isolation, Lifecycle, Surface, Widget};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum OutputFormat {
    #[serde(rename = "svg")]
    #[default]
    Svg,
    #[serde(rename = "png")]
    Png,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderOptions {
    #[serde(default, rename = "type")]
    pub format: OutputFormat,
    /// Pixels per layout unit when rasterizing.
    #[serde(default = "default_scale")]
    pub scale: u32,
}

fn default_scale() -> u32 { 4 }

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Svg,
            scale: default_scale(),
        }
    }
}

/// Render a widget's current surface in the requested output format.
///
/// Returns `None` when the surface is blank (empty dataset).
pub fn export(widget: &Widget, options: &RenderOptions) -> anyhow::Result<Option<Vec<u8>>> {
    let Some(scene) = widget.surface().scene() else {
        return Ok(None);
    };

    let bytes = match options.format {
        OutputFormat::Svg => widget.surface().markup().as_bytes().to_vec(),
        OutputFormat::Png => raster::rasterize(scene, options.scale)?,
    };

    Ok(Some(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.format, OutputFormat::Svg);
        assert_eq!(options.scale, 4);
    }

    #[test]
    fn test_render_options_png() {
        let options: RenderOptions = serde_json::from_str(r#"{"type": "png", "scale": 2}"#).unwrap();
        assert_eq!(options.format, OutputFormat::Png);
        assert_eq!(options.scale, 2);
    }

    #[test]
    fn test_export_blank_surface() {
        let widget = Widget::new(ChartKind::Pie);
        let out = export(&widget, &RenderOptions::default()).unwrap();
        assert!(out.is_none());
    }
}
