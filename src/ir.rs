use crate::color::Paint;

// =============================================================================
// Scene Graph
// =============================================================================

/// A list of primitive drawing commands sized to the widget's box.
/// Backends (SVG, raster) just execute these blindly.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// Offset applied to every command (the pie center).
    pub translate: Option<(f64, f64)>,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Scene {
            width,
            height,
            translate: None,
            commands: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Annular sector around the origin. Angles are radians clockwise from
    /// twelve o'clock.
    DrawArc {
        start_angle: f64,
        end_angle: f64,
        inner_radius: f64,
        outer_radius: f64,
        fill: Paint,
    },
    DrawRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Paint,
    },
    DrawPolygon {
        points: Vec<(f64, f64)>,
        fill: Paint,
    },
    DrawPolyline {
        points: Vec<(f64, f64)>,
        stroke: Paint,
        stroke_width: f64,
    },
}

/// Point on a circle of `radius` at `angle` (clockwise from twelve o'clock).
pub fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}
