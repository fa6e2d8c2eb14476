use crate::color::Paint;
use crate::ir::{DrawCommand, Scene};
use crate::options::{OptionKey, OptionStore, OptionValue};
use crate::scale::{ColorScale, LinearScale};
use crate::variant::ChartKind;
use std::f64::consts::TAU;

/// Horizontal gap between bars, in layout units.
pub const BAR_GAP: f64 = 0.7;

// =============================================================================
// Layout Helpers
// =============================================================================

/// One pie slice, in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Partition the full circle proportionally to `data`, without sorting.
/// Values that are not positive get zero-width slices.
pub fn pie_layout(data: &[f64]) -> Vec<Slice> {
    let sum: f64 = data.iter().filter(|v| **v > 0.0).sum();
    let k = if sum > 0.0 { TAU / sum } else { 0.0 };

    let mut angle = 0.0;
    data.iter()
        .enumerate()
        .map(|(index, &value)| {
            let span = if value > 0.0 { value * k } else { 0.0 };
            let slice = Slice {
                index,
                value,
                start_angle: angle,
                end_angle: angle + span,
            };
            angle += span;
            slice
        })
        .collect()
}

/// One bar rectangle; `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay bars out left to right, growing up from zero for positive values and
/// down from zero for negative ones.
pub fn bar_layout(data: &[f64], width: f64, height: f64, min: Option<f64>) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }

    let n = data.len() as f64;
    let bar_width = ((width - (n - 1.0) * BAR_GAP) / n).max(0.0);

    let data_min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let data_max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let domain_min = min.map_or(data_min, |m| m.min(data_min));
    let y = LinearScale::new((domain_min, data_max), (height, 0.0));
    let baseline = y.map(0.0);

    data.iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = i as f64 * (bar_width + BAR_GAP);
            if !value.is_finite() {
                return Bar { x, y: baseline, width: bar_width, height: 0.0 };
            }
            let top = y.map(value);
            if value < 0.0 {
                Bar { x, y: baseline, width: bar_width, height: top - baseline }
            } else {
                Bar { x, y: top, width: bar_width, height: baseline - top }
            }
        })
        .collect()
}

/// Points for a line sparkline: the stroked line and the filled area under it.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub line: Vec<(f64, f64)>,
    pub area: Vec<(f64, f64)>,
}

pub fn line_layout(
    data: &[f64],
    width: f64,
    height: f64,
    min: Option<f64>,
    max: Option<f64>,
    stroke_width: f64,
) -> LineLayout {
    let values: Vec<f64> = if data.len() == 1 { vec![data[0], data[0]] } else { data.to_vec() };

    let max_v = values.iter().cloned().fold(max.unwrap_or(f64::NEG_INFINITY), f64::max);
    let min_v = values.iter().cloned().fold(min.unwrap_or(f64::INFINITY), f64::min);
    let diff = max_v - min_v;
    let drawable = height - stroke_width;

    let y = |v: f64| {
        let offset = if diff != 0.0 { (v - min_v) / diff * drawable } else { 0.0 };
        drawable - offset + stroke_width / 2.0
    };
    let step = if values.len() > 1 { width / (values.len() - 1) as f64 } else { 0.0 };

    let line: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64 * step, y(v)))
        .collect();

    let zero = y(min_v.max(0.0));
    let mut area = Vec::with_capacity(line.len() + 2);
    area.push((0.0, zero));
    area.extend(line.iter().copied());
    area.push((width, zero));

    LineLayout { line, area }
}

// =============================================================================
// Scene Compilation
// =============================================================================

/// Compile the current option snapshot into a scene.
///
/// Returns `None` for an empty dataset: nothing is drawn.
pub fn compile_scene(kind: ChartKind, options: &OptionStore) -> Option<Scene> {
    let data = kind
        .resolve(OptionKey::Data, options)
        .and_then(|v| v.as_numbers().map(<[f64]>::to_vec))
        .unwrap_or_default();
    if data.is_empty() {
        return None;
    }

    let number = |key| kind.number(key, options);
    let fill = kind
        .resolve(OptionKey::Fill, options)
        .and_then(|v| v.as_colors().map(<[String]>::to_vec))
        .unwrap_or_default();
    let width = number(OptionKey::Width).unwrap_or(0.0);
    let height = number(OptionKey::Height).unwrap_or(0.0);
    let mut scene = Scene::new(width, height);

    match kind {
        ChartKind::Pie | ChartKind::Donut => {
            let radius = number(OptionKey::Radius).unwrap_or(0.0);
            let inner_radius = number(OptionKey::InnerRadius).unwrap_or(0.0);
            let colors = ColorScale::new(&fill, data.len());

            scene.translate = Some((radius, radius));
            scene.commands = pie_layout(&data)
                .into_iter()
                .map(|slice| DrawCommand::DrawArc {
                    start_angle: slice.start_angle,
                    end_angle: slice.end_angle,
                    inner_radius,
                    outer_radius: radius,
                    fill: colors.paint(slice.index),
                })
                .collect();
        }
        ChartKind::Bar => {
            let paint = first_paint(&fill);
            scene.commands = bar_layout(&data, width, height, number(OptionKey::Min))
                .into_iter()
                .map(|bar| DrawCommand::DrawRect {
                    x: bar.x,
                    y: bar.y,
                    width: bar.width,
                    height: bar.height,
                    fill: paint.clone(),
                })
                .collect();
        }
        ChartKind::Line => {
            let stroke_width = number(OptionKey::StrokeWidth).unwrap_or(1.0);
            let layout = line_layout(
                &data,
                width,
                height,
                number(OptionKey::Min),
                number(OptionKey::Max),
                stroke_width,
            );

            if !fill.is_empty() {
                scene.commands.push(DrawCommand::DrawPolygon {
                    points: layout.area,
                    fill: first_paint(&fill),
                });
            }
            if stroke_width > 0.0 {
                let stroke = kind
                    .resolve(OptionKey::Stroke, options)
                    .as_ref()
                    .and_then(OptionValue::as_text)
                    .map(Paint::parse)
                    .unwrap_or_default();
                scene.commands.push(DrawCommand::DrawPolyline {
                    points: layout.line,
                    stroke,
                    stroke_width,
                });
            }
        }
    }

    Some(scene)
}

fn first_paint(fill: &[String]) -> Paint {
    fill.first().map(|c| Paint::parse(c)).unwrap_or_default()
}
