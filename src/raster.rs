use crate::color::Paint;
use crate::ir::{polar, DrawCommand, Scene};
use anyhow::{Context, Result};
use image::ImageEncoder;
use plotters::prelude::*;

/// Segments used to approximate a full turn of an arc.
const ARC_SEGMENTS: f64 = 96.0;

/// Largest raster side, in pixels.
const MAX_SIDE: u32 = 32_768;

/// Largest RGB buffer we allocate.
const MAX_BUFFER_BYTES: usize = 256 * 1024 * 1024;

/// Rasterize a scene to PNG bytes, `scale` pixels per layout unit.
pub fn rasterize(scene: &Scene, scale: u32) -> Result<Vec<u8>> {
    if scale == 0 {
        anyhow::bail!("Raster scale must be at least 1");
    }

    let scale_f = f64::from(scale);
    let width = pixels(scene.width, scale_f)?;
    let height = pixels(scene.height, scale_f)?;
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .filter(|n| *n <= MAX_BUFFER_BYTES)
        .with_context(|| format!("Raster image {}x{} is too large", width, height))?;
    let mut buffer = vec![0u8; len];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).context("Failed to fill background")?;

        let (tx, ty) = scene.translate.unwrap_or((0.0, 0.0));
        let to_pixel = |(x, y): (f64, f64)| -> (i32, i32) {
            (((x + tx) * scale_f).round() as i32, ((y + ty) * scale_f).round() as i32)
        };

        for command in &scene.commands {
            match command {
                DrawCommand::DrawArc {
                    start_angle,
                    end_angle,
                    inner_radius,
                    outer_radius,
                    fill,
                } => {
                    if end_angle <= start_angle {
                        continue;
                    }
                    let points = arc_outline(*start_angle, *end_angle, *inner_radius, *outer_radius)
                        .into_iter()
                        .map(to_pixel)
                        .collect::<Vec<_>>();
                    root.draw(&Polygon::new(points, rgb(fill).filled()))
                        .context("Failed to draw arc")?;
                }
                DrawCommand::DrawRect { x, y, width, height, fill } => {
                    if *width <= 0.0 || *height <= 0.0 {
                        continue;
                    }
                    let tl = to_pixel((*x, *y));
                    let br = to_pixel((x + width, y + height));
                    root.draw(&Rectangle::new([tl, br], rgb(fill).filled()))
                        .context("Failed to draw bar")?;
                }
                DrawCommand::DrawPolygon { points, fill } => {
                    let points = points.iter().copied().map(to_pixel).collect::<Vec<_>>();
                    root.draw(&Polygon::new(points, rgb(fill).filled()))
                        .context("Failed to draw area")?;
                }
                DrawCommand::DrawPolyline { points, stroke, stroke_width } => {
                    let points = points.iter().copied().map(to_pixel).collect::<Vec<_>>();
                    let width = ((stroke_width * scale_f).round() as u32).max(1);
                    root.draw(&PathElement::new(points, rgb(stroke).stroke_width(width)))
                        .context("Failed to draw line")?;
                }
            }
        }

        root.present().context("Failed to present drawing")?;
    }

    let mut png_bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png_bytes)
        .write_image(&buffer, width, height, image::ColorType::Rgb8)
        .context("Failed to encode PNG")?;

    Ok(png_bytes)
}

/// Pixel length of one side; at least 1 and no more than `MAX_SIDE`.
fn pixels(length: f64, scale: f64) -> Result<u32> {
    let scaled = (length * scale).ceil();
    if !scaled.is_finite() || scaled > f64::from(MAX_SIDE) {
        anyhow::bail!("Raster side of {} layout units is too large", length);
    }
    Ok((scaled as u32).max(1))
}

fn rgb(paint: &Paint) -> RGBColor {
    paint.rgb().unwrap_or(BLACK)
}

/// Outline of an annular sector: outer edge forward, inner edge back.
fn arc_outline(start: f64, end: f64, inner: f64, outer: f64) -> Vec<(f64, f64)> {
    let steps = (((end - start) / std::f64::consts::TAU) * ARC_SEGMENTS).ceil().max(1.0) as usize;
    let angle_at = |i: usize| start + (end - start) * i as f64 / steps as f64;

    let mut points: Vec<(f64, f64)> = (0..=steps).map(|i| polar(outer, angle_at(i))).collect();
    if inner > 0.0 {
        points.extend((0..=steps).rev().map(|i| polar(inner, angle_at(i))));
    } else {
        points.push((0.0, 0.0));
    }
    points
}
