//! SVG serialization of a compiled [`Scene`].

use crate::ir::{polar, DrawCommand, Scene};
use std::f64::consts::{PI, TAU};
use std::fmt::Write;

/// Write a scene as a self-contained `<svg>` element.
pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_svg(&mut out, scene);
    out
}

fn write_svg(out: &mut String, scene: &Scene) -> std::fmt::Result {
    write!(out, r#"<svg width="{}" height="{}">"#, num(scene.width), num(scene.height))?;

    if let Some((tx, ty)) = scene.translate {
        write!(out, r#"<g transform="translate({},{})">"#, num(tx), num(ty))?;
    }

    for command in &scene.commands {
        match command {
            DrawCommand::DrawArc {
                start_angle,
                end_angle,
                inner_radius,
                outer_radius,
                fill,
            } => {
                write!(
                    out,
                    r#"<g class="arc"><path d="{}" fill="{}"></path></g>"#,
                    arc_path(*start_angle, *end_angle, *inner_radius, *outer_radius),
                    escape(fill.css())
                )?;
            }
            DrawCommand::DrawRect { x, y, width, height, fill } => {
                write!(
                    out,
                    r#"<rect fill="{}" x="{}" y="{}" width="{}" height="{}"></rect>"#,
                    escape(fill.css()),
                    num(*x),
                    num(*y),
                    num(*width),
                    num(*height)
                )?;
            }
            DrawCommand::DrawPolygon { points, fill } => {
                write!(
                    out,
                    r#"<polygon fill="{}" points="{}"></polygon>"#,
                    escape(fill.css()),
                    point_list(points)
                )?;
            }
            DrawCommand::DrawPolyline { points, stroke, stroke_width } => {
                write!(
                    out,
                    r#"<polyline fill="none" points="{}" stroke="{}" stroke-width="{}" stroke-linecap="square"></polyline>"#,
                    point_list(points),
                    escape(stroke.css()),
                    num(*stroke_width)
                )?;
            }
        }
    }

    if scene.translate.is_some() {
        out.push_str("</g>");
    }
    out.push_str("</svg>");
    Ok(())
}

/// Path data for an annular sector centered on the origin.
///
/// A zero inner radius closes the sector through the center. A full turn is
/// drawn as two half arcs since a single SVG arc cannot start and end at the
/// same point.
pub fn arc_path(start: f64, end: f64, inner: f64, outer: f64) -> String {
    let span = end - start;
    let mut d = String::new();

    if span >= TAU - 1e-9 {
        let (x0, y0) = polar(outer, start);
        let (x1, y1) = polar(outer, start + PI);
        let _ = write!(
            d,
            "M{},{}A{r},{r},0,1,1,{},{}A{r},{r},0,1,1,{},{}",
            num(x0),
            num(y0),
            num(x1),
            num(y1),
            num(x0),
            num(y0),
            r = num(outer)
        );
        if inner > 0.0 {
            let (ix0, iy0) = polar(inner, start);
            let (ix1, iy1) = polar(inner, start + PI);
            let _ = write!(
                d,
                "M{},{}A{r},{r},0,1,0,{},{}A{r},{r},0,1,0,{},{}",
                num(ix0),
                num(iy0),
                num(ix1),
                num(iy1),
                num(ix0),
                num(iy0),
                r = num(inner)
            );
        }
        d.push('Z');
        return d;
    }

    let large_arc = if span > PI { 1 } else { 0 };
    let (x0, y0) = polar(outer, start);
    let (x1, y1) = polar(outer, end);
    let _ = write!(
        d,
        "M{},{}A{r},{r},0,{},1,{},{}",
        num(x0),
        num(y0),
        large_arc,
        num(x1),
        num(y1),
        r = num(outer)
    );

    if inner > 0.0 {
        let (ix1, iy1) = polar(inner, end);
        let (ix0, iy0) = polar(inner, start);
        let _ = write!(
            d,
            "L{},{}A{r},{r},0,{},0,{},{}",
            num(ix1),
            num(iy1),
            large_arc,
            num(ix0),
            num(iy0),
            r = num(inner)
        );
    } else {
        d.push_str("L0,0");
    }
    d.push('Z');
    d
}

fn point_list(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{} {}", num(*x), num(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compact number formatting: at most six decimals, no trailing zeros, no `-0`.
fn num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
