//! Color parsing and palette interpolation.
//!
//! Fill palettes arrive as CSS-ish strings. Anything we can read as RGB
//! (`#rgb`, `#rrggbb`, `rgb(r, g, b)` and a handful of names) can be
//! interpolated; everything else is passed through to the SVG untouched.

use plotters::style::RGBColor;

/// A fill or stroke color as written to the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    css: String,
    rgb: Option<RGBColor>,
}

impl Paint {
    pub fn parse(value: &str) -> Self {
        Paint {
            css: value.trim().to_string(),
            rgb: parse_color(value),
        }
    }

    pub fn from_rgb(rgb: RGBColor) -> Self {
        Paint {
            css: format!("rgb({}, {}, {})", rgb.0, rgb.1, rgb.2),
            rgb: Some(rgb),
        }
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn rgb(&self) -> Option<RGBColor> {
        self.rgb
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::from_rgb(RGBColor(0, 0, 0))
    }
}

/// Parse a color string into RGBColor, supporting hex, `rgb()` and named colors
pub fn parse_color(color_str: &str) -> Option<RGBColor> {
    let color_str = color_str.trim();

    if color_str.starts_with('#') {
        return parse_hex_color(color_str);
    }

    let lower = color_str.to_lowercase();
    if let Some(args) = lower.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        return parse_rgb_function(args);
    }

    match lower.as_str() {
        "white" => Some(RGBColor(255, 255, 255)),
        "black" => Some(RGBColor(0, 0, 0)),
        "red" => Some(RGBColor(255, 0, 0)),
        "green" => Some(RGBColor(0, 128, 0)),
        "blue" => Some(RGBColor(0, 0, 255)),
        "yellow" => Some(RGBColor(255, 255, 0)),
        "cyan" => Some(RGBColor(0, 255, 255)),
        "magenta" => Some(RGBColor(255, 0, 255)),
        "orange" => Some(RGBColor(255, 165, 0)),
        "purple" => Some(RGBColor(128, 0, 128)),
        "pink" => Some(RGBColor(255, 192, 203)),
        "brown" => Some(RGBColor(139, 69, 19)),
        "gray" | "grey" => Some(RGBColor(128, 128, 128)),
        "darkgray" | "darkgrey" => Some(RGBColor(64, 64, 64)),
        "lightgray" | "lightgrey" => Some(RGBColor(192, 192, 192)),
        _ => None,
    }
}

/// Parse hex color (#RRGGBB or #RGB)
fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let hex = hex.trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(RGBColor(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(RGBColor(r, g, b))
        }
        _ => None,
    }
}

fn parse_rgb_function(args: &str) -> Option<RGBColor> {
    let channels: Vec<u8> = args
        .split(',')
        .map(|c| c.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;
    match channels.as_slice() {
        [r, g, b] => Some(RGBColor(*r, *g, *b)),
        _ => None,
    }
}

/// Linear RGB interpolation, `t` in `[0, 1]`
pub fn interpolate(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    RGBColor(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_color("#FF0000"), Some(RGBColor(255, 0, 0)));
        assert_eq!(parse_color("#ff9900"), Some(RGBColor(255, 153, 0)));
        assert_eq!(parse_color("#F00"), Some(RGBColor(255, 0, 0)));
        assert_eq!(parse_color("#12345"), None);
    }

    #[test]
    fn test_parse_hex_color_non_ascii() {
        assert_eq!(parse_color("#é1"), None);
        assert_eq!(parse_color("#ffé"), None);
        assert_eq!(parse_color("#gg0000"), None);
        assert_eq!(Paint::parse("#é1").css(), "#é1");
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse_color("white"), Some(RGBColor(255, 255, 255)));
        assert_eq!(parse_color("Black"), Some(RGBColor(0, 0, 0)));
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(parse_color("rgb(10, 20, 30)"), Some(RGBColor(10, 20, 30)));
        assert_eq!(parse_color("rgb(10, 20)"), None);
        assert_eq!(parse_color("rgb(300, 0, 0)"), None);
    }

    #[test]
    fn test_interpolate() {
        let black = RGBColor(0, 0, 0);
        let white = RGBColor(255, 255, 255);
        assert_eq!(interpolate(black, white, 0.0), black);
        assert_eq!(interpolate(black, white, 1.0), white);
        assert_eq!(interpolate(black, white, 0.5), RGBColor(128, 128, 128));
    }

    #[test]
    fn test_paint_keeps_unknown_css() {
        let paint = Paint::parse("url(#grad)");
        assert_eq!(paint.css(), "url(#grad)");
        assert_eq!(paint.rgb(), None);
    }

    #[test]
    fn test_paint_from_rgb_formats_css() {
        assert_eq!(Paint::from_rgb(RGBColor(1, 2, 3)).css(), "rgb(1, 2, 3)");
    }
}
