use crate::color::{interpolate, Paint};

/// Maps a numeric domain onto an output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    /// Project a domain value. A collapsed domain maps everything to the
    /// middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || !span.is_finite() { 0.5 } else { (value - d0) / span };
        r0 + (r1 - r0) * t
    }
}

/// Spreads a palette evenly over the index range `[0, count - 1]`.
///
/// Consecutive palette entries are blended in RGB; entries that cannot be
/// read as RGB are used as-is for the nearest index.
#[derive(Debug, Clone)]
pub struct ColorScale {
    palette: Vec<Paint>,
    count: usize,
}

impl ColorScale {
    pub fn new(palette: &[String], count: usize) -> Self {
        ColorScale {
            palette: palette.iter().map(|c| Paint::parse(c)).collect(),
            count,
        }
    }

    pub fn paint(&self, index: usize) -> Paint {
        let Some(first) = self.palette.first() else {
            return Paint::default();
        };
        // A lone slice takes the first color, not the blend a collapsed d3 domain gives.
        if self.palette.len() == 1 || self.count <= 1 {
            return first.clone();
        }

        let stops = (self.palette.len() - 1) as f64;
        let position = (index as f64 / (self.count - 1) as f64).clamp(0.0, 1.0) * stops;
        let lower = (position.floor() as usize).min(self.palette.len() - 2);
        let t = position - lower as f64;

        let (a, b) = (&self.palette[lower], &self.palette[lower + 1]);
        match (a.rgb(), b.rgb()) {
            (Some(from), Some(to)) => Paint::from_rgb(interpolate(from, to, t)),
            _ if t < 0.5 => a.clone(),
            _ => b.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::RGBColor;

    fn palette(colors: &[&str]) -> Vec<String> {
        colors.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        let y = LinearScale::new((0.0, 10.0), (16.0, 0.0));
        assert_eq!(y.map(0.0), 16.0);
        assert_eq!(y.map(10.0), 0.0);
        assert_eq!(y.map(5.0), 8.0);
    }

    #[test]
    fn test_linear_scale_collapsed_domain() {
        let y = LinearScale::new((3.0, 3.0), (16.0, 0.0));
        assert_eq!(y.map(3.0), 8.0);
    }

    #[test]
    fn test_color_scale_exact_length_palette() {
        let scale = ColorScale::new(&palette(&["#ff0000", "#00ff00", "#0000ff"]), 3);
        assert_eq!(scale.paint(0).rgb(), Some(RGBColor(255, 0, 0)));
        assert_eq!(scale.paint(1).rgb(), Some(RGBColor(0, 255, 0)));
        assert_eq!(scale.paint(2).rgb(), Some(RGBColor(0, 0, 255)));
    }

    #[test]
    fn test_color_scale_gradient() {
        let scale = ColorScale::new(&palette(&["#000000", "#ffffff"]), 5);
        assert_eq!(scale.paint(0).rgb(), Some(RGBColor(0, 0, 0)));
        assert_eq!(scale.paint(2).rgb(), Some(RGBColor(128, 128, 128)));
        assert_eq!(scale.paint(4).rgb(), Some(RGBColor(255, 255, 255)));
    }

    #[test]
    fn test_color_scale_single_item() {
        let scale = ColorScale::new(&palette(&["red", "blue"]), 1);
        assert_eq!(scale.paint(0).css(), "red");
    }

    #[test]
    fn test_color_scale_unparseable_uses_nearest() {
        let scale = ColorScale::new(&palette(&["url(#a)", "url(#b)"]), 2);
        assert_eq!(scale.paint(0).css(), "url(#a)");
        assert_eq!(scale.paint(1).css(), "url(#b)");
    }

    #[test]
    fn test_color_scale_empty_palette() {
        let scale = ColorScale::new(&[], 3);
        assert_eq!(scale.paint(1), Paint::default());
    }
}
