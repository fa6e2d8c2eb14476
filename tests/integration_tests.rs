use proptest::prelude::*;
use sparkgraph::compiler::{bar_layout, pie_layout};
use sparkgraph::config::WidgetConfig;
use sparkgraph::ir::DrawCommand;
use sparkgraph::{export, ChartKind, Isolation, OptionKey, OutputFormat, Registry, RenderOptions, Widget};
use std::f64::consts::TAU;
use std::io::Write;
use std::process::{Command, Stdio};

/// Helper function to run sparkgraph with arguments and optional stdin
fn run_sparkgraph(args: &[&str], stdin: Option<&str>) -> Result<Vec<u8>, String> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sparkgraph"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("Failed to spawn process: {}", e))?;

    if let Some(mut handle) = child.stdin.take() {
        if let Some(input) = stdin {
            handle
                .write_all(input.as_bytes())
                .map_err(|e| format!("Failed to write to stdin: {}", e))?;
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|e| format!("Failed to wait for process: {}", e))?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(String::from_utf8_lossy(&output.stderr).to_string())
    }
}

/// Check if bytes are a valid PNG
fn is_valid_png(bytes: &[u8]) -> bool {
    bytes.len() > 8 && bytes[0..8] == [137, 80, 78, 71, 13, 10, 26, 10]
}

fn connected(tag: &str, text: &str) -> Widget {
    let mut widget = Registry::standard().create(tag).unwrap();
    widget.connect(text).unwrap();
    widget
}

// =============================================================================
// Library end-to-end
// =============================================================================

#[test]
fn test_pie_fraction_end_to_end() {
    let widget = connected("wc-pie", "1/4");
    assert_eq!(widget.data(), vec![0.25, 0.75]);

    let markup = widget.surface().markup();
    assert!(markup.starts_with(r#"<svg width="16" height="16">"#));
    assert!(markup.contains(r#"<g transform="translate(8,8)">"#));
    assert_eq!(markup.matches(r#"<g class="arc">"#).count(), 2);
    assert_eq!(widget.surface().isolation(), Isolation::Shadow);
}

#[test]
fn test_donut_resize_via_attributes() {
    let mut widget = connected("wc-donut", "3,5");
    widget.attribute_changed("radius", None, Some("20")).unwrap();
    widget.attribute_changed("inner-radius", None, Some("15")).unwrap();

    assert_eq!(widget.width(), 40.0);
    assert_eq!(widget.inner_radius(), Some(15.0));
    assert!(widget.surface().markup().starts_with(r#"<svg width="40" height="40">"#));

    let scene = widget.surface().scene().unwrap();
    for command in &scene.commands {
        match command {
            DrawCommand::DrawArc { inner_radius, outer_radius, .. } => {
                assert_eq!(*inner_radius, 15.0);
                assert_eq!(*outer_radius, 20.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}

#[test]
fn test_bar_with_negative_values() {
    let widget = connected("wc-bar", "3,-2,5");
    let scene = widget.surface().scene().unwrap();
    assert_eq!(scene.commands.len(), 3);

    let heights: Vec<f64> = scene
        .commands
        .iter()
        .map(|c| match c {
            DrawCommand::DrawRect { height, .. } => *height,
            other => panic!("unexpected command {:?}", other),
        })
        .collect();
    assert!(heights.iter().all(|h| *h > 0.0));
    assert!(heights[2] > heights[0]);
}

#[test]
fn test_line_uses_light_surface() {
    let widget = connected("wc-line", "5,3,9,6,5,9,7,3,5,2");
    assert_eq!(widget.surface().isolation(), Isolation::Light);
    let markup = widget.surface().markup();
    assert!(markup.contains("<polygon"));
    assert!(markup.contains("<polyline"));
    assert!(markup.contains(r##"stroke="#4d89f9""##));
}

#[test]
fn test_custom_delimiter_then_data() {
    let mut widget = Registry::standard().create("wc-bar").unwrap();
    widget.set_delimiter(";").unwrap();
    widget.connect("1;2;3").unwrap();
    assert_eq!(widget.data(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_malformed_data_keeps_previous_render() {
    let mut widget = connected("wc-line", "1,2,3");
    let before = widget.surface().markup().to_string();
    let revision = widget.surface().revision();

    assert!(widget.set_data("1,x,3").is_err());
    assert_eq!(widget.data(), vec![1.0, 2.0, 3.0]);
    assert_eq!(widget.surface().markup(), before);
    assert_eq!(widget.surface().revision(), revision);
}

#[test]
fn test_unobserved_attribute_is_ignored() {
    let mut widget = connected("wc-pie", "1,2");
    let revision = widget.surface().revision();
    widget.attribute_changed("stroke", None, Some("red")).unwrap();
    assert_eq!(widget.surface().revision(), revision);
    assert_eq!(widget.get_option(OptionKey::Stroke), None);
}

#[test]
fn test_export_png_from_config() {
    let config = WidgetConfig::from_json(
        r#"{"tag": "wc-bar", "data": "1,2,3", "render": {"type": "png", "scale": 2}}"#,
    )
    .unwrap();
    let widget = config.build(&Registry::standard()).unwrap();
    assert_eq!(config.render.format, OutputFormat::Png);

    let bytes = export(&widget, &config.render).unwrap().unwrap();
    assert!(is_valid_png(&bytes));
}

#[test]
fn test_export_svg_matches_markup() {
    let widget = connected("wc-donut", "2,2,2");
    let bytes = export(&widget, &RenderOptions::default()).unwrap().unwrap();
    assert_eq!(bytes, widget.surface().markup().as_bytes());
}

#[test]
fn test_empty_widget_draws_nothing() {
    let widget = Widget::new(ChartKind::Line);
    assert!(widget.surface().is_blank());
    assert!(export(&widget, &RenderOptions::default()).unwrap().is_none());
}

// =============================================================================
// Layout properties
// =============================================================================

proptest! {
    #[test]
    fn prop_pie_covers_circle_in_order(data in prop::collection::vec(0.01f64..1000.0, 1..20)) {
        let slices = pie_layout(&data);
        prop_assert_eq!(slices.len(), data.len());
        prop_assert!(slices[0].start_angle.abs() < 1e-12);
        for pair in slices.windows(2) {
            prop_assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-9);
            prop_assert!(pair[0].index < pair[1].index);
        }
        let last = slices[slices.len() - 1];
        prop_assert!((last.end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn prop_bars_stay_inside_frame(
        data in prop::collection::vec(-100.0f64..100.0, 1..12),
        width in 16.0f64..200.0,
        height in 4.0f64..100.0,
    ) {
        // A positive maximum keeps the zero baseline inside the frame.
        let mut data = data;
        data.push(1.0);
        let bars = bar_layout(&data, width, height, Some(0.0));
        prop_assert_eq!(bars.len(), data.len());
        for bar in &bars {
            prop_assert!(bar.width >= 0.0);
            prop_assert!(bar.height >= -1e-9);
            prop_assert!(bar.y >= -1e-9);
            prop_assert!(bar.y + bar.height <= height + 1e-9);
        }
        let last = bars[bars.len() - 1];
        prop_assert!(last.x + last.width <= width + 1e-9);
    }
}

// =============================================================================
// Command line
// =============================================================================

#[test]
fn test_cli_svg_output() {
    let result = run_sparkgraph(&["pie", "1,2,3"], None);
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    let svg = String::from_utf8(result.unwrap()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn test_cli_reads_stdin() {
    let result = run_sparkgraph(&["wc-line"], Some("5,3,9,6\n"));
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    let svg = String::from_utf8(result.unwrap()).unwrap();
    assert!(svg.contains("<polyline"));
}

#[test]
fn test_cli_png_output() {
    let result = run_sparkgraph(&["bar", "1,-2,3", "--attr", "height=24", "--format", "png"], None);
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    assert!(is_valid_png(&result.unwrap()), "Output is not a valid PNG");
}

#[test]
fn test_cli_png_too_large() {
    let result = run_sparkgraph(
        &["bar", "1,2", "--attr", "width=1e12", "--attr", "height=1e12", "--format", "png"],
        None,
    );
    let err = result.unwrap_err();
    assert!(err.contains("too large"), "stderr: {}", err);
}

#[test]
fn test_cli_rejects_malformed_data() {
    let result = run_sparkgraph(&["bar", "1,foo,3"], None);
    assert!(result.is_err());
}

#[test]
fn test_cli_unknown_tag() {
    let result = run_sparkgraph(&["radar", "1,2"], None);
    let err = result.unwrap_err();
    assert!(err.contains("not registered"), "stderr: {}", err);
}
