use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use sparkgraph::config::{DataSpec, WidgetConfig};
use sparkgraph::{export, telemetry, ChartKind, OutputFormat, Registry, RenderOptions};
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    Png,
}

#[derive(Parser, Debug)]
#[command(name = "sparkgraph")]
#[command(about = "Render pie, donut, line and bar sparklines as SVG or PNG", long_about = None)]
struct Args {
    /// Widget tag or chart name (e.g. wc-pie, donut, bar)
    #[arg(required_unless_present = "config")]
    tag: Option<String>,

    /// Data payload (e.g. "5,3,9,6" or "1/7"); read from stdin when omitted
    data: Option<String>,

    /// Attribute assignment, repeatable (e.g. --attr inner-radius=4)
    #[arg(short, long = "attr", value_parser = parse_attr)]
    attrs: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Pixels per layout unit for PNG output
    #[arg(long)]
    scale: Option<u32>,

    /// JSON widget config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", s))
}

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();
    let args = Args::parse();
    let registry = Registry::standard();

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config '{}'", path.display()))?;
            WidgetConfig::from_json(&text)?
        }
        None => {
            let data = match &args.data {
                Some(data) => data.clone(),
                None => read_stdin().context("Failed to read data from stdin")?,
            };
            WidgetConfig {
                tag: String::new(),
                data: Some(DataSpec::Text(data.trim_end().to_string())),
                attributes: Default::default(),
                render: RenderOptions::default(),
            }
        }
    };

    if let Some(tag) = &args.tag {
        config.tag = resolve_tag(&registry, tag);
    }
    for (name, value) in &args.attrs {
        config.attributes.insert(name.clone(), Value::String(value.clone()));
    }
    if let Some(format) = args.format {
        config.render.format = match format {
            Format::Svg => OutputFormat::Svg,
            Format::Png => OutputFormat::Png,
        };
    }
    if let Some(scale) = args.scale {
        config.render.scale = scale;
    }

    let widget = config.build(&registry)?;
    let bytes = export(&widget, &config.render)
        .context("Failed to render widget")?
        .context("Nothing to draw: the dataset is empty")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(&bytes).context("Failed to write output to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Accept registered tags as-is and bare chart names as `wc-<name>`.
fn resolve_tag(registry: &Registry, tag: &str) -> String {
    if registry.lookup(tag).is_some() {
        return tag.to_string();
    }
    match ChartKind::from_name(tag) {
        Some(kind) => format!("wc-{}", kind.name()),
        None => tag.to_string(),
    }
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
