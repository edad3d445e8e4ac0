// File: crates/demo/src/main.rs
// Summary: Demo loads CSV series and a TOML config, then writes the chart as SVG (and PNG with the `png` feature).

mod cli;
mod load;

use anyhow::{Context, Result};
use chart_core::{
    save_svg, Chart, ChartConfig, ChartState, DataPoint, DeviceClass, HintLayout, PointerEvent, Width,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => ChartConfig::from_path(path).with_context(|| format!("loading config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    let width = Width::from_config(args.width.or(config.width), None);

    let mut chart = Chart::new(config);
    for path in &args.series {
        let series = load::load_series(path)?;
        info!(series = %series.id, points = series.dataset.len(), "loaded series");
        chart.add_series(series);
    }

    let mut state = ChartState::default();
    if let Some(target) = args.select {
        let mut listener = |id: &str, point: &DataPoint, hint: &HintLayout| -> Option<Vec<String>> {
            info!(series = id, x = point.x, y = point.y, px = hint.point_x, py = hint.point_y, "point selected");
            None
        };
        state = chart.handle_event(&state, width, DeviceClass::Pointer, PointerEvent::Click, target, Some(&mut listener))?;
    }

    let frame = chart.frame(width, &state).context("building frame")?;
    save_svg(&frame, &args.out).with_context(|| format!("writing {}", args.out.display()))?;
    println!("Wrote {}", args.out.display());

    #[cfg(feature = "png")]
    if let Some(png) = &args.png {
        chart_render_skia::SkiaRenderer::default().render_to_png(&frame, png)?;
        println!("Wrote {}", png.display());
    }

    Ok(())
}
