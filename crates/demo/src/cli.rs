use std::path::PathBuf;

use chart_core::PlotHandle;
use clap::Parser;

/// Render line series from CSV files into an SVG chart.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Chart configuration in TOML. Defaults apply when omitted.
    #[arg(short, long, value_parser = parse_file)]
    pub(crate) config: Option<PathBuf>,

    /// CSV file with one series. Repeat for more series.
    #[arg(short, long = "series", required = true, value_parser = parse_file)]
    pub(crate) series: Vec<PathBuf>,

    /// Where the SVG is written.
    #[arg(short, long, default_value = "chart.svg")]
    pub(crate) out: PathBuf,

    /// Surface width in pixels; wins over the configured width.
    #[arg(short, long)]
    pub(crate) width: Option<f64>,

    /// Select a point as `series:column` before rendering, as a click would.
    #[arg(long, value_parser = parse_handle)]
    pub(crate) select: Option<PlotHandle>,

    /// Also write a PNG through the Skia backend.
    #[cfg(feature = "png")]
    #[arg(long)]
    pub(crate) png: Option<PathBuf>,
}

fn parse_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_file() {
        return Err(format!("The `{}` path must point to a file.", path.display()));
    }

    Ok(path)
}

fn parse_handle(s: &str) -> Result<PlotHandle, String> {
    let (series, column) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `series:column`, got `{s}`"))?;
    let series = series.trim().parse().map_err(|e| format!("bad series index `{series}`: {e}"))?;
    let column = column.trim().parse().map_err(|e| format!("bad column index `{column}`: {e}"))?;
    Ok(PlotHandle::new(series, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_parse() {
        assert_eq!(parse_handle("1:12"), Ok(PlotHandle::new(1, 12)));
        assert!(parse_handle("1").is_err());
        assert!(parse_handle("a:2").is_err());
    }
}
