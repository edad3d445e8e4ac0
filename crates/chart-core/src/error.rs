// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for one layout pass; none of these are fatal to the host.

use std::fmt;

/// Result alias used across the crate.
pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Inputs are valid but there is nothing sensible to draw this pass.
    #[error("chart is not renderable: {0}")]
    NotRenderable(NotRenderable),

    /// The merge sweep did not terminate within its step bound.
    #[error("series `{series}` failed to align after {steps} steps")]
    AlignmentOverflow { series: String, steps: usize },

    /// A dataset whose `x` values go backwards at `index`.
    #[error("series `{series}` is not sorted by x (point {index} goes backwards)")]
    UnsortedSeries { series: String, index: usize },

    /// Performance rebasing against a zero baseline.
    #[error("division by zero: series `{series}` starts at 0 and cannot be rebased to a percentage")]
    DivisionByZero { series: String },

    #[error("no plotted point at series {series}, column {column}")]
    UnknownPlot { series: usize, column: usize },

    #[error("invalid chart configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a frame was not produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotRenderable {
    NoSeries,
    NoData,
    EmptySeries,
    ZeroWidth,
    ZeroHeight,
}

impl fmt::Display for NotRenderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            NotRenderable::NoSeries => "no series supplied",
            NotRenderable::NoData => "series contain no data points",
            NotRenderable::EmptySeries => "a series has no data points",
            NotRenderable::ZeroWidth => "chart area has no width",
            NotRenderable::ZeroHeight => "chart area has no height",
        };
        f.write_str(msg)
    }
}

impl From<toml::de::Error> for ChartError {
    fn from(error: toml::de::Error) -> Self {
        ChartError::Config(error.to_string())
    }
}
