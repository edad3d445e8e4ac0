// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for normalizing series,
// projecting them and building drawable frames.

pub mod axis;
pub mod chart;
pub mod config;
pub mod downsample;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod normalize;
pub mod range;
pub mod scale;
pub mod selection;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::{Axis, Baseline, DiscreteLine, TextAnchor, ValueFormat, ValueFormatter};
pub use chart::{Chart, ChartState, Formatters, Frame, Hint, Label, Line, Marker};
pub use config::ChartConfig;
pub use error::{ChartError, ChartResult, NotRenderable};
pub use layout::{project, Layout, LayoutParams, Plot, SeriesPlots, Tick};
pub use normalize::{key_sequence, normalize, Strategy};
pub use selection::{DeviceClass, HintLayout, PlotHandle, PointerEvent, Selection, SelectionListener, Transition};
pub use series::{date_from_key, date_key, DataPoint, EnrichedSeries, Series};
pub use svg::{save_svg, to_svg_string, write_svg, OutputFile, OutputStream};
pub use theme::{Color, Style, Theme};
pub use types::{Insets, Width};
