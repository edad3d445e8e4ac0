// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and per-pass pipeline: normalize, project, then build the
// frame geometry a rendering host draws.

use tracing::{debug, warn};

use crate::axis::{Axis, Baseline, TextAnchor, ValueFormatter};
use crate::config::ChartConfig;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{Rect, Segment};
use crate::layout::{project, Layout, LayoutParams, Plot, Tick};
use crate::normalize::normalize;
use crate::selection::{
    hint_anchor, hint_line_y, DeviceClass, HintLayout, PlotHandle, PointerEvent, Selection,
    SelectionListener, Transition,
};
use crate::series::Series;
use crate::theme::{self, Color, Style, Theme};
use crate::types::Width;

const MARKER_RADIUS: f64 = 3.0;
const HINT_MARKER_RADIUS: f64 = 5.0;
const MAJOR_TICK: f64 = 7.0;
const MINOR_TICK: f64 = 3.0;

/// A straight styled line.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub segment: Segment,
    pub style: Style,
}

/// A point marker. `handle` is set when the host should route selection events to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub stroke: Color,
    pub stroke_width: f64,
    pub fill: Color,
    pub handle: Option<PlotHandle>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
    pub style: Style,
}

/// Highlight of the selected point with its floating text.
#[derive(Clone, Debug, PartialEq)]
pub struct Hint {
    pub marker: Marker,
    pub lines: Vec<Label>,
}

/// Everything to draw for one pass, in paint order: grid, series, axes, labels, hint.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub grid: Vec<Line>,
    pub series_lines: Vec<Line>,
    pub markers: Vec<Marker>,
    pub axes: Vec<Line>,
    pub labels: Vec<Label>,
    pub hint: Option<Hint>,
}

/// Cross-pass UI state owned by the host and fed back into every pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartState {
    pub selection: Selection,
    /// Hint text supplied by the selection listener, replacing the default lines.
    pub hint_text: Option<Vec<String>>,
}

/// Value formatters for both axes.
#[derive(Clone, Copy)]
pub struct Formatters<'f> {
    pub x: &'f dyn ValueFormatter,
    pub y: &'f dyn ValueFormatter,
}

pub struct Chart {
    pub config: ChartConfig,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config, series: Vec::new() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Surface size for a pass given the host's width source.
    pub fn surface(&self, width: Width) -> (f64, f64) {
        (width.resolve(), self.config.height)
    }

    /// Normalize and project the current series.
    pub fn layout(&self, width: Width) -> ChartResult<Layout<'_>> {
        let (w, h) = self.surface(width);
        let area = Rect::inset(w, h, &self.config.margins);
        let normalized = normalize(self.config.strategy, &self.series)?;
        project(&normalized, &self.layout_params(area))
    }

    fn layout_params(&self, area: Rect) -> LayoutParams<'_> {
        let c = &self.config;
        LayoutParams {
            area,
            axis_x: &c.axis_x,
            axis_y: &c.axis_y,
            strategy: c.strategy,
            min_value: c.min_value,
            max_value: c.max_value,
            min_value_extra_pct: c.min_value_extra_pct,
            max_value_extra_pct: c.max_value_extra_pct,
        }
    }

    /// Build the frame using each axis' configured formatter.
    pub fn frame(&self, width: Width, state: &ChartState) -> ChartResult<Frame> {
        let formatters = Formatters { x: &self.config.axis_x.format, y: &self.config.axis_y.format };
        self.frame_with(width, state, formatters)
    }

    /// Build the frame with host supplied formatters.
    pub fn frame_with(&self, width: Width, state: &ChartState, fmt: Formatters<'_>) -> ChartResult<Frame> {
        let layout = match self.layout(width) {
            Ok(layout) => layout,
            Err(err) => {
                warn!(error = %err, "frame skipped");
                return Err(err);
            }
        };
        let (w, h) = self.surface(width);
        let theme = theme::find(&self.config.theme);
        let builder = FrameBuilder { config: &self.config, theme: &theme, layout: &layout, fmt };

        let mut grid = builder.back_x();
        grid.extend(builder.back_y());
        let (series_lines, markers) = builder.series();
        let (mut axes, mut labels) = builder.front_y();
        let (axes_x, labels_x) = builder.front_x();
        axes.extend(axes_x);
        labels.extend(labels_x);
        let hint = builder.hint(state, w, h);

        debug!(lines = series_lines.len(), markers = markers.len(), hint = hint.is_some(), "frame built");
        Ok(Frame { width: w, height: h, background: theme.background, grid, series_lines, markers, axes, labels, hint })
    }

    /// Apply a pointer event on `target` and return the next state.
    ///
    /// The listener is told about new selections; its return value becomes the hint text.
    pub fn handle_event(
        &self,
        state: &ChartState,
        width: Width,
        device: DeviceClass,
        event: PointerEvent,
        target: PlotHandle,
        listener: Option<&mut dyn SelectionListener>,
    ) -> ChartResult<ChartState> {
        let layout = self.layout(width)?;
        let plot = layout
            .plot(target.series, target.column)
            .ok_or(ChartError::UnknownPlot { series: target.series, column: target.column })?;

        let (selection, transition) = state.selection.update(device, event, target);
        debug!(?transition, "selection event");
        let hint_text = match transition {
            Transition::Ignored => return Ok(state.clone()),
            Transition::Cleared => None,
            Transition::Selected(_) => {
                let (w, h) = self.surface(width);
                let area = layout.area;
                let hint_layout = HintLayout {
                    point_x: plot.x,
                    point_y: plot.y,
                    left: area.left,
                    right: area.right,
                    top: area.top,
                    bottom: area.bottom,
                    width: w,
                    height: h,
                };
                let series_id = &layout.charts[target.series].series.id;
                listener.and_then(|l| l.on_data_point_selected(series_id, &plot.point, &hint_layout))
            }
        };
        Ok(ChartState { selection, hint_text })
    }
}

struct FrameBuilder<'c> {
    config: &'c ChartConfig,
    theme: &'c Theme,
    layout: &'c Layout<'c>,
    fmt: Formatters<'c>,
}

impl<'c> FrameBuilder<'c> {
    fn axis_style(&self, axis: &Axis) -> Style {
        axis.style.or(&self.theme.axis)
    }

    fn grid_style(&self, axis: &Axis) -> Style {
        axis.effective_grid_style(&self.theme.axis)
    }

    fn marking(&self, axis: &Axis, x: f64, y: f64, text: String) -> Label {
        Label {
            x: x + axis.marking_pos_x,
            y: y + axis.marking_pos_y,
            text,
            anchor: axis.marking_anchor,
            baseline: axis.marking_baseline,
            style: axis.marking_text_style.or(&self.theme.marking_text),
        }
    }

    fn back_x(&self) -> Vec<Line> {
        let axis = &self.config.axis_x;
        if !axis.grid {
            return Vec::new();
        }
        let area = self.layout.area;
        let style = self.grid_style(axis);
        self.layout
            .x_ticks()
            .iter()
            .map(|t| Line { segment: Segment::vertical(t.position, area.bottom, area.top), style: style.clone() })
            .collect()
    }

    fn back_y(&self) -> Vec<Line> {
        let axis = &self.config.axis_y;
        let area = self.layout.area;
        let mut out = Vec::new();
        if axis.grid {
            let style = self.grid_style(axis);
            out.extend(self.layout.y_ticks().iter().map(|t| Line {
                segment: Segment::horizontal(t.position, area.left, area.right),
                style: style.clone(),
            }));
        }
        out.extend(axis.discrete_lines.iter().map(|l| Line {
            segment: Segment::horizontal(self.layout.value_px(l.value), area.left, area.right),
            style: l.line_style.clone(),
        }));
        out
    }

    fn series(&self) -> (Vec<Line>, Vec<Marker>) {
        let mut lines = Vec::new();
        let mut markers = Vec::new();
        for (s_idx, chart) in self.layout.charts.iter().enumerate() {
            let style = chart.series.line_style.or(&self.theme.line);
            let stroke = chart.series.line_style.stroke.unwrap_or(self.theme.marker_stroke);
            for pair in chart.plots.windows(2) {
                lines.push(Line { segment: Segment::new(pair[0].x, pair[0].y, pair[1].x, pair[1].y), style: style.clone() });
            }
            markers.extend(chart.plots.iter().enumerate().map(|(column, p)| Marker {
                cx: p.x,
                cy: p.y,
                r: MARKER_RADIUS,
                stroke,
                stroke_width: 2.0,
                fill: self.theme.marker_fill,
                handle: Some(PlotHandle::new(s_idx, column)),
            }));
        }
        (lines, markers)
    }

    fn front_y(&self) -> (Vec<Line>, Vec<Label>) {
        let axis = &self.config.axis_y;
        let area = self.layout.area;
        let style = self.axis_style(axis);
        let ticks: Vec<Tick> = self.layout.y_ticks();
        let mut lines = Vec::with_capacity(ticks.len() + 1);
        let mut labels = Vec::new();
        for t in &ticks {
            let len = if t.labelled { MAJOR_TICK } else { MINOR_TICK };
            lines.push(Line { segment: Segment::horizontal(t.position, area.left - len, area.left), style: style.clone() });
            if t.labelled {
                labels.push(self.marking(axis, area.left, t.position, self.fmt.y.format(t.value)));
            }
        }
        lines.push(Line { segment: Segment::vertical(area.left, area.top, area.bottom), style });
        (lines, labels)
    }

    fn front_x(&self) -> (Vec<Line>, Vec<Label>) {
        let axis = &self.config.axis_x;
        let area = self.layout.area;
        let style = self.axis_style(axis);
        let ticks = self.layout.x_ticks();
        let mut lines = Vec::with_capacity(ticks.len() + 1);
        let mut labels = Vec::new();
        for t in &ticks {
            let len = if t.labelled { MAJOR_TICK } else { MINOR_TICK };
            lines.push(Line { segment: Segment::vertical(t.position, area.bottom, area.bottom + len), style: style.clone() });
            if t.labelled {
                labels.push(self.marking(axis, t.position, area.bottom, self.fmt.x.format(t.value)));
            }
        }
        lines.push(Line { segment: Segment::horizontal(area.bottom, area.left, area.right), style });
        (lines, labels)
    }

    fn hint(&self, state: &ChartState, width: f64, height: f64) -> Option<Hint> {
        let handle = state.selection.handle()?;
        let chart = self.layout.charts.get(handle.series)?;
        let plot: &Plot = chart.plots.get(handle.column)?;
        let marker = Marker {
            cx: plot.x,
            cy: plot.y,
            r: HINT_MARKER_RADIUS,
            stroke: chart.series.line_style.stroke.unwrap_or(Color::WHITE),
            stroke_width: 1.0,
            fill: self.theme.hint_fill,
            handle: Some(handle),
        };
        if !self.config.show_hint {
            return Some(Hint { marker, lines: Vec::new() });
        }

        let texts = state.hint_text.clone().unwrap_or_else(|| {
            vec![
                chart.series.label.clone().unwrap_or_default(),
                self.fmt.y.format(plot.point.y),
                self.fmt.x.format(plot.point.x),
            ]
        });
        let style = self.config.hint_text_style.clone().unwrap_or_default().or(&self.theme.hint_text);
        let anchor = hint_anchor(plot.x, width);
        let n = texts.len();
        let lines = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Label {
                x: plot.x,
                y: hint_line_y(plot.y, height, self.config.hint_text_height, i, n),
                text,
                anchor,
                baseline: Baseline::Middle,
                style: style.clone(),
            })
            .collect();
        Some(Hint { marker, lines })
    }
}
