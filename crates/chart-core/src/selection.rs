// File: crates/chart-core/src/selection.rs
// Summary: Point selection state machine and floating hint placement.

use tracing::trace;

use crate::axis::TextAnchor;
use crate::series::DataPoint;

/// Input capability of the host, resolved once per interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    Touch,
    #[default]
    Pointer,
}

/// Event delivered by the host on a point marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Click,
    TouchEnd,
}

impl PointerEvent {
    /// Touch devices also synthesize clicks after a touch; only one kind counts.
    pub fn counts_on(self, device: DeviceClass) -> bool {
        matches!(
            (device, self),
            (DeviceClass::Touch, PointerEvent::TouchEnd) | (DeviceClass::Pointer, PointerEvent::Click)
        )
    }
}

/// Identifies one plotted point: series index and sample column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlotHandle {
    pub series: usize,
    pub column: usize,
}

impl PlotHandle {
    pub const fn new(series: usize, column: usize) -> Self {
        Self { series, column }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(PlotHandle),
}

/// What an event did to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Event kind does not apply to this device.
    Ignored,
    Selected(PlotHandle),
    Cleared,
}

impl Selection {
    /// `(state, event) -> state'`. Re-selecting the selected point clears it.
    pub fn update(self, device: DeviceClass, event: PointerEvent, target: PlotHandle) -> (Selection, Transition) {
        if !event.counts_on(device) {
            trace!(?device, ?event, "ignored selection event");
            return (self, Transition::Ignored);
        }
        match self {
            Selection::Selected(current) if current == target => (Selection::Idle, Transition::Cleared),
            _ => (Selection::Selected(target), Transition::Selected(target)),
        }
    }

    pub fn handle(&self) -> Option<PlotHandle> {
        match self {
            Selection::Idle => None,
            Selection::Selected(h) => Some(*h),
        }
    }
}

/// Geometry handed to a [`SelectionListener`] with the selected point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HintLayout {
    pub point_x: f64,
    pub point_y: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

/// Receives selected data points. May return replacement hint text lines.
pub trait SelectionListener {
    fn on_data_point_selected(&mut self, series_id: &str, point: &DataPoint, layout: &HintLayout) -> Option<Vec<String>>;
}

impl<F> SelectionListener for F
where
    F: FnMut(&str, &DataPoint, &HintLayout) -> Option<Vec<String>>,
{
    fn on_data_point_selected(&mut self, series_id: &str, point: &DataPoint, layout: &HintLayout) -> Option<Vec<String>> {
        self(series_id, point, layout)
    }
}

/// Anchor of hint text by horizontal third of the surface so it stays inside.
pub fn hint_anchor(x: f64, width: f64) -> TextAnchor {
    if x < width / 3.0 {
        TextAnchor::Start
    } else if x > width * 2.0 / 3.0 {
        TextAnchor::End
    } else {
        TextAnchor::Middle
    }
}

/// Row of the `line`-th of `lines` hint text lines. Lines stack below the
/// point in the upper half and above it in the lower half.
pub fn hint_line_y(point_y: f64, height: f64, text_height: f64, line: usize, lines: usize) -> f64 {
    if point_y > height / 2.0 {
        point_y - (lines - line) as f64 * text_height
    } else {
        point_y + (line + 1) as f64 * text_height
    }
}
