//! Zooming the column axis with the mouse wheel and by highlighting columns.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::axes::ColumnAxisDetails;
use crate::core::Rect;
use crate::error::{ChartError, ChartResult};
use crate::interaction::button::{ButtonFsm, ButtonState};
use crate::interaction::mouse::{MouseButton, MouseEvent};
use crate::interaction::normalize::{detect_roll, normalize};
use crate::interaction::range::HighlightRange;

pub const DEFAULT_SCROLL_STEP_PERCENT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomState {
    Unzoomed,
    Zoomed,
}

/// Tracks the zoomed column window across frames and mouse events.
///
/// The widget calls [`ZoomTracker::update`] on every draw with the freshly
/// computed base axis, and [`ZoomTracker::mouse`] for every mouse event. A
/// failed call leaves the tracker as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomTracker {
    base: ColumnAxisDetails,
    zoom: Option<ColumnAxisDetails>,
    canvas: Rect,
    graph: Rect,
    button: ButtonFsm,
    highlight: HighlightRange,
    scroll_step_percent: u8,
}

impl ZoomTracker {
    /// `graph` is the plotting area, which must lie inside `canvas`.
    pub fn new(
        base: ColumnAxisDetails,
        canvas: Rect,
        graph: Rect,
        scroll_step_percent: u8,
    ) -> ChartResult<Self> {
        if !(1..=100).contains(&scroll_step_percent) {
            return Err(ChartError::InvalidConfig(format!(
                "scroll step must be within 1..=100 percent, got {scroll_step_percent}"
            )));
        }
        check_geometry(canvas, graph)?;
        Ok(Self {
            base,
            zoom: None,
            canvas,
            graph,
            button: ButtonFsm::new(MouseButton::Left, graph),
            highlight: HighlightRange::new(),
            scroll_step_percent,
        })
    }

    /// Feeds the base axis computed for the current frame.
    ///
    /// An active zoom follows the base: it is fitted into the new range,
    /// shifted along when the base rolled, and dropped once it covers the
    /// whole base.
    pub fn update(
        &mut self,
        base: ColumnAxisDetails,
        canvas: Rect,
        graph: Rect,
    ) -> ChartResult<()> {
        check_geometry(canvas, graph)?;
        let size_changed = canvas != self.canvas || graph != self.graph;
        let axis_changed = base != self.base;

        let zoom = match &self.zoom {
            Some(zoom) if size_changed || axis_changed => {
                let roll = detect_roll(self.base.range(), base.range());
                let (zoom_min, zoom_max) = zoom.range();
                let (base_min, base_max) = base.range();
                let (min, max) = normalize(base_min, base_max, zoom_min, zoom_max, roll);
                debug!(
                    ?roll,
                    previous_min = zoom_min,
                    previous_max = zoom_max,
                    min,
                    max,
                    "refitted zoom to new base axis"
                );
                zoom_axis(&base, canvas, min, max)?
            }
            zoom => zoom.clone(),
        };

        self.base = base;
        self.zoom = zoom;
        if size_changed {
            self.highlight.reset();
            self.button.update_area(graph);
        }
        self.canvas = canvas;
        self.graph = graph;
        Ok(())
    }

    /// Handles one mouse event. Wheel events zoom around the pointer, the
    /// left button highlights columns to zoom into.
    pub fn mouse(&mut self, event: MouseEvent) -> ChartResult<()> {
        if event.button.is_wheel() {
            self.scroll(event)
        } else {
            self.track_highlight(event)
        }
    }

    /// The column axis to draw.
    #[must_use]
    pub fn active_axis(&self) -> &ColumnAxisDetails {
        self.zoom.as_ref().unwrap_or(&self.base)
    }

    /// Whether a highlight should be drawn, and over which graph columns.
    #[must_use]
    pub fn highlight(&self) -> (bool, HighlightRange) {
        (!self.highlight.is_empty(), self.highlight)
    }

    #[must_use]
    pub fn state(&self) -> ZoomState {
        if self.zoom.is_some() {
            ZoomState::Zoomed
        } else {
            ZoomState::Unzoomed
        }
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_some()
    }

    #[must_use]
    pub fn base_axis(&self) -> &ColumnAxisDetails {
        &self.base
    }

    #[must_use]
    pub fn zoom_axis(&self) -> Option<&ColumnAxisDetails> {
        self.zoom.as_ref()
    }

    #[must_use]
    pub fn scroll_step_percent(&self) -> u8 {
        self.scroll_step_percent
    }

    fn scroll(&mut self, event: MouseEvent) -> ChartResult<()> {
        if !self.graph.contains(event.position) {
            return Ok(());
        }

        let active = self.active_axis();
        let (current_min, current_max) = active.range();
        let (base_min, base_max) = self.base.range();
        let cursor = active
            .scale
            .cell_label(event.position.x - self.graph.min.x)?
            .raw() as i64;
        let cursor = cursor.clamp(current_min, current_max);

        let step = scroll_step(base_max - base_min, self.scroll_step_percent);
        let (left, right) = split_step(step, cursor - current_min, current_max - cursor);

        let (min, max) = if event.button == MouseButton::WheelUp {
            let (min, max) = (current_min + left, current_max - right);
            let (min, max) = if min < max { (min, max) } else { (cursor, cursor) };
            normalize(current_min, current_max, min, max, None)
        } else {
            let (min, max) = spill_into_base(
                base_min,
                base_max,
                current_min - left,
                current_max + right,
            );
            normalize(base_min, base_max, min, max, None)
        };

        let zoom = zoom_axis(&self.base, self.canvas, min, max)?;
        debug!(
            button = ?event.button,
            cursor,
            step,
            min,
            max,
            zoomed = zoom.is_some(),
            "scrolled zoom window"
        );
        self.zoom = zoom;
        Ok(())
    }

    fn track_highlight(&mut self, event: MouseEvent) -> ChartResult<()> {
        let mut button = self.button;
        let mut highlight = self.highlight;
        let transition = button.event(event);
        let mut zoom = None;

        if !self.graph.contains(event.position) {
            highlight.reset();
        } else if transition.state == ButtonState::Down {
            highlight.add_x(event.position.x - self.graph.min.x);
            trace!(
                start = highlight.start(),
                end = highlight.end(),
                "extended highlight"
            );
        } else if transition.clicked {
            zoom = self.zoom_to_highlight(highlight)?;
            highlight.reset();
        } else {
            highlight.reset();
        }

        self.button = button;
        self.highlight = highlight;
        if let Some(zoom) = zoom {
            self.zoom = zoom;
        }
        Ok(())
    }

    /// Window covered by a released highlight. The outer `None` means the
    /// highlight was too narrow and the zoom stays as it is.
    fn zoom_to_highlight(
        &self,
        highlight: HighlightRange,
    ) -> ChartResult<Option<Option<ColumnAxisDetails>>> {
        if highlight.len() < 2 {
            debug!(columns = highlight.len(), "highlight too narrow to zoom");
            return Ok(None);
        }

        let active = self.active_axis();
        let first = active.scale.cell_label(highlight.start())?.raw() as i64;
        let last = active.scale.cell_label(highlight.end() - 1)?.raw() as i64;
        let (current_min, current_max) = active.range();
        let (min, max) = normalize(current_min, current_max, first, last, None);
        debug!(
            start = highlight.start(),
            end = highlight.end(),
            min,
            max,
            "zoomed to highlight"
        );
        zoom_axis(&self.base, self.canvas, min, max).map(Some)
    }
}

fn check_geometry(canvas: Rect, graph: Rect) -> ChartResult<()> {
    if canvas.contains_rect(graph) {
        return Ok(());
    }
    warn!(?canvas, ?graph, "graph area is outside the canvas");
    Err(ChartError::GeometryMismatch(format!(
        "graph area {graph:?} does not lie inside canvas {canvas:?}"
    )))
}

/// The zoomed axis for `[min, max]`, or `None` when that is the whole base.
fn zoom_axis(
    base: &ColumnAxisDetails,
    canvas: Rect,
    min: i64,
    max: i64,
) -> ChartResult<Option<ColumnAxisDetails>> {
    if (min, max) == base.range() {
        return Ok(None);
    }
    ColumnAxisDetails::new(canvas, base.properties.with_range(min, max)).map(Some)
}

/// Positions one wheel notch moves the window ends by in total.
fn scroll_step(base_span: i64, percent: u8) -> i64 {
    let step = (base_span as f64 * f64::from(percent) / 100.0).round() as i64;
    step.max(1)
}

/// Splits `step` between the window ends so the end nearer the cursor moves
/// most: each end gets the share of the distance to the opposite end.
fn split_step(step: i64, to_min: i64, to_max: i64) -> (i64, i64) {
    let total = to_min + to_max;
    if total <= 0 {
        let left = step / 2;
        return (left, step - left);
    }
    let left = (step as f64 * to_max as f64 / total as f64).round() as i64;
    (left, step - left)
}

/// Moves whatever part of `[min, max]` sticks out of the base to the other end.
fn spill_into_base(base_min: i64, base_max: i64, mut min: i64, mut max: i64) -> (i64, i64) {
    if min < base_min {
        max = max.saturating_add(base_min - min);
        min = base_min;
    }
    if max > base_max {
        min = min.saturating_sub(max - base_max);
        max = base_max;
    }
    (min.max(base_min), max)
}
