use tracing::{debug, warn};

use crate::axes::labels::{
    CustomLabels, Label, LabelOrientation, column_axis_height, column_labels, row_labels,
};
use crate::core::{
    ColumnScale, DEFAULT_NON_ZERO_DECIMALS, Point, Rect, RowScale, ScaleMode, Value,
    ValueFormatter, text_width,
};
use crate::error::{ChartError, ChartResult};

/// Cells taken by an axis line.
pub const AXIS_WIDTH: i32 = 1;

/// Inputs of the row axis. Kept on the details so the axis can be rebuilt.
#[derive(Debug, Clone, PartialEq)]
pub struct RowAxisProperties {
    pub min: f64,
    pub max: f64,
    /// Rows reserved below the graph for the column axis and its labels.
    pub reserved_height: i32,
    pub mode: ScaleMode,
    pub non_zero_decimals: usize,
    pub formatter: Option<ValueFormatter>,
}

impl RowAxisProperties {
    #[must_use]
    pub fn new(min: f64, max: f64, reserved_height: i32) -> Self {
        Self {
            min,
            max,
            reserved_height,
            mode: ScaleMode::default(),
            non_zero_decimals: DEFAULT_NON_ZERO_DECIMALS,
            formatter: None,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ScaleMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Option<ValueFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn with_non_zero_decimals(mut self, non_zero_decimals: usize) -> Self {
        self.non_zero_decimals = non_zero_decimals;
        self
    }
}

/// The row axis: its scale, labels and the line drawn between them and the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct RowAxisDetails {
    /// Columns taken by the labels plus the axis line.
    pub width: i32,
    pub start: Point,
    pub end: Point,
    pub scale: RowScale,
    pub labels: Vec<Label>,
    pub properties: RowAxisProperties,
}

impl RowAxisDetails {
    pub fn new(canvas: Rect, properties: RowAxisProperties) -> ChartResult<Self> {
        let required = row_axis_width(
            properties.min,
            properties.max,
            properties.non_zero_decimals,
            properties.formatter.as_ref(),
        );
        if canvas.width() < required {
            warn!(canvas_width = canvas.width(), required, "row axis does not fit");
            return Err(ChartError::InsufficientSpace(format!(
                "canvas width {} is less than the {required} columns the row axis needs",
                canvas.width()
            )));
        }

        let graph_height = canvas.height() - properties.reserved_height;
        if graph_height < 2 {
            warn!(canvas_height = canvas.height(), graph_height, "row axis does not fit");
            return Err(ChartError::InsufficientSpace(format!(
                "canvas height {} leaves {graph_height} rows for the graph, at least 2 are needed",
                canvas.height()
            )));
        }

        let scale = RowScale::with_formatter(
            properties.min,
            properties.max,
            graph_height,
            properties.non_zero_decimals,
            properties.mode,
            properties.formatter.clone(),
        )?;

        let max_label_width = canvas.width() - AXIS_WIDTH;
        let mut labels = row_labels(&scale, max_label_width)?;
        let label_width = widest_label(&labels);
        if label_width < max_label_width {
            // Re-layout once so the graph reclaims the unused columns.
            labels = row_labels(&scale, label_width)?;
        }
        for label in &mut labels {
            label.position = label.position.offset(canvas.min.x, canvas.min.y);
        }

        let axis_x = canvas.min.x + label_width;
        let details = Self {
            width: label_width + AXIS_WIDTH,
            start: Point::new(axis_x, canvas.min.y),
            end: Point::new(axis_x, canvas.min.y + graph_height),
            scale,
            labels,
            properties,
        };
        debug!(
            width = details.width,
            graph_height,
            labels = details.labels.len(),
            "built row axis"
        );
        Ok(details)
    }
}

/// Inputs of the column axis. The zoom tracker rebuilds axes from a copy with
/// a different `min`/`max`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnAxisProperties {
    pub min: i64,
    pub max: i64,
    /// Columns reserved left of the graph for the row axis and its labels.
    pub reserved_width: i32,
    pub custom_labels: CustomLabels,
    pub orientation: LabelOrientation,
    pub non_zero_decimals: usize,
}

impl ColumnAxisProperties {
    #[must_use]
    pub fn new(min: i64, max: i64, reserved_width: i32) -> Self {
        Self {
            min,
            max,
            reserved_width,
            custom_labels: CustomLabels::new(),
            orientation: LabelOrientation::default(),
            non_zero_decimals: DEFAULT_NON_ZERO_DECIMALS,
        }
    }

    #[must_use]
    pub fn with_custom_labels(mut self, custom_labels: CustomLabels) -> Self {
        self.custom_labels = custom_labels;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: LabelOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_non_zero_decimals(mut self, non_zero_decimals: usize) -> Self {
        self.non_zero_decimals = non_zero_decimals;
        self
    }

    /// Same shape with a different range.
    #[must_use]
    pub fn with_range(&self, min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            ..self.clone()
        }
    }

    /// Rows the column axis takes below the graph.
    #[must_use]
    pub fn required_height(&self) -> i32 {
        column_axis_height(self.max, &self.custom_labels, self.orientation)
    }
}

/// The column axis: its scale, labels and the axis line under the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnAxisDetails {
    pub start: Point,
    pub end: Point,
    /// Where the axis line meets the first graph column.
    pub origin: Point,
    pub scale: ColumnScale,
    pub labels: Vec<Label>,
    pub properties: ColumnAxisProperties,
}

impl ColumnAxisDetails {
    pub fn new(canvas: Rect, properties: ColumnAxisProperties) -> ChartResult<Self> {
        let required_height = properties.required_height();
        if canvas.height() < required_height + 1 {
            warn!(
                canvas_height = canvas.height(),
                required_height, "column axis does not fit"
            );
            return Err(ChartError::InsufficientSpace(format!(
                "canvas height {} cannot hold one graph row and the {required_height} rows of the column axis",
                canvas.height()
            )));
        }

        let graph_width = canvas.width() - properties.reserved_width;
        if graph_width < 1 {
            warn!(
                canvas_width = canvas.width(),
                reserved_width = properties.reserved_width,
                "column axis does not fit"
            );
            return Err(ChartError::InsufficientSpace(format!(
                "canvas width {} cannot hold the {} reserved columns and one graph column",
                canvas.width(),
                properties.reserved_width
            )));
        }

        let axis_y = canvas.max.y - required_height;
        let origin = Point::new(canvas.min.x + properties.reserved_width, axis_y);
        let scale = ColumnScale::new(
            properties.min,
            properties.max,
            graph_width,
            properties.non_zero_decimals,
        )?;
        let labels = column_labels(
            &scale,
            origin,
            &properties.custom_labels,
            properties.orientation,
        )?;

        let details = Self {
            start: Point::new((origin.x - AXIS_WIDTH).max(canvas.min.x), axis_y),
            end: Point::new(canvas.max.x - 1, axis_y),
            origin,
            scale,
            labels,
            properties,
        };
        debug!(
            min = details.properties.min,
            max = details.properties.max,
            graph_width,
            labels = details.labels.len(),
            "built column axis"
        );
        Ok(details)
    }

    /// First and last series position on the axis.
    #[must_use]
    pub fn range(&self) -> (i64, i64) {
        (self.properties.min, self.properties.max)
    }

    /// Number of graph columns.
    #[must_use]
    pub fn graph_width(&self) -> i32 {
        self.scale.cell_extent()
    }
}

/// Columns the row axis needs: the wider boundary label plus the axis line.
#[must_use]
pub fn row_axis_width(
    min: f64,
    max: f64,
    non_zero_decimals: usize,
    formatter: Option<&ValueFormatter>,
) -> i32 {
    let widest = [min, max]
        .into_iter()
        .map(|v| text_width(&Value::with_formatter(v, non_zero_decimals, formatter.cloned()).text()))
        .max()
        .unwrap_or(0);
    widest + AXIS_WIDTH
}

fn widest_label(labels: &[Label]) -> i32 {
    labels
        .iter()
        .map(|label| text_width(&label.value.text()))
        .max()
        .unwrap_or(0)
}
