//! Per-frame layout of both axes over a canvas.

use tracing::debug;

use crate::axes::details::{
    ColumnAxisDetails, ColumnAxisProperties, RowAxisDetails, RowAxisProperties,
};
use crate::axes::labels::column_axis_height;
use crate::config::AxesConfig;
use crate::core::{Rect, ValueFormatter, column_bounds, row_bounds};
use crate::error::ChartResult;

/// Both axes for one frame plus the cells left for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesLayout {
    pub row: RowAxisDetails,
    pub column: ColumnAxisDetails,
    /// Cells right of the row axis and above the column axis.
    pub graph_area: Rect,
}

impl AxesLayout {
    /// Lays out the axes for `series` inside `canvas`.
    ///
    /// The row axis is built first because its width decides how many
    /// columns remain for the graph; the column axis height is known up front
    /// since it only depends on the labels.
    pub fn new(
        canvas: Rect,
        config: &AxesConfig,
        series: &[&[f64]],
        formatter: Option<&ValueFormatter>,
    ) -> ChartResult<Self> {
        config.validate()?;

        let (row_min, row_max) = row_bounds(series.iter().copied(), config.row_range);
        let longest = series.iter().map(|values| values.len()).max().unwrap_or(0);
        // Rolling only moves the minimum, so the maximum is width independent.
        let (_, last_position) = column_bounds(longest, 0, false);
        let reserved_height =
            column_axis_height(last_position, &config.custom_labels, config.label_orientation);

        let row = RowAxisDetails::new(
            canvas,
            RowAxisProperties::new(row_min, row_max, reserved_height)
                .with_mode(config.scale_mode)
                .with_non_zero_decimals(config.non_zero_decimals)
                .with_formatter(formatter.cloned()),
        )?;

        let (column_min, column_max) = column_bounds(
            longest,
            canvas.width() - row.width,
            config.rolling_columns,
        );
        let column = ColumnAxisDetails::new(
            canvas,
            ColumnAxisProperties::new(column_min, column_max, row.width)
                .with_custom_labels(config.custom_labels.clone())
                .with_orientation(config.label_orientation)
                .with_non_zero_decimals(config.non_zero_decimals),
        )?;

        let graph_area = graph_area(&row, &column);
        debug!(
            ?canvas,
            ?graph_area,
            row_min,
            row_max,
            column_min,
            column_max,
            "laid out axes"
        );
        Ok(Self {
            row,
            column,
            graph_area,
        })
    }
}

/// The plotting area between the two axis lines.
#[must_use]
pub fn graph_area(row: &RowAxisDetails, column: &ColumnAxisDetails) -> Rect {
    Rect::new(column.origin.x, row.start.y, column.end.x + 1, column.origin.y)
}
