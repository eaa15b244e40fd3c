//! Tick label placement along both axes.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::axes::column_space::ColumnSpace;
use crate::core::{
    ColumnScale, HorizontalAlign, Point, Rect, RowScale, Value, VerticalAlign, align_text,
    text_width,
};
use crate::error::{ChartError, ChartResult};

/// Rows between two consecutive row-axis labels.
pub const ROW_LABEL_SPACING: i32 = 4;
/// Minimum columns between the starts of two column-axis labels.
pub const COLUMN_LABEL_MIN_SPACING: i32 = 3;

/// Caller-supplied label text keyed by series position.
pub type CustomLabels = IndexMap<i64, String>;

/// A value together with the cell where its text starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub value: Value,
    pub position: Point,
}

/// Text flow of column-axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOrientation {
    #[default]
    Horizontal,
    /// One character per row, flowing downward.
    Vertical,
}

impl LabelOrientation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Columns a label consumes on the column axis.
    #[must_use]
    pub fn footprint(self, text: &str) -> i32 {
        match self {
            Self::Horizontal => text_width(text),
            Self::Vertical => 1,
        }
    }
}

impl fmt::Display for LabelOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelOrientation {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(ChartError::InvalidConfig(format!(
                "unsupported label orientation {other:?}"
            ))),
        }
    }
}

/// Labels for the row axis, right-aligned inside `[0, available_width)`.
///
/// Walks up from the bottom row every [`ROW_LABEL_SPACING`] rows. When the
/// walk yields a single label for a non-degenerate scale, the top row is
/// labelled as well so both extremes are visible.
pub fn row_labels(scale: &RowScale, available_width: i32) -> ChartResult<Vec<Label>> {
    if scale.cell_extent() < 2 {
        return Err(ChartError::InsufficientSpace(format!(
            "row labels need a graph at least 2 cells tall, got {}",
            scale.cell_extent()
        )));
    }
    if available_width < 0 {
        return Err(ChartError::InvalidRange(format!(
            "row label width must be non-negative, got {available_width}"
        )));
    }

    let mut labels: Vec<Label> = Vec::new();
    let mut y = scale.cell_extent() - 1;
    while y >= 0 {
        let label = row_label(scale, y, available_width)?;
        let duplicate = labels
            .last()
            .is_some_and(|last| last.value.text() == label.value.text());
        if !duplicate {
            labels.push(label);
        }
        y -= ROW_LABEL_SPACING;
    }

    let has_range = scale.min().rounded() != scale.max().rounded();
    if labels.len() < 2 && has_range {
        labels.push(row_label(scale, 0, available_width)?);
    }

    trace!(count = labels.len(), available_width, "placed row labels");
    Ok(labels)
}

fn row_label(scale: &RowScale, y: i32, width: i32) -> ChartResult<Label> {
    let value = scale.cell_label(y)?;
    let area = Rect::new(0, y, width, y + 1);
    let position = align_text(
        area,
        &value.text(),
        HorizontalAlign::Right,
        VerticalAlign::Middle,
    )?;
    Ok(Label { value, position })
}

/// Result of placing one column label.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedColumnLabel {
    pub label: Label,
    /// Series position the label stands for, even when its text is custom.
    pub index: i64,
    /// Space left after the label.
    pub space: ColumnSpace,
}

/// Places a label at the cursor of `space`.
///
/// Returns `None` when the label would not fit in the remaining width; a
/// label is never cut off.
pub fn place_column_label(
    scale: &ColumnScale,
    space: ColumnSpace,
    custom_labels: &CustomLabels,
    orientation: LabelOrientation,
) -> ChartResult<Option<PlacedColumnLabel>> {
    if space.remaining() <= 0 {
        return Ok(None);
    }

    let value = scale.cell_label(space.relative())?;
    let index = value.raw() as i64;
    let value = match custom_labels.get(&index) {
        Some(text) => Value::from_text(text.clone()),
        None => value,
    };

    let footprint = orientation.footprint(&value.text());
    if footprint > space.remaining() {
        return Ok(None);
    }

    let position = space.label_position();
    Ok(Some(PlacedColumnLabel {
        label: Label { value, position },
        index,
        space: space.advance(footprint)?,
    }))
}

/// Labels for the column axis, left to right from the scale minimum.
///
/// `origin` is the cell where the column axis meets the first graph column;
/// labels go on the row below it. Labels are strictly increasing in series
/// position and at least [`COLUMN_LABEL_MIN_SPACING`] cells apart.
pub fn column_labels(
    scale: &ColumnScale,
    origin: Point,
    custom_labels: &CustomLabels,
    orientation: LabelOrientation,
) -> ChartResult<Vec<Label>> {
    let last_index = scale.max().raw() as i64;
    let mut space = ColumnSpace::new(origin, scale.cell_extent());
    let mut labels = Vec::new();

    while let Some(placed) = place_column_label(scale, space, custom_labels, orientation)? {
        labels.push(placed.label);
        space = placed.space;

        let next = placed.index + 1;
        if next > last_index {
            break;
        }
        let next_cell = scale.value_to_cell(next as f64)?;
        let gap = (next_cell - space.relative()).max(COLUMN_LABEL_MIN_SPACING);
        if gap >= space.remaining() {
            break;
        }
        space = space.advance(gap)?;
    }

    trace!(
        count = labels.len(),
        width = scale.cell_extent(),
        ?orientation,
        "placed column labels"
    );
    Ok(labels)
}

/// Rows the column axis needs below the graph: the axis line plus its labels.
#[must_use]
pub fn column_axis_height(
    max: i64,
    custom_labels: &CustomLabels,
    orientation: LabelOrientation,
) -> i32 {
    match orientation {
        LabelOrientation::Horizontal => 2,
        LabelOrientation::Vertical => {
            let longest = custom_labels
                .values()
                .map(|text| text_width(text))
                .chain(std::iter::once(text_width(&max.to_string())))
                .max()
                .unwrap_or(0);
            1 + longest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CustomLabels, LabelOrientation, column_axis_height, column_labels, place_column_label,
        row_labels,
    };
    use crate::axes::column_space::ColumnSpace;
    use crate::core::{ColumnScale, Point, RowScale, ScaleMode};
    use crate::error::ChartError;

    fn texts(labels: &[super::Label]) -> Vec<String> {
        labels.iter().map(|label| label.value.text()).collect()
    }

    #[test]
    fn row_labels_walk_up_from_bottom() {
        let scale = RowScale::new(0.0, 100.0, 10, 2, ScaleMode::Anchored).expect("scale");
        let labels = row_labels(&scale, 5).expect("labels");
        let rows: Vec<i32> = labels.iter().map(|label| label.position.y).collect();
        assert_eq!(rows, vec![9, 5, 1]);
        assert_eq!(labels[0].value.text(), "0");
        for label in &labels {
            assert_eq!(label.position.x + label.value.text().len() as i32, 5);
        }
    }

    #[test]
    fn row_labels_force_top_when_only_one() {
        let scale = RowScale::new(0.0, 10.0, 3, 2, ScaleMode::Anchored).expect("scale");
        let labels = row_labels(&scale, 4).expect("labels");
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].position.y, 2);
        assert_eq!(labels[1].position.y, 0);
    }

    #[test]
    fn row_labels_for_flat_zero_scale() {
        let scale = RowScale::new(0.0, 0.0, 3, 2, ScaleMode::Anchored).expect("scale");
        let labels = row_labels(&scale, 4).expect("labels");
        assert_eq!(texts(&labels), vec!["0".to_owned()]);
    }

    #[test]
    fn row_labels_need_two_rows() {
        let scale = RowScale::new(0.0, 10.0, 1, 2, ScaleMode::Anchored).expect("scale");
        assert!(matches!(row_labels(&scale, 4), Err(ChartError::InsufficientSpace(_))));
    }

    #[test]
    fn column_labels_evenly_spread() {
        let scale = ColumnScale::new(0, 3, 100, 2).expect("scale");
        let labels = column_labels(
            &scale,
            Point::new(0, 0),
            &CustomLabels::new(),
            LabelOrientation::Horizontal,
        )
        .expect("labels");
        let positions: Vec<Point> = labels.iter().map(|label| label.position).collect();
        assert_eq!(
            positions,
            vec![
                Point::new(0, 1),
                Point::new(31, 1),
                Point::new(62, 1),
                Point::new(94, 1)
            ]
        );
        assert_eq!(texts(&labels), vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn column_labels_use_custom_text() {
        let scale = ColumnScale::new(0, 3, 100, 2).expect("scale");
        let mut custom = CustomLabels::new();
        custom.insert(1, "one".to_owned());
        let labels = column_labels(
            &scale,
            Point::new(0, 0),
            &custom,
            LabelOrientation::Horizontal,
        )
        .expect("labels");
        assert_eq!(texts(&labels), vec!["0", "one", "2", "3"]);
        assert!(labels[1].value.is_text());
    }

    #[test]
    fn column_label_that_does_not_fit_is_dropped() {
        let scale = ColumnScale::new(0, 1000, 2, 2).expect("scale");
        let space = ColumnSpace::new(Point::new(0, 0), 2).advance(1).expect("advance");
        let placed = place_column_label(
            &scale,
            space,
            &CustomLabels::new(),
            LabelOrientation::Horizontal,
        )
        .expect("placement");
        assert!(placed.is_none());
    }

    #[test]
    fn vertical_labels_take_one_column() {
        let scale = ColumnScale::new(0, 1000, 2, 2).expect("scale");
        let space = ColumnSpace::new(Point::new(0, 0), 2).advance(1).expect("advance");
        let placed = place_column_label(
            &scale,
            space,
            &CustomLabels::new(),
            LabelOrientation::Vertical,
        )
        .expect("placement")
        .expect("fits vertically");
        assert_eq!(placed.space.remaining(), 0);
        assert_eq!(placed.label.position, Point::new(1, 1));
    }

    #[test]
    fn column_axis_height_depends_on_orientation() {
        let mut custom = CustomLabels::new();
        assert_eq!(column_axis_height(1000, &custom, LabelOrientation::Horizontal), 2);
        assert_eq!(column_axis_height(1000, &custom, LabelOrientation::Vertical), 5);
        custom.insert(3, "wednesday".to_owned());
        assert_eq!(column_axis_height(1000, &custom, LabelOrientation::Vertical), 10);
    }

    #[test]
    fn orientation_parses() {
        assert_eq!(
            "Vertical".parse::<LabelOrientation>().expect("orientation"),
            LabelOrientation::Vertical
        );
        assert!("diagonal".parse::<LabelOrientation>().is_err());
    }
}
