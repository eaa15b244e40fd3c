pub mod column_space;
pub mod details;
pub mod labels;
pub mod layout;

pub use column_space::ColumnSpace;
pub use details::{
    AXIS_WIDTH, ColumnAxisDetails, ColumnAxisProperties, RowAxisDetails, RowAxisProperties,
    row_axis_width,
};
pub use labels::{
    COLUMN_LABEL_MIN_SPACING, CustomLabels, Label, LabelOrientation, PlacedColumnLabel,
    ROW_LABEL_SPACING, column_axis_height, column_labels, place_column_label, row_labels,
};
pub use layout::{AxesLayout, graph_area};
