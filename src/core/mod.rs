pub mod align;
pub mod bounds;
pub mod geometry;
pub mod scale;
pub mod value;

pub use align::{HorizontalAlign, VerticalAlign, align_text, text_width};
pub use bounds::{RowRange, column_bounds, row_bounds};
pub use geometry::{Point, Rect};
pub use scale::{COLUMN_RESOLUTION, ColumnScale, ROW_RESOLUTION, RowScale, ScaleMode};
pub use value::{DEFAULT_NON_ZERO_DECIMALS, Value, ValueFormatter, round_to_non_zero_places};
