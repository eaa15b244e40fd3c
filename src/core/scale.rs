use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::value::{Value, ValueFormatter};
use crate::error::{ChartError, ChartResult};

/// Braille dot rows per terminal cell.
pub const ROW_RESOLUTION: i32 = 4;
/// Braille dot columns per terminal cell.
pub const COLUMN_RESOLUTION: i32 = 2;

/// How the row axis chooses its effective range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// The range always includes zero, so the zero baseline stays visible.
    #[default]
    Anchored,
    /// The range fits the data. Constant data still anchors to zero.
    Adaptive,
}

impl ScaleMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anchored => "anchored",
            Self::Adaptive => "adaptive",
        }
    }

    /// Widens `[min, max]` into the range the scale actually spans.
    #[must_use]
    pub fn effective_range(self, min: f64, max: f64) -> (f64, f64) {
        let (mut min, mut max) = (min, max);
        match self {
            Self::Anchored => {
                if min > 0.0 {
                    min = 0.0;
                }
                if max < 0.0 {
                    max = 0.0;
                }
            }
            Self::Adaptive => {
                if min == max {
                    if min > 0.0 {
                        min = 0.0;
                    } else {
                        max = 0.0;
                    }
                }
            }
        }
        (min, max)
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleMode {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anchored" => Ok(Self::Anchored),
            "adaptive" => Ok(Self::Adaptive),
            other => Err(ChartError::InvalidConfig(format!(
                "unsupported scale mode {other:?}, expected \"anchored\" or \"adaptive\""
            ))),
        }
    }
}

/// Maps a numeric range onto the rows of the graph.
///
/// Sub-pixel `y` grows downward like terminal rows, while values grow upward:
/// the bottom sub-pixel shows `min`, the top one `max`.
#[derive(Debug, Clone, PartialEq)]
pub struct RowScale {
    min: Value,
    max: Value,
    step: Value,
    mode: ScaleMode,
    cell_extent: i32,
    subpixel_extent: i32,
}

impl RowScale {
    pub fn new(
        min: f64,
        max: f64,
        cell_extent: i32,
        non_zero_decimals: usize,
        mode: ScaleMode,
    ) -> ChartResult<Self> {
        Self::with_formatter(min, max, cell_extent, non_zero_decimals, mode, None)
    }

    /// Like [`RowScale::new`], with a formatter applied to the boundary values
    /// and every cell label.
    pub fn with_formatter(
        min: f64,
        max: f64,
        cell_extent: i32,
        non_zero_decimals: usize,
        mode: ScaleMode,
        formatter: Option<ValueFormatter>,
    ) -> ChartResult<Self> {
        validate_bounds(min, max)?;
        let subpixel_extent = subpixel_extent(cell_extent, ROW_RESOLUTION)?;
        let (min, max) = mode.effective_range(min, max);
        // One sub-pixel is reserved for the boundary value.
        let usable = f64::from(subpixel_extent - 1);
        let step = Value::new((max - min) / usable, non_zero_decimals);

        Ok(Self {
            min: Value::with_formatter(min, non_zero_decimals, formatter.clone()),
            max: Value::with_formatter(max, non_zero_decimals, formatter),
            step,
            mode,
            cell_extent,
            subpixel_extent,
        })
    }

    #[must_use]
    pub fn min(&self) -> &Value {
        &self.min
    }

    #[must_use]
    pub fn max(&self) -> &Value {
        &self.max
    }

    #[must_use]
    pub fn step(&self) -> &Value {
        &self.step
    }

    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    #[must_use]
    pub fn cell_extent(&self) -> i32 {
        self.cell_extent
    }

    #[must_use]
    pub fn subpixel_extent(&self) -> i32 {
        self.subpixel_extent
    }

    /// Value shown at sub-pixel row `y`.
    pub fn pixel_to_value(&self, y: i32) -> ChartResult<f64> {
        let position = row_to_position(y, self.subpixel_extent)?;
        Ok(position_to_value(
            position,
            self.subpixel_extent,
            &self.min,
            &self.max,
            &self.step,
        ))
    }

    /// Sub-pixel row at which `value` is drawn.
    pub fn value_to_pixel(&self, value: f64) -> ChartResult<i32> {
        check_value(value, &self.min, &self.max)?;
        if self.step.rounded() == 0.0 {
            return Ok(0);
        }
        let last = self.subpixel_extent - 1;
        let position = if value >= self.max.rounded() {
            last
        } else if value <= self.min.rounded() {
            0
        } else {
            value_to_position(value, last, &self.min, &self.step)
        };
        row_to_position(position, self.subpixel_extent)
    }

    /// Value at the bottom boundary of the cell row `y`.
    pub fn cell_label(&self, y: i32) -> ChartResult<Value> {
        let cell_position = row_to_position(y, self.cell_extent)?;
        let pixel_y = row_to_position(cell_position * ROW_RESOLUTION, self.subpixel_extent)?;
        let value = self.pixel_to_value(pixel_y)?;
        Ok(Value::with_formatter(
            value,
            self.min.non_zero_decimals(),
            self.min.formatter().cloned(),
        ))
    }
}

/// Maps a range of series positions onto the columns of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnScale {
    min: Value,
    max: Value,
    step: Value,
    cell_extent: i32,
    subpixel_extent: i32,
}

impl ColumnScale {
    pub fn new(min: i64, max: i64, cell_extent: i32, non_zero_decimals: usize) -> ChartResult<Self> {
        if min < 0 || max < 0 {
            return Err(ChartError::InvalidRange(format!(
                "column scale positions must be non-negative, got min={min}, max={max}"
            )));
        }
        if max < min {
            return Err(ChartError::InvalidRange(format!(
                "column scale max {max} is less than min {min}"
            )));
        }
        let subpixel_extent = subpixel_extent(cell_extent, COLUMN_RESOLUTION)?;
        let usable = f64::from(subpixel_extent - 1);
        let (min, max) = (min as f64, max as f64);

        Ok(Self {
            min: Value::new(min, non_zero_decimals),
            max: Value::new(max, non_zero_decimals),
            step: Value::new((max - min) / usable, non_zero_decimals),
            cell_extent,
            subpixel_extent,
        })
    }

    #[must_use]
    pub fn min(&self) -> &Value {
        &self.min
    }

    #[must_use]
    pub fn max(&self) -> &Value {
        &self.max
    }

    #[must_use]
    pub fn step(&self) -> &Value {
        &self.step
    }

    #[must_use]
    pub fn cell_extent(&self) -> i32 {
        self.cell_extent
    }

    #[must_use]
    pub fn subpixel_extent(&self) -> i32 {
        self.subpixel_extent
    }

    /// Series position shown at sub-pixel column `x`.
    pub fn pixel_to_value(&self, x: i32) -> ChartResult<f64> {
        check_coordinate(x, self.subpixel_extent, "sub-pixel column")?;
        Ok(position_to_value(
            x,
            self.subpixel_extent,
            &self.min,
            &self.max,
            &self.step,
        ))
    }

    /// Sub-pixel column at which the series position `value` is drawn.
    ///
    /// Unlike [`RowScale::value_to_pixel`], `max` is not snapped to the last
    /// sub-pixel, so `value_to_pixel(pixel_to_value(last))` can land before
    /// `last`.
    pub fn value_to_pixel(&self, value: f64) -> ChartResult<i32> {
        check_value(value, &self.min, &self.max)?;
        if self.step.rounded() == 0.0 {
            return Ok(0);
        }
        // Column label spacing is derived from these unsnapped positions.
        Ok(value_to_position(
            value,
            self.subpixel_extent - 1,
            &self.min,
            &self.step,
        ))
    }

    /// Cell column containing the series position `value`.
    pub fn value_to_cell(&self, value: f64) -> ChartResult<i32> {
        Ok(self.value_to_pixel(value)? / COLUMN_RESOLUTION)
    }

    /// Series position at the left boundary of cell column `x`, rounded to
    /// the nearest index.
    pub fn cell_label(&self, x: i32) -> ChartResult<Value> {
        check_coordinate(x, self.cell_extent, "cell column")?;
        let value = self.pixel_to_value(x * COLUMN_RESOLUTION)?;
        Ok(Value::new(value.round(), self.min.non_zero_decimals()))
    }
}

fn validate_bounds(min: f64, max: f64) -> ChartResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidRange(format!(
            "scale bounds must be finite, got min={min}, max={max}"
        )));
    }
    if max < min {
        return Err(ChartError::InvalidRange(format!(
            "scale max {max} is less than min {min}"
        )));
    }
    Ok(())
}

fn subpixel_extent(cell_extent: i32, resolution: i32) -> ChartResult<i32> {
    if cell_extent < 1 {
        return Err(ChartError::InvalidRange(format!(
            "scale needs at least one cell, got {cell_extent}"
        )));
    }
    cell_extent.checked_mul(resolution).ok_or_else(|| {
        ChartError::InvalidRange(format!("cell extent {cell_extent} is too large"))
    })
}

fn check_coordinate(coordinate: i32, extent: i32, what: &str) -> ChartResult<()> {
    if coordinate < 0 || coordinate >= extent {
        return Err(ChartError::OutOfBounds(format!(
            "{what} {coordinate} is outside [0, {extent})"
        )));
    }
    Ok(())
}

/// Flips between downward-growing rows and upward-growing positions. The
/// mapping is its own inverse.
fn row_to_position(y: i32, extent: i32) -> ChartResult<i32> {
    check_coordinate(y, extent, "row")?;
    Ok(extent - 1 - y)
}

fn position_to_value(position: i32, extent: i32, min: &Value, max: &Value, step: &Value) -> f64 {
    if position == 0 {
        return min.rounded();
    }
    if position == extent - 1 {
        return max.rounded();
    }
    // A rounded-up step can overshoot the boundaries; clamping keeps the
    // mapping monotonic.
    let value = f64::from(position) * step.rounded() + min.raw();
    value.clamp(min.rounded(), max.rounded())
}

fn check_value(value: f64, min: &Value, max: &Value) -> ChartResult<()> {
    if !(min.raw()..=max.rounded()).contains(&value) {
        return Err(ChartError::OutOfBounds(format!(
            "value {value} is outside [{}, {}]",
            min.raw(),
            max.rounded()
        )));
    }
    Ok(())
}

fn value_to_position(value: f64, last: i32, min: &Value, step: &Value) -> i32 {
    // f64::round rounds half away from zero.
    let position = ((value - min.raw()) / step.rounded()).round();
    (position as i32).clamp(0, last)
}

#[cfg(test)]
mod tests {
    use super::{ColumnScale, RowScale, ScaleMode};
    use crate::error::ChartError;

    #[test]
    fn anchored_row_scale_maps_top_to_max() {
        let scale = RowScale::new(0.0, 10.0, 4, 2, ScaleMode::Anchored).expect("scale");
        assert_eq!(scale.subpixel_extent(), 16);
        assert_eq!(scale.pixel_to_value(0).expect("top"), 10.0);
        assert_eq!(scale.pixel_to_value(15).expect("bottom"), 0.0);
        assert_eq!(scale.value_to_pixel(10.0).expect("max"), 0);
        assert_eq!(scale.value_to_pixel(0.0).expect("min"), 15);
    }

    #[test]
    fn anchored_mode_includes_zero() {
        let scale = RowScale::new(1.0, 7.0, 1, 2, ScaleMode::Anchored).expect("scale");
        assert_eq!(scale.min().raw(), 0.0);
        assert_eq!(scale.max().raw(), 7.0);

        let negative = RowScale::new(-7.0, -1.0, 1, 2, ScaleMode::Anchored).expect("scale");
        assert_eq!(negative.min().raw(), -7.0);
        assert_eq!(negative.max().raw(), 0.0);
    }

    #[test]
    fn adaptive_mode_keeps_data_range_unless_constant() {
        let scale = RowScale::new(1.0, 7.0, 2, 2, ScaleMode::Adaptive).expect("scale");
        assert_eq!((scale.min().raw(), scale.max().raw()), (1.0, 7.0));

        let constant = RowScale::new(5.0, 5.0, 2, 2, ScaleMode::Adaptive).expect("scale");
        assert_eq!((constant.min().raw(), constant.max().raw()), (0.0, 5.0));

        let negative = RowScale::new(-5.0, -5.0, 2, 2, ScaleMode::Adaptive).expect("scale");
        assert_eq!((negative.min().raw(), negative.max().raw()), (-5.0, 0.0));
    }

    #[test]
    fn row_scale_rejects_invalid_input() {
        assert!(matches!(
            RowScale::new(2.0, 1.0, 4, 2, ScaleMode::Anchored),
            Err(ChartError::InvalidRange(_))
        ));
        assert!(matches!(
            RowScale::new(0.0, 1.0, 0, 2, ScaleMode::Anchored),
            Err(ChartError::InvalidRange(_))
        ));
        assert!(matches!(
            RowScale::new(f64::NAN, 1.0, 2, 2, ScaleMode::Anchored),
            Err(ChartError::InvalidRange(_))
        ));
    }

    #[test]
    fn row_scale_rejects_out_of_range_queries() {
        let scale = RowScale::new(0.0, 10.0, 4, 2, ScaleMode::Anchored).expect("scale");
        assert!(matches!(scale.pixel_to_value(16), Err(ChartError::OutOfBounds(_))));
        assert!(matches!(scale.pixel_to_value(-1), Err(ChartError::OutOfBounds(_))));
        assert!(matches!(scale.value_to_pixel(10.5), Err(ChartError::OutOfBounds(_))));
        assert!(matches!(scale.value_to_pixel(-0.1), Err(ChartError::OutOfBounds(_))));
        assert!(matches!(scale.cell_label(4), Err(ChartError::OutOfBounds(_))));
    }

    #[test]
    fn degenerate_scale_maps_everything_to_zero() {
        let scale = RowScale::new(0.0, 0.0, 3, 2, ScaleMode::Anchored).expect("scale");
        assert_eq!(scale.step().rounded(), 0.0);
        assert_eq!(scale.value_to_pixel(0.0).expect("pixel"), 0);
    }

    #[test]
    fn row_cell_label_uses_cell_bottom() {
        let scale = RowScale::new(0.0, 10.0, 4, 2, ScaleMode::Anchored).expect("scale");
        assert_eq!(scale.cell_label(3).expect("bottom cell").raw(), 0.0);
        // Cell row 0 starts at position 12 -> 12 * 0.67.
        let top = scale.cell_label(0).expect("top cell");
        assert!((top.raw() - 8.04).abs() < 1e-9);
    }

    #[test]
    fn column_scale_maps_positions() {
        let scale = ColumnScale::new(0, 3, 100, 2).expect("scale");
        assert_eq!(scale.subpixel_extent(), 200);
        assert_eq!(scale.step().rounded(), 0.016);
        assert_eq!(scale.value_to_cell(1.0).expect("cell"), 31);
        assert_eq!(scale.value_to_cell(2.0).expect("cell"), 62);
        assert_eq!(scale.value_to_cell(3.0).expect("cell"), 94);
        assert_eq!(scale.cell_label(31).expect("label").raw(), 1.0);
        assert_eq!(scale.cell_label(94).expect("label").raw(), 3.0);
    }

    #[test]
    fn column_scale_with_offset_min() {
        let scale = ColumnScale::new(10, 20, 5, 2).expect("scale");
        assert_eq!(scale.pixel_to_value(0).expect("first"), 10.0);
        assert_eq!(scale.pixel_to_value(9).expect("last"), 20.0);
        assert_eq!(scale.value_to_pixel(10.0).expect("min"), 0);
        assert_eq!(scale.value_to_pixel(20.0).expect("max"), 9);
        assert!(matches!(scale.value_to_pixel(9.0), Err(ChartError::OutOfBounds(_))));
    }

    #[test]
    fn column_max_is_not_snapped_to_the_last_subpixel() {
        let scale = ColumnScale::new(0, 3, 100, 2).expect("scale");
        assert_eq!(scale.pixel_to_value(199).expect("last"), 3.0);
        assert_eq!(scale.value_to_pixel(3.0).expect("max"), 188);
    }

    #[test]
    fn column_scale_rejects_invalid_input() {
        assert!(matches!(ColumnScale::new(-1, 3, 4, 2), Err(ChartError::InvalidRange(_))));
        assert!(matches!(ColumnScale::new(4, 3, 4, 2), Err(ChartError::InvalidRange(_))));
        assert!(matches!(ColumnScale::new(0, 3, 0, 2), Err(ChartError::InvalidRange(_))));
    }

    #[test]
    fn scale_mode_parses_names() {
        assert_eq!("Adaptive".parse::<ScaleMode>().expect("mode"), ScaleMode::Adaptive);
        assert_eq!(" anchored ".parse::<ScaleMode>().expect("mode"), ScaleMode::Anchored);
        assert!(matches!("log".parse::<ScaleMode>(), Err(ChartError::InvalidConfig(_))));
    }
}
