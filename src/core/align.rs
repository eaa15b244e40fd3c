//! Placement of a single line of text inside a rectangle.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::core::geometry::{Point, Rect};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Width of `text` in terminal columns.
#[must_use]
pub fn text_width(text: &str) -> i32 {
    i32::try_from(UnicodeWidthStr::width(text)).unwrap_or(i32::MAX)
}

/// Returns the cell where `text` must start so that it is aligned inside
/// `area`. The text occupies a single row.
pub fn align_text(
    area: Rect,
    text: &str,
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
) -> ChartResult<Point> {
    if area.is_empty() {
        return Err(ChartError::InsufficientSpace(format!(
            "cannot align text inside an empty area {area:?}"
        )));
    }

    let width = text_width(text);
    if width > area.width() {
        return Err(ChartError::InsufficientSpace(format!(
            "text {text:?} is {width} cells wide, area is only {} cells wide",
            area.width()
        )));
    }

    let x = match horizontal {
        HorizontalAlign::Left => area.min.x,
        HorizontalAlign::Center => area.min.x + (area.width() - width) / 2,
        HorizontalAlign::Right => area.max.x - width,
    };
    let y = match vertical {
        VerticalAlign::Top => area.min.y,
        VerticalAlign::Middle => area.min.y + (area.height() - 1) / 2,
        VerticalAlign::Bottom => area.max.y - 1,
    };
    Ok(Point::new(x, y))
}
