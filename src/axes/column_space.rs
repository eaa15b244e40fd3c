use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// Remaining room on the column axis while labels are placed left to right.
///
/// Placement steps consume the space by value and get an advanced copy back,
/// so each step can be exercised on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpace {
    origin: Point,
    width: i32,
    cursor: i32,
}

impl ColumnSpace {
    /// `origin` is where the column axis meets the first graph column.
    #[must_use]
    pub fn new(origin: Point, width: i32) -> Self {
        Self {
            origin,
            width: width.max(0),
            cursor: 0,
        }
    }

    /// Cursor offset from the first graph column.
    #[must_use]
    pub fn relative(self) -> i32 {
        self.cursor
    }

    #[must_use]
    pub fn remaining(self) -> i32 {
        self.width - self.cursor
    }

    /// Cell where a label starting at the cursor is drawn: one row below the
    /// axis line.
    #[must_use]
    pub fn label_position(self) -> Point {
        Point::new(self.origin.x + self.cursor, self.origin.y + 1)
    }

    pub fn advance(self, cells: i32) -> ChartResult<Self> {
        if cells < 0 || cells > self.remaining() {
            return Err(ChartError::OutOfBounds(format!(
                "cannot advance the column space by {cells} cells, {} remaining",
                self.remaining()
            )));
        }
        Ok(Self {
            cursor: self.cursor + cells,
            ..self
        })
    }
}
