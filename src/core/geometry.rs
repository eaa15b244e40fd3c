use serde::{Deserialize, Serialize};

/// A terminal cell coordinate. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Half-open rectangle of terminal cells: `min` is inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Builds a rectangle from two corners, swapping coordinates as needed so
    /// that `min` is always the top-left corner.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    #[must_use]
    pub fn from_size(origin: Point, width: i32, height: i32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    #[must_use]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn size(self) -> (i32, i32) {
        (self.width(), self.height())
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        self.min.x <= point.x && point.x < self.max.x && self.min.y <= point.y && point.y < self.max.y
    }

    /// Reports whether `other` lies entirely inside `self`.
    ///
    /// An empty rectangle is inside every rectangle.
    #[must_use]
    pub fn contains_rect(self, other: Rect) -> bool {
        if other.is_empty() {
            return true;
        }
        self.min.x <= other.min.x
            && other.max.x <= self.max.x
            && self.min.y <= other.min.y
            && other.max.y <= self.max.y
    }

    /// Returns the overlap of both rectangles, or the zero rectangle when they
    /// do not overlap.
    #[must_use]
    pub fn intersect(self, other: Rect) -> Rect {
        let min = Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        let rect = Rect { min, max };
        if rect.is_empty() {
            Rect::default()
        } else {
            rect
        }
    }
}

#[cfg(feature = "ratatui-adapter")]
impl From<ratatui::layout::Rect> for Rect {
    fn from(area: ratatui::layout::Rect) -> Self {
        Rect::from_size(
            Point::new(i32::from(area.x), i32::from(area.y)),
            i32::from(area.width),
            i32::from(area.height),
        )
    }
}
