use serde::{Deserialize, Serialize};

/// Columns highlighted by a mouse drag, `[start, end)` relative to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighlightRange {
    start: i32,
    end: i32,
    /// Column of the previous `add_x` call.
    last: i32,
}

impl HighlightRange {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn start(&self) -> i32 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> i32 {
        self.end
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of highlighted columns.
    #[must_use]
    pub fn len(&self) -> i32 {
        self.end - self.start
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Extends or shrinks the range to follow the cursor at column `x`.
    ///
    /// The range only grows on the side the cursor is moving toward. When one
    /// event jumps over the whole range, the side the cursor left collapses to
    /// the edge it left from; moving back inside shrinks the side the cursor
    /// came from.
    pub fn add_x(&mut self, x: i32) {
        if self.is_empty() {
            self.start = x;
            self.end = x + 1;
        } else if x < self.start {
            if self.last == self.end - 1 {
                self.end = self.start + 1;
            }
            self.start = x;
        } else if x >= self.end {
            if self.last == self.start {
                self.start = self.end - 1;
            }
            self.end = x + 1;
        } else if self.last >= self.end - 1 {
            self.end = x + 1;
        } else if self.last <= self.start {
            self.start = x;
        } else {
            self.end = x + 1;
        }
        self.last = x;
    }
}

#[cfg(test)]
mod tests {
    use super::HighlightRange;

    fn bounds(range: &HighlightRange) -> (i32, i32) {
        (range.start(), range.end())
    }

    #[test]
    fn first_touch_highlights_one_column() {
        let mut range = HighlightRange::new();
        assert!(range.is_empty());
        range.add_x(4);
        assert_eq!(bounds(&range), (4, 5));
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn drag_right_then_back() {
        let mut range = HighlightRange::new();
        range.add_x(0);
        range.add_x(2);
        assert_eq!(bounds(&range), (0, 3));
        range.add_x(5);
        assert_eq!(bounds(&range), (0, 6));
        range.add_x(3);
        assert_eq!(bounds(&range), (0, 4));
    }

    #[test]
    fn drag_left_then_back() {
        let mut range = HighlightRange::new();
        range.add_x(6);
        range.add_x(3);
        assert_eq!(bounds(&range), (3, 7));
        range.add_x(1);
        assert_eq!(bounds(&range), (1, 7));
        range.add_x(4);
        assert_eq!(bounds(&range), (4, 7));
    }

    #[test]
    fn sweep_across_the_range_moves_the_anchor() {
        let mut range = HighlightRange::new();
        range.add_x(5);
        range.add_x(8);
        assert_eq!(bounds(&range), (5, 9));
        // Jump from the right edge to the left of the anchor.
        range.add_x(2);
        assert_eq!(bounds(&range), (2, 6));
        // And back past the right end again.
        range.add_x(9);
        assert_eq!(bounds(&range), (5, 10));
    }

    #[test]
    fn reset_clears() {
        let mut range = HighlightRange::new();
        range.add_x(1);
        range.add_x(3);
        range.reset();
        assert!(range.is_empty());
        assert_eq!(range, HighlightRange::default());
    }
}
