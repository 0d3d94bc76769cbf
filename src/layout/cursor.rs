//! Write position for one drawing region: a whole page or one column.
//!
//! Querying and moving are separate on purpose. A renderer measures what it
//! wants to draw, asks [`PageCursor::has_space`], and only then draws and
//! calls [`PageCursor::advance`]. `advance` never checks the page bound, so a
//! caller that skips the query (the column template does) can run past it.

#[derive(Debug, Clone, PartialEq)]
pub struct PageCursor {
    page_width: f64,
    page_height: f64,
    margin: f64,
    left: f64,
    right: f64,
    y: f64,
}

impl PageCursor {
    /// A cursor over the full text width of the page, starting at the top margin.
    pub fn new(page_width: f64, page_height: f64, margin: f64) -> Self {
        Self {
            page_width,
            page_height,
            margin,
            left: margin,
            right: page_width - margin,
            y: margin,
        }
    }

    /// A cursor over `[left, right]` on the same page, starting at this
    /// cursor's current height. The two cursors move independently.
    pub fn column(&self, left: f64, right: f64) -> Self {
        Self {
            left,
            right,
            ..self.clone()
        }
    }

    /// Current baseline position.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    /// Width of the region between the horizontal bounds.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// The lowest baseline content may use.
    pub fn max_y(&self) -> f64 {
        self.page_height - self.margin
    }

    pub fn remaining_vertical(&self) -> f64 {
        self.max_y() - self.y
    }

    /// Strictly less: a block that would end exactly on the bottom margin
    /// does not fit.
    pub fn has_space(&self, amount: f64) -> bool {
        amount < self.remaining_vertical()
    }

    pub fn advance(&mut self, amount: f64) {
        self.y += amount;
    }
}
