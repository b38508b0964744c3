//! Geometry of the dropdown list for keeping the active row visible.

/// Vertical layout of an open dropdown, reported by the presentation layer.
///
/// Rows are uniform; offsets are in whatever unit the renderer uses
/// (terminal rows, pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownLayout {
    /// Height of one option row.
    pub row_height: u32,
    /// Height of the visible part of the list.
    pub viewport_height: u32,
    /// Current scroll offset from the top of the list.
    pub scroll_top: u32,
}

impl Default for DropdownLayout {
    fn default() -> Self {
        Self {
            row_height: 1,
            viewport_height: 10,
            scroll_top: 0,
        }
    }
}

impl DropdownLayout {
    /// Create a layout scrolled to the top.
    pub fn new(row_height: u32, viewport_height: u32) -> Self {
        Self {
            row_height,
            viewport_height,
            scroll_top: 0,
        }
    }

    /// Offset of the top edge of row `index`.
    pub fn row_top(&self, index: usize) -> u32 {
        (index as u32).saturating_mul(self.row_height)
    }

    /// Scroll offset that reveals row `index`, or `None` if it is visible.
    pub fn reveal(&self, index: usize) -> Option<u32> {
        reveal_span(
            self.scroll_top,
            self.viewport_height,
            self.row_top(index),
            self.row_height,
        )
    }
}

/// Scroll offset needed to show `[item_top, item_top + item_height)` in a
/// window starting at `scroll_top`.
///
/// An item above the window is aligned to its top, an item below it is
/// aligned to its bottom. Returns `None` when no scroll is needed.
pub fn reveal_span(scroll_top: u32, viewport_height: u32, item_top: u32, item_height: u32) -> Option<u32> {
    let item_bottom = item_top.saturating_add(item_height);
    let window_bottom = scroll_top.saturating_add(viewport_height);

    if item_top < scroll_top {
        Some(item_top)
    } else if item_bottom > window_bottom {
        Some(item_bottom.saturating_sub(viewport_height))
    } else {
        None
    }
}
