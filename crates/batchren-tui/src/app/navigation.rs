//! Selection and scrolling over the current view.

use super::constants::PAGE_SIZE;

/// Trait for types that support list-style navigation.
pub trait ListNavigator {
    /// Get the currently selected index.
    fn selected(&self) -> usize;

    /// Set the selected index.
    fn set_selected(&mut self, index: usize);

    /// Get the maximum valid index (item count - 1, or 0 if empty).
    fn max_index(&self) -> usize;

    /// Move selection up by count items.
    fn move_up(&mut self, count: usize) {
        let current = self.selected();
        self.set_selected(current.saturating_sub(count));
    }

    /// Move selection down by count items.
    fn move_down(&mut self, count: usize) {
        let current = self.selected();
        let max = self.max_index();
        self.set_selected((current + count).min(max));
    }

    /// Move selection up by one page.
    fn page_up(&mut self) {
        self.move_up(PAGE_SIZE);
    }

    /// Move selection down by one page.
    fn page_down(&mut self) {
        self.move_down(PAGE_SIZE);
    }

    /// Jump to the first item.
    fn jump_to_top(&mut self) {
        self.set_selected(0);
    }

    /// Jump to the last item.
    fn jump_to_bottom(&mut self) {
        self.set_selected(self.max_index());
    }
}

/// Selected row plus the scroll window that keeps it visible.
#[derive(Debug, Clone)]
pub struct ScrollNav {
    selected: usize,
    offset: usize,
    count: usize,
    height: usize,
}

impl ScrollNav {
    /// Create a navigator over `count` rows with a window of `height` rows.
    pub fn new(count: usize, height: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            count,
            height: height.max(1),
        }
    }

    /// Reset to the first row of a new listing.
    pub fn reset(&mut self, count: usize) {
        self.count = count;
        self.selected = 0;
        self.offset = 0;
    }

    /// Update the row count, clamping selection if necessary.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.set_selected(self.selected);
    }

    /// Update the window height (for example after a resize).
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.scroll_to_selection();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rows currently inside the window.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        self.offset..(self.offset + self.height).min(self.count)
    }

    fn scroll_to_selection(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + self.height {
            self.offset = self.selected + 1 - self.height;
        }
        // no blank rows below the last entry while rows above are hidden
        self.offset = self.offset.min(self.count.saturating_sub(self.height));
    }
}

impl ListNavigator for ScrollNav {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, index: usize) {
        self.selected = index.min(self.max_index());
        self.scroll_to_selection();
    }

    fn max_index(&self) -> usize {
        self.count.saturating_sub(1)
    }
}
