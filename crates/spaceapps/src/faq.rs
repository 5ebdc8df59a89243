//! FAQ accordion state.

/// Open/closed flag per question plus a selection cursor.
///
/// Items open and close independently of each other.
#[derive(Debug, Clone)]
pub struct FaqState {
    open: Vec<bool>,
    selected: usize,
}

impl FaqState {
    pub fn new(len: usize) -> Self {
        Self {
            open: vec![false; len],
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_open(&self, idx: usize) -> bool {
        self.open.get(idx).copied().unwrap_or(false)
    }

    /// Move the cursor down, stopping at the last item.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.open.len() {
            self.selected += 1;
        }
    }

    /// Move the cursor up, stopping at the first item.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open or close the item under the cursor.
    pub fn toggle_selected(&mut self) {
        if let Some(open) = self.open.get_mut(self.selected) {
            *open = !*open;
        }
    }
}
