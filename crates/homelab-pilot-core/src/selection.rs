//! Cursor handling for list views
//!
//! The dashboard cursor never wraps: moving past either end is a no-op.

/// A list of items with a clamped cursor
///
/// # Examples
///
/// ```
/// use homelab_pilot_core::selection::SelectableList;
///
/// let mut list = SelectableList::new(vec!["Pi-hole", "Sonarr", "Jellyfin"]);
///
/// list.select_prev_no_wrap();
/// assert_eq!(list.selected(), Some(&"Pi-hole"));
/// list.select_next_no_wrap();
/// assert_eq!(list.selected(), Some(&"Sonarr"));
/// ```
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    items: Vec<T>,
    selected_index: usize,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
        }
    }
}

impl<T> SelectableList<T> {
    /// Create a list with the cursor on the first item
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            selected_index: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Mutable access to the items; the item count must not change
    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        index == self.selected_index
    }

    /// Move the cursor down, stopping at the last item
    pub fn select_next_no_wrap(&mut self) {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
        }
    }

    /// Move the cursor up, stopping at the first item
    pub fn select_prev_no_wrap(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Place the cursor, clamping to the valid range
    pub fn select(&mut self, index: usize) {
        if self.items.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = index.min(self.items.len() - 1);
        }
    }

    /// Find the first item matching a predicate
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    /// Find the first item matching a predicate, mutably
    pub fn find_mut(&mut self, predicate: impl Fn(&T) -> bool) -> Option<&mut T> {
        self.items.iter_mut().find(|item| predicate(item))
    }

    /// Iterate with `(index, item, is_selected)`
    pub fn iter_with_selection(&self) -> impl Iterator<Item = (usize, &T, bool)> {
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| (i, item, i == self.selected_index))
    }
}

/// Step a plain index within `0..len` without wrapping
pub fn step_index(index: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        0
    } else if down {
        (index + 1).min(len - 1)
    } else {
        index.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services() -> SelectableList<&'static str> {
        SelectableList::new(vec!["Pi-hole", "Sonarr", "Jellyfin"])
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut list = services();
        list.select_prev_no_wrap();
        assert_eq!(list.selected_index(), 0);

        list.select_next_no_wrap();
        list.select_next_no_wrap();
        list.select_next_no_wrap();
        assert_eq!(list.selected_index(), 2);
        assert_eq!(list.selected(), Some(&"Jellyfin"));
    }

    #[test]
    fn test_empty_list() {
        let mut list: SelectableList<&str> = SelectableList::default();
        list.select_next_no_wrap();
        list.select(4);
        assert_eq!(list.selected_index(), 0);
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_select_clamps() {
        let mut list = services();
        list.select(10);
        assert_eq!(list.selected_index(), 2);
    }

    #[test]
    fn test_find_and_iter() {
        let mut list = services();
        list.select(1);
        assert_eq!(list.find(|s| s.starts_with('J')), Some(&"Jellyfin"));

        let marked: Vec<bool> = list.iter_with_selection().map(|(_, _, s)| s).collect();
        assert_eq!(marked, vec![false, true, false]);
    }

    #[test]
    fn test_step_index() {
        assert_eq!(step_index(0, 8, false), 0);
        assert_eq!(step_index(7, 8, true), 7);
        assert_eq!(step_index(3, 8, true), 4);
        assert_eq!(step_index(0, 0, true), 0);
    }
}
