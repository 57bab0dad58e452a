use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Most-recent-first list of committed hex or gradient strings.
///
/// No duplicates: re-committing an entry moves it to the front. Only commits touch it,
/// never transient edits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentColors {
    entries: VecDeque<String>,
    capacity: usize,
}

impl RecentColors {
    /// `capacity` below 1 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: &str) {
        if let Some(pos) = self.entries.iter().position(|c| c == value) {
            self.entries.remove(pos);
        }
        self.entries.push_front(value.to_string());
        self.entries.truncate(self.capacity);
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecentColors {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
