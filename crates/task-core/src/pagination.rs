//! Pager state for the task list.

use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current: u32,
    pub total: u32,
}

impl Pagination {
    /// Clamp `current` into `1..=total`; a total of zero is treated as one page
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current + 1)
    }

    pub fn pages(&self) -> RangeInclusive<u32> {
        1..=self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_current_page() {
        assert_eq!(Pagination::new(0, 3).current, 1);
        assert_eq!(Pagination::new(9, 3).current, 3);
        assert_eq!(Pagination::new(2, 0), Pagination { current: 1, total: 1 });
    }

    #[test]
    fn test_neighbours() {
        let first = Pagination::new(1, 3);
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(2));

        let last = Pagination::new(3, 3);
        assert_eq!(last.previous(), Some(2));
        assert_eq!(last.next(), None);
        assert_eq!(last.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
