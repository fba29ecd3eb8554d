use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Header indicator for a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn glyph(&self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "↕",
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }

    /// Value for the `aria-sort` header attribute
    pub fn aria_sort(&self) -> &'static str {
        match self {
            SortIndicator::Unsorted => "none",
            SortIndicator::Ascending => "ascending",
            SortIndicator::Descending => "descending",
        }
    }
}

/// Which column the table is sorted by, if any.
///
/// Toggling a column cycles unsorted → ascending → descending → unsorted.
/// Toggling a different column than the active one starts it at ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    active: Option<(C, SortOrder)>,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<C: Copy + Eq> SortState<C> {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(column: C, order: SortOrder) -> Self {
        Self {
            active: Some((column, order)),
        }
    }

    pub fn active(&self) -> Option<(C, SortOrder)> {
        self.active
    }

    pub fn toggle(&mut self, column: C) {
        self.active = match self.active {
            Some((current, SortOrder::Ascending)) if current == column => {
                Some((column, SortOrder::Descending))
            }
            Some((current, SortOrder::Descending)) if current == column => None,
            _ => Some((column, SortOrder::Ascending)),
        };
    }

    pub fn indicator(&self, column: C) -> SortIndicator {
        match self.active {
            Some((current, SortOrder::Ascending)) if current == column => SortIndicator::Ascending,
            Some((current, SortOrder::Descending)) if current == column => {
                SortIndicator::Descending
            }
            _ => SortIndicator::Unsorted,
        }
    }
}
