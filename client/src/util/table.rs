//! Client-side sorting and filtering for data tables.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;

/// One cell as seen by sort and filter.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Text cell; blank strings are [`CellValue::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() { Self::Empty } else { Self::Text(value) }
    }

    #[must_use]
    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, Self::text)
    }

    #[must_use]
    pub fn number(value: f64) -> Self {
        if value.is_nan() { Self::Empty } else { Self::Number(value) }
    }

    /// Rendered cell text.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => super::format::number(*n),
            Self::Empty => String::new(),
        }
    }
}

/// Rows that can be shown in a data table.
pub trait TableRow {
    fn cell(&self, column: &str) -> CellValue;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Column descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub filterable: bool,
}

impl Column {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label, sortable: true, filterable: true }
    }

    #[must_use]
    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    #[must_use]
    pub const fn unfilterable(mut self) -> Self {
        self.filterable = false;
        self
    }
}

/// Current filter text and sort column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub filter: String,
    pub sort: Option<(String, SortDirection)>,
}

impl TableQuery {
    /// Cycle `column` through ascending, descending, unsorted. Picking a new
    /// column starts at ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = match self.sort.take() {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((current, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => None,
            _ => Some((column.to_owned(), SortDirection::Ascending)),
        };
    }

    #[must_use]
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        match &self.sort {
            Some((current, dir)) if current == column => Some(*dir),
            _ => None,
        }
    }

    /// Every whitespace-separated filter term must appear (case-insensitive)
    /// in at least one filterable column.
    #[must_use]
    pub fn matches<R: TableRow>(&self, row: &R, columns: &[Column]) -> bool {
        let terms: Vec<String> = self.filter.split_whitespace().map(str::to_lowercase).collect();
        if terms.is_empty() {
            return true;
        }
        let haystacks: Vec<String> = columns
            .iter()
            .filter(|c| c.filterable)
            .map(|c| row.cell(c.key).display().to_lowercase())
            .collect();
        terms.iter().all(|t| haystacks.iter().any(|h| h.contains(t.as_str())))
    }

    /// Filtered and sorted view of `rows`.
    #[must_use]
    pub fn apply<'a, R: TableRow>(&self, rows: &'a [R], columns: &[Column]) -> Vec<&'a R> {
        let mut view: Vec<&R> = rows.iter().filter(|r| self.matches(*r, columns)).collect();
        if let Some((column, dir)) = &self.sort {
            view.sort_by(|a, b| compare_cells(&a.cell(column), &b.cell(column), *dir));
        }
        view
    }
}

/// Order two cells. Empty cells sort last in either direction; numbers sort
/// before text.
#[must_use]
pub fn compare_cells(a: &CellValue, b: &CellValue, dir: SortDirection) -> Ordering {
    let ord = match (a, b) {
        (CellValue::Empty, CellValue::Empty) => return Ordering::Equal,
        (CellValue::Empty, _) => return Ordering::Greater,
        (_, CellValue::Empty) => return Ordering::Less,
        (CellValue::Number(x), CellValue::Number(y)) => x.total_cmp(y),
        (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
        (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
        (CellValue::Text(x), CellValue::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
    };
    match dir {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}
