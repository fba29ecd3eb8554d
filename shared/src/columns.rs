//! Column schema for table rendering, and the customers column set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::customer::{Customer, CustomerId};

/// `DD/MM/YYYY`, zero-padded.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A record that can be shown as a table row.
pub trait TableRow {
    type Key: Copy + Eq + fmt::Debug + fmt::Display;
    type Column: Copy + Eq + fmt::Debug;

    fn key(&self) -> Self::Key;
    fn cell(&self, column: Self::Column) -> CellValue;
}

/// Typed cell content. Sorting compares these, rendering goes through a `CellFormat`.
/// Text orders case-insensitively, with the raw strings breaking ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Date(DateTime<Utc>),
}

impl CellValue {
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Text(_), CellValue::Date(_)) => Ordering::Less,
            (CellValue::Date(_), CellValue::Text(_)) => Ordering::Greater,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    Date(&'static str),
}

impl CellFormat {
    pub fn render(&self, value: &CellValue) -> String {
        match (self, value) {
            (_, CellValue::Text(text)) => text.clone(),
            (CellFormat::Date(pattern), CellValue::Date(date)) => date.format(pattern).to_string(),
            (CellFormat::Text, CellValue::Date(date)) => date.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef<C> {
    pub key: C,
    pub label: &'static str,
    pub sortable: bool,
    pub format: CellFormat,
}

impl<C> ColumnDef<C> {
    pub const fn text(key: C, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            format: CellFormat::Text,
        }
    }

    pub const fn date(key: C, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            format: CellFormat::Date(DATE_FORMAT),
        }
    }

    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

impl<C: Copy> ColumnDef<C> {
    /// Text shown in this column's cell for `row`
    pub fn display<R: TableRow<Column = C>>(&self, row: &R) -> String {
        self.format.render(&row.cell(self.key))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerColumn {
    Name,
    Contact,
    Phone,
    DateAdded,
}

pub const CUSTOMER_COLUMNS: [ColumnDef<CustomerColumn>; 4] = [
    ColumnDef::text(CustomerColumn::Name, "Name"),
    ColumnDef::text(CustomerColumn::Contact, "Contact"),
    ColumnDef::text(CustomerColumn::Phone, "Phone"),
    ColumnDef::date(CustomerColumn::DateAdded, "Date Added"),
];

impl TableRow for Customer {
    type Key = CustomerId;
    type Column = CustomerColumn;

    fn key(&self) -> CustomerId {
        self.id
    }

    fn cell(&self, column: CustomerColumn) -> CellValue {
        match column {
            CustomerColumn::Name => CellValue::Text(self.name.clone()),
            CustomerColumn::Contact => CellValue::Text(self.contact.clone()),
            CustomerColumn::Phone => CellValue::Text(self.phone.clone()),
            CustomerColumn::DateAdded => CellValue::Date(self.date_added),
        }
    }
}
