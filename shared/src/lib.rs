//! Customer records, the customers table state and its edit/create form.
//!
//! Everything here is plain state with no UI dependency; the frontend crate
//! renders it and feeds user events back in.

pub mod columns;
pub mod config;
pub mod customer;
pub mod error;
pub mod form;
pub mod sample;
pub mod sorting;
pub mod table;

pub use columns::{
    CUSTOMER_COLUMNS, CellFormat, CellValue, ColumnDef, CustomerColumn, DATE_FORMAT, TableRow,
};
pub use config::CustomersConfig;
pub use customer::{Customer, CustomerDraft, CustomerField, CustomerId, CustomerPatch};
pub use error::{CustomerError, CustomerResult};
pub use form::CustomerForm;
pub use sample::{CustomerSource, FakeCustomers};
pub use sorting::{SortIndicator, SortOrder, SortState};
pub use table::{CustomerTable, ModalOutcome, ModalState};
