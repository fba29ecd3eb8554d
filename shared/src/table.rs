//! Customers table state: the record list, search, sort and the edit/create modal.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::columns::{CUSTOMER_COLUMNS, ColumnDef, CustomerColumn, TableRow};
use crate::customer::{Customer, CustomerId, CustomerPatch};
use crate::error::{CustomerError, CustomerResult};
use crate::sample::CustomerSource;
use crate::sorting::{SortIndicator, SortOrder, SortState};

/// Filters `rows` by a case-insensitive substring match against every column's
/// displayed text, then stably sorts them by the active sort column.
pub fn visible_rows<'a, R: TableRow>(
    rows: &'a [R],
    columns: &[ColumnDef<R::Column>],
    query: &str,
    sort: &SortState<R::Column>,
) -> Vec<&'a R> {
    let needle = query.trim().to_lowercase();
    let mut visible: Vec<&R> = rows
        .iter()
        .filter(|row| {
            needle.is_empty()
                || columns
                    .iter()
                    .any(|column| column.display(*row).to_lowercase().contains(&needle))
        })
        .collect();

    if let Some((column, order)) = sort.active() {
        visible.sort_by(|a, b| {
            let ordering = a.cell(column).compare(&b.cell(column));
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    visible
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Create,
    Edit(Customer),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn edit_target(&self) -> Option<&Customer> {
        match self {
            ModalState::Edit(customer) => Some(customer),
            _ => None,
        }
    }
}

/// What closing the modal did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOutcome {
    Cancelled,
    Created(CustomerId),
    Updated(CustomerId),
    /// The record being edited is no longer in the collection; nothing changed.
    EditTargetMissing(CustomerId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerTable {
    customers: Vec<Customer>,
    modal: ModalState,
    search: String,
    sort: SortState<CustomerColumn>,
}

impl CustomerTable {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers,
            modal: ModalState::Closed,
            search: String::new(),
            sort: SortState::unsorted(),
        }
    }

    pub fn from_source(source: &mut impl CustomerSource) -> Self {
        Self::new(source.customers())
    }

    pub fn columns(&self) -> &'static [ColumnDef<CustomerColumn>] {
        &CUSTOMER_COLUMNS
    }

    /// Records in insertion order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn edit_target(&self) -> Option<&Customer> {
        self.modal.edit_target()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortState<CustomerColumn> {
        self.sort
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn toggle_sort(&mut self, column: CustomerColumn) {
        let sortable = self
            .columns()
            .iter()
            .any(|def| def.key == column && def.sortable);
        if sortable {
            self.sort.toggle(column);
            debug!(?column, sort = ?self.sort.active(), "sort toggled");
        }
    }

    pub fn sort_indicator(&self, column: CustomerColumn) -> SortIndicator {
        self.sort.indicator(column)
    }

    pub fn visible_rows(&self) -> Vec<&Customer> {
        visible_rows(&self.customers, self.columns(), &self.search, &self.sort)
    }

    pub fn open_create(&mut self) {
        self.modal = ModalState::Create;
    }

    pub fn open_edit(&mut self, customer: Customer) {
        debug!(id = customer.id, "editing customer");
        self.modal = ModalState::Edit(customer);
    }

    /// Row selection: opens the modal on the row's current data.
    pub fn select_row(&mut self, id: CustomerId) -> bool {
        match self.get(id).cloned() {
            Some(customer) => {
                self.open_edit(customer);
                true
            }
            None => false,
        }
    }

    /// Applies the modal's result. `None` is a cancel. The modal is closed and
    /// the edit target cleared whatever happens.
    pub fn on_modal_closed(
        &mut self,
        result: Option<CustomerPatch>,
        now: DateTime<Utc>,
    ) -> CustomerResult<ModalOutcome> {
        let modal = std::mem::take(&mut self.modal);
        let Some(patch) = result else {
            return Ok(ModalOutcome::Cancelled);
        };

        match modal {
            ModalState::Edit(target) => self.merge(target.id, patch),
            ModalState::Create | ModalState::Closed => self.insert(patch, now),
        }
    }

    fn merge(&mut self, id: CustomerId, patch: CustomerPatch) -> CustomerResult<ModalOutcome> {
        let empty = patch.empty_fields();
        if !empty.is_empty() {
            return Err(CustomerError::Incomplete { missing: empty });
        }

        match self.customers.iter_mut().find(|customer| customer.id == id) {
            Some(customer) => {
                customer.apply(patch);
                Ok(ModalOutcome::Updated(id))
            }
            None => {
                debug!(id, "edit target no longer in collection, ignoring");
                Ok(ModalOutcome::EditTargetMissing(id))
            }
        }
    }

    fn insert(&mut self, patch: CustomerPatch, now: DateTime<Utc>) -> CustomerResult<ModalOutcome> {
        let draft = patch.into_draft()?;
        let id = self.next_id();
        self.customers.insert(0, Customer::from_draft(id, draft, now));
        debug!(id, "customer created");
        Ok(ModalOutcome::Created(id))
    }

    /// `len + 1`, or one past the highest id when that is already taken.
    fn next_id(&self) -> CustomerId {
        let candidate = (self.customers.len() as CustomerId).saturating_add(1);
        if self.get(candidate).is_none() {
            return candidate;
        }
        self.customers
            .iter()
            .map(|customer| customer.id)
            .max()
            .map_or(candidate, |max| max.saturating_add(1))
    }
}
