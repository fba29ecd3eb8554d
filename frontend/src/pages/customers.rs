// Customers Page - searchable, sortable customer table with a create/edit modal

use std::rc::Rc;

use chrono::Utc;
use customers_shared::{Customer, CustomerColumn, CustomerId, CustomerPatch, CustomerTable};
use tracing::{debug, warn};
use yew::prelude::*;

use crate::components::customer_modal::CustomerModal;
use crate::components::data_table::DataTable;
use crate::components::search_bar::SearchBar;

#[derive(Debug, Clone, PartialEq)]
pub enum CustomersAction {
    OpenCreate,
    SelectRow(CustomerId),
    ModalClosed(Option<CustomerPatch>),
    Search(String),
    ToggleSort(CustomerColumn),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomersState {
    pub table: CustomerTable,
}

impl Reducible for CustomersState {
    type Action = CustomersAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut table = self.table.clone();
        match action {
            CustomersAction::OpenCreate => table.open_create(),
            CustomersAction::SelectRow(id) => {
                if !table.select_row(id) {
                    debug!(id, "selected row no longer exists");
                }
            }
            CustomersAction::ModalClosed(result) => {
                match table.on_modal_closed(result, Utc::now()) {
                    Ok(outcome) => debug!(?outcome, "customer modal closed"),
                    Err(err) => warn!(%err, "customer change rejected"),
                }
            }
            CustomersAction::Search(query) => table.set_search(query),
            CustomersAction::ToggleSort(column) => table.toggle_sort(column),
        }
        Rc::new(Self { table })
    }
}

#[derive(Properties, PartialEq)]
pub struct CustomersPageProps {
    /// Records the table starts with
    pub customers: Vec<Customer>,
}

#[function_component(CustomersPage)]
pub fn customers_page(props: &CustomersPageProps) -> Html {
    let state = {
        let customers = props.customers.clone();
        use_reducer(move || CustomersState {
            table: CustomerTable::new(customers),
        })
    };

    let on_search = {
        let state = state.clone();
        Callback::from(move |query: String| state.dispatch(CustomersAction::Search(query)))
    };

    let on_add = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CustomersAction::OpenCreate))
    };

    let on_sort = {
        let state = state.clone();
        Callback::from(move |column: CustomerColumn| state.dispatch(CustomersAction::ToggleSort(column)))
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |id: CustomerId| state.dispatch(CustomersAction::SelectRow(id)))
    };

    let on_modal_closed = {
        let state = state.clone();
        Callback::from(move |result: Option<CustomerPatch>| {
            state.dispatch(CustomersAction::ModalClosed(result))
        })
    };

    let table = &state.table;
    let rows: Vec<Customer> = table.visible_rows().into_iter().cloned().collect();

    html! {
        <div class="p-6">
            <div class="flex items-center justify-between mb-5">
                <h1 class="text-2xl font-semibold text-white">{"Customers"}</h1>
                <div class="flex items-center space-x-2">
                    <SearchBar
                        value={table.search().to_string()}
                        on_search={on_search}
                        placeholder="Search customers..."
                    />
                    <button
                        onclick={on_add}
                        aria-label="Add customer"
                        class="flex items-center px-3 py-1.5 rounded-lg text-sm font-medium bg-blue-600 hover:bg-blue-700 text-white"
                    >
                        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4"/>
                        </svg>
                    </button>
                </div>
            </div>

            <div class="bg-gray-800 rounded-lg border border-gray-700">
                <DataTable<Customer>
                    columns={table.columns().to_vec()}
                    rows={rows}
                    sort={table.sort()}
                    on_sort={on_sort}
                    on_select={on_select}
                    empty_message="No customers match your search"
                />
            </div>

            if table.is_modal_open() {
                <CustomerModal seed={table.edit_target().cloned()} on_close={on_modal_closed} />
            }
        </div>
    }
}
