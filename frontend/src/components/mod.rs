pub mod customer_modal;
pub mod data_table;
pub mod layout;
pub mod search_bar;
