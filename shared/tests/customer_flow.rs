use chrono::{DateTime, TimeZone, Utc};
use customers_shared::{
    Customer, CustomerColumn, CustomerField, CustomerForm, CustomerTable, FakeCustomers,
    ModalOutcome, ModalState, SortIndicator, TableRow,
};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn sample_table() -> CustomerTable {
    CustomerTable::from_source(&mut FakeCustomers::seeded(2024, 10, now()))
}

/// Drives the modal the way the page does: seed from the table, edit, hand back.
fn fill_form(table: &CustomerTable, values: [(CustomerField, String); 3]) -> CustomerForm {
    let mut form = CustomerForm::new(table.edit_target().cloned());
    for (field, value) in values {
        form.set_field(field, value);
    }
    form
}

#[test]
fn test_initial_table_has_ten_closed() {
    let table = sample_table();
    assert_eq!(table.customers().len(), 10);
    assert_eq!(table.modal(), &ModalState::Closed);
    assert_eq!(table.visible_rows().len(), 10);
    for column in table.columns() {
        assert_eq!(table.sort_indicator(column.key), SortIndicator::Unsorted);
    }
}

#[test]
fn test_random_valid_drafts_create_one_record_each() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut table = sample_table();

    for round in 0..20 {
        let before = table.customers().len();
        table.open_create();

        let name: String = CompanyName().fake_with_rng(&mut rng);
        let contact: String = Name().fake_with_rng(&mut rng);
        let phone: String = Word().fake_with_rng(&mut rng);
        let mut form = fill_form(
            &table,
            [
                (CustomerField::Name, name.clone()),
                (CustomerField::Contact, contact),
                (CustomerField::Phone, phone),
            ],
        );
        assert!(form.is_valid(), "round {round}");
        assert_eq!(form.title(), "Create Customer");

        let existing: Vec<_> = table.customers().iter().map(|c| c.id).collect();
        let stamped = now() + chrono::Duration::minutes(round);
        let outcome = table.on_modal_closed(Some(form.save().unwrap()), stamped).unwrap();

        let ModalOutcome::Created(id) = outcome else {
            panic!("expected a create, got {outcome:?}");
        };
        assert!(!existing.contains(&id));
        assert_eq!(table.customers().len(), before + 1);
        assert_eq!(table.customers()[0].id, id);
        assert_eq!(table.customers()[0].name, name);
        assert_eq!(table.customers()[0].date_added, stamped);
        assert!(!table.is_modal_open());
        assert_eq!(form, CustomerForm::default());
    }
}

#[test]
fn test_any_empty_required_field_blocks_save() {
    let table = sample_table();
    for empty in CustomerField::ALL {
        let values = CustomerField::ALL.map(|field| {
            let value = if field == empty { String::new() } else { "filled".to_string() };
            (field, value)
        });
        let mut form = fill_form(&table, values);
        assert!(!form.is_valid());
        assert!(form.save().is_err());
    }
}

#[test]
fn test_edit_round_trip_through_form() {
    let mut table = sample_table();
    let target: Customer = table.customers()[4].clone();

    assert!(table.select_row(target.id));
    let mut form = CustomerForm::new(table.edit_target().cloned());
    assert_eq!(form.title(), "Edit Customer");
    assert_eq!(form.value(CustomerField::Name), target.name);

    form.set_field(CustomerField::Phone, "(555) 010-0000");
    let patch = form.save().unwrap();
    let outcome = table.on_modal_closed(Some(patch), now()).unwrap();

    assert_eq!(outcome, ModalOutcome::Updated(target.id));
    assert_eq!(table.customers().len(), 10);
    let edited = table.get(target.id).unwrap();
    assert_eq!(edited.phone, "(555) 010-0000");
    assert_eq!(edited.name, target.name);
    assert_eq!(edited.contact, target.contact);
    assert_eq!(edited.date_added, target.date_added);
}

#[test]
fn test_cancel_after_edits_leaves_collection_alone() {
    let mut table = sample_table();
    let before = table.customers().to_vec();

    table.select_row(before[0].id);
    let mut form = CustomerForm::new(table.edit_target().cloned());
    form.set_field(CustomerField::Name, "Something Else");
    form.set_field(CustomerField::Contact, "");

    let outcome = table.on_modal_closed(form.cancel(), now()).unwrap();
    assert_eq!(outcome, ModalOutcome::Cancelled);
    assert_eq!(table.customers(), before.as_slice());
    assert!(table.edit_target().is_none());
}

#[test]
fn test_search_finds_unique_name_case_insensitively() {
    let mut table = sample_table();
    table.open_create();
    let mut form = fill_form(
        &table,
        [
            (CustomerField::Name, "Zyxwvut Holdings".to_string()),
            (CustomerField::Contact, "Quinn".to_string()),
            (CustomerField::Phone, "555-0000".to_string()),
        ],
    );
    table.on_modal_closed(Some(form.save().unwrap()), now()).unwrap();

    table.set_search("zYXWVUT");
    let rows = table.visible_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Zyxwvut Holdings");
}

#[test]
fn test_sorted_columns_are_ordered() {
    let mut table = sample_table();
    for column in [
        CustomerColumn::Name,
        CustomerColumn::Contact,
        CustomerColumn::Phone,
        CustomerColumn::DateAdded,
    ] {
        table.toggle_sort(column);
        let ascending: Vec<_> = table.visible_rows().iter().map(|c| c.cell(column)).collect();
        assert!(ascending.windows(2).all(|w| w[0].compare(&w[1]).is_le()), "{column:?} asc");

        table.toggle_sort(column);
        let descending: Vec<_> = table.visible_rows().iter().map(|c| c.cell(column)).collect();
        assert!(descending.windows(2).all(|w| w[0].compare(&w[1]).is_ge()), "{column:?} desc");

        table.toggle_sort(column);
        assert_eq!(table.sort_indicator(column), SortIndicator::Unsorted);
        let ids: Vec<_> = table.visible_rows().iter().map(|c| c.id).collect();
        let insertion: Vec<_> = table.customers().iter().map(|c| c.id).collect();
        assert_eq!(ids, insertion);
    }
}
