//! Edit/create form state behind the customer modal.

use std::collections::BTreeSet;

use crate::customer::{Customer, CustomerDraft, CustomerField, CustomerPatch};
use crate::error::{CustomerError, CustomerResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    seed: Option<Customer>,
    draft: CustomerDraft,
    touched: BTreeSet<CustomerField>,
}

impl CustomerForm {
    pub fn new(seed: Option<Customer>) -> Self {
        let mut form = Self::default();
        form.reseed(seed);
        form
    }

    /// Replaces the draft with the seed's values, or empties it when there is no seed.
    pub fn reseed(&mut self, seed: Option<Customer>) {
        self.draft = seed.as_ref().map(Customer::draft).unwrap_or_default();
        self.touched.clear();
        self.seed = seed;
    }

    pub fn seed(&self) -> Option<&Customer> {
        self.seed.as_ref()
    }

    pub fn is_edit(&self) -> bool {
        self.seed.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Customer"
        } else {
            "Create Customer"
        }
    }

    pub fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    pub fn value(&self, field: CustomerField) -> &str {
        self.draft.get(field)
    }

    pub fn set_field(&mut self, field: CustomerField, value: impl Into<String>) {
        self.draft.set(field, value.into());
        self.touched.insert(field);
    }

    /// Same as `set_field`, keyed by the input's `name` attribute.
    pub fn set_named_field(&mut self, name: &str, value: impl Into<String>) -> CustomerResult<()> {
        let field = name.parse::<CustomerField>()?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.draft.is_complete()
    }

    pub fn missing_fields(&self) -> Vec<CustomerField> {
        self.draft.missing_fields()
    }

    /// An edited field left empty; the input gets an invalid border.
    pub fn shows_invalid(&self, field: CustomerField) -> bool {
        self.touched.contains(&field) && self.draft.get(field).is_empty()
    }

    /// Discards the draft. Always closes with no result.
    pub fn cancel(&mut self) -> Option<CustomerPatch> {
        self.reset();
        None
    }

    /// Hands back the draft's values and resets the form. Refused while any
    /// required field is empty, leaving the draft as it was.
    pub fn save(&mut self) -> CustomerResult<CustomerPatch> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CustomerError::Incomplete { missing });
        }
        let draft = std::mem::take(&mut self.draft);
        self.reset();
        Ok(CustomerPatch::from(draft))
    }

    fn reset(&mut self) {
        self.seed = None;
        self.draft = CustomerDraft::default();
        self.touched.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn globex() -> Customer {
        Customer {
            id: 2,
            name: "Globex".to_string(),
            contact: "Hank Scorpio".to_string(),
            phone: "555-0102".to_string(),
            date_added: Utc.with_ymd_and_hms(2023, 11, 2, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_title_follows_mode() {
        assert_eq!(CustomerForm::new(None).title(), "Create Customer");
        assert_eq!(CustomerForm::new(Some(globex())).title(), "Edit Customer");
    }

    #[test]
    fn test_seed_fills_draft_and_reseed_replaces_it() {
        let mut form = CustomerForm::new(Some(globex()));
        assert_eq!(form.value(CustomerField::Contact), "Hank Scorpio");
        assert!(form.is_valid());

        let mut other = globex();
        other.id = 5;
        other.name = "Initrode".to_string();
        form.reseed(Some(other));
        assert_eq!(form.value(CustomerField::Name), "Initrode");
        assert_eq!(form.seed().map(|c| c.id), Some(5));

        form.reseed(None);
        assert_eq!(form.draft(), &CustomerDraft::default());
        assert_eq!(form.title(), "Create Customer");
    }

    #[test]
    fn test_set_field_touches_only_that_field() {
        let mut form = CustomerForm::new(Some(globex()));
        form.set_field(CustomerField::Phone, "555-9999");

        assert_eq!(form.value(CustomerField::Name), "Globex");
        assert_eq!(form.value(CustomerField::Contact), "Hank Scorpio");
        assert_eq!(form.value(CustomerField::Phone), "555-9999");
    }

    #[test]
    fn test_set_named_field_rejects_unknown_names() {
        let mut form = CustomerForm::new(None);
        assert!(form.set_named_field("contact", "Milton").is_ok());
        assert_eq!(
            form.set_named_field("id", "12"),
            Err(CustomerError::UnknownField("id".to_string()))
        );
        assert_eq!(form.value(CustomerField::Contact), "Milton");
    }

    #[test]
    fn test_invalid_while_any_field_empty() {
        let mut form = CustomerForm::new(None);
        assert!(!form.is_valid());

        form.set_field(CustomerField::Name, "Initech");
        form.set_field(CustomerField::Contact, "Peter Gibbons");
        assert!(!form.is_valid());
        assert_eq!(form.missing_fields(), vec![CustomerField::Phone]);

        let err = form.save().unwrap_err();
        assert_eq!(err, CustomerError::Incomplete { missing: vec![CustomerField::Phone] });
        assert_eq!(form.value(CustomerField::Name), "Initech");
    }

    #[test]
    fn test_shows_invalid_only_after_edit() {
        let mut form = CustomerForm::new(None);
        assert!(!form.shows_invalid(CustomerField::Name));

        form.set_field(CustomerField::Name, "x");
        form.set_field(CustomerField::Name, "");
        assert!(form.shows_invalid(CustomerField::Name));
        assert!(!form.shows_invalid(CustomerField::Phone));
    }

    #[test]
    fn test_save_returns_values_and_resets() {
        let mut form = CustomerForm::new(Some(globex()));
        form.set_field(CustomerField::Name, "Globex Corporation");

        let patch = form.save().unwrap();
        assert_eq!(patch.name.as_deref(), Some("Globex Corporation"));
        assert_eq!(patch.contact.as_deref(), Some("Hank Scorpio"));
        assert_eq!(patch.phone.as_deref(), Some("555-0102"));
        assert_eq!(form, CustomerForm::default());
    }

    #[test]
    fn test_cancel_discards_edits() {
        let mut form = CustomerForm::new(None);
        form.set_field(CustomerField::Name, "Dunder Mifflin");
        assert_eq!(form.cancel(), None);
        assert_eq!(form.draft(), &CustomerDraft::default());
        assert!(form.seed().is_none());
    }
}
