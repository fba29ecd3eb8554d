//! Customer records and the editable subset of their fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CustomerError, CustomerResult};

pub type CustomerId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub contact: String,
    pub phone: String,
    pub date_added: DateTime<Utc>,
}

impl Customer {
    pub fn from_draft(id: CustomerId, draft: CustomerDraft, date_added: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            contact: draft.contact,
            phone: draft.phone,
            date_added,
        }
    }

    pub fn field(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::Contact => &self.contact,
            CustomerField::Phone => &self.phone,
        }
    }

    /// Editable values of this record, used to seed the edit form.
    pub fn draft(&self) -> CustomerDraft {
        CustomerDraft {
            name: self.name.clone(),
            contact: self.contact.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Shallow merge: fields absent from the patch keep their stored value.
    /// `id` and `date_added` are never touched.
    pub fn apply(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerField {
    Name,
    Contact,
    Phone,
}

impl CustomerField {
    pub const ALL: [CustomerField; 3] = [
        CustomerField::Name,
        CustomerField::Contact,
        CustomerField::Phone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerField::Name => "name",
            CustomerField::Contact => "contact",
            CustomerField::Phone => "phone",
        }
    }

    /// Form label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            CustomerField::Name => "Customer Name",
            CustomerField::Contact => "Contact Name",
            CustomerField::Phone => "Phone",
        }
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerField {
    type Err = CustomerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(CustomerField::Name),
            "contact" => Ok(CustomerField::Contact),
            "phone" => Ok(CustomerField::Phone),
            other => Err(CustomerError::UnknownField(other.to_string())),
        }
    }
}

/// Working copy of the editable fields while the modal is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub contact: String,
    pub phone: String,
}

impl CustomerDraft {
    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::Contact => &self.contact,
            CustomerField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: CustomerField, value: String) {
        match field {
            CustomerField::Name => self.name = value,
            CustomerField::Contact => self.contact = value,
            CustomerField::Phone => self.phone = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<CustomerField> {
        CustomerField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        CustomerField::ALL
            .iter()
            .all(|field| !self.get(*field).is_empty())
    }
}

/// Partial update handed from the modal to the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CustomerPatch {
    pub fn with(mut self, field: CustomerField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            CustomerField::Name => self.name = value,
            CustomerField::Contact => self.contact = value,
            CustomerField::Phone => self.phone = value,
        }
        self
    }

    pub fn get(&self, field: CustomerField) -> Option<&str> {
        match field {
            CustomerField::Name => self.name.as_deref(),
            CustomerField::Contact => self.contact.as_deref(),
            CustomerField::Phone => self.phone.as_deref(),
        }
    }

    /// Fields present in the patch but set to an empty string
    pub fn empty_fields(&self) -> Vec<CustomerField> {
        CustomerField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_some_and(str::is_empty))
            .collect()
    }

    /// Converts into a full draft, requiring every field to be present and non-empty.
    pub fn into_draft(self) -> CustomerResult<CustomerDraft> {
        let missing: Vec<_> = CustomerField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none_or(str::is_empty))
            .collect();
        if !missing.is_empty() {
            return Err(CustomerError::Incomplete { missing });
        }

        Ok(CustomerDraft {
            name: self.name.unwrap_or_default(),
            contact: self.contact.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
        })
    }
}

impl From<CustomerDraft> for CustomerPatch {
    fn from(draft: CustomerDraft) -> Self {
        Self {
            name: Some(draft.name),
            contact: Some(draft.contact),
            phone: Some(draft.phone),
        }
    }
}
