use crate::customer::CustomerField;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerError {
    #[error("unknown customer field `{0}`")]
    UnknownField(String),
    #[error("required fields are empty: {}", field_list(.missing))]
    Incomplete { missing: Vec<CustomerField> },
}

pub type CustomerResult<T> = Result<T, CustomerError>;

fn field_list(fields: &[CustomerField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_message_lists_fields() {
        let err = CustomerError::Incomplete {
            missing: vec![CustomerField::Contact, CustomerField::Phone],
        };
        assert_eq!(err.to_string(), "required fields are empty: contact, phone");
    }

    #[test]
    fn test_unknown_field_message() {
        let err = CustomerError::UnknownField("email".to_string());
        assert_eq!(err.to_string(), "unknown customer field `email`");
    }
}
