use crate::models::{EditForm, FieldErrors};

/// Name and email must be present. Phone and website are free.
pub fn validate(form: &EditForm) -> Result<(), FieldErrors> {
    let errors = FieldErrors {
        name: required("Name", &form.name),
        email: required("Email", &form.email),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn required(label: &str, value: &str) -> Option<String> {
    if value.is_empty() {
        Some(format!("'{}' is required", label))
    } else {
        None
    }
}
