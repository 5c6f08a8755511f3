use validator::ValidationErrors;

pub mod categories;
pub mod products;

/// Flattens validator output into user-facing lines, one per failed rule.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut lines = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            match &error.message {
                Some(message) => lines.push(message.to_string()),
                None => lines.push(format!("Invalid value for {field}")),
            }
        }
    }
    lines
}
