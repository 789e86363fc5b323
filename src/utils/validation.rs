use crate::error::{AppError, AppResult, FieldIssue};
use validator::{Validate, ValidationErrors};

/// Runs the declarative rules of a request body and collects every failing
/// field into a single [`AppError::Validation`].
pub fn validate_request<T: Validate>(request: &T) -> AppResult<()> {
    request
        .validate()
        .map_err(|errors| AppError::Validation(collect_issues(&errors)))
}

/// Like [`validate_request`] but hands back the issues so callers can add
/// checks of their own before failing.
pub fn request_issues<T: Validate>(request: &T) -> Vec<FieldIssue> {
    match request.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => collect_issues(&errors),
    }
}

pub fn collect_issues(errors: &ValidationErrors) -> Vec<FieldIssue> {
    let mut issues: Vec<FieldIssue> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let name = to_camel_case(&field);
            errs.iter().map(move |e| FieldIssue {
                field: name.clone(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();

    // field_errors() is a HashMap
    issues.sort_by(|a, b| a.field.cmp(&b.field));
    issues
}

/// Request bodies are camelCase on the wire; report issues under those names.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
