//! Parameter validation shared by the endpoint façades.
//!
//! Failures here never reach the network.

use crate::transport::FormBody;
use crate::{Error, ErrorContext, Result};
use tracing::debug;

/// `Some` only for a present, non-empty value.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub(crate) fn invalid(operation: &str, field_path: &str, message: &str) -> Error {
    debug!(operation, field_path, "rejected request parameters");
    Error::validation_with_context(
        message,
        ErrorContext::new()
            .with_field_path(field_path)
            .with_source(operation),
    )
}

/// Add the first present candidate to `form`; fail when none is.
///
/// Candidates are in priority order, so `[("text", ..), ("url", ..)]` sends
/// only the text when both are given.
pub(crate) fn first_present(
    form: &mut FormBody,
    operation: &str,
    candidates: &[(&str, Option<&str>)],
    message: &str,
) -> Result<()> {
    for (key, value) in candidates {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            form.add(*key, v);
            return Ok(());
        }
    }
    let field_path = candidates
        .iter()
        .map(|(key, _)| *key)
        .collect::<Vec<_>>()
        .join("|");
    Err(invalid(operation, &field_path, message))
}

pub(crate) fn text_or_url(
    form: &mut FormBody,
    operation: &str,
    text: &Option<String>,
    url: &Option<String>,
) -> Result<()> {
    first_present(
        form,
        operation,
        &[("text", non_empty(text)), ("url", non_empty(url))],
        "you must either provide url or text",
    )
}

pub(crate) fn at_least(
    operation: &str,
    field_path: &str,
    items: &[String],
    min: usize,
    message: &str,
) -> Result<()> {
    if items.len() < min {
        return Err(invalid(operation, field_path, message));
    }
    Ok(())
}
