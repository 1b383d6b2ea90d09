//! Shape checks and message rendering for the review API payload.
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::PollError;

/// Verdict texts for every status code the review API documents. Anything
/// else is reported as an error, never silently defaulted.
pub static HOMEWORK_STATUSES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("approved", "The reviewer liked everything. Hooray!"),
        ("reviewing", "The work was taken up for review."),
        ("rejected", "The reviewer has remarks on the work."),
    ])
});

/// Check the decoded response and return the homework list it carries,
/// in API order.
pub fn check_response(response: &Value) -> Result<&[Value], PollError> {
    let object = response.as_object().ok_or(PollError::WrongShape)?;
    let homeworks = object
        .get("homeworks")
        .ok_or(PollError::MissingField("homeworks"))?;
    let homeworks = homeworks
        .as_array()
        .ok_or(PollError::WrongFieldType("homeworks"))?;
    Ok(homeworks.as_slice())
}

/// Render the notification text for one homework entry.
pub fn parse_status(homework: &Value) -> Result<String, PollError> {
    let name = require_str(homework, "homework_name")?;
    let status = require_str(homework, "status")?;
    let verdict = HOMEWORK_STATUSES
        .get(status)
        .ok_or_else(|| PollError::UnknownStatus(status.to_string()))?;
    Ok(format!("Changed status of work \"{}\". {}", name, verdict))
}

fn require_str<'a>(item: &'a Value, field: &'static str) -> Result<&'a str, PollError> {
    let value = item.get(field).ok_or(PollError::MissingField(field))?;
    value.as_str().ok_or(PollError::WrongFieldType(field))
}
