use serde_json::Value;

use crate::models::submission::{SUBMISSION_SOURCE, SUBMISSION_TYPE};
use crate::models::Submission;

use super::parser::RawFields;

/// `false` for absent, `null`, `false`, zero, and the empty string.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Both required fields must be truthy before anything is normalized.
pub fn has_required(raw: &RawFields) -> bool {
    is_truthy(raw.project.as_ref()) && is_truthy(raw.story.as_ref())
}

fn trim_required(name: &str, value: Option<&Value>) -> Result<String, String> {
    match value {
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        _ => Err(format!("{name} must be a string")),
    }
}

fn trim_optional(name: &str, value: Option<&Value>) -> Result<Option<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(_) => Err(format!("{name} must be a string")),
    }
}

/// Build a normalized submission. `now` supplies the timestamp when the
/// caller did not send one.
pub fn normalize(raw: &RawFields, now: impl FnOnce() -> String) -> Result<Submission, String> {
    let project = trim_required("project", raw.project.as_ref())?;
    let token = trim_optional("token", raw.token.as_ref())?;
    let story = trim_required("story", raw.story.as_ref())?;
    let contact = trim_optional("contact", raw.contact.as_ref())?.filter(|c| !c.is_empty());

    let timestamp = if is_truthy(raw.timestamp.as_ref()) {
        match &raw.timestamp {
            Some(Value::String(s)) => s.clone(),
            _ => return Err("timestamp must be a string".to_string()),
        }
    } else {
        now()
    };

    Ok(Submission {
        kind: SUBMISSION_TYPE.to_string(),
        project,
        token,
        story,
        contact,
        timestamp,
        source: SUBMISSION_SOURCE.to_string(),
    })
}
