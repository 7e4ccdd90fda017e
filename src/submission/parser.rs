use serde_json::Value;

/// Fields read from a submit body. Missing keys are `None`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawFields {
    pub project: Option<Value>,
    pub token: Option<Value>,
    pub story: Option<Value>,
    pub contact: Option<Value>,
    pub timestamp: Option<Value>,
}

/// Parse a request body as JSON. The Content-Type header is not consulted.
pub fn parse_body(body: &[u8]) -> Result<Value, String> {
    serde_json::from_slice(body).map_err(|e| e.to_string())
}

/// Pull the known fields out of a parsed body.
///
/// A `null` body has nothing to read from and is rejected. Any other
/// non-object value yields no fields.
pub fn extract_fields(body: &Value) -> Result<RawFields, String> {
    match body {
        Value::Null => Err("Request body is null".to_string()),
        Value::Object(obj) => Ok(RawFields {
            project: obj.get("project").cloned(),
            token: obj.get("token").cloned(),
            story: obj.get("story").cloned(),
            contact: obj.get("contact").cloned(),
            timestamp: obj.get("timestamp").cloned(),
        }),
        _ => Ok(RawFields::default()),
    }
}
