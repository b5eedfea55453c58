use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// Parses a raw request body.
    ///
    /// A JSON `null` body yields `Ok(None)`. `{}` and `{"message": null}` both
    /// yield a request without a message.
    pub fn from_json(raw_body: &[u8]) -> Result<Option<Self>, serde_json::Error> {
        match serde_json::from_slice::<Value>(raw_body)? {
            Value::Null => Ok(None),
            value @ Value::Object(_) => serde_json::from_value(value).map(Some),
            _ => Err(serde::de::Error::custom("expected a JSON object")),
        }
    }
}
