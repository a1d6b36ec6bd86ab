use serde::{Deserialize, Serialize};

/// Body of a successful `/api/<kind>` reply. Absent fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

impl ActionResult {
    pub fn out(text: impl Into<String>) -> Self {
        Self {
            out: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn listing(text: impl Into<String>) -> Self {
        Self {
            listing: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_log(mut self, text: impl Into<String>) -> Self {
        self.log = Some(text.into());
        self
    }
}
