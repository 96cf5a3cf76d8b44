use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One-shot message attached to a session by a rejected form submission.
///
/// It carries the reason for the rejection and the values the user typed so
/// the form can be re-populated on the next page load. Reading it through
/// [`crate::Session::read_and_clear_flash`] consumes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashPayload {
    has_error: bool,
    message: Option<String>,
    echoed_fields: BTreeMap<String, String>,
}

impl FlashPayload {
    pub fn error<I, K, V>(message: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            has_error: true,
            message: Some(message.into()),
            echoed_fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Echoed value of a form field, or `""` if it was not echoed.
    pub fn field(&self, name: &str) -> &str {
        self.echoed_fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn echoed_fields(&self) -> &BTreeMap<String, String> {
        &self.echoed_fields
    }
}
