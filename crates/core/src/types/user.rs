//! Signed-in user profile.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The user document returned by the auth backend on login or registration.
///
/// The backend may send its document id as `_id`; both spellings are
/// accepted and `id` is written back. Unmodelled fields are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// First word of the display name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.split_name().0
    }

    /// Everything after the first word of the display name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.split_name().1
    }

    fn split_name(&self) -> (&str, &str) {
        let name = self.name.trim();
        name.split_once(' ')
            .map_or((name, ""), |(first, rest)| (first, rest.trim_start()))
    }
}
