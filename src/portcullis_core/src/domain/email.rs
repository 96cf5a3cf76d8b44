use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::UserError;

/// An email address as entered by the user.
///
/// The only invariant carried by the type is that the address is not empty.
/// Signup additionally requires the `@` separator (see [`crate::validation`]);
/// login deliberately accepts anything non-empty and lets the lookup fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const SEPARATOR: char = '@';

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_separator(&self) -> bool {
        self.0.contains(Self::SEPARATOR)
    }
}

impl TryFrom<String> for Email {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(UserError::EmptyEmail);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Email {
    type Error = UserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
