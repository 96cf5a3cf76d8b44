use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

/// A plaintext password on its way to the hasher.
///
/// Wrapped in [`Secret`] so it never shows up in `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Number of characters, counted on the value exactly as submitted.
    ///
    /// Surrounding whitespace is not trimmed and counts toward the length.
    pub fn char_count(&self) -> usize {
        self.0.expose_secret().chars().count()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(UserError::EmptyPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
