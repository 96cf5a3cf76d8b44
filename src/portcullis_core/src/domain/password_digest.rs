use secrecy::{ExposeSecret, Secret};

/// Opaque output of a [`crate::PasswordHasher`].
///
/// The digest embeds its own salt and parameters; nothing in the core ever
/// looks inside it.
#[derive(Debug, Clone)]
pub struct PasswordDigest(Secret<String>);

impl PasswordDigest {
    pub fn new(digest: String) -> Self {
        Self(Secret::new(digest))
    }
}

impl ExposeSecret<String> for PasswordDigest {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}

impl From<String> for PasswordDigest {
    fn from(digest: String) -> Self {
        Self::new(digest)
    }
}
