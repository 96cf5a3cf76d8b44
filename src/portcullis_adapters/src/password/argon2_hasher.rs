use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use portcullis_core::{Password, PasswordDigest, PasswordHasher, PasswordHasherError};
use secrecy::ExposeSecret;

// Roughly tens of milliseconds per hash on commodity hardware.
const MEMORY_COST_KIB: u32 = 15000;
const ITERATIONS: u32 = 2;
const PARALLELISM: u32 = 1;

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$...`).
///
/// The work runs on the blocking pool so slow hashes do not stall the
/// async runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, argon2::Error> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(MEMORY_COST_KIB, ITERATIONS, PARALLELISM, None)?,
    ))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(rand_core::OsRng);
                argon2()
                    .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordDigest::new(h.to_string()))
                    .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::TaskFailed(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHasherError> {
        let password = password.clone();
        let digest = digest.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let Ok(expected) = PasswordHash::new(digest.expose_secret()) else {
                    tracing::warn!("Stored password digest is malformed");
                    return Ok(false);
                };

                let matches = argon2()
                    .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected)
                    .is_ok();
                Ok(matches)
            })
        })
        .await
        .map_err(|e| PasswordHasherError::TaskFailed(e.to_string()))?
    }
}
