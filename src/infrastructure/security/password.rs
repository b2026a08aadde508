//! Argon2id hashing for the credentials sent with HTTP Basic requests.
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Every authenticated request verifies a hash, so the memory cost stays
/// below the argon2 crate default.
const MEMORY_KIB: u32 = 12 * 1024;
const ITERATIONS: u32 = 3;
const LANES: u32 = 1;

#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> ApplicationResult<Self> {
        let params = Params::new(MEMORY_KIB, ITERATIONS, LANES, None)
            .map_err(|err| ApplicationError::infrastructure(format!("argon2 params: {err}")))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

async fn blocking<T, F>(job: F) -> ApplicationResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> ApplicationResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|err| ApplicationError::infrastructure(format!("hashing task failed: {err}")))?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        blocking(move || {
            // Parameters embedded in the stored hash take precedence over ours.
            let parsed = PasswordHash::new(&expected_hash).map_err(|err| {
                tracing::error!(error = %err, "stored password hash is malformed");
                ApplicationError::infrastructure("stored password hash is malformed")
            })?;
            argon2
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::unauthorized("invalid username or password"))
        })
        .await
    }
}
