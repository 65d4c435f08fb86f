use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        self, PasswordHash as PhcHash, PasswordHasher as _, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use secrecy::ExposeSecret;
use vestibule_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};

/// Argon2id password hasher. Work runs on the blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct Argon2PasswordHasher {
    memory_kib: u32,
    iterations: u32,
    parallelism: u32,
}

impl Argon2PasswordHasher {
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_kib,
            iterations,
            parallelism,
        }
    }

    fn argon2(&self) -> Result<Argon2<'static>, PasswordHasherError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordHasherError::Hashing(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new(15000, 2, 1)
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Argon2PasswordHasher::hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let argon2 = self.argon2()?;
        let password = password.clone();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                .map(|hash| PasswordHash::new(hash.to_string()))
                .map_err(|e| PasswordHasherError::Hashing(e.to_string()))
        })
        .await
        .map_err(|e| PasswordHasherError::Task(e.to_string()))?
    }

    #[tracing::instrument(name = "Argon2PasswordHasher::verify", skip_all)]
    async fn verify(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let argon2 = self.argon2()?;
        let password = password.clone();
        let hash = hash.clone();

        tokio::task::spawn_blocking(move || {
            let expected = PhcHash::new(hash.as_ref().expose_secret())
                .map_err(|e| PasswordHasherError::MalformedHash(e.to_string()))?;

            match argon2.verify_password(password.as_ref().expose_secret().as_bytes(), &expected) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(e) => Err(PasswordHasherError::Hashing(e.to_string())),
            }
        })
        .await
        .map_err(|e| PasswordHasherError::Task(e.to_string()))?
    }
}
