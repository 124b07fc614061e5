use std::sync::Arc;
use thiserror::Error;
use crate::services::store::{KeyValueStore, StoreError};

/// Errors that can occur during dummy authentication
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Registration is disabled. Please use the demo account to log in.")]
    RegistrationDisabled,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Credential pair accepted by the demo login
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    pub username: String,
    pub password: String,
}

/// Demo login against a single configured account
///
/// Sessions are opaque UUIDs recorded in the key-value store.
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    credentials: DemoCredentials,
}

impl AuthService {
    pub fn new(store: Arc<dyn KeyValueStore>, credentials: DemoCredentials) -> Self {
        Self { store, credentials }
    }

    fn key(session: &str) -> String {
        format!("session:{}", session)
    }

    /// Check the credential pair and open a session
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username != self.credentials.username || password != self.credentials.password {
            tracing::info!("Rejected login for {}", username);
            return Err(AuthError::InvalidCredentials);
        }

        let session = uuid::Uuid::new_v4().to_string();
        self.store
            .set(&Self::key(&session), username.to_string())
            .await?;

        tracing::info!("Opened session for {}", username);
        Ok(session)
    }

    /// Accounts cannot be created in the demo
    pub fn register(&self) -> Result<(), AuthError> {
        Err(AuthError::RegistrationDisabled)
    }

    /// Close a session, returning whether it was open
    pub async fn logout(&self, session: &str) -> Result<bool, AuthError> {
        let closed = self.store.remove(&Self::key(session)).await?;
        if closed {
            tracing::info!("Closed session {}", session);
        }
        Ok(closed)
    }

    pub async fn is_authenticated(&self, session: &str) -> Result<bool, AuthError> {
        Ok(self.store.contains(&Self::key(session)).await?)
    }

    /// Username behind a session, if any
    pub async fn username(&self, session: &str) -> Result<Option<String>, AuthError> {
        Ok(self.store.get(&Self::key(session)).await?)
    }
}
