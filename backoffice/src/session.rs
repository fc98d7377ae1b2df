//! Signed-in user session.

use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::storage::{StorageError, TypedStorage};

/// Storage key of the persisted auth token.
pub const TOKEN_KEY: &str = "token";

/// Path of the remote login endpoint.
pub const LOGIN_PATH: &str = "/v1/auth/login";

/// The signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub token: String,
}

/// Partial update of the session user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub token: Option<String>,
}

impl UserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Body of a login request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// JSON body for [`LOGIN_PATH`].
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The current user plus the persisted auth token.
///
/// The token survives in the injected storage; the rest of the user lives in
/// memory only.
///
/// # Example
///
/// ```
/// use backoffice::{Session, TypedStorage, UserUpdate};
///
/// let storage = TypedStorage::in_memory();
/// let mut session = Session::new(storage.clone());
/// session.set_user(UserUpdate::new().email("ana@example.com").token("t0k3n"))?;
///
/// let restored = Session::restore(storage)?;
/// assert_eq!(restored.token()?, Some("t0k3n".to_string()));
/// # Ok::<(), backoffice::StorageError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    storage: TypedStorage,
    user: SessionUser,
}

impl Session {
    /// Create an empty session over a storage.
    pub fn new(storage: TypedStorage) -> Self {
        Self {
            storage,
            user: SessionUser::default(),
        }
    }

    /// Create a session and load the persisted token into the user.
    pub fn restore(storage: TypedStorage) -> Result<Self, StorageError> {
        let token: Option<String> = storage.get(TOKEN_KEY)?;
        debug!("Restored session, token present: {}", token.is_some());
        Ok(Self {
            storage,
            user: SessionUser {
                email: String::new(),
                token: token.unwrap_or_default(),
            },
        })
    }

    /// Merge an update into the current user.
    ///
    /// A non-empty token is persisted under [`TOKEN_KEY`].
    pub fn set_user(&mut self, update: UserUpdate) -> Result<(), StorageError> {
        if let Some(token) = update.token.as_deref().filter(|t| !t.is_empty()) {
            self.storage.set(TOKEN_KEY, token)?;
        }
        if let Some(email) = update.email {
            self.user.email = email;
        }
        if let Some(token) = update.token {
            self.user.token = token;
        }
        Ok(())
    }

    /// Current in-memory user.
    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    /// The persisted token, if any.
    pub fn token(&self) -> Result<Option<String>, StorageError> {
        self.storage.get(TOKEN_KEY)
    }

    /// Returns `true` if a non-empty token is persisted.
    pub fn is_authenticated(&self) -> Result<bool, StorageError> {
        Ok(self.token()?.is_some_and(|t| !t.is_empty()))
    }

    /// Forget the user and remove the persisted token.
    pub fn sign_out(&mut self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY)?;
        self.user = SessionUser::default();
        info!("Signed out");
        Ok(())
    }
}
