//! Credential store read by the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin login flow writes a session token and a role string into
//! `localStorage`; logout clears them. Both flows live outside this crate.
//! The guard only reads, through the [`CredentialStore`] capability injected
//! at construction.
//!
//! Token checks are presence-only. Nothing here validates expiry or
//! signatures; the backend re-checks the token on every API request.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::collections::HashMap;
use std::sync::Arc;

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "adminToken";
/// Storage key holding the role string.
pub const ROLE_KEY: &str = "userRole";

/// Read access to persisted credential values.
pub trait CredentialStore {
    /// Return the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: CredentialStore + ?Sized> CredentialStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: CredentialStore + ?Sized> CredentialStore for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Role of the current session, parsed at the store boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    /// No role stored.
    #[default]
    Guest,
    /// Some role other than admin.
    User,
    Admin,
}

impl Role {
    /// Parse the raw role slot. Only the exact string `admin` is an admin.
    pub fn from_slot(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Guest,
            Some("admin") => Self::Admin,
            Some(_) => Self::User,
        }
    }
}

/// Snapshot of both credential slots taken for a single navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: Option<String>,
    pub role: Role,
}

impl Credentials {
    pub fn read<S: CredentialStore + ?Sized>(store: &S) -> Self {
        let token = store.get(TOKEN_KEY).filter(|token| !token.is_empty());
        let role = Role::from_slot(store.get(ROLE_KEY).as_deref());
        Self { token, role }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// =============================================================================
// STORES
// =============================================================================

/// Browser `localStorage`. Every read is treated as absent outside the
/// browser or when storage is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageCredentials;

impl CredentialStore for LocalStorageCredentials {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }
}

/// In-memory store for tests and server-side rendering.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    entries: HashMap<String, String>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.insert(TOKEN_KEY, token);
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: &str) -> Self {
        self.insert(ROLE_KEY, role);
        self
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl CredentialStore for MemoryCredentials {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
