//! Authenticated session state
//!
//! The session owns the persisted token, user record and permission payload,
//! and hands out the current [`PermissionSet`] to the evaluator. The set is
//! swapped as a whole; nothing edits it in place.

mod store;

pub use store::{FileStore, MemoryStore, SessionStore};

use crate::auth::rbac::PermissionSet;
use crate::config::SessionConfig;
use crate::utils::error::Result;
use arc_swap::ArcSwapOption;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Snapshot of what the persistence layer holds for authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthState {
    pub has_token: bool,
    pub has_user_data: bool,
}

impl AuthState {
    pub fn authenticated() -> Self {
        Self {
            has_token: true,
            has_user_data: true,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Both a token and a user record are required
    pub fn is_authenticated(&self) -> bool {
        self.has_token && self.has_user_data
    }
}

/// Session over a [`SessionStore`]
pub struct Session<S: SessionStore> {
    config: SessionConfig,
    store: S,
    permissions: ArcSwapOption<PermissionSet>,
}

impl<S: SessionStore> Session<S> {
    /// Fresh session with nothing loaded
    pub fn new(config: SessionConfig, store: S) -> Self {
        Self {
            config,
            store,
            permissions: ArcSwapOption::empty(),
        }
    }

    /// Rebuild a session from whatever the store already holds.
    ///
    /// A missing or unreadable permission payload leaves the session without
    /// permissions; it never fails.
    pub fn restore(config: SessionConfig, store: S) -> Self {
        let session = Self::new(config, store);
        let restored = session.load_persisted_permissions();
        if restored.is_some() {
            info!("Session restored with persisted permissions");
        }
        session.permissions.store(restored.map(Arc::new));
        session
    }

    fn load_persisted_permissions(&self) -> Option<PermissionSet> {
        let raw = match self.store.get(&self.config.permissions_key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                warn!("Failed to read persisted permissions: {}", e);
                return None;
            }
        };

        match PermissionSet::from_json(&raw) {
            Ok(set) => Some(set),
            Err(e) => {
                warn!("Ignoring malformed persisted permissions: {}", e);
                None
            }
        }
    }

    /// Persist credentials and install the user's permissions.
    ///
    /// The previous permissions are dropped before anything is written. If any
    /// write fails, every session key is removed again, so a failed login
    /// leaves the session anonymous.
    pub fn login(
        &self,
        token: &str,
        user_data: &serde_json::Value,
        permissions: PermissionSet,
    ) -> Result<()> {
        self.permissions.store(None);

        let permissions = permissions.normalized();
        if let Err(e) = self.persist_login(token, user_data, &permissions) {
            warn!("Login failed, clearing session: {}", e);
            self.clear_persisted();
            return Err(e);
        }

        info!(roles = permissions.roles.len(), "User logged in");
        self.permissions.store(Some(Arc::new(permissions)));
        Ok(())
    }

    /// Drop credentials and permissions
    pub fn logout(&self) -> Result<()> {
        self.permissions.store(None);

        self.store.remove(&self.config.token_key)?;
        self.store.remove(&self.config.user_data_key)?;
        self.store.remove(&self.config.permissions_key)?;

        info!("User logged out");
        Ok(())
    }

    fn persist_login(
        &self,
        token: &str,
        user_data: &serde_json::Value,
        permissions: &PermissionSet,
    ) -> Result<()> {
        let user_data = serde_json::to_string(user_data)?;
        let payload = permissions.to_json()?;

        // Token last: a partial write never looks authenticated
        self.store.set(&self.config.permissions_key, payload)?;
        self.store.set(&self.config.user_data_key, user_data)?;
        self.store.set(&self.config.token_key, token.to_string())
    }

    fn clear_persisted(&self) {
        for key in [
            &self.config.token_key,
            &self.config.user_data_key,
            &self.config.permissions_key,
        ] {
            if let Err(e) = self.store.remove(key) {
                warn!("Failed to remove session key '{}': {}", key, e);
            }
        }
    }

    /// Install a freshly fetched permission set in place of the current one.
    ///
    /// The new set is installed even when persisting it fails; the stale
    /// persisted payload is then removed so a restore cannot bring it back.
    pub fn replace_permissions(&self, permissions: PermissionSet) -> Result<()> {
        let permissions = Arc::new(permissions.normalized());
        let persisted = permissions
            .to_json()
            .and_then(|payload| self.store.set(&self.config.permissions_key, payload));
        self.permissions.store(Some(Arc::clone(&permissions)));

        if let Err(e) = persisted {
            warn!("Failed to persist replaced permissions: {}", e);
            if let Err(e) = self.store.remove(&self.config.permissions_key) {
                warn!("Failed to remove stale permissions: {}", e);
            }
            return Err(e);
        }

        debug!(roles = permissions.roles.len(), "Permission set replaced");
        Ok(())
    }

    /// Current permissions, `None` while nothing is loaded
    pub fn current_permissions(&self) -> Option<Arc<PermissionSet>> {
        self.permissions.load_full()
    }

    /// Read the store now; store failures count as absent
    pub fn auth_state(&self) -> AuthState {
        let present = |key: &str| match self.store.contains(key) {
            Ok(present) => present,
            Err(e) => {
                warn!("Failed to read session key '{}': {}", key, e);
                false
            }
        };

        AuthState {
            has_token: present(&self.config.token_key),
            has_user_data: present(&self.config.user_data_key),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_state().is_authenticated()
    }

    pub fn token(&self) -> Result<Option<String>> {
        self.store.get(&self.config.token_key)
    }

    /// Parsed user record, if one is stored
    pub fn user_data(&self) -> Result<Option<serde_json::Value>> {
        match self.store.get(&self.config.user_data_key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
