//! Signed-in user session.
//!
//! Only the local half of authentication lives here: remembering who is
//! signed in across restarts. Talking to the auth backend is the caller's
//! job; it hands the resulting profile and token to [`SessionStore::sign_in`].

use secrecy::{ExposeSecret, SecretString};
use sweetshop_core::UserProfile;
use tracing::instrument;

use crate::notify::{Notification, Notifier, TracingNotifier};
use crate::storage::{self, KeyValueStore, keys};

/// Persisted session: the user document under `user` and the bearer token
/// under `token`.
///
/// A session counts as signed in when a user document is present, matching
/// how the storefront pages decide whether to show account-only actions.
pub struct SessionStore<S, N = TracingNotifier> {
    user: Option<UserProfile>,
    token: Option<SecretString>,
    storage: S,
    notifier: N,
}

impl<S, N> std::fmt::Debug for SessionStore<S, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore, N: Notifier> SessionStore<S, N> {
    /// Restore the session from storage.
    ///
    /// A corrupt user document means signed out. The token is read as raw
    /// UTF-8; an unreadable token is dropped.
    pub fn hydrate(storage: S, notifier: N) -> Self {
        let user: Option<UserProfile> = storage::load_json(&storage, keys::USER);
        let token = match storage.load(keys::TOKEN) {
            Ok(Some(bytes)) => String::from_utf8(bytes)
                .map(SecretString::from)
                .map_err(|e| tracing::warn!(error = %e, "Discarding non-UTF-8 token"))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored token");
                None
            }
        };

        tracing::debug!(signed_in = user.is_some(), "Hydrated session");
        Self {
            user,
            token,
            storage,
            notifier,
        }
    }

    /// Remember a successful login or registration.
    #[instrument(skip(self, user, token), fields(user_id = %user.id))]
    pub fn sign_in(&mut self, user: UserProfile, token: SecretString) {
        storage::save_json(&self.storage, keys::USER, &user);
        if let Err(e) = self
            .storage
            .save(keys::TOKEN, token.expose_secret().as_bytes())
        {
            tracing::warn!(error = %e, "Failed to persist token");
        }

        tracing::info!("Signed in");
        self.user = Some(user);
        self.token = Some(token);
        self.notifier.notify(Notification::SignedIn);
    }

    /// Forget the signed-in user and token.
    #[instrument(skip(self))]
    pub fn sign_out(&mut self) {
        for key in [keys::USER, keys::TOKEN] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, error = %e, "Failed to remove session state");
            }
        }
        if self.user.take().is_some() {
            tracing::info!("Signed out");
        }
        self.token = None;
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Bearer token for authenticated API calls.
    #[must_use]
    pub const fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }
}
