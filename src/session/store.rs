// Process-wide session state derived from the persisted bearer token.

use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;

use crate::auth::DecodedClaims;
use crate::models::auth::CurrentUser;
use crate::session::storage::{SessionStorage, CURRENT_USER_KEY, TOKEN_KEY};

type Subscriber = Box<dyn Fn(Option<&CurrentUser>) + Send + Sync>;

/// Holder of the current session: the persisted token/user pair plus the
/// published `CurrentUser` value and its subscribers.
///
/// The published user is always a projection of the last successfully decoded
/// token; the pair is only ever replaced atomically (`set_session_from_token`)
/// or cleared atomically (`logout`). Subscribers are notified synchronously,
/// in subscription order, and receive the current value on subscription.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    current_user: RwLock<Option<CurrentUser>>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl SessionStore {
    /// Build the store and restore any persisted session.
    ///
    /// A persisted token is re-decoded and becomes the published user; a token
    /// that no longer decodes clears the whole session. A `currentUser`
    /// snapshot without a token cannot be re-validated and is discarded.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let store = Self {
            storage,
            current_user: RwLock::new(None),
            subscribers: Mutex::new(Vec::new()),
        };
        store.restore();
        store
    }

    fn restore(&self) {
        match self.token() {
            Some(token) => {
                if !self.set_session_from_token(&token) {
                    tracing::warn!("persisted token no longer decodes, clearing session");
                    self.logout();
                }
            }
            None => {
                if self.storage.get(CURRENT_USER_KEY).is_some() {
                    tracing::warn!("currentUser snapshot present without a token, discarding");
                    self.storage.remove(CURRENT_USER_KEY);
                }
            }
        }
    }

    /// Persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Replace the session pair from a freshly received token.
    ///
    /// On decode failure returns `false` and leaves all existing state
    /// untouched; the caller decides whether that warrants a logout. On
    /// success persists token and user snapshot, then publishes the new user.
    pub fn set_session_from_token(&self, token: &str) -> bool {
        let Some(claims) = DecodedClaims::decode(token) else {
            return false;
        };

        let user = claims.to_current_user();
        self.storage.set(TOKEN_KEY, token);
        match serde_json::to_string(&user) {
            Ok(snapshot) => self.storage.set(CURRENT_USER_KEY, &snapshot),
            Err(e) => tracing::warn!(error = %e, "failed to serialize currentUser snapshot"),
        }

        tracing::debug!(user_id = %user.id, role = %user.role, "session replaced from token");
        self.publish(Some(user));
        true
    }

    /// Last published user, if logged in.
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.current_user
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Primary role of the current user, or empty string with no session.
    pub fn user_role(&self) -> String {
        self.current_user()
            .map(|user| user.role)
            .unwrap_or_default()
    }

    /// Token exists and has a future expiry.
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some() && !self.is_token_expired()
    }

    /// True when there is no token, the token no longer decodes, or its
    /// expiry claim is missing, non-numeric, or in the past.
    pub fn is_token_expired(&self) -> bool {
        let Some(token) = self.token() else {
            return true;
        };
        let Some(claims) = DecodedClaims::decode(&token) else {
            return true;
        };
        claims.is_expired(Utc::now().timestamp())
    }

    /// Role-membership check against the current token's role claims.
    ///
    /// An empty requirement always passes. Comparison is case-insensitive on
    /// both sides; no token or a decode failure denies.
    pub fn has_any_role(&self, required_roles: &[&str]) -> bool {
        if required_roles.is_empty() {
            return true;
        }

        let Some(token) = self.token() else {
            return false;
        };
        let Some(claims) = DecodedClaims::decode(&token) else {
            return false;
        };

        let held: Vec<String> = claims
            .roles()
            .iter()
            .map(|role| role.to_lowercase())
            .collect();
        required_roles
            .iter()
            .any(|required| held.contains(&required.to_lowercase()))
    }

    /// Clear both persisted keys and publish a logged-out state.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(CURRENT_USER_KEY);
        tracing::debug!("session cleared");
        self.publish(None);
    }

    /// Register a synchronous observer of the published user. The current
    /// value is delivered immediately; later deliveries happen in
    /// subscription order.
    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: Fn(Option<&CurrentUser>) + Send + Sync + 'static,
    {
        let current = self.current_user();
        subscriber(current.as_ref());
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Box::new(subscriber));
    }

    fn publish(&self, user: Option<CurrentUser>) {
        {
            let mut guard = self
                .current_user
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = user.clone();
        }

        let subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for subscriber in subscribers.iter() {
            subscriber(user.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryStorage;
    use crate::testing::{expired_token, valid_token};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn empty_store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn set_session_publishes_projection() {
        let store = empty_store();
        let token = valid_token(json!({ "sub": "u-1", "email": "ops@shop.in", "role": "admin" }));

        assert!(store.set_session_from_token(&token));
        let user = store.current_user().expect("published");
        assert_eq!(user.id, "u-1");
        assert_eq!(user.role, "admin");
        assert_eq!(store.user_role(), "admin");
        assert!(store.is_logged_in());
        assert!(!store.is_token_expired());
    }

    #[test]
    fn malformed_token_leaves_existing_session_untouched() {
        let store = empty_store();
        let token = valid_token(json!({ "sub": "u-1", "role": "admin" }));
        assert!(store.set_session_from_token(&token));

        assert!(!store.set_session_from_token("garbage"));
        assert_eq!(store.token(), Some(token));
        assert_eq!(store.current_user().map(|u| u.id), Some("u-1".to_string()));
    }

    #[test]
    fn expired_token_counts_as_logged_out() {
        let store = empty_store();
        let token = expired_token(json!({ "sub": "u-1" }));
        assert!(store.set_session_from_token(&token));

        assert!(store.is_token_expired());
        assert!(!store.is_logged_in());
        // The projection is still published; only the expiry checks fail
        assert!(store.current_user().is_some());
    }

    #[test]
    fn has_any_role_rules() {
        let store = empty_store();
        assert!(store.has_any_role(&[]));
        assert!(!store.has_any_role(&["admin"]));

        let token = valid_token(json!({ "sub": "u-1", "role": "Admin, finance" }));
        store.set_session_from_token(&token);
        assert!(store.has_any_role(&["ADMIN"]));
        assert!(store.has_any_role(&["finance", "ops"]));
        assert!(!store.has_any_role(&["super_admin"]));
        assert!(store.has_any_role(&[]));
    }

    #[test]
    fn logout_clears_both_keys_and_notifies() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        store.set_session_from_token(&valid_token(json!({ "sub": "u-1" })));

        let notifications = Arc::new(AtomicUsize::new(0));
        let seen = notifications.clone();
        store.subscribe(move |user| {
            if user.is_none() {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        store.logout();
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert_eq!(storage.get(CURRENT_USER_KEY), None);
        assert_eq!(store.current_user(), None);
        assert_eq!(store.user_role(), "");
        // one None on subscribe would not fire (user was set), one on logout
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn restore_rederives_user_from_persisted_token() {
        let token = valid_token(json!({ "sub": "u-7", "role": "ops" }));
        let storage = Arc::new(MemoryStorage::with_entries(&[
            (TOKEN_KEY, token.as_str()),
            (CURRENT_USER_KEY, "{\"stale\": true}"),
        ]));

        let store = SessionStore::new(storage);
        let user = store.current_user().expect("restored");
        assert_eq!(user.id, "u-7");
        assert_eq!(user.role, "ops");
    }

    #[test]
    fn restore_clears_session_when_persisted_token_is_garbage() {
        let storage = Arc::new(MemoryStorage::with_entries(&[
            (TOKEN_KEY, "not-a-token"),
            (CURRENT_USER_KEY, "{}"),
        ]));

        let store = SessionStore::new(storage.clone());
        assert_eq!(store.current_user(), None);
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert_eq!(storage.get(CURRENT_USER_KEY), None);
    }

    #[test]
    fn restore_discards_orphaned_user_snapshot() {
        let storage = Arc::new(MemoryStorage::with_entries(&[(
            CURRENT_USER_KEY,
            "{\"id\":\"u-1\",\"email\":\"\",\"role\":\"admin\",\"companyId\":\"\",\"userCode\":\"\"}",
        )]));

        let store = SessionStore::new(storage.clone());
        assert_eq!(store.current_user(), None);
        assert!(!store.is_logged_in());
        assert_eq!(storage.get(CURRENT_USER_KEY), None);
    }

    #[test]
    fn subscribers_get_current_value_immediately() {
        let store = empty_store();
        store.set_session_from_token(&valid_token(json!({ "sub": "u-2" })));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |user| {
            sink.lock().unwrap().push(user.map(|u| u.id.clone()));
        });

        store.logout();
        let log = seen.lock().unwrap();
        assert_eq!(*log, vec![Some("u-2".to_string()), None]);
    }
}
