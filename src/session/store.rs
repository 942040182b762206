// src/session/store.rs
use crate::domain::{update, Action, ViewModel};
use crate::session::token::{generate_session_token, hash_token};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

const MAX_SESSIONS: usize = 10_000;

struct Entry {
    vm: ViewModel,
    last_seen: i64,
}

/// A resolved session: the raw cookie token and whether it was just minted.
///
/// A minted token is not stored until the first [`SessionStore::dispatch`],
/// so browsing without a form submission leaves the store untouched.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub token: String,
    pub is_new: bool,
}

/// In-memory view-models keyed by the SHA-256 of the session token.
///
/// The lock is held only to copy a view-model out or swap a new one in,
/// never while an AI request is running.
pub struct SessionStore {
    entries: Mutex<HashMap<[u8; 32], Entry>>,
    ttl_secs: i64,
    max_entries: usize,
}

impl SessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self::with_capacity(ttl_secs, MAX_SESSIONS)
    }

    pub fn with_capacity(ttl_secs: i64, max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl_secs,
            max_entries: max_entries.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<[u8; 32], Entry>> {
        // a panicking handler cannot leave a view-model half-written,
        // so a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn expired(&self, entry: &Entry, now: i64) -> bool {
        now - entry.last_seen > self.ttl_secs
    }

    /// Looks the cookie token up. Unknown, expired or missing tokens get a
    /// freshly minted one, which is only stored by a later `dispatch`.
    pub fn resolve(&self, token: Option<&str>, now: i64) -> SessionHandle {
        if let Some(token) = token {
            let mut entries = self.lock();
            let key = hash_token(token);
            if let Some(entry) = entries.get_mut(&key) {
                if !self.expired(entry, now) {
                    entry.last_seen = now;
                    return SessionHandle {
                        token: token.to_string(),
                        is_new: false,
                    };
                }
            }
            entries.remove(&key);
        }

        SessionHandle {
            token: generate_session_token(),
            is_new: true,
        }
    }

    /// A copy of the session's current view-model.
    pub fn view_model(&self, token: &str) -> ViewModel {
        self.lock()
            .get(&hash_token(token))
            .map(|e| e.vm.clone())
            .unwrap_or_default()
    }

    /// Runs the reducer on the session's view-model and stores the result.
    ///
    /// Storing a new session first prunes idle ones; if the store is still
    /// full, the least recently seen session is evicted.
    pub fn dispatch(&self, token: &str, action: Action, now: i64) -> ViewModel {
        let mut entries = self.lock();
        let key = hash_token(token);

        if !entries.contains_key(&key) {
            entries.retain(|_, e| !self.expired(e, now));
            if entries.len() >= self.max_entries {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, e)| e.last_seen)
                    .map(|(k, _)| *k);
                if let Some(oldest) = oldest {
                    entries.remove(&oldest);
                    warn!(max = self.max_entries, "Session store full, evicted oldest session");
                }
            }
        }

        let entry = entries.entry(key).or_insert_with(|| Entry {
            vm: ViewModel::default(),
            last_seen: now,
        });

        let next = update(std::mem::take(&mut entry.vm), action);
        entry.vm = next.clone();
        entry.last_seen = now;
        next
    }

    pub fn contains(&self, token: &str) -> bool {
        self.lock().contains_key(&hash_token(token))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
