//! Per-browser-session state, keyed by an encrypted cookie.
//!
//! Every visitor gets their own [Session] holding an isolated [Ledger]. The
//! session ID lives in a private cookie without an expiry, so the browser
//! drops it when it closes. Nothing is written to disk: sessions disappear on
//! restart or after they have been idle for longer than the configured TTL.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Date, Duration, OffsetDateTime};
use uuid::Uuid;

use crate::{
    Error,
    alert::Alert,
    ledger::{Ledger, TransactionType},
};

/// The name of the cookie holding the session ID.
pub(crate) const COOKIE_SESSION_ID: &str = "session_id";

/// The default time a session may sit idle before it is discarded.
pub const DEFAULT_SESSION_TTL: Duration = Duration::hours(12);

/// Identifies one browser session.
pub type SessionId = Uuid;

/// The state owned by one browser session.
#[derive(Debug, Clone)]
pub struct Session {
    /// The transactions entered in this session.
    pub ledger: Ledger,
    /// The transaction type the entry form was last set to.
    pub selected_type: TransactionType,
    /// The date last used in the entry form, if any.
    pub form_date: Option<Date>,
    /// An alert to show once on the next page render.
    pub flash: Option<Alert>,
    last_seen: OffsetDateTime,
}

impl Session {
    fn new(now: OffsetDateTime) -> Self {
        Self {
            ledger: Ledger::new(),
            selected_type: TransactionType::Income,
            form_date: None,
            flash: None,
            last_seen: now,
        }
    }
}

/// All live sessions.
///
/// Cloning the store is cheap and clones share the same sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
    idle_ttl: Duration,
}

impl SessionStore {
    /// Create an empty store that discards sessions idle for longer than `idle_ttl`.
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_ttl,
        }
    }

    /// Run `operation` on the session identified by the cookie in `jar`.
    ///
    /// A new session is started if the cookie is missing, cannot be
    /// decrypted, or refers to a session that no longer exists. The returned
    /// cookie jar must be sent back to the client so it keeps the session.
    ///
    /// # Errors
    /// Returns [Error::SessionLockError] if the session lock is poisoned.
    pub fn with_session<T>(
        &self,
        jar: PrivateCookieJar,
        operation: impl FnOnce(&mut Session) -> T,
    ) -> Result<(PrivateCookieJar, T), Error> {
        let now = OffsetDateTime::now_utc();
        let mut sessions = self
            .sessions
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
            .map_err(|_| Error::SessionLockError)?;

        let existing_id = jar
            .get(COOKIE_SESSION_ID)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
            .filter(|id| sessions.contains_key(id));

        let (jar, session_id) = match existing_id {
            Some(id) => (jar, id),
            None => {
                self.prune_idle(&mut sessions, now);

                let id = Uuid::new_v4();
                sessions.insert(id, Session::new(now));
                tracing::info!("Started session {id}, {} active", sessions.len());

                (jar.add(session_cookie(id)), id)
            }
        };

        let session = sessions
            .entry(session_id)
            .or_insert_with(|| Session::new(now));
        session.last_seen = now;

        Ok((jar, operation(session)))
    }

    /// The number of live sessions.
    pub fn active_sessions(&self) -> Result<usize, Error> {
        self.sessions
            .lock()
            .map(|sessions| sessions.len())
            .map_err(|_| Error::SessionLockError)
    }

    fn prune_idle(&self, sessions: &mut HashMap<SessionId, Session>, now: OffsetDateTime) {
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_seen <= self.idle_ttl);

        let pruned = before - sessions.len();
        if pruned > 0 {
            tracing::debug!("Discarded {pruned} idle sessions");
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

fn session_cookie(id: SessionId) -> Cookie<'static> {
    Cookie::build((COOKIE_SESSION_ID, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
