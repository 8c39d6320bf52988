//! Implements a struct that holds the state of the web server.

use std::path::PathBuf;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use time::Duration;

use crate::{Error, session::SessionStore, tier::Tier, timezone::get_local_offset};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The key used for encrypting the session cookie.
    ///
    /// Sessions only live in memory, so a fresh key per process is enough.
    pub cookie_key: Key,

    /// The ledgers of every active browser session.
    pub sessions: SessionStore,

    /// The feature set offered by this server.
    pub tier: Tier,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The directory static files such as the stylesheet are served from.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a new [AppState] with no sessions.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(
        tier: Tier,
        local_timezone: &str,
        session_ttl: Duration,
        static_dir: impl Into<PathBuf>,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            cookie_key: Key::generate(),
            sessions: SessionStore::new(session_ttl),
            tier,
            local_timezone: local_timezone.to_owned(),
            static_dir: static_dir.into(),
        })
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
