use axum_extra::extract::{PrivateCookieJar, cookie::Key};

use crate::{budget::BudgetState, session::SessionStore, tier::Tier};

pub(crate) fn test_budget_state(tier: Tier) -> BudgetState {
    BudgetState {
        sessions: SessionStore::default(),
        tier,
        local_timezone: "Etc/UTC".to_owned(),
    }
}

/// A cookie jar holding a freshly started session in `state`.
pub(crate) fn test_cookie_jar(state: &BudgetState) -> PrivateCookieJar {
    let (jar, ()) = state
        .sessions
        .with_session(PrivateCookieJar::new(Key::generate()), |_| ())
        .expect("Could not start session");

    jar
}
