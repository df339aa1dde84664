//! The extractor that guards the account details page and its forms.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};

use crate::{
    Error,
    account::{Pin, SharedAccountStore, lock_store},
    session::{
        cookie::{get_session, set_session_cookie},
        core::Session,
        navigate::redirect_to_root,
    },
};

/// A session that is logged in to an account that exists in the store.
///
/// Handlers that take an `ActiveAccount` only run for such sessions. Any other
/// request gets its session reset to the log-in page and an HTMX redirect to
/// the root page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAccount {
    pin: Pin,
}

impl ActiveAccount {
    /// The PIN of the logged in account.
    pub fn pin(&self) -> &Pin {
        &self.pin
    }
}

/// Check that `session` is logged in to an account in `store`.
///
/// Returns `Ok(None)` if the session is not on the account details page or
/// its PIN does not refer to an account, e.g. after a restart cleared the
/// store.
///
/// # Errors
/// Returns [Error::StoreLockError] if the store lock is poisoned.
pub(crate) fn authenticate(
    session: &Session,
    store: &SharedAccountStore,
) -> Result<Option<ActiveAccount>, Error> {
    let Some(pin) = session.current_user() else {
        return Ok(None);
    };

    if lock_store(store)?.find(pin).is_none() {
        tracing::warn!("Session refers to an account that does not exist, resetting to log in.");
        return Ok(None);
    }

    Ok(Some(ActiveAccount { pin: pin.clone() }))
}

impl<S> FromRequestParts<S> for ActiveAccount
where
    S: Send + Sync,
    Key: FromRef<S>,
    SharedAccountStore: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(jar) = PrivateCookieJar::<Key>::from_request_parts(parts, state).await;
        let store = SharedAccountStore::from_ref(state);

        match authenticate(&get_session(&jar), &store) {
            Ok(Some(account)) => Ok(account),
            Ok(None) => Err(redirect_to_root(set_session_cookie(jar, &Session::LogIn))),
            Err(error) => Err(error.into_response()),
        }
    }
}
