//! Route handlers for the buttons that only move the session between pages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRedirect;

use crate::{
    endpoints,
    session::{
        cookie::{get_session, set_session_cookie},
        core::{Session, SessionAction},
    },
};

/// The session `jar` moves to after `action`, or `None` if the action is not
/// allowed on the session's current page.
///
/// A rejected transition is logged.
pub(crate) fn next_session(jar: &PrivateCookieJar, action: SessionAction) -> Option<Session> {
    match get_session(jar).apply(action) {
        Ok(session) => {
            tracing::debug!("Session moved to {}", session.page());
            Some(session)
        }
        Err(error) => {
            tracing::warn!("Ignoring session action: {error}");
            None
        }
    }
}

/// Apply `action` to the session in `jar`.
///
/// If the action is not allowed on the session's current page, the session is
/// left as it is. Either way the client should be sent to the root page,
/// which renders whatever page the session ends up on.
pub(crate) fn apply_action(jar: PrivateCookieJar, action: SessionAction) -> PrivateCookieJar {
    match next_session(&jar, action) {
        Some(session) => set_session_cookie(jar, &session),
        None => jar,
    }
}

/// A see other HTMX redirect to the root page that also stores `jar`.
pub(crate) fn redirect_to_root(jar: PrivateCookieJar) -> Response {
    (
        StatusCode::SEE_OTHER,
        HxRedirect(endpoints::ROOT.to_owned()),
        jar,
    )
        .into_response()
}

/// Handler for the "Create New Account" button on the log-in page.
pub async fn open_create_account(jar: PrivateCookieJar) -> Response {
    redirect_to_root(apply_action(jar, SessionAction::OpenCreateAccount))
}

/// Handler for the "Back to Login" button on the create account page.
///
/// Any input in the create account form is discarded.
pub async fn back_to_log_in(jar: PrivateCookieJar) -> Response {
    redirect_to_root(apply_action(jar, SessionAction::Back))
}

#[cfg(test)]
mod navigate_tests {
    use axum_extra::extract::PrivateCookieJar;

    use crate::{
        account::Pin,
        endpoints,
        session::{Session, set_session_cookie},
        test_utils::{assert_hx_redirect, get_test_cookie_key, session_from_response},
    };

    use super::{back_to_log_in, open_create_account};

    fn get_jar(session: &Session) -> PrivateCookieJar {
        set_session_cookie(PrivateCookieJar::new(get_test_cookie_key()), session)
    }

    #[tokio::test]
    async fn create_new_account_opens_create_account_page() {
        let response = open_create_account(PrivateCookieJar::new(get_test_cookie_key())).await;

        assert_hx_redirect(&response, endpoints::ROOT);
        assert_eq!(
            session_from_response(&get_test_cookie_key(), &response),
            Some(Session::CreateAccount)
        );
    }

    #[tokio::test]
    async fn back_returns_to_log_in() {
        let response = back_to_log_in(get_jar(&Session::CreateAccount)).await;

        assert_hx_redirect(&response, endpoints::ROOT);
        assert_eq!(
            session_from_response(&get_test_cookie_key(), &response),
            Some(Session::LogIn)
        );
    }

    #[tokio::test]
    async fn create_new_account_is_ignored_when_logged_in() {
        let session = Session::AccountDetails(Pin::new("1234").unwrap());

        let response = open_create_account(get_jar(&session)).await;

        assert_hx_redirect(&response, endpoints::ROOT);
        assert_ne!(
            session_from_response(&get_test_cookie_key(), &response),
            Some(Session::CreateAccount)
        );
    }
}
