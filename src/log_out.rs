//! Log-out route handler that returns the session to the log-in page.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    endpoints,
    session::{SessionAction, apply_action},
};

/// Clear the current user from the session and redirect the client to the root page.
pub async fn get_log_out(jar: PrivateCookieJar) -> Response {
    let jar = apply_action(jar, SessionAction::LogOut);

    (jar, Redirect::to(endpoints::ROOT)).into_response()
}

#[cfg(test)]
mod log_out_tests {
    use axum::{
        body::Body,
        http::{Response, StatusCode},
    };
    use axum_extra::extract::PrivateCookieJar;

    use crate::{
        account::Pin,
        endpoints,
        log_out::get_log_out,
        session::{Session, set_session_cookie},
        test_utils::{get_test_cookie_key, session_from_response},
    };

    fn get_jar(session: &Session) -> PrivateCookieJar {
        set_session_cookie(PrivateCookieJar::new(get_test_cookie_key()), session)
    }

    fn assert_redirect(response: &Response<Body>, want_location: &str) {
        let redirect_location = response.headers().get("location").unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(redirect_location, want_location);
    }

    #[tokio::test]
    async fn log_out_clears_current_user_and_redirects() {
        let jar = get_jar(&Session::AccountDetails(Pin::new("1234").unwrap()));

        let response = get_log_out(jar).await;

        assert_redirect(&response, endpoints::ROOT);
        let session = session_from_response(&get_test_cookie_key(), &response).unwrap();
        assert_eq!(session, Session::LogIn);
        assert_eq!(session.current_user(), None);
    }

    #[tokio::test]
    async fn log_out_without_user_leaves_session_alone() {
        let response = get_log_out(get_jar(&Session::CreateAccount)).await;

        assert_redirect(&response, endpoints::ROOT);
        assert_eq!(
            session_from_response(&get_test_cookie_key(), &response),
            Some(Session::CreateAccount)
        );
    }
}
