//! Reading and writing the session in a private (encrypted) cookie.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};

use crate::session::core::Session;

pub(crate) const COOKIE_SESSION: &str = "session";

/// Store `session` in `jar`.
///
/// The cookie has no expiry, so the browser drops it (and with it the
/// session) when the browser session ends.
pub(crate) fn set_session_cookie(jar: PrivateCookieJar, session: &Session) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_SESSION, session.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true),
    )
}

/// Get the session stored in `jar`.
///
/// A missing cookie, or one that cannot be decrypted or parsed, is a fresh
/// session on the log-in page.
pub(crate) fn get_session(jar: &PrivateCookieJar) -> Session {
    let Some(cookie) = jar.get(COOKIE_SESSION) else {
        return Session::default();
    };

    cookie.value_trimmed().parse().unwrap_or_else(|error| {
        tracing::warn!("Discarding unreadable session cookie: {error}");
        Session::default()
    })
}
