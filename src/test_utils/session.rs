//! Helpers for creating and inspecting encrypted session cookies in tests.

use axum::{
    body::Body,
    http::{Response, header::SET_COOKIE},
    response::IntoResponse,
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key},
};
use sha2::{Digest, Sha512};

use crate::session::{COOKIE_SESSION, Session, set_session_cookie};

pub(crate) fn get_test_cookie_key() -> Key {
    Key::from(&Sha512::digest(b"42"))
}

/// The session cookie a client would hold after the server stored `session`.
#[track_caller]
pub(crate) fn encrypted_session_cookie(key: &Key, session: &Session) -> Cookie<'static> {
    let jar = set_session_cookie(PrivateCookieJar::new(key.clone()), session);
    let response = jar.into_response();
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("expected a set-cookie header")
        .to_str()
        .expect("Could not convert to str")
        .to_owned();

    Cookie::parse_encoded(header).expect("Could not parse cookie")
}

/// Decrypt the session stored in `cookie`.
///
/// The value may still be percent-encoded, as it is in a `Set-Cookie` header.
#[track_caller]
pub(crate) fn session_from_cookie(key: &Key, cookie: Cookie<'static>) -> Session {
    let cookie = Cookie::parse_encoded(cookie.stripped().to_string())
        .expect("Could not parse cookie");
    let cookie = PrivateCookieJar::new(key.clone())
        .decrypt(cookie)
        .expect("expected an encrypted session cookie");

    cookie.value().parse().expect("Could not parse session")
}

/// Get the session set by `response`, or `None` if it did not set one.
#[track_caller]
pub(crate) fn session_from_response(key: &Key, response: &Response<Body>) -> Option<Session> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|header| Cookie::parse_encoded(header.to_str().ok()?.to_owned()).ok())
        .find(|cookie| cookie.name() == COOKIE_SESSION)
        .map(|cookie| session_from_cookie(key, cookie))
}

#[cfg(test)]
mod session_helper_tests {
    use axum_extra::extract::cookie::Cookie;

    use crate::{account::Pin, session::Session};

    use super::{encrypted_session_cookie, get_test_cookie_key, session_from_cookie};

    #[test]
    fn sessions_survive_percent_encoded_cookie_values() {
        let key = get_test_cookie_key();
        let session = Session::AccountDetails(Pin::new("1234").unwrap());

        // Each cookie gets a fresh nonce, so enough of them contain a '/' or '+'.
        for _ in 0..64 {
            let cookie = encrypted_session_cookie(&key, &session);
            let encoded = Cookie::parse(cookie.encoded().to_string()).unwrap();

            assert_eq!(session_from_cookie(&key, cookie), session);
            assert_eq!(session_from_cookie(&key, encoded), session);
        }
    }
}
