//! Per-browser session state: which page is shown and who is logged in.

mod cookie;
mod core;
mod guard;
mod navigate;

#[cfg(test)]
pub(crate) use cookie::COOKIE_SESSION;
pub(crate) use cookie::{get_session, set_session_cookie};
pub use self::core::{Page, Session, SessionAction};
pub use guard::ActiveAccount;
pub(crate) use guard::authenticate;
pub(crate) use navigate::{apply_action, next_session, redirect_to_root};
pub use navigate::{back_to_log_in, open_create_account};
