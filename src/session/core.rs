//! The per-browser session state machine.

use std::{fmt::Display, str::FromStr};

use crate::{Error, account::Pin};

/// The screen a session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The log-in form, where every session starts.
    LogIn,
    /// The form for opening a new account.
    CreateAccount,
    /// The logged in account's balance and transactions.
    AccountDetails,
}

impl Page {
    /// The identifier used for the page in cookies and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::LogIn => "log_in",
            Page::CreateAccount => "create_account",
            Page::AccountDetails => "user_details",
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something the user did that may move the session to another page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// The "Create New Account" button on the log-in page.
    OpenCreateAccount,
    /// An account was created from the create account page.
    AccountCreated,
    /// The "Back to Login" button on the create account page.
    Back,
    /// The account with the PIN passed the credential check.
    LogIn(Pin),
    /// The "Logout" button on the account details page.
    LogOut,
}

impl SessionAction {
    /// A short name for logs. Never includes the PIN.
    pub fn name(&self) -> &'static str {
        match self {
            SessionAction::OpenCreateAccount => "open create account",
            SessionAction::AccountCreated => "account created",
            SessionAction::Back => "back",
            SessionAction::LogIn(_) => "log in",
            SessionAction::LogOut => "log out",
        }
    }
}

/// The page a browser session is on and, on the account details page, who is
/// logged in.
///
/// A session on the account details page always carries a PIN, so there is
/// no way to reach that page without a current user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LogIn,
    CreateAccount,
    AccountDetails(Pin),
}

impl Session {
    /// The screen to render for this session.
    pub fn page(&self) -> Page {
        match self {
            Session::LogIn => Page::LogIn,
            Session::CreateAccount => Page::CreateAccount,
            Session::AccountDetails(_) => Page::AccountDetails,
        }
    }

    /// The PIN of the logged in account, if any.
    pub fn current_user(&self) -> Option<&Pin> {
        match self {
            Session::AccountDetails(pin) => Some(pin),
            _ => None,
        }
    }

    /// Move the session to the page that follows `action`.
    ///
    /// # Errors
    /// Returns [Error::InvalidTransition] if `action` is not allowed on the
    /// current page.
    pub fn apply(self, action: SessionAction) -> Result<Session, Error> {
        match (self, action) {
            (Session::LogIn, SessionAction::OpenCreateAccount) => Ok(Session::CreateAccount),
            (Session::LogIn, SessionAction::LogIn(pin)) => Ok(Session::AccountDetails(pin)),
            (Session::CreateAccount, SessionAction::AccountCreated | SessionAction::Back) => {
                Ok(Session::LogIn)
            }
            (Session::AccountDetails(_), SessionAction::LogOut) => Ok(Session::LogIn),
            (session, action) => Err(Error::InvalidTransition {
                from: session.page(),
                action: action.name(),
            }),
        }
    }
}

impl Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Session::AccountDetails(pin) => write!(f, "{}:{pin}", Page::AccountDetails),
            session => f.write_str(session.page().as_str()),
        }
    }
}

impl FromStr for Session {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Page::LogIn.as_str() {
            return Ok(Session::LogIn);
        }

        if s == Page::CreateAccount.as_str() {
            return Ok(Session::CreateAccount);
        }

        match s.split_once(':') {
            Some((page, pin)) if page == Page::AccountDetails.as_str() => {
                Ok(Session::AccountDetails(Pin::new(pin)?))
            }
            _ => Err(Error::InvalidSession(s.to_owned())),
        }
    }
}
