//! Teller is a toy bank account simulator with a web UI.
//!
//! Users create an account with a name, age, salary and 4-digit PIN, log in
//! with their name and PIN, and deposit or withdraw money while watching their
//! transaction history. Accounts live in memory and are gone once the server
//! stops.
//!
//! This library provides a REST API that directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod account;
mod app_state;
mod endpoints;
mod html;
mod internal_server_error;
mod log_in;
mod log_out;
mod logging;
mod not_found;
mod routing;
mod session;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use session::Page;

use crate::internal_server_error::InternalServerError;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// The display text of the user-correctable errors is the message shown
/// inline on the form that caused it.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A PIN that is not exactly four digits was used to create an account.
    #[error("PIN must be a 4-digit number!")]
    InvalidPin,

    /// An account was created with a name that is empty or only whitespace.
    #[error("Name is required!")]
    EmptyName,

    /// An account was created with a PIN that another account already uses.
    #[error("PIN already exists!")]
    DuplicatePin,

    /// The name and PIN entered at log-in do not match any account.
    ///
    /// The same error is used whether the PIN is unknown or the name is
    /// wrong, so the message does not reveal which PINs are taken.
    #[error("Invalid Name or PIN")]
    InvalidCredentials,

    /// A withdrawal was larger than the account balance.
    #[error("Insufficient balance!")]
    InsufficientBalance,

    /// A deposit would take the balance past the largest representable amount.
    #[error("Deposit would exceed the maximum balance!")]
    BalanceOverflow,

    /// An age outside of 1 to 100 years.
    #[error("Age must be between 1 and 100, got {0}")]
    InvalidAge(u8),

    /// A deposit or withdrawal amount of zero.
    #[error("Amount must be at least 1")]
    InvalidAmount,

    /// A session action that is not allowed on the session's current page.
    #[error("cannot {action} from the {from} page")]
    InvalidTransition {
        /// The page the session was on.
        from: Page,
        /// The name of the rejected action.
        action: &'static str,
    },

    /// The session cookie held a value that is not a session.
    #[error("invalid session {0:?}")]
    InvalidSession(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the account store lock
    #[error("could not acquire the account store lock")]
    StoreLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
