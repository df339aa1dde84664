//! This file defines the log-in page and the route for handling log-in requests.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    account::{SharedAccountStore, lock_store},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, base, form_card, form_error, name_input,
        pin_input,
    },
    session::{SessionAction, next_session, redirect_to_root, set_session_cookie},
};

/// The full log-in page, with a button for opening the create account page.
pub fn log_in_page() -> Markup {
    let content = html! {
        (log_in_form_view("", None))

        button
            type="button"
            hx-post=(endpoints::OPEN_CREATE_ACCOUNT)
            class=(BUTTON_SECONDARY_STYLE)
        {
            "Create New Account"
        }
    };

    base("Log In", &form_card("Login", &content))
}

/// The log-in form, which replaces itself with the server's response.
fn log_in_form_view(name: &str, error_message: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::LOG_IN_API)
            hx-swap="outerHTML"
            class="space-y-4 md:space-y-6"
        {
            (name_input(name))
            (pin_input("PIN"))
            (form_error(error_message))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Login" }
        }
    }
}

/// The raw data entered by the user in the log-in form.
///
/// The PIN is kept as a plain string so that a malformed PIN gets the same
/// response as a wrong one.
#[derive(Clone, Deserialize)]
pub struct LogInForm {
    /// Account holder name entered during log-in.
    pub name: String,
    /// PIN entered during log-in.
    pub pin: String,
}

/// Handler for log-in requests via the POST method.
///
/// On a successful log-in the session moves to the account details page and
/// the client is redirected to the root page. Otherwise the form is returned
/// with a generic error message. A session that is not on the log-in page is
/// left as it is and redirected to the root page.
pub async fn post_log_in(
    State(accounts): State<SharedAccountStore>,
    jar: PrivateCookieJar,
    Form(form): Form<LogInForm>,
) -> Response {
    let verified = match lock_store(&accounts) {
        Ok(store) => store
            .verify_credentials(&form.name, &form.pin)
            .map(|account| account.pin().clone()),
        Err(error) => return error.into_response(),
    };

    match verified {
        Ok(pin) => {
            let Some(session) = next_session(&jar, SessionAction::LogIn(pin)) else {
                return redirect_to_root(jar);
            };

            tracing::info!("{:?} logged in", form.name);

            redirect_to_root(set_session_cookie(jar, &session))
        }
        Err(error) => {
            tracing::warn!("Failed log-in attempt for {:?}", form.name);

            log_in_form_view(&form.name, Some(&error.to_string())).into_response()
        }
    }
}
