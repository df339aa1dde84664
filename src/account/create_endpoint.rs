//! Defines the endpoint for creating a new account.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use serde::Deserialize;

use crate::{
    Error,
    account::{
        core::{Age, Salary},
        create_page::{AccountFormValues, create_account_form_view},
        store::{SharedAccountStore, lock_store},
    },
    session::{SessionAction, next_session, redirect_to_root, set_session_cookie},
};

/// The form data for creating an account.
///
/// Age is range checked while the form is parsed. The PIN is left as a plain
/// string so that the store decides which check fails first.
#[derive(Debug, Deserialize)]
pub struct CreateAccountForm {
    pub name: String,
    pub age: Age,
    pub salary: Salary,
    pub pin: String,
}

/// A route handler for creating a new account.
///
/// On success the session goes back to the log-in page and the client is
/// redirected to the root page. Otherwise the form is returned with the
/// entered name, age and salary and an error message. Nothing is created for
/// a session that is not on the create account page.
pub async fn create_account_endpoint(
    State(accounts): State<SharedAccountStore>,
    jar: PrivateCookieJar,
    Form(form): Form<CreateAccountForm>,
) -> Response {
    let Some(session) = next_session(&jar, SessionAction::AccountCreated) else {
        return redirect_to_root(jar);
    };

    match create_account(&accounts, &form) {
        Ok(account_count) => {
            tracing::info!(
                "Created an account for {:?}, the store now has {account_count} accounts",
                form.name
            );

            redirect_to_root(set_session_cookie(jar, &session))
        }
        Err(Error::StoreLockError) => Error::StoreLockError.into_response(),
        Err(error) => {
            tracing::warn!("Could not create an account for {:?}: {error}", form.name);

            let values = AccountFormValues {
                name: &form.name,
                age: Some(form.age.years()),
                salary: Some(form.salary),
            };

            create_account_form_view(values, Some(&error.to_string())).into_response()
        }
    }
}

/// Add the account described by `form` to the store, returning the new
/// number of accounts.
fn create_account(accounts: &SharedAccountStore, form: &CreateAccountForm) -> Result<usize, Error> {
    let mut store = lock_store(accounts)?;
    store.create(&form.name, form.age, form.salary, &form.pin)?;

    Ok(store.len())
}
