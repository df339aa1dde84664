//! Application router configuration and the root page.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    AppState,
    account::{
        SharedAccountStore, account_details_page, create_account_endpoint, create_account_page,
        deposit_endpoint, lock_store, withdraw_endpoint,
    },
    endpoints,
    internal_server_error::{InternalServerError, get_internal_server_error_page},
    log_in::{log_in_page, post_log_in},
    log_out::get_log_out,
    not_found::get_404_not_found,
    session::{
        Session, authenticate, back_to_log_in, get_session, open_create_account,
        set_session_cookie,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::OPEN_CREATE_ACCOUNT, post(open_create_account))
        .route(endpoints::BACK_TO_LOG_IN, post(back_to_log_in))
        .route(endpoints::ACCOUNTS, post(create_account_endpoint))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(endpoints::DEPOSIT, post(deposit_endpoint))
        .route(endpoints::WITHDRAW, post(withdraw_endpoint))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' renders the page the session is on.
///
/// The account details page is only rendered for an authenticated session.
/// A session logged in to an account that is not in the store, e.g. from
/// before the server restarted, is reset to the log-in page.
async fn get_index_page(
    State(accounts): State<SharedAccountStore>,
    jar: PrivateCookieJar,
) -> Response {
    let session = get_session(&jar);
    let active_account = match session {
        Session::LogIn => return log_in_page().into_response(),
        Session::CreateAccount => return create_account_page().into_response(),
        Session::AccountDetails(_) => match authenticate(&session, &accounts) {
            Ok(Some(active_account)) => active_account,
            Ok(None) => {
                return (set_session_cookie(jar, &Session::LogIn), log_in_page()).into_response();
            }
            Err(error) => return error.into_response(),
        },
    };

    let store = match lock_store(&accounts) {
        Ok(store) => store,
        Err(error) => return error.into_response(),
    };

    match store.find(active_account.pin()) {
        Some(account) => account_details_page(account).into_response(),
        None => {
            tracing::error!("The logged in account disappeared from the store");
            InternalServerError::default().into_response()
        }
    }
}
