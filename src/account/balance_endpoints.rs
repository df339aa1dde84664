//! Defines the endpoints for depositing into and withdrawing from the logged
//! in account.

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    AppState,
    account::{
        core::{Amount, TransactionKind},
        details_page::{deposit_form_view, withdraw_form_view},
        store::{SharedAccountStore, lock_store},
    },
    endpoints,
    internal_server_error::InternalServerError,
    session::ActiveAccount,
    timezone::local_now,
};

/// The state needed to change an account's balance.
#[derive(Debug, Clone)]
pub struct BalanceState {
    pub accounts: SharedAccountStore,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for BalanceState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            accounts: state.accounts.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for a deposit or withdrawal.
#[derive(Debug, Deserialize)]
pub struct AmountForm {
    pub amount: Amount,
}

/// A route handler for depositing money into the logged in account.
pub async fn deposit_endpoint(
    account: ActiveAccount,
    State(state): State<BalanceState>,
    Form(form): Form<AmountForm>,
) -> Response {
    update_balance(&state, &account, TransactionKind::Deposit, form.amount)
}

/// A route handler for withdrawing money from the logged in account.
///
/// A withdrawal larger than the balance leaves the account untouched and
/// returns the withdraw form with an error message.
pub async fn withdraw_endpoint(
    account: ActiveAccount,
    State(state): State<BalanceState>,
    Form(form): Form<AmountForm>,
) -> Response {
    update_balance(&state, &account, TransactionKind::Withdraw, form.amount)
}

fn update_balance(
    state: &BalanceState,
    active_account: &ActiveAccount,
    kind: TransactionKind,
    amount: Amount,
) -> Response {
    let date = match local_now(&state.local_timezone) {
        Ok(date) => date,
        Err(error) => return error.into_response(),
    };

    let mut store = match lock_store(&state.accounts) {
        Ok(store) => store,
        Err(error) => return error.into_response(),
    };

    let Some(account) = store.find_mut(active_account.pin()) else {
        tracing::error!("The logged in account disappeared from the store");
        return InternalServerError::default().into_response();
    };

    let result = match kind {
        TransactionKind::Deposit => account.deposit(amount, date),
        TransactionKind::Withdraw => account.withdraw(amount, date),
    };

    match result {
        Ok(balance) => {
            tracing::info!(
                "{} of {} for {:?}, the balance is now {balance}",
                kind.label(),
                amount.get(),
                account.name()
            );

            (
                StatusCode::SEE_OTHER,
                HxRedirect(endpoints::ROOT.to_owned()),
                (),
            )
                .into_response()
        }
        Err(error) => {
            tracing::warn!(
                "{} of {} for {:?} failed: {error}",
                kind.label(),
                amount.get(),
                account.name()
            );

            let message = error.to_string();
            match kind {
                TransactionKind::Deposit => deposit_form_view(Some(&message)),
                TransactionKind::Withdraw => withdraw_form_view(Some(&message)),
            }
            .into_response()
        }
    }
}
