//! The account details page: profile, balance, deposit and withdraw forms
//! and the transaction history.

use maud::{Markup, html};

use crate::{
    account::{core::Account, history::transaction_history_view},
    endpoints,
    html::{
        APP_TITLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base, form_error, format_currency,
    },
};

fn metric_view(id: &str, label: &str, value: &str) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            dt class="text-sm text-gray-500 dark:text-gray-400" { (label) }
            dd id=(id) class="text-2xl font-bold" { (value) }
        }
    }
}

/// A form with a single amount field that posts to `endpoint`.
fn amount_form_view(endpoint: &str, submit_text: &str, error_message: Option<&str>) -> Markup {
    let input_id = format!("{}-amount", submit_text.to_lowercase());

    html! {
        form
            hx-post=(endpoint)
            hx-swap="outerHTML"
            class="space-y-4"
        {
            div
            {
                label for=(input_id) class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    type="number"
                    name="amount"
                    id=(input_id)
                    min="1"
                    step="1"
                    placeholder="0"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required;
            }

            (form_error(error_message))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_text) }
        }
    }
}

pub fn deposit_form_view(error_message: Option<&str>) -> Markup {
    amount_form_view(endpoints::DEPOSIT, "Deposit", error_message)
}

pub fn withdraw_form_view(error_message: Option<&str>) -> Markup {
    amount_form_view(endpoints::WITHDRAW, "Withdraw", error_message)
}

/// The full page for the logged in `account`.
pub fn account_details_page(account: &Account) -> Markup {
    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-4xl space-y-6"
            {
                h1 class="text-3xl font-bold text-center" { (APP_TITLE) }

                div class="flex items-center justify-between"
                {
                    h2 id="welcome" class="text-xl font-semibold" { "Welcome, " (account.name()) "!" }

                    a href=(endpoints::LOG_OUT) class="w-auto"
                    {
                        span class=(BUTTON_SECONDARY_STYLE) { "Logout" }
                    }
                }

                dl class="grid grid-cols-1 gap-4 md:grid-cols-3"
                {
                    (metric_view("age", "Age", &account.age().years().to_string()))
                    (metric_view("salary", "Salary", &format_currency(account.salary())))
                    (metric_view("current-balance", "Current Balance", &format_currency(account.balance())))
                }

                div class="grid grid-cols-1 gap-4 md:grid-cols-2"
                {
                    section class=(CARD_STYLE)
                    {
                        h3 class="text-lg font-semibold" { "Deposit" }
                        (deposit_form_view(None))
                    }

                    section class=(CARD_STYLE)
                    {
                        h3 class="text-lg font-semibold" { "Withdraw" }
                        (withdraw_form_view(None))
                    }
                }

                section class=(CARD_STYLE)
                {
                    h3 class="text-lg font-semibold" { "Transaction History" }
                    (transaction_history_view(account))
                }
            }
        }
    };

    base("Account", &content)
}
