//! Renders an account's transaction history.

use maud::{Markup, html};

use crate::{
    account::core::{Account, Transaction, TransactionKind},
    html::format_currency,
};

fn border_style(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Deposit => "border-l-4 border-green-500 bg-green-50 dark:bg-green-900/20",
        TransactionKind::Withdraw => "border-l-4 border-red-500 bg-red-50 dark:bg-red-900/20",
    }
}

fn transaction_view(transaction: &Transaction) -> Markup {
    html! {
        li class={ "px-4 py-3 rounded " (border_style(transaction.kind)) }
        {
            div class="flex justify-between font-semibold"
            {
                span { (transaction.kind.label()) }
                span { (format_currency(transaction.amount.get())) }
            }

            div class="flex justify-between text-sm text-gray-600 dark:text-gray-400"
            {
                span { (transaction.formatted_date()) }
                span { "Balance: " (format_currency(transaction.balance)) }
            }
        }
    }
}

/// The account's transactions, most recent first.
pub fn transaction_history_view(account: &Account) -> Markup {
    let history = account.history();

    html! {
        @if history.len() == 0 {
            p id="transaction-history" class="text-gray-500 dark:text-gray-400"
            {
                "No transactions yet"
            }
        } @else {
            ul id="transaction-history" class="space-y-2"
            {
                @for transaction in history {
                    (transaction_view(transaction))
                }
            }
        }
    }
}

#[cfg(test)]
mod transaction_history_tests {
    use scraper::Html;
    use time::macros::datetime;

    use crate::{
        account::core::{Account, Age, Amount, Pin},
        test_utils::{assert_valid_html, select_text},
    };

    use super::transaction_history_view;

    fn account() -> Account {
        Account::new(
            Pin::new("1234").unwrap(),
            "Alice".to_owned(),
            Age::new(30).unwrap(),
            5000,
        )
    }

    fn render(account: &Account) -> Html {
        let html = Html::parse_fragment(&transaction_history_view(account).into_string());
        assert_valid_html(&html);

        html
    }

    #[test]
    fn empty_history_shows_notice() {
        let html = render(&account());

        assert_eq!(
            select_text(&html, "#transaction-history"),
            vec!["No transactions yet"]
        );
        assert!(select_text(&html, "li").is_empty());
    }

    #[test]
    fn most_recent_transaction_is_first() {
        let mut account = account();
        account
            .deposit(Amount::new(500).unwrap(), datetime!(2025-01-31 13:05:09 UTC))
            .unwrap();
        account
            .withdraw(Amount::new(200).unwrap(), datetime!(2025-01-31 13:06:00 UTC))
            .unwrap();

        let html = render(&account);

        assert_eq!(
            select_text(&html, "#transaction-history li"),
            vec![
                "Withdraw $200 2025-01-31 13:06:00 Balance: $300",
                "Deposit $500 2025-01-31 13:05:09 Balance: $500",
            ]
        );
    }

    #[test]
    fn deposits_are_green_and_withdrawals_red() {
        let mut account = account();
        account
            .deposit(Amount::new(100).unwrap(), datetime!(2025-01-31 13:05:09 UTC))
            .unwrap();
        account
            .withdraw(Amount::new(50).unwrap(), datetime!(2025-01-31 13:06:00 UTC))
            .unwrap();

        let html = render(&account);

        assert_eq!(
            select_text(&html, "li.border-red-500 div:first-child span:first-child"),
            vec!["Withdraw"]
        );
        assert_eq!(
            select_text(&html, "li.border-green-500 div:first-child span:first-child"),
            vec!["Deposit"]
        );
    }
}
