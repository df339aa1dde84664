//! Defines the page and form for creating an account.

use maud::{Markup, html};

use crate::{
    account::core::Age,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        base, form_card, form_error, name_input, pin_input,
    },
};

/// The values to fill the create account form with after a failed attempt.
/// The PIN is never sent back to the client.
#[derive(Debug, Default, Clone, Copy)]
pub struct AccountFormValues<'a> {
    pub name: &'a str,
    pub age: Option<u8>,
    pub salary: Option<u64>,
}

/// The full create account page, with a button for going back to the log-in page.
pub fn create_account_page() -> Markup {
    let content = html! {
        (create_account_form_view(AccountFormValues::default(), None))

        button
            type="button"
            hx-post=(endpoints::BACK_TO_LOG_IN)
            class=(BUTTON_SECONDARY_STYLE)
        {
            "Back to Login"
        }
    };

    base("Create Account", &form_card("Create Account", &content))
}

pub fn create_account_form_view(values: AccountFormValues, error_message: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::ACCOUNTS)
            hx-swap="outerHTML"
            class="space-y-4 md:space-y-6"
        {
            (name_input(values.name))

            div
            {
                label for="age" class=(FORM_LABEL_STYLE) { "Age" }

                input
                    type="number"
                    name="age"
                    id="age"
                    min=(Age::MIN)
                    max=(Age::MAX)
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    value=[values.age];
            }

            div
            {
                label for="salary" class=(FORM_LABEL_STYLE) { "Salary" }

                input
                    type="number"
                    name="salary"
                    id="salary"
                    min="0"
                    step="100"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    value=[values.salary];
            }

            (pin_input("PIN (4 digits)"))
            (form_error(error_message))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create Account" }
        }
    }
}
