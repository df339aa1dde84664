#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod session;

pub(crate) use form::{
    assert_form_error_message, assert_form_input, assert_form_input_with_value,
    assert_form_submit_button_with_text, assert_hx_endpoint, assert_no_form_error_message,
    must_get_form, must_get_form_by_endpoint,
};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment, select_text};
pub(crate) use http::{assert_content_type_html, assert_hx_redirect};
pub(crate) use session::{
    encrypted_session_cookie, get_test_cookie_key, session_from_cookie, session_from_response,
};
