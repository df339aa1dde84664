use axum::{body::Body, http::StatusCode, response::Response};

#[track_caller]
pub(crate) fn assert_content_type_html(response: &Response<Body>) {
    assert_eq!(
        get_header(response, "content-type"),
        "text/html; charset=utf-8"
    );
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    let header_error_message = format!("Headers missing {header_name}");

    response
        .headers()
        .get(header_name)
        .expect(&header_error_message)
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}

/// Assert that `response` is a see other HTMX redirect to `endpoint`.
#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(get_header(response, "hx-redirect"), endpoint);
}
