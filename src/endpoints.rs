//! The API endpoints URIs.

/// The root route which renders the page the session is on.
pub const ROOT: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for the "Create New Account" button on the log-in page.
pub const OPEN_CREATE_ACCOUNT: &str = "/api/session/create_account";
/// The route for the "Back to Login" button on the create account page.
pub const BACK_TO_LOG_IN: &str = "/api/session/back";
/// The route to create an account.
pub const ACCOUNTS: &str = "/api/accounts";
/// The route for logging in to an account.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for the client to log out of the current account.
pub const LOG_OUT: &str = "/api/log_out";
/// The route to deposit money into the logged in account.
pub const DEPOSIT: &str = "/api/deposit";
/// The route to withdraw money from the logged in account.
pub const WITHDRAW: &str = "/api/withdraw";
