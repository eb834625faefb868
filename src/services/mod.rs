pub mod session;
pub mod validation;

pub use session::{SessionManager, SESSION_COOKIE};
pub use validation::{safe_redirect, validate_email};
