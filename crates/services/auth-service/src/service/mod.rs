//! Authentication service business logic.

mod login_service;

pub use login_service::{AuthService, LoginService};
