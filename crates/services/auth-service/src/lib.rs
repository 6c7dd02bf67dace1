//! Auth Service Library
//!
//! Issues and validates signed access tokens bound to a principal's email,
//! and runs the login/authenticate flow on top of any [`PrincipalSource`].

pub mod client;
pub mod service;
pub mod token;

pub use client::PrincipalSource;
pub use service::{AuthService, LoginService};
pub use token::{Authenticator, Claims, IssuedToken};

#[cfg(any(test, feature = "test-utils"))]
pub use client::MockPrincipalSource;
