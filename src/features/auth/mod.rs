//! Bearer-token authentication for the API.
//!
//! Tokens are issued by an external identity provider; this feature only
//! validates them and exposes the acting user to handlers. There is no
//! register/login surface here.

pub mod guards;
pub mod model;
pub mod validator;

pub use validator::JwtValidator;
