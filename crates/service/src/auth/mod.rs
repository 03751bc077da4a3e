//! Admin auth: a single configured back-office account, argon2-verified
//! password and HS256 session tokens carried in a cookie.

pub mod domain;
pub mod errors;
pub mod service;

pub use service::AdminAuthService;
