//! mindwell-auth
//!
//! Bearer-token validation. Tokens are issued elsewhere; this crate only
//! verifies them and extracts the authenticated subject.

pub mod error;
pub mod jwt;
