//! mindwell-core
//!
//! Pure domain types and object key conventions. No AWS SDK dependency:
//! this is the shared vocabulary of the Mindwell system.

pub mod error;
pub mod models;
pub mod s3_keys;
