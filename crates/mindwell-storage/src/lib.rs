//! mindwell-storage
//!
//! Assessment persistence. `AssessmentStore` is the seam the API depends on;
//! `S3AssessmentStore` keeps one JSON object per record, `MemoryAssessmentStore`
//! keeps records in process for tests and local runs.

pub mod client;
pub mod documents;
pub mod error;
pub mod memory;
pub mod objects;
pub mod store;

pub use memory::MemoryAssessmentStore;
pub use store::{AssessmentStore, S3AssessmentStore};
