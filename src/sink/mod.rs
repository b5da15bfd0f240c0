//! Consumers of a finished result set: the local JSON file and the optional backend.

pub mod backend;
pub mod json_file;

pub use backend::{BackendClient, Submission};
pub use json_file::save_results;
