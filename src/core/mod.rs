pub mod errors;
pub mod models;
pub mod pipeline;

pub use errors::TagCloudError;
pub use models::{CloudEntry, CloudSummary, Selection};
