pub mod client;
pub mod error;
pub mod models;

pub use client::PersonClient;
pub use error::ApiError;
pub use models::{ConnectionReport, DeleteOutcome, Person, PersonCount, PersonPayload};
