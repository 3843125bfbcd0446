pub mod app;
pub mod components;
pub mod context;

pub use app::{make_config, App};
pub use context::DirectoryContext;
