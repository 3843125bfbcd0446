// Library exports for integration tests and reusable components

pub mod api;
pub mod config;
pub mod form;
pub mod state;

#[doc(hidden)]
pub mod ui;
