pub mod app;
pub mod config;
pub mod controller_message;
pub mod error;
