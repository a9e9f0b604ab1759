pub mod config;
pub mod engine;
pub mod error;
pub mod inference;
pub mod server;
pub mod service;

pub use error::{Error, Result};
