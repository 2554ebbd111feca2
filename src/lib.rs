pub mod config;
pub mod error;
pub mod export;
pub mod llm;
pub mod preview;
pub mod server;
pub mod shell;

pub use error::{Error, Result};
