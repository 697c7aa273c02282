//! ATS matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod service;

pub use config::Config;
pub use error::{AtsMatchError, Result};
