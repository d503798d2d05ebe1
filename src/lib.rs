pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod files;
pub mod git;
pub mod hosting;
pub mod notes;
pub mod output;
pub mod resolver;
pub mod scanner;
pub mod ui;

pub use error::{DrafterError, Result};
