pub mod compare;
pub mod config;
pub mod demo;
pub mod error;
pub mod models;

pub use error::{AppError, Result};
