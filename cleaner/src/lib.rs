// Cleaner library root

pub mod config;
pub mod data;
pub mod error;
pub mod services;

pub use error::CleanerError;
pub use services::{clean, try_clean};
