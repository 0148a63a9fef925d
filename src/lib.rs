pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logger;
pub mod utils;
pub mod value;
pub mod wanderer;

pub use error::WanderError;
