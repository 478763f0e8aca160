//! Application configuration module
//!
//! Environment-driven settings plus the fixed constants of the token lifecycle.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
