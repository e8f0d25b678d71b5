//! Configuration for checkperms.
//!
//! ## Layers
//! - `types`: the on-disk config file shape
//! - `loading`: file lookup and parsing
//! - `effective`: CLI + config file merged into run settings

mod effective;
mod error;
mod loading;
mod types;

pub use effective::Settings;
pub use error::ConfigError;
pub use types::Config;
