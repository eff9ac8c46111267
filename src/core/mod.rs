pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, MatchConfig};
pub use error::{ClashError, Result};
