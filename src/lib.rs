pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use app::run_once;
pub use config::{toml_config::Settings, ReminderConfig};
pub use crate::core::reminder::ReminderEngine;
pub use utils::error::{ReminderError, Result};
