pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::prompt::{AutoAccept, PromptConfirm};
pub use crate::adapters::storage::LocalStorage;
pub use crate::config::TriageConfig;
pub use crate::core::report::BatchReport;
pub use crate::core::runner::{RunOptions, TriageRunner};
pub use crate::domain::model::{AcceptMode, RuleSet};
pub use crate::utils::error::{Result, TriageError};
