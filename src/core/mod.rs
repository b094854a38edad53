pub mod checks;
pub mod extract;
pub mod report;
pub mod runner;

pub use crate::domain::model::{CheckResult, FileVerdict, InputFile, RuleSet};
pub use crate::domain::ports::{Confirm, Storage};
pub use crate::utils::error::Result;
