#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{AcceptMode, RuleSet};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;

/// 執行期配置：預設值 <- 規則檔 <- 命令列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extension: String,
    pub rules: RuleSet,
    pub accept_mode: AcceptMode,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("./in"),
            output_dir: PathBuf::from("./out"),
            extension: "txt".to_string(),
            rules: RuleSet::default(),
            accept_mode: AcceptMode::default(),
        }
    }
}

impl TriageConfig {
    pub fn summary_lines(&self) -> Vec<String> {
        let mode = match self.accept_mode {
            AcceptMode::Interactive => "interactive",
            AcceptMode::Auto => "auto",
        };
        vec![
            format!("  Input: {} (*.{})", self.input_dir.display(), self.extension),
            format!("  Output: {}", self.output_dir.display()),
            format!(
                "  Lines: {}..={}",
                self.rules.min_lines, self.rules.max_lines
            ),
            format!("  Mandatory: {}", self.rules.mandatory.join(", ")),
            format!("  At least one of: {}", self.rules.at_least_one_of.join(", ")),
            format!("  Acceptance: {}", mode),
        ]
    }
}

impl Validate for TriageConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("folders.input", &self.input_dir)?;
        validation::validate_path("folders.output", &self.output_dir)?;
        validation::validate_extension("folders.extension", &self.extension)?;
        validation::validate_bounds(
            "lines.min",
            self.rules.min_lines,
            "lines.max",
            self.rules.max_lines,
        )?;
        validation::validate_non_empty_entries("rules.mandatory", &self.rules.mandatory)?;
        validation::validate_non_empty_entries(
            "rules.at_least_one_of",
            &self.rules.at_least_one_of,
        )?;
        validation::validate_distinct_dirs(&self.input_dir, &self.output_dir)?;
        Ok(())
    }
}
