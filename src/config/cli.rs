use crate::config::toml_config::TomlConfig;
use crate::config::TriageConfig;
use crate::domain::model::AcceptMode;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "json-triage")]
#[command(about = "Validate JSON API-response logs and copy the accepted ones")]
pub struct CliConfig {
    /// Path to a TOML rules file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Folder with the files to check [default: ./in]
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Folder accepted files are copied to [default: ./out]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Extension of the files to check, without the dot [default: txt]
    #[arg(long)]
    pub extension: Option<String>,

    #[arg(long)]
    pub min_lines: Option<usize>,

    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Strings that must all be present (comma separated, case-insensitive)
    #[arg(long, value_delimiter = ',')]
    pub mandatory: Option<Vec<String>>,

    /// Strings of which at least one must be present (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub one_of: Option<Vec<String>>,

    /// Ask before copying each OK file, or copy automatically
    #[arg(long, value_enum)]
    pub mode: Option<AcceptMode>,

    /// Check and report only; never prompt or copy
    #[arg(long)]
    pub dry_run: bool,

    /// Print the extracted payload before its checks
    #[arg(long)]
    pub show_payload: bool,

    /// Write a JSON batch report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exit with code 2 when any file was rejected
    #[arg(long)]
    pub fail_on_reject: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// 組出最終配置：預設值 <- 規則檔 <- 命令列參數
    pub fn resolve(&self) -> Result<TriageConfig> {
        let mut config = TriageConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading rules from: {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(input) = &self.input {
            config.input_dir = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }
        if let Some(min) = self.min_lines {
            config.rules.min_lines = min;
        }
        if let Some(max) = self.max_lines {
            config.rules.max_lines = max;
        }
        if let Some(mandatory) = &self.mandatory {
            config.rules.mandatory = mandatory.clone();
        }
        if let Some(alternatives) = &self.one_of {
            config.rules.at_least_one_of = alternatives.clone();
        }
        if let Some(mode) = self.mode {
            config.accept_mode = mode;
        }

        Ok(config)
    }
}
