use crate::config::TriageConfig;
use crate::domain::model::AcceptMode;
use crate::utils::error::{Result, TriageError};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// 規則檔；所有區段與欄位皆可省略
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub folders: FoldersConfig,
    #[serde(default)]
    pub lines: LinesConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub acceptance: AcceptanceConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FoldersConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinesConfig {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    pub mandatory: Option<Vec<String>>,
    pub at_least_one_of: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AcceptanceConfig {
    pub mode: Option<AcceptMode>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TriageError::ConfigValidationError {
                field: path.display().to_string(),
                message: format!("cannot read rules file: {}", e),
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TriageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 覆蓋到既有配置上，只改有設定的欄位
    pub fn apply_to(self, config: &mut TriageConfig) {
        if let Some(input) = self.folders.input {
            config.input_dir = input;
        }
        if let Some(output) = self.folders.output {
            config.output_dir = output;
        }
        if let Some(extension) = self.folders.extension {
            config.extension = extension;
        }
        if let Some(min) = self.lines.min {
            config.rules.min_lines = min;
        }
        if let Some(max) = self.lines.max {
            config.rules.max_lines = max;
        }
        if let Some(mandatory) = self.rules.mandatory {
            config.rules.mandatory = mandatory;
        }
        if let Some(alternatives) = self.rules.at_least_one_of {
            config.rules.at_least_one_of = alternatives;
        }
        if let Some(mode) = self.acceptance.mode {
            config.accept_mode = mode;
        }
    }
}
