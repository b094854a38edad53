use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// 從輸入目錄讀入的檔案，讀入後不再變動
#[derive(Debug, Clone)]
pub struct InputFile {
    pub path: PathBuf,
    pub name: String,
    pub content: String,
}

/// 驗證規則集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub min_lines: usize,
    pub max_lines: usize,
    pub mandatory: Vec<String>,
    pub at_least_one_of: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_lines: 100,
            max_lines: 500,
            mandatory: [
                "200",
                "400",
                "/greet",
                "precondition",
                "missing or invalid parameter: name",
                "action",
                "result",
                "localhost:8085",
                "character",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            at_least_one_of: ["character", "edge", "corner"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// 檢查通過後是否需要人工確認
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum AcceptMode {
    #[default]
    Interactive,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    JsonSyntax,
    LineCount,
    Mandatory,
    AtLeastOneOf,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rule::JsonSyntax => "JSON mapping",
            Rule::LineCount => "Line count",
            Rule::Mandatory => "Mandatory strings",
            Rule::AtLeastOneOf => "At least one of",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub rule: Rule,
    pub passed: bool,
    /// 行數偏差，正數表示超過上限，負數表示低於下限
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deviation: Option<i64>,
    pub detail: String,
}

impl CheckResult {
    pub fn pass(rule: Rule, detail: impl Into<String>) -> Self {
        Self {
            rule,
            passed: true,
            deviation: None,
            detail: detail.into(),
        }
    }

    pub fn fail(rule: Rule, detail: impl Into<String>) -> Self {
        Self {
            rule,
            passed: false,
            deviation: None,
            detail: detail.into(),
        }
    }

    pub fn with_deviation(mut self, deviation: i64) -> Self {
        self.deviation = Some(deviation);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileVerdict {
    pub checks: Vec<CheckResult>,
}

impl FileVerdict {
    pub fn new(checks: Vec<CheckResult>) -> Self {
        Self { checks }
    }

    pub fn is_ok(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Copied { destination: PathBuf },
    Declined,
    Rejected,
    /// 乾跑模式下檢查通過，但不會複製
    WouldCopy,
    ReadFailed { error: String },
    CopyFailed { error: String },
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            FileOutcome::ReadFailed { .. } | FileOutcome::CopyFailed { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: String,
    pub outcome: FileOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<CheckResult>,
}
