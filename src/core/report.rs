//! 批次處理結果與 JSON 匯出。

use crate::domain::model::{FileOutcome, FileReport};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub copied: usize,
    pub would_copy: usize,
    pub declined: usize,
    pub rejected: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, report: FileReport) {
        self.files.push(report);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            total: self.files.len(),
            ..Default::default()
        };

        for file in &self.files {
            match file.outcome {
                FileOutcome::Copied { .. } => summary.copied += 1,
                FileOutcome::WouldCopy => summary.would_copy += 1,
                FileOutcome::Declined => summary.declined += 1,
                FileOutcome::Rejected => summary.rejected += 1,
                FileOutcome::ReadFailed { .. } | FileOutcome::CopyFailed { .. } => {
                    summary.failed += 1
                }
            }
        }

        summary
    }

    /// 是否有讀取或複製失敗
    pub fn has_failures(&self) -> bool {
        self.files.iter().any(|f| f.outcome.is_failure())
    }

    pub fn has_rejections(&self) -> bool {
        self.files
            .iter()
            .any(|f| matches!(f.outcome, FileOutcome::Rejected))
    }

    pub fn to_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Document<'a> {
            #[serde(flatten)]
            report: &'a BatchReport,
            summary: BatchSummary,
        }

        let document = Document {
            report: self,
            summary: self.summary(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        tracing::info!("📝 Batch report written to {}", path.display());
        Ok(())
    }
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::new()
    }
}
