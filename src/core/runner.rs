use crate::core::checks::run_checks;
use crate::core::extract::extract_payload;
use crate::core::report::BatchReport;
use crate::domain::model::{FileOutcome, FileReport, FileVerdict, InputFile, RuleSet};
use crate::domain::ports::{Confirm, Storage};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

const SEPARATOR: &str = "**********************************************";

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// 只檢查不複製，也不詢問
    pub dry_run: bool,
    /// 檢查前先印出擷取到的內容
    pub show_payload: bool,
}

pub struct TriageRunner<S: Storage, C: Confirm> {
    storage: S,
    confirm: C,
    rules: RuleSet,
    options: RunOptions,
}

impl<S: Storage, C: Confirm> TriageRunner<S, C> {
    pub fn new(storage: S, confirm: C, rules: RuleSet) -> Self {
        Self {
            storage,
            confirm,
            rules,
            options: RunOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// 依序處理輸入目錄中的每個檔案，報告寫到 `out`
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<BatchReport> {
        let mut report = BatchReport::new();

        if !self.options.dry_run {
            self.storage.prepare_output()?;
        }

        let inputs = self.storage.list_inputs()?;
        if inputs.is_empty() {
            tracing::info!("No input files found");
            writeln!(out, "No files to check in the input folder.")?;
            report.finish();
            return Ok(report);
        }

        let total = inputs.len();
        tracing::info!("🔍 {} files to check", total);
        writeln!(out, "{} files to check.", total)?;

        for (index, path) in inputs.iter().enumerate() {
            let file_report = self.process(index + 1, total, path, out)?;
            report.push(file_report);
        }

        report.finish();
        let summary = report.summary();
        writeln!(out)?;
        write!(
            out,
            "Summary: {} files, {} copied, {} declined, {} rejected, {} failed",
            summary.total, summary.copied, summary.declined, summary.rejected, summary.failed
        )?;
        if self.options.dry_run {
            write!(out, ", {} would be copied (dry run)", summary.would_copy)?;
        }
        writeln!(out)?;
        out.flush()?;

        tracing::info!(
            copied = summary.copied,
            declined = summary.declined,
            rejected = summary.rejected,
            failed = summary.failed,
            "✅ Batch finished"
        );
        Ok(report)
    }

    fn process<W: Write>(
        &mut self,
        index: usize,
        total: usize,
        path: &Path,
        out: &mut W,
    ) -> Result<FileReport> {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        writeln!(out)?;
        writeln!(out, "Checking the file {} of {}: {}", index, total, display_name)?;

        let file = match self.storage.read_file(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::error!("❌ {}", e);
                writeln!(out, "  NOK  Read: {}", e)?;
                writeln!(out, "File {} skipped!", display_name)?;
                return Ok(FileReport {
                    file: display_name,
                    outcome: FileOutcome::ReadFailed {
                        error: e.to_string(),
                    },
                    checks: vec![],
                });
            }
        };

        let payload = extract_payload(&file.content);
        if let Some(reason) = payload.fallback {
            tracing::warn!("{}: {}, checking the whole content", file.name, reason);
            writeln!(out, "  {}. Checking the whole content.", reason)?;
        }

        if self.options.show_payload {
            writeln!(out, "{}", SEPARATOR)?;
            writeln!(out, "{}", payload.text)?;
            writeln!(out, "{}", SEPARATOR)?;
        }

        let verdict = run_checks(&self.rules, payload.text);
        write_verdict(out, &verdict)?;

        let outcome = self.decide(&file, &verdict, out)?;
        Ok(FileReport {
            file: file.name,
            outcome,
            checks: verdict.checks,
        })
    }

    fn decide<W: Write>(
        &mut self,
        file: &InputFile,
        verdict: &FileVerdict,
        out: &mut W,
    ) -> Result<FileOutcome> {
        if !verdict.is_ok() {
            let failed: Vec<String> = verdict.failures().map(|c| c.rule.to_string()).collect();
            tracing::warn!("{} rejected: {}", file.name, failed.join(", "));
            writeln!(out, "***** File has errors!")?;
            writeln!(out, "File {} skipped!", file.name)?;
            return Ok(FileOutcome::Rejected);
        }

        writeln!(out, "***** File is OK!")?;

        if self.options.dry_run {
            writeln!(out, "File {} would be copied (dry run).", file.name)?;
            return Ok(FileOutcome::WouldCopy);
        }

        // 詢問前先把報告送出，避免提示出現在檢查結果之前
        out.flush()?;
        if !self.confirm.confirm(file)? {
            tracing::info!("{} declined", file.name);
            writeln!(out, "File {} copying declined!", file.name)?;
            return Ok(FileOutcome::Declined);
        }

        match self.storage.copy_to_output(file) {
            Ok(destination) => {
                tracing::info!("📁 {} copied to {}", file.name, destination.display());
                writeln!(out, "File {} copied to output directory!", file.name)?;
                Ok(FileOutcome::Copied { destination })
            }
            Err(e) => {
                tracing::error!("❌ {}", e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                writeln!(out, "  NOK  Copy: {}", e)?;
                Ok(FileOutcome::CopyFailed {
                    error: e.to_string(),
                })
            }
        }
    }
}

fn write_verdict<W: Write>(out: &mut W, verdict: &FileVerdict) -> Result<()> {
    for check in &verdict.checks {
        let status = if check.passed { "OK " } else { "NOK" };
        writeln!(out, "  {}  {}: {}", status, check.rule, check.detail)?;
    }
    Ok(())
}
