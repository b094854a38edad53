use crate::domain::model::InputFile;
use crate::domain::ports::Confirm;
use crate::utils::error::{Result, TriageError};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// 檢查通過即自動接受
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoAccept;

impl Confirm for AutoAccept {
    fn confirm(&mut self, _file: &InputFile) -> Result<bool> {
        Ok(true)
    }
}

/// 逐檔詢問操作者；只有 `y`（不分大小寫）算接受
pub struct PromptConfirm<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl PromptConfirm<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, file: &InputFile) -> Result<bool> {
        write!(self.writer, "Do you want to accept {}? (y/n) ", file.name)?;
        self.writer.flush()?;

        // 以位元組讀取：非 UTF-8 的回答視為拒絕，不中斷整批
        let mut line = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut line)
            .map_err(|source| TriageError::PromptError { source })?;

        if read == 0 {
            tracing::warn!("Standard input closed, declining {}", file.name);
            writeln!(self.writer)?;
            return Ok(false);
        }

        let answer = String::from_utf8_lossy(&line);
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}
