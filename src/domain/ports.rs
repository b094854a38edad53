use crate::domain::model::InputFile;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// 列出待檢查的檔案，依檔名排序
    fn list_inputs(&self) -> Result<Vec<PathBuf>>;
    fn read_file(&self, path: &Path) -> Result<InputFile>;
    /// 建立輸出目錄（若不存在）
    fn prepare_output(&self) -> Result<()>;
    fn copy_to_output(&self, file: &InputFile) -> Result<PathBuf>;
}

/// 檢查通過後決定是否接受檔案
pub trait Confirm {
    fn confirm(&mut self, file: &InputFile) -> Result<bool>;
}

impl<C: Confirm + ?Sized> Confirm for &mut C {
    fn confirm(&mut self, file: &InputFile) -> Result<bool> {
        (**self).confirm(file)
    }
}
