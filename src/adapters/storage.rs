use crate::domain::model::InputFile;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, TriageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    input_dir: PathBuf,
    output_dir: PathBuf,
    extension: String,
}

impl LocalStorage {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            extension: extension.into(),
        }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}

impl Storage for LocalStorage {
    fn list_inputs(&self) -> Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.input_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("Input folder {} does not exist", self.input_dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && self.matches_extension(&path) {
                files.push(path);
            }
        }

        // read_dir 的順序取決於檔案系統
        files.sort();
        tracing::debug!(
            "Found {} .{} files in {}",
            files.len(),
            self.extension,
            self.input_dir.display()
        );
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> Result<InputFile> {
        let bytes = fs::read(path).map_err(|source| TriageError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("{} is not valid UTF-8, decoding lossily", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(InputFile {
            path: path.to_path_buf(),
            name,
            content,
        })
    }

    fn prepare_output(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|source| TriageError::OutputDirError {
            path: self.output_dir.clone(),
            source,
        })
    }

    fn copy_to_output(&self, file: &InputFile) -> Result<PathBuf> {
        let destination = self.output_dir.join(&file.name);
        // 已存在的同名檔案會被覆蓋
        fs::copy(&file.path, &destination).map_err(|source| TriageError::CopyError {
            path: file.path.clone(),
            destination: destination.clone(),
            source,
        })?;
        Ok(destination)
    }
}
