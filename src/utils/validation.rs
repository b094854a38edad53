use crate::utils::error::{Result, TriageError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let as_str = path.to_string_lossy();
    if as_str.is_empty() {
        return Err(TriageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: as_str.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if as_str.contains('\0') {
        return Err(TriageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: as_str.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TriageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 每個規則字串都必須有內容；空字串永遠會被「找到」
pub fn validate_non_empty_entries(field_name: &str, values: &[String]) -> Result<()> {
    for (index, value) in values.iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}]", field_name, index), value)?;
    }
    Ok(())
}

pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    validate_non_empty_string(field_name, extension)?;
    if extension.starts_with('.') {
        return Err(TriageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: format!("Drop the leading dot, e.g. '{}'", extension.trim_start_matches('.')),
        });
    }
    Ok(())
}

pub fn validate_bounds(min_field: &str, min: usize, max_field: &str, max: usize) -> Result<()> {
    if min > max {
        return Err(TriageError::InvalidConfigValueError {
            field: min_field.to_string(),
            value: min.to_string(),
            reason: format!("Value must not exceed {} ({})", max_field, max),
        });
    }
    Ok(())
}

/// 輸入與輸出目錄不可相同，否則複製時會截斷來源檔案
pub fn validate_distinct_dirs(input: &Path, output: &Path) -> Result<()> {
    let same = match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => input.components().eq(output.components()),
    };

    if same {
        return Err(TriageError::InvalidConfigValueError {
            field: "folders.output".to_string(),
            value: output.display().to_string(),
            reason: "Output directory must differ from the input directory".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("folders.input", Path::new("./in")).is_ok());
        assert!(validate_path("folders.input", Path::new("")).is_err());
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension("folders.extension", "txt").is_ok());
        assert!(validate_extension("folders.extension", ".txt").is_err());
        assert!(validate_extension("folders.extension", "  ").is_err());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds("lines.min", 100, "lines.max", 500).is_ok());
        assert!(validate_bounds("lines.min", 5, "lines.max", 5).is_ok());
        assert!(validate_bounds("lines.min", 501, "lines.max", 500).is_err());
    }

    #[test]
    fn test_validate_non_empty_entries() {
        let ok = vec!["200".to_string(), "result".to_string()];
        assert!(validate_non_empty_entries("rules.mandatory", &ok).is_ok());

        let bad = vec!["200".to_string(), " ".to_string()];
        let err = validate_non_empty_entries("rules.mandatory", &bad).unwrap_err();
        assert!(err.to_string().contains("rules.mandatory[1]"));
    }

    #[test]
    fn test_validate_distinct_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in");
        std::fs::create_dir(&input).unwrap();

        assert!(validate_distinct_dirs(&input, &temp_dir.path().join("out")).is_ok());
        assert!(validate_distinct_dirs(&input, &temp_dir.path().join("in/../in")).is_err());
        assert!(validate_distinct_dirs(Path::new("./in"), Path::new("./in")).is_err());
    }
}
