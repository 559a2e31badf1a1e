//! Case loading and result saving.

use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::schema::{PipeCase, PipeResultFile};

/// Default input file name.
pub const DEFAULT_INPUT: &str = "InPutData.json";
/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "OutPutData.json";

/// On-disk format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// `.yaml`/`.yml` select YAML; anything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml" | "yml") => FileFormat::Yaml,
            _ => FileFormat::Json,
        }
    }
}

/// Load a case file. A missing file is reported as [`AppError::InputMissing`].
pub fn load_case(path: &Path) -> AppResult<PipeCase> {
    if !path.exists() {
        return Err(AppError::InputMissing {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| AppError::InputRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_case(&content, FileFormat::from_path(path))
}

pub fn parse_case(content: &str, format: FileFormat) -> AppResult<PipeCase> {
    let case: PipeCase = match format {
        FileFormat::Json => serde_json::from_str(content)?,
        FileFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(case)
}

pub fn render_result(
    result: &PipeResultFile,
    format: FileFormat,
    pretty: bool,
) -> AppResult<String> {
    let content = match format {
        FileFormat::Json if pretty => serde_json::to_string_pretty(result)
            .map_err(|e| AppError::Serialize(e.to_string()))?,
        FileFormat::Json => {
            serde_json::to_string(result).map_err(|e| AppError::Serialize(e.to_string()))?
        }
        FileFormat::Yaml => {
            serde_yaml::to_string(result).map_err(|e| AppError::Serialize(e.to_string()))?
        }
    };
    Ok(content)
}

/// Save a result file, format chosen from the extension.
pub fn save_result(path: &Path, result: &PipeResultFile, pretty: bool) -> AppResult<()> {
    let content = render_result(result, FileFormat::from_path(path), pretty)?;

    std::fs::write(path, content).map_err(|e| AppError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a.YAML")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.yml")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("InPutData")), FileFormat::Json);
    }

    #[test]
    fn missing_file_reported_as_missing_input() {
        let path = PathBuf::from("definitely/not/here/InPutData.json");
        let err = load_case(&path).unwrap_err();
        assert!(matches!(err, AppError::InputMissing { .. }));
    }

    #[test]
    fn malformed_content_is_parse_error() {
        let err = parse_case("{not json", FileFormat::Json).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn pretty_json_spans_lines() {
        let result = PipeResultFile {
            outlet_pressure: 1.0,
            velocity: 2.0,
            reynolds: 3.0,
            profile: None,
        };
        let compact = render_result(&result, FileFormat::Json, false).unwrap();
        let pretty = render_result(&result, FileFormat::Json, true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));

        let yaml = render_result(&result, FileFormat::Yaml, false).unwrap();
        assert!(yaml.contains("POut: 1.0"));
    }
}
