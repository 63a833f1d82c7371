//! PDF page-text provider.
//!
//! The scanning core treats page text as input supplied by a collaborator;
//! this module is the one place that knows how to produce it from a PDF
//! file. Nothing in the core depends on it.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("PDF parse error: {0}")]
    PdfParse(String),
}

/// Load `path` and return one text block per page, in page order.
pub fn load_pages(path: impl AsRef<Path>) -> Result<Vec<String>, ExtractError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExtractError::FileNotFound(path.to_path_buf()));
    }

    let buffer = fs::read(path).map_err(|e| ExtractError::PdfParse(e.to_string()))?;

    pdf_extract::extract_text_from_mem_by_pages(&buffer).map_err(|e| ExtractError::PdfParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_file_is_reported_as_not_found() {
        let result = load_pages("/nonexistent/path/report.pdf");
        assert!(matches!(result, Err(ExtractError::FileNotFound(_))));
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("magnitude-extract-test-not-a-pdf.pdf");
        fs::write(&path, b"this is not a pdf").unwrap();

        let result = load_pages(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ExtractError::PdfParse(_))));
    }
}
