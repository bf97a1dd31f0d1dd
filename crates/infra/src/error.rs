use std::path::PathBuf;

use thiserror::Error;

/// Failures of the file-backed adapters.
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read spreadsheet: {0}")]
    SpreadsheetRead(#[from] calamine::Error),

    #[error("spreadsheet '{}' has no worksheet", .0.display())]
    NoWorksheet(PathBuf),

    #[error("{0}")]
    SpreadsheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("invalid relationship data: {0}")]
    Json(#[from] serde_json::Error),

    /// Client-supplied export rows did not have the expected shape.
    #[error("{0}")]
    MalformedExport(String),
}

impl InfraError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
