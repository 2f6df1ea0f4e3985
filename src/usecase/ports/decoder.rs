use crate::domain::entities::cell::RawSheet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Class,
    Assignment,
    Date,
}

impl ColumnKind {
    pub fn label(self) -> &'static str {
        match self {
            ColumnKind::Class => "class",
            ColumnKind::Assignment => "assignment",
            ColumnKind::Date => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    UnsupportedFileType(String),
    DecodeFailure(String),
    EmptySheet,
    HeaderNotFound,
    MissingColumn(ColumnKind),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::UnsupportedFileType(file_name) => write!(
                f,
                "Please select a valid Excel file (.xlsx or .xls), got: {file_name}"
            ),
            ImportError::DecodeFailure(message) => {
                write!(f, "Failed to process Excel file: {message}")
            }
            ImportError::EmptySheet => {
                write!(f, "The Excel file appears to be empty or contains no valid data")
            }
            ImportError::HeaderNotFound => {
                write!(f, "Could not find a header row with a \"Class\" column")
            }
            ImportError::MissingColumn(kind) => {
                write!(f, "The header row has no {} column", kind.label())
            }
        }
    }
}

impl std::error::Error for ImportError {}

/// Turns raw workbook bytes into the cells of its first worksheet.
pub trait SheetDecoder: Send + Sync {
    fn decode_first_sheet(&self, bytes: &[u8]) -> Result<RawSheet, ImportError>;
}
