use std::sync::Arc;

use crate::domain::entities::assignment::Assignment;
use crate::usecase::ports::decoder::{ImportError, SheetDecoder};
use crate::usecase::services::assignment_parser::{drop_blank_rows, parse_assignments};

pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

pub fn is_supported_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

pub struct ImportService {
    decoder: Arc<dyn SheetDecoder>,
}

impl ImportService {
    pub fn new(decoder: Arc<dyn SheetDecoder>) -> Self {
        Self { decoder }
    }

    pub fn import(&self, file_name: &str, bytes: &[u8]) -> Result<Vec<Assignment>, ImportError> {
        let result = self.decode_and_parse(file_name, bytes);
        match &result {
            Ok(assignments) => {
                tracing::info!(file_name, rows = assignments.len(), "imported schedule")
            }
            Err(err) => tracing::warn!(file_name, error = %err, "schedule import failed"),
        }
        result
    }

    fn decode_and_parse(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<Vec<Assignment>, ImportError> {
        if !is_supported_file(file_name) {
            return Err(ImportError::UnsupportedFileType(file_name.to_string()));
        }

        let sheet = drop_blank_rows(self.decoder.decode_first_sheet(bytes)?);
        if sheet.is_empty() {
            return Err(ImportError::EmptySheet);
        }

        parse_assignments(&sheet)
    }
}
