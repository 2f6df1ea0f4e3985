use chrono::NaiveDate;

/// A single decoded spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Empty,
}

/// Rows of the first worksheet. Rows may have different lengths.
pub type RawSheet = Vec<Vec<CellValue>>;

impl CellValue {
    #[allow(dead_code)]
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Blank cells and empty strings both count as missing data.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(v) => v.is_empty(),
            CellValue::Number(_) | CellValue::Date(_) => false,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(v) => v.clone(),
            CellValue::Number(v) => v.to_string(),
            CellValue::Date(v) => v.format("%Y-%m-%d").to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

pub fn cell_at(row: &[CellValue], idx: usize) -> &CellValue {
    row.get(idx).unwrap_or(&EMPTY_CELL)
}

pub fn is_blank_row(row: &[CellValue]) -> bool {
    row.iter().all(CellValue::is_blank)
}
