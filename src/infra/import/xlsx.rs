use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::entities::cell::{CellValue, RawSheet};
use crate::usecase::ports::decoder::{ImportError, SheetDecoder};
use crate::usecase::services::assignment_parser::serial_to_date;

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

pub fn cell_from_data(cell: &Data) -> CellValue {
    match cell {
        Data::String(v) => CellValue::Text(v.clone()),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(v) => CellValue::Text(v.to_string()),
        Data::DateTime(v) => {
            let serial = v.as_f64();
            serial_to_date(serial)
                .map(CellValue::Date)
                .unwrap_or(CellValue::Number(serial))
        }
        Data::DateTimeIso(v) => parse_iso_date(v)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(v.clone())),
        Data::DurationIso(v) => CellValue::Text(v.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}

/// Reads `.xlsx` and `.xls` workbooks from memory with calamine.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalamineDecoder;

impl SheetDecoder for CalamineDecoder {
    fn decode_first_sheet(&self, bytes: &[u8]) -> Result<RawSheet, ImportError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|err| ImportError::DecodeFailure(err.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ImportError::DecodeFailure("workbook has no worksheets".to_string()))?
            .map_err(|err| ImportError::DecodeFailure(err.to_string()))?;

        Ok(range
            .rows()
            .map(|row| row.iter().map(cell_from_data).collect())
            .collect())
    }
}
