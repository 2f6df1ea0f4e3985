use chrono::{DateTime, NaiveDate};

use crate::domain::entities::assignment::Assignment;
use crate::domain::entities::cell::{cell_at, is_blank_row, CellValue, RawSheet};
use crate::usecase::ports::decoder::{ColumnKind, ImportError};

/// Days between the spreadsheet epoch (1899-12-30) and 1970-01-01.
const SERIAL_UNIX_EPOCH_OFFSET_DAYS: f64 = 25569.0;
const SECONDS_PER_DAY: f64 = 86400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub class: usize,
    pub assignment: usize,
    pub date: usize,
}

pub fn drop_blank_rows(sheet: RawSheet) -> RawSheet {
    sheet.into_iter().filter(|row| !is_blank_row(row)).collect()
}

fn lowered(cell: &CellValue) -> String {
    cell.as_text().to_lowercase()
}

fn find_column(header: &[CellValue], needles: &[&str]) -> Option<usize> {
    header.iter().position(|cell| {
        let text = lowered(cell);
        needles.iter().any(|needle| text.contains(needle))
    })
}

pub fn locate_header_row(sheet: &[Vec<CellValue>]) -> Result<usize, ImportError> {
    sheet
        .iter()
        .position(|row| row.iter().any(|cell| lowered(cell).contains("class")))
        .ok_or(ImportError::HeaderNotFound)
}

pub fn map_columns(header: &[CellValue]) -> Result<ColumnMap, ImportError> {
    let class =
        find_column(header, &["class"]).ok_or(ImportError::MissingColumn(ColumnKind::Class))?;
    let assignment = find_column(header, &["assignment"])
        .ok_or(ImportError::MissingColumn(ColumnKind::Assignment))?;
    let date = find_column(header, &["date", "due"])
        .ok_or(ImportError::MissingColumn(ColumnKind::Date))?;

    Ok(ColumnMap {
        class,
        assignment,
        date,
    })
}

pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Converts a spreadsheet day serial to a calendar date (UTC).
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let seconds = ((serial - SERIAL_UNIX_EPOCH_OFFSET_DAYS) * SECONDS_PER_DAY).floor();
    if seconds < i64::MIN as f64 || seconds > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(seconds as i64, 0).map(|dt| dt.date_naive())
}

pub fn normalize_date(cell: &CellValue) -> String {
    match cell {
        CellValue::Date(date) => format_long_date(*date),
        CellValue::Number(serial) => serial_to_date(*serial)
            .map(format_long_date)
            .unwrap_or_else(|| cell.as_text()),
        CellValue::Text(_) | CellValue::Empty => cell.as_text(),
    }
}

pub fn build_assignments(
    sheet: &[Vec<CellValue>],
    header_idx: usize,
    columns: ColumnMap,
) -> Vec<Assignment> {
    sheet
        .iter()
        .skip(header_idx + 1)
        .filter_map(|row| {
            let class = cell_at(row, columns.class);
            let assignment = cell_at(row, columns.assignment);
            let date = cell_at(row, columns.date);
            if class.is_blank() || assignment.is_blank() || date.is_blank() {
                return None;
            }
            Some(Assignment::new(
                class.as_text(),
                assignment.as_text(),
                normalize_date(date),
            ))
        })
        .collect()
}

/// Header lookup, column mapping and row conversion over an already row-filtered sheet.
pub fn parse_assignments(sheet: &[Vec<CellValue>]) -> Result<Vec<Assignment>, ImportError> {
    let header_idx = locate_header_row(sheet)?;
    let columns = map_columns(&sheet[header_idx])?;
    tracing::debug!(header_idx, ?columns, "located schedule header");
    Ok(build_assignments(sheet, header_idx, columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::assignment::Priority;

    fn text_row(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::text(*v)).collect()
    }

    #[test]
    fn header_is_first_row_mentioning_class() {
        let sheet = vec![
            text_row(&["IB Schedule 2025"]),
            text_row(&["Term", "Subject"]),
            text_row(&["", "CLASS NAME", "Assignment", "Due"]),
            text_row(&["Class", "Assignment", "Date"]),
        ];
        assert_eq!(locate_header_row(&sheet), Ok(2));
    }

    #[test]
    fn sheet_without_class_cell_has_no_header() {
        let sheet = vec![
            text_row(&["Subject", "Assignment", "Date"]),
            vec![CellValue::Number(1.0), CellValue::Empty],
        ];
        assert_eq!(locate_header_row(&sheet), Err(ImportError::HeaderNotFound));
    }

    #[test]
    fn date_column_accepts_due() {
        let header = text_row(&["Assignment", "Due", "Class"]);
        assert_eq!(
            map_columns(&header),
            Ok(ColumnMap {
                class: 2,
                assignment: 0,
                date: 1,
            })
        );
    }

    #[test]
    fn date_column_takes_first_cell_matching_either_word() {
        let header = text_row(&["Class", "Assignment", "Due By", "Date Set"]);
        assert_eq!(map_columns(&header).map(|c| c.date), Ok(2));
    }

    #[test]
    fn missing_columns_are_named() {
        assert_eq!(
            map_columns(&text_row(&["Class", "Assignment", "Notes"])),
            Err(ImportError::MissingColumn(ColumnKind::Date))
        );
        assert_eq!(
            map_columns(&text_row(&["Class", "Task", "Date"])),
            Err(ImportError::MissingColumn(ColumnKind::Assignment))
        );
    }

    #[test]
    fn serial_45000_is_march_15_2023() {
        assert_eq!(normalize_date(&CellValue::Number(45000.0)), "March 15, 2023");
        assert_eq!(normalize_date(&CellValue::Number(45000.75)), "March 15, 2023");
    }

    #[test]
    fn serial_epoch_day_zero_is_december_30_1899() {
        assert_eq!(normalize_date(&CellValue::Number(0.0)), "December 30, 1899");
    }

    #[test]
    fn out_of_range_serial_keeps_text() {
        assert_eq!(normalize_date(&CellValue::Number(1e300)), 1e300_f64.to_string());
    }

    #[test]
    fn date_and_text_cells_normalize() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        assert_eq!(normalize_date(&CellValue::Date(date)), "March 5, 2024");
        assert_eq!(normalize_date(&CellValue::text("next Friday")), "next Friday");
    }

    #[test]
    fn rows_missing_required_cells_are_skipped() {
        let sheet = vec![
            text_row(&["Class", "Assignment", "Due Date"]),
            text_row(&["Physics", "Lab Report", "February 28, 2024"]),
            text_row(&["History", "", "March 1, 2024"]),
            text_row(&["Biology", "Field Trip"]),
            vec![
                CellValue::text("Chemistry"),
                CellValue::text("Titration"),
                CellValue::Number(45000.0),
            ],
        ];

        let assignments = parse_assignments(&sheet).expect("parse should succeed");

        assert_eq!(
            assignments,
            vec![
                Assignment::new("Physics", "Lab Report", "February 28, 2024"),
                Assignment::new("Chemistry", "Titration", "March 15, 2023"),
            ]
        );
        assert!(assignments.iter().all(|a| a.priority == Priority::Medium));
    }

    #[test]
    fn rows_above_header_are_ignored() {
        let sheet = vec![
            text_row(&["Physics", "Ignored", "Assignment", "Date"]),
            text_row(&["Class", "Assignment", "Date"]),
            text_row(&["History", "Essay", "May 2, 2025"]),
        ];
        let assignments = parse_assignments(&sheet).expect("parse should succeed");
        assert_eq!(assignments, vec![Assignment::new("History", "Essay", "May 2, 2025")]);
    }

    #[test]
    fn drop_blank_rows_keeps_order() {
        let sheet = vec![
            vec![CellValue::Empty, CellValue::text("")],
            text_row(&["Class"]),
            vec![],
            text_row(&["Physics"]),
        ];
        assert_eq!(
            drop_blank_rows(sheet),
            vec![text_row(&["Class"]), text_row(&["Physics"])]
        );
    }
}
