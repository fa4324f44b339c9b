//! Spreadsheet helpers: column widths by letter, and title → column lookup.

use rust_xlsxwriter::{Workbook, XlsxError};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Last column Excel supports (`XFD`), zero-based.
const MAX_COL_INDEX: u32 = 16_383;

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("invalid column letter {0:?}")]
    InvalidColumn(String),
    #[error("can't find the column with title {0}")]
    MissingTitle(String),
    #[error("xlsx: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Zero-based index of a column letter: `A` → 0, `Z` → 25, `AA` → 26.
/// Case-insensitive.
pub fn column_index(letter: &str) -> Result<u16, SheetError> {
    let invalid = || SheetError::InvalidColumn(letter.to_string());
    if letter.is_empty() || letter.len() > 3 {
        return Err(invalid());
    }
    let mut n: u32 = 0;
    for c in letter.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(invalid());
        }
        n = n * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }
    let index = n - 1;
    if index > MAX_COL_INDEX {
        return Err(invalid());
    }
    Ok(index as u16)
}

/// Sets the width of each listed column on `sheet_name`.
///
/// ```ignore
/// set_cols_width(&mut wb, "Sheet1", &BTreeMap::from([
///     ("A".to_string(), 16.0),
///     ("C".to_string(), 40.0),
/// ]))?;
/// ```
pub fn set_cols_width(
    workbook: &mut Workbook,
    sheet_name: &str,
    widths: &BTreeMap<String, f64>,
) -> Result<(), SheetError> {
    let sheet = workbook.worksheet_from_name(sheet_name)?;
    for (col, width) in widths {
        sheet.set_column_width(column_index(col)?, *width)?;
    }
    Ok(())
}

/// Maps each of `names` to its zero-based column in `header`.
///
/// Fails on the first name (in `names` order) that no header cell matches.
/// A repeated title resolves to its last occurrence.
pub fn title_columns<H, N>(header: &[H], names: &[N]) -> Result<HashMap<String, usize>, SheetError>
where
    H: AsRef<str>,
    N: AsRef<str>,
{
    let positions: HashMap<&str, usize> = header
        .iter()
        .enumerate()
        .map(|(i, title)| (title.as_ref(), i))
        .collect();

    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            positions
                .get(name)
                .map(|&i| (name.to_string(), i))
                .ok_or_else(|| SheetError::MissingTitle(name.to_string()))
        })
        .collect()
}

/// Header row of a saved CSV report.
pub fn read_csv_header(path: &Path) -> Result<Vec<String>, SheetError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let header = reader.headers()?;
    Ok(header.iter().map(|s| s.trim_start_matches('\u{feff}').to_string()).collect())
}
