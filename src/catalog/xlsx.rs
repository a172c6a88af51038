//! Spreadsheet catalog loader
//!
//! Reads the food table from an Excel workbook: one header row, then data
//! rows of (name, reference weight, calories, protein, fat, carbs).

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use super::{CatalogError, CatalogResult, CatalogRow, FoodCatalog};

/// Number of numeric columns expected after the name
const NUMERIC_COLUMNS: usize = 5;

/// Load a food catalog from the first sheet of an .xlsx workbook
///
/// Fails when the file is missing or unreadable, the workbook has no
/// sheets, or a data row does not carry a name plus five numeric fields.
/// Rows that are entirely blank are skipped.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> CatalogResult<FoodCatalog> {
    let mut workbook: Xlsx<_> = open_workbook(path.as_ref())?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(CatalogError::NoSheet)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = Vec::new();
    for (idx, row) in range.rows().enumerate() {
        // First row is the header
        if idx == 0 {
            continue;
        }
        if row.iter().all(is_blank) {
            continue;
        }

        rows.push(parse_row(idx + 1, row)?);
    }

    let catalog = FoodCatalog::from_rows(rows)?;
    tracing::info!(
        "loaded {} foods from {}",
        catalog.len(),
        path.as_ref().display()
    );
    Ok(catalog)
}

fn parse_row(row_number: usize, row: &[Data]) -> CatalogResult<CatalogRow> {
    let name = match row.first() {
        Some(Data::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => {
            return Err(CatalogError::MalformedRow {
                row: row_number,
                reason: "missing food name".to_string(),
            })
        }
    };

    let mut values = [0.0; NUMERIC_COLUMNS];
    for (i, slot) in values.iter_mut().enumerate() {
        let cell = row.get(i + 1).unwrap_or(&Data::Empty);
        *slot = numeric_cell(cell).ok_or_else(|| CatalogError::MalformedRow {
            row: row_number,
            reason: format!("column {} is not numeric", i + 2),
        })?;
    }

    let [reference_weight, calories, protein, fat, carbs] = values;
    Ok(CatalogRow {
        name,
        reference_weight,
        calories,
        protein,
        fat,
        carbs,
    })
}

/// A cell that contributes nothing to a row
fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Numeric cells may arrive as floats, ints or numeric text
fn numeric_cell(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
