//! Catalog file readers.
//!
//! Both workbook (`.xlsx`, `.xls`, `.ods`, ...) and `.csv` sources are read
//! into an intermediate [`Table`] whose first row supplies the headers, then
//! projected onto [`ProductRow`]s through a [`ColumnMapping`].

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use partscout_core::config::CatalogConfig;
use partscout_core::{format_number, ProductRow};
use tracing::debug;

use crate::error::CatalogError;

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

static EMPTY_CELL: Cell = Cell::Empty;

// =============================================================================
// Cells and tables
// =============================================================================

/// A single spreadsheet cell, reduced to what the catalog needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Text cell, or `Empty` when the text is blank.
    pub fn text(value: &str) -> Self {
        if value.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Cell rendered as text. Numeric cells such as codes or lead times
    /// stored as numbers become their shortest textual form.
    fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(format_number(*n)),
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Empty => None,
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().replace(',', ".").parse().ok(),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::String(s) => Cell::text(s),
            other => Cell::text(&other.to_string()),
        }
    }
}

/// Raw tabular contents: one header row plus data rows.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Which headers hold the four product attributes.
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub code: String,
    pub description: String,
    pub quantity: String,
    pub lead_time: String,
}

impl From<&CatalogConfig> for ColumnMapping {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            code: config.code_column.clone(),
            description: config.description_column.clone(),
            quantity: config.quantity_column.clone(),
            lead_time: config.lead_time_column.clone(),
        }
    }
}

impl Table {
    /// Build a table from a grid whose first row is the header.
    pub fn from_grid(mut grid: Vec<Vec<Cell>>) -> Result<Self, CatalogError> {
        if grid.is_empty() {
            return Err(CatalogError::MissingHeader);
        }
        let header_row = grid.remove(0);
        let headers = header_row
            .iter()
            .map(|c| c.as_text().map(|s| s.trim().to_string()).unwrap_or_default())
            .collect();
        Ok(Self {
            headers,
            rows: grid,
        })
    }

    /// Header lookup: exact match first, then case-insensitive.
    fn column_index(&self, name: &str) -> Result<usize, CatalogError> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|h| h == wanted)
            .or_else(|| {
                let wanted = wanted.to_uppercase();
                self.headers.iter().position(|h| h.to_uppercase() == wanted)
            })
            .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
    }

    /// Project the table onto product rows, keeping source order. Rows whose
    /// cells are all blank are skipped.
    pub fn into_products(self, mapping: &ColumnMapping) -> Result<Vec<ProductRow>, CatalogError> {
        let code = self.column_index(&mapping.code)?;
        let description = self.column_index(&mapping.description)?;
        let quantity = self.column_index(&mapping.quantity)?;
        let lead_time = self.column_index(&mapping.lead_time)?;

        let products = self
            .rows
            .iter()
            .filter(|row| !row.iter().all(Cell::is_empty))
            .map(|row| {
                let cell = |idx: usize| row.get(idx).unwrap_or(&EMPTY_CELL);
                ProductRow {
                    code: cell(code).as_text(),
                    description: cell(description).as_text(),
                    quantity: cell(quantity).as_number(),
                    lead_time: cell(lead_time).as_text(),
                }
            })
            .collect();
        Ok(products)
    }
}

// =============================================================================
// Readers
// =============================================================================

/// Read a catalog file into product rows.
pub fn read_catalog(
    path: &Path,
    sheet: Option<&str>,
    mapping: &ColumnMapping,
) -> Result<Vec<ProductRow>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let table = if extension == "csv" {
        read_csv(path)?
    } else if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        read_workbook(path, sheet)?
    } else {
        return Err(CatalogError::UnsupportedFormat(if extension.is_empty() {
            path.display().to_string()
        } else {
            extension
        }));
    };

    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "Catalog table read"
    );

    table.into_products(mapping)
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<Table, CatalogError> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(CatalogError::SheetNotFound(name.to_string()));
            }
            workbook.worksheet_range(name)?
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or(CatalogError::MissingHeader)??,
    };

    let grid = range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect();
    Table::from_grid(grid)
}

fn read_csv(path: &Path) -> Result<Table, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(Cell::text).collect());
    }
    Table::from_grid(grid)
}
