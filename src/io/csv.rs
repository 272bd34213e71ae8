//! Minimal CSV table handling for batch labelling
//!
//! Comma-separated values with a mandatory header row. Feature cells must be
//! numeric; columns are looked up **by name**, so extra columns are harmless
//! (they are carried through to the output untouched) while a missing
//! required column fails before any scaling happens. Quoted fields and
//! embedded commas are not supported; the batch contract is numeric tables.

use crate::error::PredictError;

/// Parsed CSV table with named columns
///
/// Cells are kept as raw strings so non-feature columns survive a
/// parse → label → render round trip unchanged.
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parse CSV text
    ///
    /// # Errors
    ///
    /// Returns `PredictError::InvalidInput` for an empty input and
    /// `PredictError::ParseError` for rows whose cell count differs from the
    /// header.
    pub fn parse(text: &str) -> Result<Self, PredictError> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let header_line = lines.next().ok_or_else(|| {
            PredictError::InvalidInput("Empty table: no header row".to_string())
        })?;
        let headers: Vec<String> = header_line
            .split(',')
            .map(|cell| cell.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (i, line) in lines.enumerate() {
            let cells: Vec<String> = line.split(',').map(|cell| cell.trim().to_string()).collect();
            if cells.len() != headers.len() {
                return Err(PredictError::ParseError(format!(
                    "Row {} has {} cells, header has {}",
                    i + 1,
                    cells.len(),
                    headers.len()
                )));
            }
            rows.push(cells);
        }

        Ok(Self { headers, rows })
    }

    /// Column headers, in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Extract the named columns as numeric rows, in the order given
    ///
    /// This is the batch variant's feature-selection step: every requested
    /// name must be present, and the lookup happens before any cell is
    /// parsed, so a missing column fails before scaling is ever attempted.
    ///
    /// # Errors
    ///
    /// Returns `PredictError::MissingColumn` if a requested column is absent
    /// and `PredictError::ParseError` for non-numeric cells.
    pub fn select_numeric(&self, names: &[&str]) -> Result<Vec<Vec<f32>>, PredictError> {
        let indices: Vec<usize> = names
            .iter()
            .map(|name| {
                self.column_index(name).ok_or_else(|| {
                    PredictError::MissingColumn(format!(
                        "Required column '{}' not found (table has: {})",
                        name,
                        self.headers.join(", ")
                    ))
                })
            })
            .collect::<Result<_, _>>()?;

        self.rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                indices
                    .iter()
                    .map(|&c| {
                        row[c].parse::<f32>().map_err(|_| {
                            PredictError::ParseError(format!(
                                "Row {}, column '{}': not numeric: '{}'",
                                r + 1,
                                self.headers[c],
                                row[c]
                            ))
                        })
                    })
                    .collect()
            })
            .collect()
    }

    /// Copy of the table with one more column appended
    ///
    /// # Errors
    ///
    /// Returns `PredictError::InvalidInput` if the value count does not
    /// match the row count.
    pub fn with_column(&self, name: &str, values: Vec<String>) -> Result<Self, PredictError> {
        if values.len() != self.rows.len() {
            return Err(PredictError::InvalidInput(format!(
                "{} values for {} rows",
                values.len(),
                self.rows.len()
            )));
        }

        let mut headers = self.headers.clone();
        headers.push(name.to_string());

        let rows = self
            .rows
            .iter()
            .zip(values)
            .map(|(row, value)| {
                let mut row = row.clone();
                row.push(value);
                row
            })
            .collect();

        Ok(Self { headers, rows })
    }

    /// Render the table back to CSV text, trailing newline included
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.headers.join(","));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }
}
