//! CSV access for submissions and gold standards
//!
//! The usual NA spellings mean "no value". Integral numbers compare equal
//! whether they were written as `1` or `1.0`.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};

/// Key column shared by label submissions and gold standards
pub const FILE_COLUMN: &str = "File";
/// Prediction column of label submissions
pub const LABEL_COLUMN: &str = "Label";

/// Cell contents treated as a missing value
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw cell counts as missing
pub fn is_na(raw: &str) -> bool {
    NA_VALUES.contains(&raw)
}

/// A defined class or cluster label
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Interpret a raw cell, `None` for missing values
    pub fn parse(raw: &str) -> Option<Self> {
        if is_na(raw) {
            return None;
        }
        Some(Self(canonicalize(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self(canonicalize(value))
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn canonicalize(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", value as i64)
        }
        _ => raw.to_string(),
    }
}

/// One row of a `File,Label` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub file: String,
    pub label: Option<Label>,
}

/// Rows of a `File,<value>` table in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    pub rows: Vec<LabelRow>,
}

impl LabelTable {
    /// Read a label submission
    pub fn from_path(path: &Path) -> EvalResult<Self> {
        Self::from_columns(path, FILE_COLUMN, LABEL_COLUMN)
    }

    /// Read the two named columns of a table, ignoring any others
    pub fn from_columns(path: &Path, key_column: &str, value_column: &str) -> EvalResult<Self> {
        let mut reader = open(path)?;
        let headers = reader
            .headers()
            .map_err(|e| EvalError::csv(path, e))?
            .clone();
        let key_idx = column_index(&headers, key_column)
            .ok_or_else(|| EvalError::missing_column(path, key_column))?;
        let value_idx = column_index(&headers, value_column)
            .ok_or_else(|| EvalError::missing_column(path, value_column))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| EvalError::csv(path, e))?;
            rows.push(LabelRow {
                file: record.get(key_idx).unwrap_or_default().to_string(),
                label: record.get(value_idx).and_then(Label::parse),
            });
        }

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Labels in row order
    pub fn labels(&self) -> Vec<Option<Label>> {
        self.rows.iter().map(|row| row.label.clone()).collect()
    }
}

/// One row of an `Image 1,Image 2,Distance` table
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRow {
    pub first: String,
    pub second: String,
    pub distance: Option<f64>,
}

/// Read a distances submission
pub fn read_distances(path: &Path) -> EvalResult<Vec<DistanceRow>> {
    let mut reader = open(path)?;
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| EvalError::csv(path, e))?;
        let raw = record.get(2).unwrap_or_default();
        let distance = if is_na(raw) {
            None
        } else {
            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| EvalError::invalid_value(path, "Distance", raw))?;
            Some(value)
        };
        rows.push(DistanceRow {
            first: record.get(0).unwrap_or_default().to_string(),
            second: record.get(1).unwrap_or_default().to_string(),
            distance,
        });
    }

    Ok(rows)
}

/// Column names of a table, in order
pub fn read_header(path: &Path) -> EvalResult<Vec<String>> {
    let mut reader = open(path)?;
    let headers = reader.headers().map_err(|e| EvalError::csv(path, e))?;
    Ok(headers.iter().map(str::to_string).collect())
}

fn open(path: &Path) -> EvalResult<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| EvalError::io(path, e))?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_label_canonicalization() {
        assert_eq!(Label::parse("1.0"), Some(Label::from(1)));
        assert_eq!(Label::parse(" 0 "), Some(Label::from(0)));
        assert_eq!(Label::parse("sport").unwrap().as_str(), "sport");
        assert_eq!(Label::parse("1.5").unwrap().as_str(), "1.5");
        assert_eq!(Label::parse(""), None);
        assert_eq!(Label::parse("NaN"), None);
        assert_eq!(Label::parse("null"), None);
    }

    #[test]
    fn test_read_header() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.csv", "Image 1,Image 2,Distance\na,b,0.5\n");
        assert_eq!(read_header(&path).unwrap(), vec!["Image 1", "Image 2", "Distance"]);
    }

    #[test]
    fn test_label_table_keeps_missing_and_duplicates() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "t.csv", "File,Label\na.jpg,1\nb.jpg,\na.jpg,0\nc.jpg\n");
        let table = LabelTable::from_path(&path).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.rows[0].label, Some(Label::from(1)));
        assert_eq!(table.rows[1].label, None);
        assert_eq!(table.rows[2].file, "a.jpg");
        assert_eq!(table.rows[3].label, None);
    }

    #[test]
    fn test_from_columns_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "gold.csv", "File,Meme\na.jpg,1\n");
        let err = LabelTable::from_columns(&path, "File", "Event").unwrap_err();
        assert!(matches!(err, EvalError::MissingColumn { ref column, .. } if column == "Event"));
    }

    #[test]
    fn test_read_distances() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "d.csv",
            "Image 1,Image 2,Distance\na,b,0.25\na,c,\n",
        );
        let rows = read_distances(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].distance, Some(0.25));
        assert_eq!(rows[1].distance, None);
    }

    #[test]
    fn test_read_distances_rejects_text() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "d.csv", "Image 1,Image 2,Distance\na,b,far\n");
        assert!(matches!(
            read_distances(&path),
            Err(EvalError::InvalidValue { .. })
        ));
    }
}
