use serde::{Deserialize, Serialize};
use std::fmt;

/// A single table cell after type inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Numeric value of the cell.
    ///
    /// Text that parses as a number counts as numeric, matching how
    /// spreadsheet exports often store figures as strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            CellValue::Missing => None,
        }
    }

    /// Key used for equality across rows: missing equals missing, and never
    /// equals any text (including the empty string).
    pub fn dedupe_key(&self) -> String {
        match self {
            CellValue::Number(value) => format!("n:{}", value.to_bits()),
            CellValue::Text(text) => format!("t:{text}"),
            CellValue::Missing => "m".to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(value) => write!(f, "{value}"),
            CellValue::Text(text) => write!(f, "{text}"),
            CellValue::Missing => Ok(()),
        }
    }
}
