//! Labeled dataset loading and validation.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{CivilityError, Result};
use crate::model::{Label, LabelSet};

/// Columns every training dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "comment",
    "insult",
    "threat",
    "hate",
    "harassment",
    "love",
    "support",
];

/// One usable training row: raw comment text plus its coerced flags.
#[derive(Debug, Clone)]
pub struct TrainingRecord {
    pub comment: String,
    pub labels: LabelSet,
}

/// Load a labeled comment dataset from CSV.
///
/// Validates that every required column is present (the schema error lists
/// all missing columns at once), drops rows whose comment is empty or
/// whitespace, and coerces label cells to {0, 1}: any nonzero numeric value
/// becomes 1, anything unparsable becomes 0.
pub fn load_dataset(path: &Path) -> Result<Vec<TrainingRecord>> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| CivilityError::dataset(format!("{}: {}", path.display(), e)))?;

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|&&column| !headers.iter().any(|h| h == column))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(CivilityError::schema(format!(
            "missing required columns: {}",
            missing.join(", ")
        )));
    }

    let column_index = |name: &str| headers.iter().position(|h| h == name).unwrap();
    let comment_index = column_index("comment");
    let label_indices: Vec<usize> = Label::ALL.iter().map(|l| column_index(l.column())).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;

        let comment = row.get(comment_index).unwrap_or("").trim();
        if comment.is_empty() {
            continue;
        }

        let mut flags = [0u8; 6];
        for (flag, &index) in flags.iter_mut().zip(&label_indices) {
            *flag = coerce_flag(row.get(index).unwrap_or(""));
        }

        records.push(TrainingRecord {
            comment: comment.to_string(),
            labels: LabelSet::from_flags(flags),
        });
    }

    Ok(records)
}

/// Coerce a label cell to {0, 1}. Non-numeric values coerce to 0.
fn coerce_flag(cell: &str) -> u8 {
    match cell.trim().parse::<f64>() {
        Ok(value) if value != 0.0 => 1,
        _ => 0,
    }
}
