//! Pie and donut slices.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result, ensure_same_len};

/// One slice with its share of the whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub size: f64,
    /// Fraction of the total, in `[0, 1]` for non-negative sizes.
    pub share: f64,
    /// Percentage label, one decimal.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Slices for `labels`/`sizes`, coloured in order by `colors`.
///
/// `colors` may be empty (the front end picks) or exactly as long as
/// `labels`.
///
/// # Errors
///
/// [`ReportError::LengthMismatch`] for misaligned inputs and
/// [`ReportError::ZeroTotal`] when the sizes sum to zero.
pub fn pie_slices<S: AsRef<str>>(
    labels: &[S],
    sizes: &[f64],
    colors: &[S],
) -> Result<Vec<PieSlice>> {
    ensure_same_len("labels", labels.len(), "sizes", sizes.len())?;
    if !colors.is_empty() {
        ensure_same_len("labels", labels.len(), "colors", colors.len())?;
    }
    let total: f64 = sizes.iter().sum();
    if total == 0.0 {
        return Err(ReportError::ZeroTotal);
    }

    Ok(labels
        .iter()
        .zip(sizes)
        .enumerate()
        .map(|(idx, (label, size))| {
            let share = size / total;
            PieSlice {
                label: label.as_ref().to_string(),
                size: *size,
                share,
                text: format!("{:.1}%", share * 100.0),
                color: colors.get(idx).map(|c| c.as_ref().to_string()),
            }
        })
        .collect())
}
