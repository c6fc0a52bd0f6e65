//! Annotation plans for bar and line charts.
//!
//! A plan lists every label with its data-space position, plus the chart
//! title. Bar geometry comes from the plotting front end as [`Bar`] patches.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use olist_common::format_numeric;

use crate::error::{ReportError, Result, ensure_same_len};

/// Label offset from the bar end, as a fraction of the x-axis maximum.
const OFFSET_FRACTION: f64 = 0.005;

/// A drawn bar: lower-left corner plus extent, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Axis view limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

/// Horizontal anchoring of a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// One label to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub align: Align,
    pub size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linespacing: Option<f64>,
}

/// Chart title placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTitle {
    pub text: String,
    pub fontsize: f64,
    /// Vertical position in axes fraction; values above 1 sit over the plot.
    pub y: f64,
}

/// Labels plus optional title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationPlan {
    pub annotations: Vec<Annotation>,
    pub title: Option<ChartTitle>,
}

impl AnnotationPlan {
    /// Label texts in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.annotations.iter().map(|a| a.text.as_str()).collect()
    }
}

/// Options for bar annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationStyle {
    /// Bars grow along x (barh) instead of y.
    pub horizontal: bool,
    /// Label font size.
    pub size: f64,
    pub title: Option<String>,
    pub title_fontsize: f64,
    pub title_y: f64,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            horizontal: false,
            size: 14.0,
            title: None,
            title_fontsize: 18.0,
            title_y: 1.02,
        }
    }
}

impl AnnotationStyle {
    #[must_use]
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    fn chart_title(&self) -> Option<ChartTitle> {
        self.title.as_ref().map(|text| ChartTitle {
            text: text.clone(),
            fontsize: self.title_fontsize,
            y: self.title_y,
        })
    }
}

fn label(text: String, x: f64, y: f64, align: Align, size: f64) -> Annotation {
    Annotation {
        text,
        x,
        y,
        align,
        size,
        color: None,
        linespacing: None,
    }
}

/// Width labels to the right of horizontal bars, vertically centred.
fn horizontal_labels(bars: &[Bar], offset: f64, size: f64) -> Vec<Annotation> {
    bars.iter()
        .map(|bar| {
            label(
                format!("{:.1}", bar.width),
                bar.x + bar.width + offset,
                bar.y + bar.height / 2.0,
                Align::Left,
                size,
            )
        })
        .collect()
}

fn vertical_labels<F>(bars: &[Bar], offset: f64, size: f64, text: F) -> Vec<Annotation>
where
    F: Fn(&Bar) -> String,
{
    bars.iter()
        .map(|bar| {
            label(
                text(bar),
                bar.x + bar.width / 2.0,
                bar.height + offset,
                Align::Center,
                size,
            )
        })
        .collect()
}

/// Percentage-and-amount labels on top of each bar.
///
/// Vertical bars read `"{pct:.1}%\n{height:.1}"` where `pct` is the bar height
/// as a share of `total`, or of the row count of `data` when `total` is
/// `None`. Horizontal bars show their width only. Labels sit half a percent
/// of the x-axis maximum away from the bar end.
///
/// # Errors
///
/// [`ReportError::ZeroTotal`] when the total is zero for vertical bars.
pub fn percentage_annotations(
    bars: &[Bar],
    data: &DataFrame,
    total: Option<f64>,
    axis: &AxisLimits,
    style: &AnnotationStyle,
) -> Result<AnnotationPlan> {
    let total = total.unwrap_or(data.height() as f64);
    let offset = axis.xmax * OFFSET_FRACTION;
    let annotations = if style.horizontal {
        horizontal_labels(bars, offset, style.size)
    } else {
        if total == 0.0 {
            return Err(ReportError::ZeroTotal);
        }
        vertical_labels(bars, offset, style.size, |bar| {
            format!("{:.1}%\n{:.1}", 100.0 * bar.height / total, bar.height)
        })
    };
    Ok(AnnotationPlan {
        annotations,
        title: style.chart_title(),
    })
}

/// Amount labels on top of (or beside) each bar.
pub fn total_annotations(bars: &[Bar], axis: &AxisLimits, style: &AnnotationStyle) -> AnnotationPlan {
    let offset = axis.xmax * OFFSET_FRACTION;
    let annotations = if style.horizontal {
        horizontal_labels(bars, offset, style.size)
    } else {
        vertical_labels(bars, offset, style.size, |bar| format!("{:.1}", bar.height))
    };
    AnnotationPlan {
        annotations,
        title: style.chart_title(),
    }
}

/// One label per line point, showing the value at `(xs[i], ys[i])`.
///
/// # Errors
///
/// [`ReportError::LengthMismatch`] unless all three slices have equal length.
pub fn line_annotations(
    values: &[f64],
    xs: &[f64],
    ys: &[f64],
    fontsize: f64,
) -> Result<Vec<Annotation>> {
    ensure_same_len("values", values.len(), "xs", xs.len())?;
    ensure_same_len("values", values.len(), "ys", ys.len())?;
    Ok(values
        .iter()
        .zip(xs.iter().zip(ys))
        .map(|(value, (x, y))| label(format_numeric(*value), *x, *y, Align::Left, fontsize))
        .collect())
}

/// What the free-text x fraction is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorMode {
    /// One slot per bar patch.
    #[default]
    Bars,
    /// Stacked bars draw two patches per slot.
    StackedBars,
    /// Line charts use the x-axis maximum.
    Line,
}

/// Styling for free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: String,
    pub fontsize: f64,
    pub linespacing: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: "#94AFC5".to_string(),
            fontsize: 16.0,
            linespacing: 1.45,
        }
    }
}

/// Place free text at `(x, y)` given as fractions of the chart extent.
///
/// The x extent is the number of bar slots (`patches`, halved for stacked
/// bars) or the x-axis maximum for lines; the y extent is the y-axis maximum.
pub fn free_text(
    text: impl Into<String>,
    x: f64,
    y: f64,
    axis: &AxisLimits,
    patches: usize,
    mode: AnchorMode,
    style: &TextStyle,
) -> Annotation {
    let x_end = match mode {
        AnchorMode::Bars => patches as f64,
        AnchorMode::StackedBars => patches as f64 / 2.0,
        AnchorMode::Line => axis.xmax,
    };
    Annotation {
        text: text.into(),
        x: x_end * x,
        y: axis.ymax * y,
        align: Align::Left,
        size: style.fontsize,
        color: Some(style.color.clone()),
        linespacing: Some(style.linespacing),
    }
}
