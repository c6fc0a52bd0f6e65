//! Chart decoration for Olist EDA.
//!
//! Rendering belongs to whatever plotting front end consumes these values.
//! This crate only computes what gets drawn:
//!
//! - **palette**: the named colour set used across charts
//! - **annotations**: percentage/total labels for bar charts, free text,
//!   line-point labels and titles
//! - **counts**: value counts of a categorical column as labelled bars
//! - **pie**: slice shares and percentage labels

mod annotations;
mod counts;
mod error;
mod palette;
mod pie;

pub use annotations::{
    Align, Annotation, AnnotationPlan, AnnotationStyle, AnchorMode, AxisLimits, Bar, ChartTitle,
    TextStyle, free_text, line_annotations, percentage_annotations, total_annotations,
};
pub use counts::{ValueCount, countplot_annotations, value_counts};
pub use error::{ReportError, Result};
pub use palette::Palette;
pub use pie::{PieSlice, pie_slices};
