//! Calendar features derived from a timestamp column.
//!
//! [`extract_from_date`] expands one timestamp column into eleven derived
//! columns. Column names are `{prefix}_{field}`, except the day-time bucket
//! which is `{prefix}day_time` (no underscore); downstream notebooks select
//! columns by these exact names.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use polars::prelude::{DataFrame, NamedFrom, Series};
use serde::{Deserialize, Serialize};
use tracing::debug;

use olist_common::string_values;

use crate::datetime::{format_timestamp, parse_timestamp};
use crate::error::{Result, TransformError};

/// A derived calendar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeField {
    Year,
    Month,
    MonthName,
    YearMonth,
    Date,
    Week,
    Day,
    DayOfWeek,
    DayName,
    Hour,
    DayTime,
}

impl TimeField {
    /// All fields, in the order their columns are appended.
    pub const ALL: [TimeField; 11] = [
        TimeField::Year,
        TimeField::Month,
        TimeField::MonthName,
        TimeField::YearMonth,
        TimeField::Date,
        TimeField::Week,
        TimeField::Day,
        TimeField::DayOfWeek,
        TimeField::DayName,
        TimeField::Hour,
        TimeField::DayTime,
    ];

    /// Field name as it appears in column names.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeField::Year => "year",
            TimeField::Month => "month",
            TimeField::MonthName => "month_name",
            TimeField::YearMonth => "year_month",
            TimeField::Date => "date",
            TimeField::Week => "week",
            TimeField::Day => "day",
            TimeField::DayOfWeek => "dayofweek",
            TimeField::DayName => "day_name",
            TimeField::Hour => "hour",
            TimeField::DayTime => "day_time",
        }
    }

    /// Output column name for `prefix`.
    ///
    /// ```
    /// use olist_transform::TimeField;
    ///
    /// assert_eq!(TimeField::Hour.column_name("order_purchase"), "order_purchase_hour");
    /// assert_eq!(TimeField::DayTime.column_name("order_purchase"), "order_purchaseday_time");
    /// ```
    pub fn column_name(self, prefix: &str) -> String {
        match self {
            TimeField::DayTime => format!("{prefix}{}", self.as_str()),
            _ => format!("{prefix}_{}", self.as_str()),
        }
    }
}

/// Part of the day an hour falls in.
///
/// Bins are left-open: (0, 12] morning, (12, 18] afternoon, (18, 23] night.
/// Hour 0 belongs to no bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayTime {
    Morning,
    Afternoon,
    Night,
}

impl DayTime {
    /// Bucket an hour of day. Returns `None` for hour 0 and anything past 23.
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            1..=12 => Some(DayTime::Morning),
            13..=18 => Some(DayTime::Afternoon),
            19..=23 => Some(DayTime::Night),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayTime::Morning => "morning",
            DayTime::Afternoon => "afternoon",
            DayTime::Night => "night",
        }
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar features of a single timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFeatures {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    /// `YYYYMM`.
    pub year_month: String,
    /// `YYYYMMDD`.
    pub date: String,
    /// ISO-8601 week number.
    pub week: u32,
    pub day: u32,
    /// 0 = Monday .. 6 = Sunday.
    pub dayofweek: u32,
    pub day_name: String,
    pub hour: u32,
    pub day_time: Option<DayTime>,
}

impl TimeFeatures {
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        let hour = dt.hour();
        Self {
            year: dt.year(),
            month: dt.month(),
            month_name: dt.format("%B").to_string(),
            year_month: dt.format("%Y%m").to_string(),
            date: dt.format("%Y%m%d").to_string(),
            week: dt.iso_week().week(),
            day: dt.day(),
            dayofweek: dt.weekday().num_days_from_monday(),
            day_name: dt.format("%A").to_string(),
            hour,
            day_time: DayTime::from_hour(hour),
        }
    }
}

/// Column buffers for the eleven derived fields.
struct FeatureColumns {
    year: Vec<Option<i32>>,
    month: Vec<Option<i32>>,
    month_name: Vec<Option<String>>,
    year_month: Vec<Option<String>>,
    date: Vec<Option<String>>,
    week: Vec<Option<i32>>,
    day: Vec<Option<i32>>,
    dayofweek: Vec<Option<i32>>,
    day_name: Vec<Option<String>>,
    hour: Vec<Option<i32>>,
    day_time: Vec<Option<String>>,
}

impl FeatureColumns {
    fn with_capacity(rows: usize) -> Self {
        Self {
            year: Vec::with_capacity(rows),
            month: Vec::with_capacity(rows),
            month_name: Vec::with_capacity(rows),
            year_month: Vec::with_capacity(rows),
            date: Vec::with_capacity(rows),
            week: Vec::with_capacity(rows),
            day: Vec::with_capacity(rows),
            dayofweek: Vec::with_capacity(rows),
            day_name: Vec::with_capacity(rows),
            hour: Vec::with_capacity(rows),
            day_time: Vec::with_capacity(rows),
        }
    }

    fn push(&mut self, features: Option<TimeFeatures>) {
        let Some(f) = features else {
            self.year.push(None);
            self.month.push(None);
            self.month_name.push(None);
            self.year_month.push(None);
            self.date.push(None);
            self.week.push(None);
            self.day.push(None);
            self.dayofweek.push(None);
            self.day_name.push(None);
            self.hour.push(None);
            self.day_time.push(None);
            return;
        };
        self.year.push(Some(f.year));
        self.month.push(Some(to_i32(f.month)));
        self.month_name.push(Some(f.month_name));
        self.year_month.push(Some(f.year_month));
        self.date.push(Some(f.date));
        self.week.push(Some(to_i32(f.week)));
        self.day.push(Some(to_i32(f.day)));
        self.dayofweek.push(Some(to_i32(f.dayofweek)));
        self.day_name.push(Some(f.day_name));
        self.hour.push(Some(to_i32(f.hour)));
        self.day_time
            .push(f.day_time.map(|bucket| bucket.as_str().to_string()));
    }

    fn into_series(self, prefix: &str) -> Vec<Series> {
        let name = |field: TimeField| field.column_name(prefix);
        vec![
            Series::new(name(TimeField::Year).into(), self.year),
            Series::new(name(TimeField::Month).into(), self.month),
            Series::new(name(TimeField::MonthName).into(), self.month_name),
            Series::new(name(TimeField::YearMonth).into(), self.year_month),
            Series::new(name(TimeField::Date).into(), self.date),
            Series::new(name(TimeField::Week).into(), self.week),
            Series::new(name(TimeField::Day).into(), self.day),
            Series::new(name(TimeField::DayOfWeek).into(), self.dayofweek),
            Series::new(name(TimeField::DayName).into(), self.day_name),
            Series::new(name(TimeField::Hour).into(), self.hour),
            Series::new(name(TimeField::DayTime).into(), self.day_time),
        ]
    }
}

// Calendar components are at most 53; the conversion never saturates.
fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Add calendar feature columns derived from `timestamp_column`.
///
/// The timestamp column itself is rewritten in canonical
/// `YYYY-MM-DD HH:MM:SS` form. Null or blank timestamps produce nulls in
/// every derived column. Existing columns with the derived names are
/// overwritten, so repeating the call with the same prefix is idempotent.
///
/// # Errors
///
/// - [`TransformError::ColumnNotFound`] when `timestamp_column` is missing.
/// - [`TransformError::Parse`] for the first non-empty value that is not a
///   timestamp. The frame is left untouched in that case.
pub fn extract_from_date(df: &mut DataFrame, timestamp_column: &str, prefix: &str) -> Result<()> {
    let column = df
        .column(timestamp_column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: timestamp_column.to_string(),
        })?;
    let raw = string_values(column);

    let mut parsed = Vec::with_capacity(raw.len());
    for (row, value) in raw.iter().enumerate() {
        let Some(value) = value else {
            parsed.push(None);
            continue;
        };
        let dt = parse_timestamp(value).ok_or_else(|| TransformError::Parse {
            column: timestamp_column.to_string(),
            row,
            value: value.clone(),
        })?;
        parsed.push(Some(dt));
    }

    let missing = parsed.iter().filter(|dt| dt.is_none()).count();
    let mut columns = FeatureColumns::with_capacity(parsed.len());
    for dt in &parsed {
        columns.push(dt.map(TimeFeatures::from_datetime));
    }
    let canonical: Vec<Option<String>> = parsed.iter().map(|dt| dt.map(format_timestamp)).collect();

    df.with_column(Series::new(timestamp_column.into(), canonical))?;
    for series in columns.into_series(prefix) {
        df.with_column(series)?;
    }

    debug!(
        column = timestamp_column,
        prefix,
        rows = parsed.len(),
        missing,
        "extracted time features"
    );
    Ok(())
}
