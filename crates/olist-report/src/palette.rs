//! Named chart colours.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

const DEFAULT_COLORS: [(&str, &str); 18] = [
    ("GRAY1", "#231F20"),
    ("GRAY2", "#414040"),
    ("GRAY3", "#555655"),
    ("GRAY4", "#646369"),
    ("GRAY5", "#76787B"),
    ("GRAY6", "#828282"),
    ("GRAY7", "#929497"),
    ("GRAY8", "#A6A6A5"),
    ("GRAY9", "#BFBEBE"),
    ("BLUE1", "#174A7E"),
    ("BLUE2", "#4A81BF"),
    ("BLUE3", "#94B2D7"),
    ("BLUE4", "#94AFC5"),
    ("RED1", "#C3514E"),
    ("RED2", "#E6BAB7"),
    ("GREEN1", "#0C8040"),
    ("GREEN2", "#9ABB59"),
    ("ORANGE1", "#F79747"),
];

/// Colour set handed to the chart front end.
///
/// The default palette is a muted gray scale with a few accent colours;
/// a custom palette can be deserialized from a JSON object of name to hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: BTreeMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|(name, hex)| ((*name).to_string(), (*hex).to_string()))
                .collect(),
        }
    }
}

impl Palette {
    /// Hex code for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Hex code for `name`, or [`ReportError::UnknownColor`].
    pub fn color(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| ReportError::UnknownColor {
            name: name.to_string(),
        })
    }

    /// Hex codes for several names, in order.
    pub fn colors(&self, names: &[&str]) -> Result<Vec<String>> {
        names
            .iter()
            .map(|name| self.color(name).map(str::to_string))
            .collect()
    }

    /// Add or replace a colour.
    pub fn insert(&mut self, name: impl Into<String>, hex: impl Into<String>) {
        self.colors.insert(name.into(), hex.into());
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
