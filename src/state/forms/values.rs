//! Form value objects for the assessment form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of series offered by the favorite-series selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    #[serde(rename = "The Original Series")]
    OriginalSeries,
    #[serde(rename = "The Animated Series")]
    AnimatedSeries,
    #[default]
    #[serde(rename = "The Next Generation")]
    NextGeneration,
    #[serde(rename = "Deep Space Nine")]
    DeepSpaceNine,
    #[serde(rename = "Voyager")]
    Voyager,
    #[serde(rename = "Enterprise")]
    Enterprise,
    #[serde(rename = "Discovery")]
    Discovery,
    #[serde(rename = "Picard")]
    Picard,
    #[serde(rename = "Lower Decks")]
    LowerDecks,
    #[serde(rename = "Prodigy")]
    Prodigy,
    #[serde(rename = "Strange New Worlds")]
    StrangeNewWorlds,
}

impl Series {
    /// Every selectable series, in display order
    pub const ALL: [Series; 11] = [
        Series::OriginalSeries,
        Series::AnimatedSeries,
        Series::NextGeneration,
        Series::DeepSpaceNine,
        Series::Voyager,
        Series::Enterprise,
        Series::Discovery,
        Series::Picard,
        Series::LowerDecks,
        Series::Prodigy,
        Series::StrangeNewWorlds,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Series::OriginalSeries => "The Original Series",
            Series::AnimatedSeries => "The Animated Series",
            Series::NextGeneration => "The Next Generation",
            Series::DeepSpaceNine => "Deep Space Nine",
            Series::Voyager => "Voyager",
            Series::Enterprise => "Enterprise",
            Series::Discovery => "Discovery",
            Series::Picard => "Picard",
            Series::LowerDecks => "Lower Decks",
            Series::Prodigy => "Prodigy",
            Series::StrangeNewWorlds => "Strange New Worlds",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next series in the selector (wraps around)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous series in the selector (wraps around)
    pub fn prev(self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[index - 1]
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Returned when a string is not one of the known series
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown series: {0}")]
pub struct UnknownSeries(pub String);

impl FromStr for Series {
    type Err = UnknownSeries;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|series| series.title() == s)
            .ok_or_else(|| UnknownSeries(s.to_string()))
    }
}

/// Identifies a single field of the assessment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    FavoriteSeries,
    WillProceed,
    SimulateError,
}

impl FieldName {
    /// Fields in on-screen order
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::FavoriteSeries,
        FieldName::WillProceed,
        FieldName::SimulateError,
    ];

    /// Payload key of the field
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::FavoriteSeries => "favoriteSeries",
            FieldName::WillProceed => "willProceed",
            FieldName::SimulateError => "simulateError",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::FavoriteSeries => "Favorite Star Trek Series",
            FieldName::WillProceed => "Will take the Ring to Mordor?",
            FieldName::SimulateError => "Return API Error?",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, FieldName::Name | FieldName::Email)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single-field change applied through the form controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Email(String),
    FavoriteSeries(Series),
    WillProceed(bool),
    SimulateError(bool),
}

impl FieldEdit {
    pub fn field(&self) -> FieldName {
        match self {
            FieldEdit::Name(_) => FieldName::Name,
            FieldEdit::Email(_) => FieldName::Email,
            FieldEdit::FavoriteSeries(_) => FieldName::FavoriteSeries,
            FieldEdit::WillProceed(_) => FieldName::WillProceed,
            FieldEdit::SimulateError(_) => FieldName::SimulateError,
        }
    }
}

/// The full, always-populated value set of the assessment form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub favorite_series: Series,
    pub will_proceed: bool,
    #[serde(default)]
    pub simulate_error: bool,
}

impl FormValues {
    /// Apply an edit, returning whether the stored value changed
    pub fn apply(&mut self, edit: FieldEdit) -> bool {
        match edit {
            FieldEdit::Name(v) => replace_if_changed(&mut self.name, v),
            FieldEdit::Email(v) => replace_if_changed(&mut self.email, v),
            FieldEdit::FavoriteSeries(v) => replace_if_changed(&mut self.favorite_series, v),
            FieldEdit::WillProceed(v) => replace_if_changed(&mut self.will_proceed, v),
            FieldEdit::SimulateError(v) => replace_if_changed(&mut self.simulate_error, v),
        }
    }

    /// Whether `field` holds the same value in both sets
    pub fn field_eq(&self, other: &FormValues, field: FieldName) -> bool {
        match field {
            FieldName::Name => self.name == other.name,
            FieldName::Email => self.email == other.email,
            FieldName::FavoriteSeries => self.favorite_series == other.favorite_series,
            FieldName::WillProceed => self.will_proceed == other.will_proceed,
            FieldName::SimulateError => self.simulate_error == other.simulate_error,
        }
    }

    /// Text content of a text field (empty for non-text fields)
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            _ => "",
        }
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
