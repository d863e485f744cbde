//! Daily health metrics (weight, sleep, water, mood) and their journal.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excellent,
    Good,
    Neutral,
    Poor,
    Terrible,
}

impl Mood {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "excellent" => Some(Mood::Excellent),
            "good" => Some(Mood::Good),
            "neutral" => Some(Mood::Neutral),
            "poor" => Some(Mood::Poor),
            "terrible" => Some(Mood::Terrible),
            _ => None,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mood::Excellent => "excellent",
            Mood::Good => "good",
            Mood::Neutral => "neutral",
            Mood::Poor => "poor",
            Mood::Terrible => "terrible",
        };
        f.write_str(label)
    }
}

/// One day's self-reported measurements. Any field may be absent; a
/// later record for the same day replaces the earlier one wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyMetrics {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_ml: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyMetrics {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weight_kg: None,
            sleep_hours: None,
            water_ml: None,
            mood: None,
            notes: None,
        }
    }
}

/// Date-ordered collection of daily metric records, one per calendar day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsJournal {
    entries: Vec<DailyMetrics>,
}

impl MetricsJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record for `metrics.date`, keeping the
    /// journal ordered by date ascending. Returns true when an existing
    /// record was replaced.
    pub fn upsert(&mut self, metrics: DailyMetrics) -> bool {
        match self.entries.binary_search_by_key(&metrics.date, |m| m.date) {
            Ok(index) => {
                self.entries[index] = metrics;
                true
            }
            Err(index) => {
                self.entries.insert(index, metrics);
                false
            }
        }
    }

    pub fn entry_for(&self, date: NaiveDate) -> Option<&DailyMetrics> {
        self.entries
            .binary_search_by_key(&date, |m| m.date)
            .ok()
            .map(|index| &self.entries[index])
    }

    /// Records, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &DailyMetrics> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent recorded weight, if any record carries one.
    pub fn latest_weight(&self) -> Option<f64> {
        self.history().find_map(|metrics| metrics.weight_kg)
    }
}
