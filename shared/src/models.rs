use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color used for categories that are not part of the fixed set
pub const DEFAULT_CATEGORY_COLOR: &str = "#e5e7eb";

/// A single scheduled item on the calendar
///
/// Field order matches the persisted and exported JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque identifier, epoch milliseconds at creation time
    pub id: String,
    /// Calendar date in `DD-MM-YYYY` format
    pub date: String,
    pub name: String,
    /// Wall-clock `HH:MM` (24h)
    pub start_time: String,
    /// Wall-clock `HH:MM` (24h)
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
}

/// Parse a wall-clock `HH:MM` (24h) value
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

impl Event {
    /// Both times parse as `HH:MM` and the start is strictly earlier
    pub fn has_valid_time_range(&self) -> bool {
        match (parse_clock_time(&self.start_time), parse_clock_time(&self.end_time)) {
            (Some(start), Some(end)) => start < end,
            _ => false,
        }
    }
}

/// Category label controlling an event's display color
///
/// Unknown labels are kept verbatim so that stored data round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Work,
    Personal,
    Health,
    Education,
    Finance,
    Recreation,
    Other,
    Unknown(String),
}

impl Category {
    /// Every selectable category, in display order
    pub const ALL: [Category; 7] = [
        Category::Work,
        Category::Personal,
        Category::Health,
        Category::Education,
        Category::Finance,
        Category::Recreation,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Finance => "Finance",
            Category::Recreation => "Recreation",
            Category::Other => "Other",
            Category::Unknown(label) => label,
        }
    }

    /// Background color for markers and list entries
    pub fn color(&self) -> &'static str {
        match self {
            Category::Work => "#bfdbfe",
            Category::Personal => "#bbf7d0",
            Category::Health => "#fecaca",
            Category::Education => "#fef08a",
            Category::Finance => "#e9d5ff",
            Category::Recreation => "#fbcfe8",
            Category::Other | Category::Unknown(_) => DEFAULT_CATEGORY_COLOR,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Work" => Category::Work,
            "Personal" => Category::Personal,
            "Health" => Category::Health,
            "Education" => Category::Education,
            "Finance" => Category::Finance,
            "Recreation" => Category::Recreation,
            "Other" => Category::Other,
            _ => Category::Unknown(label),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::from(label.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unknown(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
