use chrono::NaiveDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub color_hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Event {
    pub id: String,
    pub title: String,
    pub resource_id: String,
    /// Local wall-clock time, no offset attached.
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Resource {
    pub fn new(id: impl Into<String>, title: impl Into<String>, color_hint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color_hint: color_hint.into(),
        }
    }
}
