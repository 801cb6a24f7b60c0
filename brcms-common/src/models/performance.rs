//! Performance listings ("gigs")

use super::{DataUri, RecordId};
use crate::editor::{EditorLabels, Record};
use crate::storage::CollectionKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format of the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    pub id: RecordId,
    /// Calendar date as entered, `YYYY-MM-DD`
    pub date: String,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Poster or venue image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<DataUri>,
}

impl Performance {
    /// Parsed `date`, `None` if it is not a valid calendar date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceForm {
    pub date: String,
    pub venue: String,
    /// Free text; empty means no description
    pub description: String,
}

impl Record for Performance {
    type Form = PerformanceForm;

    const KEY: CollectionKey = CollectionKey::Performances;
    const LABELS: EditorLabels = EditorLabels {
        create_title: "Gig hinzufügen",
        edit_title: "Gig bearbeiten",
        delete_prompt: "Gig wirklich löschen?",
        empty_text: "Keine Gigs vorhanden",
    };

    fn id(&self) -> RecordId {
        self.id
    }

    fn asset(&self) -> Option<&DataUri> {
        self.image.as_ref()
    }

    fn from_form(id: RecordId, form: PerformanceForm, asset: Option<DataUri>) -> Self {
        Self {
            id,
            date: form.date,
            venue: form.venue,
            description: Some(form.description).filter(|d| !d.is_empty()),
            image: asset,
        }
    }

    fn to_form(&self) -> PerformanceForm {
        PerformanceForm {
            date: self.date.clone(),
            venue: self.venue.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}
