//! Audio tracks

use super::{DataUri, RecordId};
use crate::editor::{EditorLabels, Record};
use crate::storage::CollectionKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: RecordId,
    pub title: String,
    pub artist: String,
    /// Audio file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<DataUri>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackForm {
    pub title: String,
    pub artist: String,
}

impl Record for Track {
    type Form = TrackForm;

    const KEY: CollectionKey = CollectionKey::Tracks;
    const LABELS: EditorLabels = EditorLabels {
        create_title: "Track hinzufügen",
        edit_title: "Track bearbeiten",
        delete_prompt: "Track wirklich löschen?",
        empty_text: "Keine Tracks vorhanden",
    };

    fn id(&self) -> RecordId {
        self.id
    }

    fn asset(&self) -> Option<&DataUri> {
        self.file.as_ref()
    }

    fn from_form(id: RecordId, form: TrackForm, asset: Option<DataUri>) -> Self {
        Self {
            id,
            title: form.title,
            artist: form.artist,
            file: asset,
        }
    }

    fn to_form(&self) -> TrackForm {
        TrackForm {
            title: self.title.clone(),
            artist: self.artist.clone(),
        }
    }
}
