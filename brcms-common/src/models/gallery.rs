//! Gallery images

use super::{DataUri, RecordId};
use crate::editor::{EditorLabels, Record};
use crate::storage::CollectionKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: RecordId,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<DataUri>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryForm {
    pub caption: String,
}

impl Record for GalleryImage {
    type Form = GalleryForm;

    const KEY: CollectionKey = CollectionKey::Gallery;
    const LABELS: EditorLabels = EditorLabels {
        create_title: "Bild hinzufügen",
        edit_title: "Bild bearbeiten",
        delete_prompt: "Bild wirklich löschen?",
        empty_text: "Keine Bilder vorhanden",
    };

    fn id(&self) -> RecordId {
        self.id
    }

    fn asset(&self) -> Option<&DataUri> {
        self.file.as_ref()
    }

    fn from_form(id: RecordId, form: GalleryForm, asset: Option<DataUri>) -> Self {
        Self {
            id,
            caption: form.caption,
            file: asset,
        }
    }

    fn to_form(&self) -> GalleryForm {
        GalleryForm {
            caption: self.caption.clone(),
        }
    }
}
