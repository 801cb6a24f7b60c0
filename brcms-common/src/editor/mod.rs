//! Collection editors
//!
//! One generic editor serves performances, tracks and gallery images. Each
//! operation re-reads the whole collection document, mutates it, and writes
//! it back. There is no conflict detection: two editors on the same storage
//! overwrite each other's changes, last writer wins.
//!
//! # State machine
//!
//! ```text
//! Idle ──begin_create──► Creating ──submit──► Idle
//! Idle ──begin_edit(id)─► Editing(id) ──submit──► Idle
//! ```
//!
//! Opening a new context while one is open abandons the old one.

pub mod users;

pub use users::{UserDeleteOutcome, UserRegistry, UserRow, USER_DELETE_PROMPT};

use crate::auth::ContentAccess;
use crate::ids::mint_id;
use crate::models::{DataUri, RecordId};
use crate::storage::{CollectionKey, Store};
use crate::time::now_millis;
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, info};

/// Texts an editor presents to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLabels {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub delete_prompt: &'static str,
    pub empty_text: &'static str,
}

/// A record kind managed by [`CollectionEditor`]
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Form fields the operator fills in (everything but id and asset)
    type Form: Clone + Default;

    const KEY: CollectionKey;
    const LABELS: EditorLabels;

    fn id(&self) -> RecordId;

    /// Stored binary asset, if any
    fn asset(&self) -> Option<&DataUri>;

    fn from_form(id: RecordId, form: Self::Form, asset: Option<DataUri>) -> Self;

    fn to_form(&self) -> Self::Form;
}

/// Interactive yes/no confirmation for destructive actions
pub trait Confirmation {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirmation for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Creating,
    Editing(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(RecordId),
    Updated(RecordId),
    /// The record being edited was deleted meanwhile; nothing was written
    Vanished(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Cancelled,
}

/// Create/read/update/delete over one collection document
#[derive(Debug)]
pub struct CollectionEditor<R: Record> {
    store: Store,
    state: EditorState,
    _record: PhantomData<R>,
}

impl<R: Record> CollectionEditor<R> {
    /// Open an editor; requires the content-management gate
    pub fn open(store: Store, access: &ContentAccess) -> Self {
        debug!("Opened {} editor for '{}'", R::KEY, access.session().username());
        Self {
            store,
            state: EditorState::Idle,
            _record: PhantomData,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn labels(&self) -> EditorLabels {
        R::LABELS
    }

    /// Form title for the open context, `None` when idle
    pub fn title(&self) -> Option<&'static str> {
        match self.state {
            EditorState::Idle => None,
            EditorState::Creating => Some(R::LABELS.create_title),
            EditorState::Editing(_) => Some(R::LABELS.edit_title),
        }
    }

    /// Records in stored order
    pub fn list(&self) -> Vec<R> {
        self.store.load_collection(R::KEY)
    }

    /// Open a blank form, abandoning any open context
    pub fn begin_create(&mut self) -> R::Form {
        self.state = EditorState::Creating;
        R::Form::default()
    }

    /// Open the form for `id`, pre-filled from the stored record
    ///
    /// Unknown id ⇒ `None` and the current context is kept.
    pub fn begin_edit(&mut self, id: RecordId) -> Option<R::Form> {
        let record = self.list().into_iter().find(|r| r.id() == id)?;
        self.state = EditorState::Editing(id);
        Some(record.to_form())
    }

    /// Close the form without saving
    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Save the open form
    ///
    /// While editing, the record is replaced in place and keeps its stored
    /// asset when `asset` is `None`. Otherwise a new record is appended
    /// under a freshly minted id.
    pub fn submit(&mut self, form: R::Form, asset: Option<DataUri>) -> Result<SubmitOutcome> {
        let mut records = self.list();
        let editing = self.state;
        self.state = EditorState::Idle;

        let outcome = match editing {
            EditorState::Editing(id) => {
                let Some(index) = records.iter().position(|r| r.id() == id) else {
                    debug!("Record {} vanished from {} before update", id, R::KEY);
                    return Ok(SubmitOutcome::Vanished(id));
                };
                let asset = asset.or_else(|| records[index].asset().cloned());
                records[index] = R::from_form(id, form, asset);
                SubmitOutcome::Updated(id)
            }
            EditorState::Idle | EditorState::Creating => {
                let id = mint_id(records.iter().map(|r| r.id()), now_millis());
                records.push(R::from_form(id, form, asset));
                SubmitOutcome::Created(id)
            }
        };

        self.store.save_collection(R::KEY, &records)?;
        info!("{:?} in {} ({} records)", outcome, R::KEY, records.len());
        Ok(outcome)
    }

    /// Delete `id` after confirmation; no undo
    pub fn delete(
        &mut self,
        id: RecordId,
        confirmation: &mut impl Confirmation,
    ) -> Result<DeleteOutcome> {
        if !confirmation.confirm(R::LABELS.delete_prompt) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let mut records = self.list();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Ok(DeleteOutcome::NotFound);
        }

        self.store.save_collection(R::KEY, &records)?;
        info!("Deleted {} from {}", id, R::KEY);
        Ok(DeleteOutcome::Deleted)
    }
}
