//! gigs, tracks and gallery
//!
//! All three go through the same generic editor; only form assembly differs.

use crate::cli::{GalleryAction, GigAction, TrackAction};
use crate::console::{Console, Outcome};
use crate::prompt::Prompt;
use crate::render::Listing;
use anyhow::{Context, Result};
use brcms_common::auth::{require_content_access, Redirect, Session};
use brcms_common::editor::{CollectionEditor, Confirmation, DeleteOutcome, Record, SubmitOutcome};
use brcms_common::models::{
    capture_file, DataUri, GalleryForm, GalleryImage, Performance, PerformanceForm, RecordId,
    Track, TrackForm,
};
use std::io::Write;
use std::path::{Path, PathBuf};

impl<C: Prompt> Console<C> {
    pub(crate) async fn gigs<W: Write>(&mut self, action: GigAction, out: &mut W) -> Result<Outcome> {
        let mut editor = match self.open_editor::<Performance>() {
            Ok(editor) => editor,
            Err(redirect) => return Ok(Outcome::Redirected(redirect)),
        };

        match action {
            GigAction::List => list(&editor, out)?,
            GigAction::Add {
                date,
                venue,
                description,
                image,
            } => {
                let mut form = editor.begin_create();
                form.date = date;
                form.venue = venue;
                form.description = description.unwrap_or_default();
                submit(&mut editor, form, image.as_deref(), out).await?;
            }
            GigAction::Edit {
                id,
                date,
                venue,
                description,
                image,
            } => {
                let apply = |form: &mut PerformanceForm| {
                    if let Some(date) = date {
                        form.date = date;
                    }
                    if let Some(venue) = venue {
                        form.venue = venue;
                    }
                    if let Some(description) = description {
                        form.description = description;
                    }
                };
                edit(&mut editor, id, apply, image, out).await?;
            }
            GigAction::Delete { id } => delete(&mut editor, id, &mut self.prompt, out)?,
        }
        Ok(Outcome::Done)
    }

    pub(crate) async fn tracks<W: Write>(
        &mut self,
        action: TrackAction,
        out: &mut W,
    ) -> Result<Outcome> {
        let mut editor = match self.open_editor::<Track>() {
            Ok(editor) => editor,
            Err(redirect) => return Ok(Outcome::Redirected(redirect)),
        };

        match action {
            TrackAction::List => list(&editor, out)?,
            TrackAction::Add {
                title,
                artist,
                file,
            } => {
                let mut form = editor.begin_create();
                form.title = title;
                form.artist = artist;
                submit(&mut editor, form, file.as_deref(), out).await?;
            }
            TrackAction::Edit {
                id,
                title,
                artist,
                file,
            } => {
                let apply = |form: &mut TrackForm| {
                    if let Some(title) = title {
                        form.title = title;
                    }
                    if let Some(artist) = artist {
                        form.artist = artist;
                    }
                };
                edit(&mut editor, id, apply, file, out).await?;
            }
            TrackAction::Delete { id } => delete(&mut editor, id, &mut self.prompt, out)?,
        }
        Ok(Outcome::Done)
    }

    pub(crate) async fn gallery<W: Write>(
        &mut self,
        action: GalleryAction,
        out: &mut W,
    ) -> Result<Outcome> {
        let mut editor = match self.open_editor::<GalleryImage>() {
            Ok(editor) => editor,
            Err(redirect) => return Ok(Outcome::Redirected(redirect)),
        };

        match action {
            GalleryAction::List => list(&editor, out)?,
            GalleryAction::Add { caption, file } => {
                let mut form = editor.begin_create();
                form.caption = caption;
                submit(&mut editor, form, file.as_deref(), out).await?;
            }
            GalleryAction::Edit { id, caption, file } => {
                let apply = |form: &mut GalleryForm| {
                    if let Some(caption) = caption {
                        form.caption = caption;
                    }
                };
                edit(&mut editor, id, apply, file, out).await?;
            }
            GalleryAction::Delete { id } => delete(&mut editor, id, &mut self.prompt, out)?,
        }
        Ok(Outcome::Done)
    }

    fn open_editor<R: Record>(&self) -> std::result::Result<CollectionEditor<R>, Redirect> {
        let session = Session::current(&self.store);
        let access = require_content_access(session.as_ref(), self.location)?;
        Ok(CollectionEditor::open(self.store.clone(), &access))
    }
}

fn list<R: Listing, W: Write>(editor: &CollectionEditor<R>, out: &mut W) -> Result<()> {
    let records = editor.list();
    if records.is_empty() {
        writeln!(out, "{}", editor.labels().empty_text)?;
    }
    for record in &records {
        writeln!(out, "{}", record.summary())?;
    }
    Ok(())
}

async fn capture(path: Option<&Path>) -> Result<Option<DataUri>> {
    match path {
        Some(path) => {
            let uri = capture_file(path)
                .await
                .with_context(|| format!("Datei {} konnte nicht gelesen werden", path.display()))?;
            Ok(Some(uri))
        }
        None => Ok(None),
    }
}

/// Capture the asset, then save the open form
async fn submit<R: Record, W: Write>(
    editor: &mut CollectionEditor<R>,
    form: R::Form,
    asset_path: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    if let Some(title) = editor.title() {
        writeln!(out, "{}", title)?;
    }

    let asset = match capture(asset_path).await {
        Ok(asset) => asset,
        Err(e) => {
            editor.cancel();
            return Err(e);
        }
    };

    match editor.submit(form, asset)? {
        SubmitOutcome::Created(id) => writeln!(out, "Gespeichert (ID {})", id)?,
        SubmitOutcome::Updated(id) => writeln!(out, "Aktualisiert (ID {})", id)?,
        SubmitOutcome::Vanished(id) => writeln!(out, "Eintrag {} existiert nicht mehr", id)?,
    }
    Ok(())
}

async fn edit<R: Record, W: Write>(
    editor: &mut CollectionEditor<R>,
    id: RecordId,
    apply: impl FnOnce(&mut R::Form),
    asset_path: Option<PathBuf>,
    out: &mut W,
) -> Result<()> {
    let Some(mut form) = editor.begin_edit(id) else {
        writeln!(out, "Eintrag {} nicht gefunden", id)?;
        return Ok(());
    };
    apply(&mut form);
    submit(editor, form, asset_path.as_deref(), out).await
}

fn delete<R: Record, W: Write>(
    editor: &mut CollectionEditor<R>,
    id: RecordId,
    confirmation: &mut impl Confirmation,
    out: &mut W,
) -> Result<()> {
    match editor.delete(id, confirmation)? {
        DeleteOutcome::Deleted => writeln!(out, "Gelöscht (ID {})", id)?,
        DeleteOutcome::NotFound => writeln!(out, "Eintrag {} nicht gefunden", id)?,
        DeleteOutcome::Cancelled => writeln!(out, "Abgebrochen")?,
    }
    Ok(())
}
