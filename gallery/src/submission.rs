//! The upload form: the draft it edits, hosting the selected file and creating the record.

use crate::api::{ImageApi, ImageHost};
use crate::error::GalleryError;
use crate::toast::Toast;
use crate::validation::{FieldError, FileMetadata, FormErrors, validate_file, validate_form};
use data::CreateImageData;
use log::{debug, error, info};
use thiserror::Error;

/// Form state of one upload attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub title: String,
    pub description: String,
    pub file: Option<FileMetadata>,
    /// Public URL returned by the file host.
    pub image_url: Option<String>,
    /// Object URL of the selected file for the local preview.
    pub local_preview_url: Option<String>,
}

impl UploadDraft {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        validate_form(self.file.as_ref(), &self.title, &self.description)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FileUploadError {
    #[error("{0}")]
    Invalid(FieldError),
    #[error("{0}")]
    Failed(GalleryError),
}

/// Validates the selected file and uploads it to the host, returning its public URL.
/// Invalid files never reach the host.
pub async fn host_file<H: ImageHost>(
    host: &H,
    file: &H::File,
    metadata: &FileMetadata,
) -> Result<String, FileUploadError> {
    validate_file(Some(metadata)).map_err(FileUploadError::Invalid)?;
    debug!("uploading {} ({} bytes)", metadata.name, metadata.size);
    let url = host.upload(file).await.map_err(|err| {
        error!("uploading {} failed: {}", metadata.name, err);
        FileUploadError::Failed(err)
    })?;
    info!("{} is hosted at {}", metadata.name, url);
    Ok(url)
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Field validation failed; the draft is left untouched for the user to fix.
    Invalid(FormErrors),
    /// No hosted URL yet, nothing was sent.
    Blocked(Toast),
    Created(Toast),
    Failed(Toast),
}

impl SubmitOutcome {
    pub fn toast(&self) -> Option<&Toast> {
        match self {
            SubmitOutcome::Invalid(_) => None,
            SubmitOutcome::Blocked(toast)
            | SubmitOutcome::Created(toast)
            | SubmitOutcome::Failed(toast) => Some(toast),
        }
    }

    /// Whether the attempt is over, so the draft is discarded and the modal closed.
    pub fn ends_attempt(&self) -> bool {
        !matches!(self, SubmitOutcome::Invalid(_))
    }

    pub fn invalidates_feed(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }
}

/// Runs one submission of `draft` against the API. Does not touch the draft itself.
pub async fn submit_draft<A: ImageApi>(api: &A, draft: &UploadDraft) -> SubmitOutcome {
    if let Err(errors) = draft.validate() {
        debug!("upload form rejected: {:?}", errors);
        return SubmitOutcome::Invalid(errors);
    }
    let Some(url) = draft.image_url.clone() else {
        info!("submit without a hosted image, nothing sent");
        return SubmitOutcome::Blocked(Toast::image_missing());
    };

    let body = CreateImageData {
        title: draft.title.clone(),
        description: draft.description.clone(),
        url,
    };
    match api.create_image(&body).await {
        Ok(()) => {
            info!("created image {:?}", body.title);
            SubmitOutcome::Created(Toast::image_created())
        }
        Err(err) => {
            error!("creating image {:?} failed: {}", body.title, err);
            SubmitOutcome::Failed(Toast::creation_failed())
        }
    }
}

/// The upload modal together with the draft it edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSession {
    pub draft: UploadDraft,
    modal_open: bool,
    attempt: u64,
}

impl UploadSession {
    pub fn open(&mut self) {
        self.modal_open = true;
        self.attempt += 1;
    }

    /// Closing the modal discards whatever was entered.
    pub fn close(&mut self) {
        self.modal_open = false;
        self.attempt += 1;
        self.draft.reset();
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    /// Identifies the current draft. Changes whenever the modal opens or closes.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Applies the end of the submission started during `attempt`. Outcomes of an attempt the
    /// user already left are ignored. Returns whether the draft was discarded.
    pub fn finish(&mut self, attempt: u64, outcome: &SubmitOutcome) -> bool {
        if attempt != self.attempt {
            debug!("ignoring submission outcome of attempt {attempt}, current is {}", self.attempt);
            return false;
        }
        if outcome.ends_attempt() {
            self.close();
            return true;
        }
        false
    }

    pub async fn submit<A: ImageApi>(&mut self, api: &A) -> SubmitOutcome {
        let attempt = self.attempt;
        let outcome = submit_draft(api, &self.draft).await;
        self.finish(attempt, &outcome);
        outcome
    }
}
