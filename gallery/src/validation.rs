//! Client side rules for the upload form. Files are judged on their metadata only.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const MAX_FILE_SIZE: u64 = 10_000_000;
pub const TITLE_MIN_LEN: usize = 2;
pub const TITLE_MAX_LEN: usize = 20;
pub const DESCRIPTION_MAX_LEN: usize = 65;

static IMAGE_TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^?#](?:jpeg|gif|png)").expect("image type pattern is valid")
});

/// What the browser tells us about a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("An image file is required")]
    FileRequired,
    #[error("The file must be smaller than 10MB")]
    FileTooLarge,
    #[error("Only PNG, JPEG and GIF files are accepted")]
    UnsupportedFileType,
    #[error("The upload failed, choose the file again")]
    UploadFailed,
    #[error("A title is required")]
    TitleRequired,
    #[error("At least 2 characters")]
    TitleTooShort,
    #[error("At most 20 characters")]
    TitleTooLong,
    #[error("A description is required")]
    DescriptionRequired,
    #[error("At most 65 characters")]
    DescriptionTooLong,
}

/// Per field outcome of validating the whole form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub file: Option<FieldError>,
    pub title: Option<FieldError>,
    pub description: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.title.is_none() && self.description.is_none()
    }
}

pub fn validate_file(file: Option<&FileMetadata>) -> Result<(), FieldError> {
    let file = file.ok_or(FieldError::FileRequired)?;
    if file.size >= MAX_FILE_SIZE {
        return Err(FieldError::FileTooLarge);
    }
    if !IMAGE_TYPE_PATTERN.is_match(&file.mime_type) {
        return Err(FieldError::UnsupportedFileType);
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), FieldError> {
    let len = title.chars().count();
    if len == 0 {
        Err(FieldError::TitleRequired)
    } else if len < TITLE_MIN_LEN {
        Err(FieldError::TitleTooShort)
    } else if len > TITLE_MAX_LEN {
        Err(FieldError::TitleTooLong)
    } else {
        Ok(())
    }
}

pub fn validate_description(description: &str) -> Result<(), FieldError> {
    let len = description.chars().count();
    if len == 0 {
        Err(FieldError::DescriptionRequired)
    } else if len > DESCRIPTION_MAX_LEN {
        Err(FieldError::DescriptionTooLong)
    } else {
        Ok(())
    }
}

pub fn validate_form(
    file: Option<&FileMetadata>,
    title: &str,
    description: &str,
) -> Result<(), FormErrors> {
    let errors = FormErrors {
        file: validate_file(file).err(),
        title: validate_title(title).err(),
        description: validate_description(description).err(),
    };
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
