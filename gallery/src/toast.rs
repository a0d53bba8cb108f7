use std::time::Duration;

pub const TOAST_DURATION: Duration = Duration::from_secs(9);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStatus {
    Info,
    Success,
    Error,
}

/// A transient notification shown in the corner of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub status: ToastStatus,
    pub duration: Duration,
    pub closable: bool,
}

impl Toast {
    pub fn new(status: ToastStatus, title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            status,
            duration: TOAST_DURATION,
            closable: true,
        }
    }

    pub fn image_missing() -> Self {
        Self::new(
            ToastStatus::Info,
            "Image not added",
            "Add an image and wait for its upload to finish before submitting.",
        )
    }

    pub fn image_created() -> Self {
        Self::new(
            ToastStatus::Success,
            "Image saved",
            "Your image was saved successfully.",
        )
    }

    pub fn creation_failed() -> Self {
        Self::new(
            ToastStatus::Error,
            "Saving failed",
            "Something went wrong while saving your image.",
        )
    }
}
