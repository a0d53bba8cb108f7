pub mod api;
pub mod config;
pub mod error;
pub mod feed;
pub mod retry;
pub mod submission;
pub mod toast;
pub mod validation;
pub mod viewer;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ImageApi, ImageHost};
pub use config::ClientConfig;
pub use error::{GalleryError, Result};
pub use feed::{Completion, FeedStatus, FetchKind, FetchRequest, ImageFeed, flatten_pages};
pub use retry::{RetryPolicy, fetch_with_retry};
pub use submission::{FileUploadError, SubmitOutcome, UploadDraft, UploadSession, host_file, submit_draft};
pub use toast::{Toast, ToastStatus};
pub use validation::{FieldError, FileMetadata, FormErrors};
pub use viewer::ViewerState;
