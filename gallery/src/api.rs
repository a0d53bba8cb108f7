//! Seams to the two external services the gallery talks to.
//!
//! The browser client implements both traits over `gloo-net`; tests use in-memory fakes.
#![allow(async_fn_in_trait)]

use crate::error::Result;
use data::{CreateImageData, ImagesPage};

/// The REST API that stores image records.
pub trait ImageApi {
    /// Fetch one page of images. `after` is the cursor returned by the previous page.
    async fn list_images(&self, after: Option<&str>) -> Result<ImagesPage>;

    /// Create a new image record. The response body is not consumed.
    async fn create_image(&self, image: &CreateImageData) -> Result<()>;
}

/// A file host that turns a local file into a public URL.
pub trait ImageHost {
    type File;

    async fn upload(&self, file: &Self::File) -> Result<String>;
}
