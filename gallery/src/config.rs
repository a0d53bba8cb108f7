use crate::error::{GalleryError, Result};
use crate::retry::RetryPolicy;
use log::warn;
use urlencoding::encode;

pub const API_URL_KEY: &str = "GALLERY_API_URL";
pub const UPLOAD_URL_KEY: &str = "GALLERY_UPLOAD_URL";
pub const UPLOAD_API_KEY_KEY: &str = "GALLERY_UPLOAD_API_KEY";
pub const FETCH_RETRIES_KEY: &str = "GALLERY_FETCH_RETRIES";

pub const DEFAULT_UPLOAD_URL: &str = "https://api.imgbb.com/1/upload";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base of the images API. Empty means same origin.
    pub api_base_url: String,
    pub upload_url: String,
    pub upload_api_key: Option<String>,
    pub page_retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    /// Builds the configuration from named settings, falling back to defaults for missing or
    /// unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup(API_URL_KEY)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_default();
        let upload_url = lookup(UPLOAD_URL_KEY)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_UPLOAD_URL.into());
        let upload_api_key = lookup(UPLOAD_API_KEY_KEY).filter(|key| !key.is_empty());
        if upload_api_key.is_none() {
            warn!("{UPLOAD_API_KEY_KEY} is not set, image uploads will fail");
        }

        let mut page_retry = RetryPolicy::default();
        if let Some(retries) = lookup(FETCH_RETRIES_KEY) {
            match retries.parse() {
                Ok(retries) => page_retry.max_retries = retries,
                Err(_) => warn!("ignoring invalid {FETCH_RETRIES_KEY} value {retries:?}"),
            }
        }

        Self {
            api_base_url,
            upload_url,
            upload_api_key,
            page_retry,
        }
    }

    pub fn images_url(&self) -> String {
        format!("{}/api/images", self.api_base_url)
    }

    /// Listing URL for the page starting at `after`. The first page carries no cursor.
    pub fn list_images_url(&self, after: Option<&str>) -> String {
        match after {
            Some(after) => format!("{}?after={}", self.images_url(), encode(after)),
            None => self.images_url(),
        }
    }

    pub fn upload_endpoint(&self) -> Result<String> {
        let key = self
            .upload_api_key
            .as_deref()
            .ok_or_else(|| GalleryError::Config(format!("{UPLOAD_API_KEY_KEY} is not set")))?;
        Ok(format!("{}?key={}", self.upload_url, encode(key)))
    }
}
