use crate::api::GalleryServices;
use crate::image_feed::{FeedHandle, GalleryPage};
use crate::toast::{ToastHost, Toasts};
use gallery::ClientConfig;
use gallery::config::{API_URL_KEY, FETCH_RETRIES_KEY, UPLOAD_API_KEY_KEY, UPLOAD_URL_KEY};
use leptos::prelude::*;
use log::info;

/// Settings are baked in at build time, e.g. `GALLERY_API_URL=https://... trunk build`.
fn build_setting(key: &str) -> Option<String> {
    let value = match key {
        API_URL_KEY => option_env!("GALLERY_API_URL"),
        UPLOAD_URL_KEY => option_env!("GALLERY_UPLOAD_URL"),
        UPLOAD_API_KEY_KEY => option_env!("GALLERY_UPLOAD_API_KEY"),
        FETCH_RETRIES_KEY => option_env!("GALLERY_FETCH_RETRIES"),
        _ => None,
    };
    value.map(str::to_string)
}

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_lookup(build_setting);
    info!("images api at {:?}", config.images_url());

    let services = GalleryServices::new(config);
    provide_context(FeedHandle::new(services.clone()));
    provide_context(services);
    provide_context(Toasts::new());

    view! {
        <div style="min-height: 100vh; background-color: #161618;">
            <GalleryPage />
            <ToastHost />
        </div>
    }
}
