use crate::api::GalleryServices;
use crate::text_input::{FieldErrorMessage, border_for};
use gallery::validation::validate_file;
use gallery::{FieldError, FileMetadata, FileUploadError, FormErrors, UploadSession, host_file};
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement, Url};

pub fn revoke_preview(preview: Option<&str>) {
    if let Some(url) = preview {
        if let Err(err) = Url::revoke_object_url(url) {
            warn!("could not revoke preview {url}: {err:?}");
        }
    }
}

fn metadata_of(file: &File) -> FileMetadata {
    FileMetadata {
        name: file.name(),
        size: file.size() as u64,
        mime_type: file.type_(),
    }
}

/// Picks an image, shows a local preview and uploads it to the file host right away.
#[component]
pub fn FileInput(session: RwSignal<UploadSession>, errors: RwSignal<FormErrors>) -> impl IntoView {
    let services = expect_context::<GalleryServices>();
    let uploading = RwSignal::new(false);
    let error = Signal::derive(move || errors.with(|e| e.file));
    let preview = Signal::derive(move || session.with(|s| s.draft.local_preview_url.clone()));

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let metadata = metadata_of(&file);
        let previous = session.with_untracked(|s| s.draft.local_preview_url.clone());
        revoke_preview(previous.as_deref());

        if let Err(err) = validate_file(Some(&metadata)) {
            debug!("{} rejected: {}", metadata.name, err);
            errors.update(|e| e.file = Some(err));
            session.update(|s| {
                s.draft.file = Some(metadata);
                s.draft.image_url = None;
                s.draft.local_preview_url = None;
            });
            return;
        }

        let local_url = Url::create_object_url_with_blob(&file)
            .map_err(|err| warn!("no preview for {}: {err:?}", metadata.name))
            .ok();
        errors.update(|e| e.file = None);
        session.update(|s| {
            s.draft.file = Some(metadata.clone());
            s.draft.image_url = None;
            s.draft.local_preview_url = local_url.clone();
        });
        uploading.set(true);

        let host = services.host.clone();
        spawn_local(async move {
            let result = host_file(&host, &file, &metadata).await;
            let _ = uploading.try_set(false);

            let still_selected = session.with_untracked(|s| {
                s.draft.file.as_ref() == Some(&metadata) && s.draft.local_preview_url == local_url
            });
            if !still_selected {
                debug!("discarding upload of {}, the draft moved on", metadata.name);
                return;
            }
            match result {
                Ok(url) => session.update(|s| s.draft.image_url = Some(url)),
                Err(FileUploadError::Invalid(err)) => {
                    let _ = errors.try_update(|e| e.file = Some(err));
                }
                Err(FileUploadError::Failed(_)) => {
                    let _ = errors.try_update(|e| e.file = Some(FieldError::UploadFailed));
                }
            }
        });
    };

    let status = move || {
        if uploading.get() {
            "Uploading..."
        } else if session.with(|s| s.draft.image_url.is_some()) {
            "Uploaded, click to replace"
        } else {
            "Click to choose a PNG, JPEG or GIF"
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 0.25rem; margin-top: 1rem;">
            <label
                style=move || format!(
                    "height: 180px; border-radius: 4px; display: flex; align-items: center; justify-content: center; cursor: pointer; overflow: hidden; background-color: #161618; {}",
                    border_for(error.get())
                )
            >
                <Show
                    when=move || preview.with(Option::is_some)
                    fallback=move || view! { <span>{status}</span> }
                >
                    <img
                        src=move || preview.get().unwrap_or_default()
                        alt="Preview"
                        style=move || format!(
                            "max-width: 100%; max-height: 100%; object-fit: contain; opacity: {};",
                            if uploading.get() { "0.5" } else { "1" }
                        )
                    />
                </Show>
                <input
                    type="file"
                    name="image"
                    accept="image/png, image/jpeg, image/gif"
                    on:change=on_change
                    style="display: none;"
                    prop:disabled=move || uploading.get()
                />
            </label>
            <Show when=move || preview.with(Option::is_some) fallback=|| ()>
                <span style="font-size: 0.875rem;">{status}</span>
            </Show>
            <FieldErrorMessage error=error />
        </div>
    }
}
