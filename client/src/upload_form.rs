use crate::api::GalleryServices;
use crate::file_input::{FileInput, revoke_preview};
use crate::image_feed::FeedHandle;
use crate::text_input::TextInput;
use crate::toast::Toasts;
use gallery::{FormErrors, SubmitOutcome, UploadSession, submit_draft};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn UploadForm(session: RwSignal<UploadSession>) -> impl IntoView {
    let services = expect_context::<GalleryServices>();
    let feed = expect_context::<FeedHandle>();
    let toasts = expect_context::<Toasts>();
    let errors = RwSignal::new(FormErrors::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (attempt, draft) = session.with_untracked(|s| (s.attempt(), s.draft.clone()));
        let api = services.api.clone();
        submitting.set(true);

        spawn_local(async move {
            let outcome = submit_draft(&api, &draft).await;
            let _ = submitting.try_set(false);
            let _ = errors.try_set(match &outcome {
                SubmitOutcome::Invalid(form_errors) => *form_errors,
                _ => FormErrors::default(),
            });
            if let Some(toast) = outcome.toast() {
                toasts.push(toast.clone());
            }
            if outcome.invalidates_feed() {
                feed.invalidate();
            }
            let mut discarded = false;
            session.update(|s| discarded = s.finish(attempt, &outcome));
            if discarded {
                revoke_preview(draft.local_preview_url.as_deref());
            }
        });
    };

    view! {
        <form on:submit=on_submit style="width: 100%;">
            <div style="display: flex; flex-direction: column; gap: 1rem;">
                <FileInput session=session errors=errors />
                <TextInput
                    name="title"
                    placeholder="Image title..."
                    value=Signal::derive(move || session.with(|s| s.draft.title.clone()))
                    on_input=move |value| session.update(|s| s.draft.title = value)
                    error=Signal::derive(move || errors.with(|e| e.title))
                />
                <TextInput
                    name="description"
                    placeholder="Image description..."
                    value=Signal::derive(move || session.with(|s| s.draft.description.clone()))
                    on_input=move |value| session.update(|s| s.draft.description = value)
                    error=Signal::derive(move || errors.with(|e| e.description))
                />
            </div>
            <button
                type="submit"
                prop:disabled=move || submitting.get()
                style="
                    margin-top: 1.5rem;
                    width: 100%;
                    padding: 0.75rem;
                    font-size: 1rem;
                    border-radius: 4px;
                    border: none;
                    background-color: #dd6b20;
                    color: white;
                    cursor: pointer;
                "
            >
                {move || if submitting.get() { "Sending..." } else { "Send" }}
            </button>
        </form>
    }
}
