use crate::file_input::revoke_preview;
use crate::upload_form::UploadForm;
use gallery::UploadSession;
use leptos::prelude::*;
use web_sys::MouseEvent;

#[component]
pub fn UploadModal(session: RwSignal<UploadSession>) -> impl IntoView {
    let close = move || {
        let preview = session.with_untracked(|s| s.draft.local_preview_url.clone());
        session.update(UploadSession::close);
        revoke_preview(preview.as_deref());
    };

    view! {
        <Show when=move || session.with(UploadSession::is_open) fallback=|| ()>
            <div
                style="
                    position: fixed;
                    top: 0; left: 0; right: 0; bottom: 0;
                    background-color: rgba(0,0,0,0.8);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1500;
                "
                on:click=move |_| close()
            >
                <div
                    style="
                        background-color: #2d2d33;
                        border-radius: 8px;
                        padding: 1.5rem;
                        width: 100%;
                        max-width: 540px;
                    "
                    on:click=move |ev: MouseEvent| ev.stop_propagation()
                >
                    <div style="display: flex; justify-content: space-between; align-items: center;">
                        <h2 style="margin: 0;">"New image"</h2>
                        <button
                            on:click=move |_| close()
                            style="background: none; border: none; color: white; font-size: 1.25rem; cursor: pointer;"
                        >
                            "✕"
                        </button>
                    </div>
                    <UploadForm session=session />
                </div>
            </div>
        </Show>
    }
}
