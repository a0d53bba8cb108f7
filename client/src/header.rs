use crate::upload_modal::UploadModal;
use gallery::UploadSession;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let session = RwSignal::new(UploadSession::default());

    view! {
        <header style="
            height: 60px;
            background-color: #646472;
            color: white;
            padding: 0rem 1rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 1000;
            font-size: 18px;
        ">
            <h1 style="font-size: 1.5rem;">"Gallery"</h1>
            <button
                on:click=move |_| session.update(UploadSession::open)
                style="
                    padding: 0.3rem 0.75rem;
                    font-size: 1rem;
                    border-radius: 4px;
                    border: none;
                    background-color: #dd6b20;
                    color: white;
                    cursor: pointer;
                "
            >
                "Add image"
            </button>
        </header>
        <UploadModal session=session />
    }
}
