use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div style="
            height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.25rem;
        ">
            "Loading..."
        </div>
    }
}

#[component]
pub fn ErrorView(on_retry: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div style="
            height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 1rem;
        ">
            <h2>"Something went wrong"</h2>
            <p>"The images could not be loaded."</p>
            <button
                on:click=move |_| on_retry()
                style="
                    padding: 0.5rem 1rem;
                    font-size: 1rem;
                    border-radius: 4px;
                    border: none;
                    background-color: #dd6b20;
                    color: white;
                    cursor: pointer;
                "
            >
                "Try again"
            </button>
        </div>
    }
}
