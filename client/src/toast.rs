use gallery::{Toast, ToastStatus};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Notifications currently on screen. Each one dismisses itself after its duration.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: RwSignal<Vec<(u64, Toast)>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let millis = u32::try_from(toast.duration.as_millis()).unwrap_or(u32::MAX);
        self.entries.update(|entries| entries.push((id, toast)));

        let toasts = *self;
        Timeout::new(millis, move || toasts.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.update(|entries| entries.retain(|(entry, _)| *entry != id));
    }
}

fn accent(status: ToastStatus) -> &'static str {
    match status {
        ToastStatus::Info => "#3182ce",
        ToastStatus::Success => "#38a169",
        ToastStatus::Error => "#e53e3e",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div style="
            position: fixed;
            bottom: 1rem;
            right: 1rem;
            display: flex;
            flex-direction: column;
            gap: 0.5rem;
            z-index: 2000;
        ">
            <For
                each=move || toasts.entries.get()
                key=|(id, _)| *id
                children=move |(id, Toast { title, description, status, closable, .. })| {
                    let style = format!(
                        "background-color: {}; color: white; padding: 0.75rem 1rem; border-radius: 6px; min-width: 280px; max-width: 400px;",
                        accent(status)
                    );
                    view! {
                        <div style=style role="status">
                            <div style="display: flex; justify-content: space-between; font-weight: bold;">
                                <span>{title}</span>
                                <Show when=move || closable fallback=|| ()>
                                    <button
                                        on:click=move |_| toasts.dismiss(id)
                                        style="background: none; border: none; color: white; cursor: pointer;"
                                    >
                                        "✕"
                                    </button>
                                </Show>
                            </div>
                            <div>{description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
