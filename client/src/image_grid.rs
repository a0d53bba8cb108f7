use crate::image_card::ImageCard;
use crate::image_modal::ImageModal;
use data::Image;
use gallery::ViewerState;
use leptos::control_flow::For;
use leptos::prelude::*;

#[component]
pub fn ImageGrid(#[prop(into)] images: Signal<Vec<Image>>) -> impl IntoView {
    let viewer = RwSignal::new(ViewerState::default());
    let items = move || images.get();
    let on_view = move |url: String| viewer.update(|viewer| viewer.view(url));

    view! {
        <div style="
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 40px;
            "
        >
            <For
                each=items
                key=|image| image.id.clone()
                children=move |image| view! {
                    <ImageCard image=image on_view=on_view />
                }
            />
        </div>

        <Show when=move || viewer.with(ViewerState::is_open) fallback=|| ()>
            <ImageModal
                image_url=viewer.with_untracked(|viewer| viewer.url().to_string())
                on_close=move || viewer.update(ViewerState::close)
            />
        </Show>
    }
}
