use crate::api::GalleryServices;
use crate::header::Header;
use crate::image_grid::ImageGrid;
use crate::status_views::{ErrorView, Loading};
use gallery::{Completion, FeedStatus, FetchRequest, ImageFeed, fetch_with_retry};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Drives an [`ImageFeed`] living in a signal, running its requests one at a time.
#[derive(Clone, Copy)]
pub struct FeedHandle {
    feed: RwSignal<ImageFeed>,
    services: StoredValue<GalleryServices>,
}

impl FeedHandle {
    pub fn new(services: GalleryServices) -> Self {
        Self {
            feed: RwSignal::new(ImageFeed::new()),
            services: StoredValue::new(services),
        }
    }

    pub fn load_first(&self) {
        let mut request = None;
        self.feed.update(|feed| request = feed.begin_initial());
        self.run(request);
    }

    pub fn load_more(&self) {
        let mut request = None;
        self.feed.update(|feed| request = feed.begin_next_page());
        self.run(request);
    }

    /// Reloads the loaded pages from the start so newly created images show up.
    pub fn invalidate(&self) {
        let mut request = None;
        self.feed.update(|feed| request = feed.invalidate());
        self.run(request);
    }

    fn run(&self, request: Option<FetchRequest>) {
        let Some(request) = request else {
            return;
        };
        let handle = *self;
        let services = self.services.get_value();
        spawn_local(async move {
            let result = fetch_with_retry(
                &services.api,
                request.cursor(),
                services.config.page_retry,
                gloo_timers::future::sleep,
            )
            .await;
            let mut follow_up = None;
            handle.feed.update(|feed| {
                if let Completion::Continue(next) = feed.complete(&request, result) {
                    follow_up = Some(next);
                }
            });
            handle.run(follow_up);
        });
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let handle = expect_context::<FeedHandle>();
    handle.load_first();

    let status = Memo::new(move |_| handle.feed.with(ImageFeed::status));
    let images = Memo::new(move |_| handle.feed.with(ImageFeed::images));
    let has_next_page = Memo::new(move |_| handle.feed.with(ImageFeed::has_next_page));
    let fetching_next = Memo::new(move |_| handle.feed.with(ImageFeed::is_fetching_next_page));

    move || match status.get() {
        FeedStatus::Loading => view! { <Loading /> }.into_any(),
        FeedStatus::Error => view! { <ErrorView on_retry=move || handle.invalidate() /> }.into_any(),
        FeedStatus::Ready => view! {
            <div style="display: flex; flex-direction: column; min-height: 100vh;">
                <Header />
                <main style="flex: 1; padding-top: 60px;">
                    <div style="max-width: 1120px; margin: 0 auto; padding: 5rem 1rem;">
                        <ImageGrid images=images />
                        <Show when=move || has_next_page.get() fallback=|| ()>
                            <button
                                on:click=move |_| handle.load_more()
                                prop:disabled=move || fetching_next.get()
                                style="
                                    margin-top: 1.25rem;
                                    padding: 0.5rem 1rem;
                                    font-size: 1rem;
                                    border-radius: 4px;
                                    border: none;
                                    background-color: #dd6b20;
                                    color: white;
                                    cursor: pointer;
                                "
                            >
                                {move || if fetching_next.get() { "Loading..." } else { "Load more" }}
                            </button>
                        </Show>
                    </div>
                </main>
            </div>
        }
        .into_any(),
    }
}
