//! Cursor based pagination over the image listing.
//!
//! [`ImageFeed`] is a plain state machine: callers ask it for a [`FetchRequest`], perform the
//! request however their platform does I/O and hand the result back through
//! [`ImageFeed::complete`]. Only one request is in flight at a time. A response that belongs to
//! a superseded request is dropped.

use crate::error::{GalleryError, Result};
use data::{Image, ImagesPage};
use log::{debug, error, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Loading,
    Error,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    NextPage,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    kind: FetchKind,
    cursor: Option<String>,
    generation: u64,
}

impl FetchRequest {
    pub fn kind(&self) -> FetchKind {
        self.kind
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}

/// What [`ImageFeed::complete`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// A newer request superseded this one.
    Dropped,
    Applied,
    /// A refresh needs the following page before it can be swapped in.
    Continue(FetchRequest),
}

/// Pages reloaded so far by a running refresh, swapped in once `target` pages are back or the
/// listing ends.
#[derive(Debug, Clone, PartialEq)]
struct Refresh {
    target: usize,
    pages: Vec<ImagesPage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageFeed {
    pages: Vec<ImagesPage>,
    status: FeedStatus,
    in_flight: Option<FetchKind>,
    generation: u64,
    stale: bool,
    refresh: Option<Refresh>,
}

impl Default for ImageFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFeed {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            status: FeedStatus::Loading,
            in_flight: None,
            generation: 0,
            stale: false,
            refresh: None,
        }
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn pages(&self) -> &[ImagesPage] {
        &self.pages
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_fetching_next_page(&self) -> bool {
        self.in_flight == Some(FetchKind::NextPage)
    }

    /// Cursor of the page after the last one loaded.
    pub fn next_cursor(&self) -> Option<&str> {
        self.pages.last().and_then(ImagesPage::next_cursor)
    }

    pub fn has_next_page(&self) -> bool {
        self.next_cursor().is_some()
    }

    /// All loaded images in fetch order.
    pub fn images(&self) -> Vec<Image> {
        flatten_pages(&self.pages)
    }

    /// Request for the first page. Returns `None` while another request is in flight.
    pub fn begin_initial(&mut self) -> Option<FetchRequest> {
        if self.in_flight.is_some() {
            trace!("initial fetch skipped, a request is already in flight");
            return None;
        }
        self.status = FeedStatus::Loading;
        Some(self.issue(FetchKind::Initial, None))
    }

    /// Request for the page after the last loaded one, if there is one and nothing is in flight.
    pub fn begin_next_page(&mut self) -> Option<FetchRequest> {
        if self.in_flight.is_some() {
            trace!("next page skipped, a request is already in flight");
            return None;
        }
        let cursor = self.next_cursor()?.to_string();
        Some(self.issue(FetchKind::NextPage, Some(cursor)))
    }

    /// Marks the loaded pages as outdated and returns the first request of a refresh that
    /// reloads as many pages as are loaded now.
    ///
    /// A pending next page request is superseded and a running refresh starts over. Loaded
    /// pages stay visible until the refresh completes, unless the feed is showing an error.
    pub fn invalidate(&mut self) -> Option<FetchRequest> {
        self.stale = true;
        if self.in_flight == Some(FetchKind::Initial) {
            debug!("feed invalidated while the first page is loading");
            return None;
        }
        if self.pages.is_empty() || self.status == FeedStatus::Error {
            self.status = FeedStatus::Loading;
        }
        self.refresh = Some(Refresh {
            target: self.pages.len().max(1),
            pages: Vec::new(),
        });
        Some(self.issue(FetchKind::Refresh, None))
    }

    /// Applies the outcome of `request`.
    pub fn complete(&mut self, request: &FetchRequest, result: Result<ImagesPage>) -> Completion {
        if request.generation != self.generation || self.in_flight != Some(request.kind) {
            debug!(
                "dropping {:?} response for generation {}, current is {}",
                request.kind, request.generation, self.generation
            );
            return Completion::Dropped;
        }
        self.in_flight = None;

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                log_fetch_error(request, &err);
                self.refresh = None;
                self.status = FeedStatus::Error;
                return Completion::Applied;
            }
        };
        trace!(
            "{:?} page with {} images, next cursor {:?}",
            request.kind,
            page.data.len(),
            page.next_cursor()
        );

        match request.kind {
            FetchKind::Initial => {
                self.pages = vec![page];
                self.stale = false;
            }
            FetchKind::NextPage => self.pages.push(page),
            FetchKind::Refresh => {
                let Some(mut refresh) = self.refresh.take() else {
                    return Completion::Dropped;
                };
                let cursor = page.next_cursor().map(str::to_string);
                refresh.pages.push(page);
                if let Some(cursor) = cursor.filter(|_| refresh.pages.len() < refresh.target) {
                    self.refresh = Some(refresh);
                    return Completion::Continue(self.issue(FetchKind::Refresh, Some(cursor)));
                }
                debug!("refreshed {} of {} pages", refresh.pages.len(), refresh.target);
                self.pages = refresh.pages;
                self.stale = false;
            }
        }
        self.status = FeedStatus::Ready;
        Completion::Applied
    }

    fn issue(&mut self, kind: FetchKind, cursor: Option<String>) -> FetchRequest {
        self.generation += 1;
        self.in_flight = Some(kind);
        FetchRequest {
            kind,
            cursor,
            generation: self.generation,
        }
    }
}

fn log_fetch_error(request: &FetchRequest, err: &GalleryError) {
    error!(
        "{:?} fetch with cursor {:?} failed: {}",
        request.kind, request.cursor, err
    );
}

/// Concatenates the data of every page, keeping page order then intra-page order.
pub fn flatten_pages(pages: &[ImagesPage]) -> Vec<Image> {
    pages.iter().flat_map(|page| page.data.iter().cloned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{image, page};

    fn ids(feed: &ImageFeed) -> Vec<String> {
        feed.images().into_iter().map(|image| image.id).collect()
    }

    /// Loads the given pages one after another.
    fn loaded(pages: Vec<ImagesPage>) -> ImageFeed {
        let mut feed = ImageFeed::new();
        let mut request = feed.begin_initial().expect("first page request");
        let mut pages = pages.into_iter().peekable();
        while let Some(page) = pages.next() {
            assert_eq!(feed.complete(&request, Ok(page)), Completion::Applied);
            if pages.peek().is_some() {
                request = feed.begin_next_page().expect("cursor for the next page");
            }
        }
        feed
    }

    fn continued(completion: Completion) -> FetchRequest {
        match completion {
            Completion::Continue(request) => request,
            other => panic!("expected the refresh to continue, got {other:?}"),
        }
    }

    #[test]
    fn test_flatten_keeps_fetch_order_and_duplicates() {
        let pages = vec![
            page(Some("a"), &["1", "2"]),
            page(Some("b"), &["3"]),
            page(None, &["3", "4"]),
        ];
        let flat = flatten_pages(&pages);
        let ids: Vec<&str> = flat.iter().map(|image| image.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "3", "4"]);
    }

    #[test]
    fn test_initial_state_is_loading() {
        let feed = ImageFeed::new();
        assert_eq!(feed.status(), FeedStatus::Loading);
        assert!(feed.images().is_empty());
        assert!(!feed.has_next_page());
    }

    #[test]
    fn test_empty_page_without_cursor() {
        let mut feed = ImageFeed::new();
        let request = feed.begin_initial().unwrap();
        assert_eq!(request.cursor(), None);
        assert_eq!(feed.complete(&request, Ok(page(None, &[]))), Completion::Applied);

        assert_eq!(feed.status(), FeedStatus::Ready);
        assert!(feed.images().is_empty());
        assert!(!feed.has_next_page());
        assert_eq!(feed.begin_next_page(), None);
    }

    #[test]
    fn test_pages_accumulate_in_fetch_order() {
        let mut feed = ImageFeed::new();
        let first = feed.begin_initial().unwrap();
        feed.complete(&first, Ok(page(Some("c1"), &["1", "2"])));
        assert!(feed.has_next_page());

        let second = feed.begin_next_page().unwrap();
        assert_eq!(second.kind(), FetchKind::NextPage);
        assert_eq!(second.cursor(), Some("c1"));
        assert!(feed.is_fetching_next_page());
        feed.complete(&second, Ok(page(Some("c2"), &["3"])));

        let third = feed.begin_next_page().unwrap();
        assert_eq!(third.cursor(), Some("c2"));
        feed.complete(&third, Ok(page(None, &["4", "5"])));

        assert_eq!(ids(&feed), vec!["1", "2", "3", "4", "5"]);
        assert!(!feed.has_next_page());
        assert_eq!(feed.status(), FeedStatus::Ready);
    }

    #[test]
    fn test_no_concurrent_next_page() {
        let mut feed = loaded(vec![page(Some("c1"), &["1"])]);

        let pending = feed.begin_next_page().unwrap();
        assert_eq!(feed.begin_next_page(), None);
        assert_eq!(feed.begin_initial(), None);
        feed.complete(&pending, Ok(page(None, &["2"])));
        assert_eq!(ids(&feed), vec!["1", "2"]);
    }

    #[test]
    fn test_initial_failure_is_error() {
        let mut feed = ImageFeed::new();
        let request = feed.begin_initial().unwrap();
        feed.complete(&request, Err(GalleryError::Transport("offline".into())));
        assert_eq!(feed.status(), FeedStatus::Error);
        assert!(!feed.is_fetching());
    }

    #[test]
    fn test_data_clears_error() {
        let mut feed = ImageFeed::new();
        let request = feed.begin_initial().unwrap();
        feed.complete(&request, Err(GalleryError::Transport("offline".into())));

        let retry = feed.invalidate().unwrap();
        assert_eq!(feed.status(), FeedStatus::Loading);
        assert_eq!(feed.complete(&retry, Ok(page(None, &["1"]))), Completion::Applied);
        assert_eq!(feed.status(), FeedStatus::Ready);
        assert_eq!(ids(&feed), vec!["1"]);
    }

    #[test]
    fn test_next_page_failure_keeps_pages() {
        let mut feed = loaded(vec![page(Some("c1"), &["1"])]);
        let second = feed.begin_next_page().unwrap();
        feed.complete(&second, Err(GalleryError::Status { status: 502, url: "/api/images".into() }));

        assert_eq!(feed.status(), FeedStatus::Error);
        assert_eq!(ids(&feed), vec!["1"]);
        assert_eq!(feed.next_cursor(), Some("c1"));
    }

    #[test]
    fn test_retry_after_next_page_failure_shows_loading() {
        let mut feed = loaded(vec![page(Some("c1"), &["1"])]);
        let second = feed.begin_next_page().unwrap();
        feed.complete(&second, Err(GalleryError::Transport("reset".into())));

        let retry = feed.invalidate().unwrap();
        assert_eq!(feed.status(), FeedStatus::Loading);
        assert!(feed.is_fetching());
        assert_eq!(feed.complete(&retry, Ok(page(Some("c1"), &["1"]))), Completion::Applied);
        assert_eq!(feed.status(), FeedStatus::Ready);
    }

    #[test]
    fn test_invalidate_reloads_every_loaded_page() {
        let mut feed = loaded(vec![
            page(Some("c1"), &["1", "2"]),
            page(Some("c2"), &["3"]),
            page(None, &["4", "5"]),
        ]);

        let first = feed.invalidate().unwrap();
        assert_eq!(first.kind(), FetchKind::Refresh);
        assert_eq!(first.cursor(), None);
        assert!(feed.is_stale());

        let second = continued(feed.complete(&first, Ok(page(Some("n1"), &["new", "1"]))));
        assert_eq!(second.cursor(), Some("n1"));
        // loaded pages stay visible while refreshing
        assert_eq!(feed.status(), FeedStatus::Ready);
        assert_eq!(ids(&feed), vec!["1", "2", "3", "4", "5"]);

        let third = continued(feed.complete(&second, Ok(page(Some("n2"), &["2", "3"]))));
        assert_eq!(third.cursor(), Some("n2"));
        assert_eq!(
            feed.complete(&third, Ok(page(Some("n3"), &["4"]))),
            Completion::Applied
        );

        assert!(!feed.is_stale());
        assert_eq!(feed.pages().len(), 3);
        assert_eq!(ids(&feed), vec!["new", "1", "2", "3", "4"]);
        assert_eq!(feed.next_cursor(), Some("n3"));
    }

    #[test]
    fn test_refresh_stops_when_listing_ends() {
        let mut feed = loaded(vec![page(Some("c1"), &["1"]), page(None, &["2"])]);
        let refresh = feed.invalidate().unwrap();
        assert_eq!(
            feed.complete(&refresh, Ok(page(None, &["1"]))),
            Completion::Applied
        );
        assert_eq!(feed.pages().len(), 1);
        assert!(!feed.has_next_page());
    }

    #[test]
    fn test_refresh_failure_keeps_old_pages() {
        let mut feed = loaded(vec![page(Some("c1"), &["1"]), page(None, &["2"])]);
        let first = feed.invalidate().unwrap();
        let second = continued(feed.complete(&first, Ok(page(Some("n1"), &["0"]))));
        feed.complete(&second, Err(GalleryError::Transport("offline".into())));

        assert_eq!(feed.status(), FeedStatus::Error);
        assert_eq!(ids(&feed), vec!["1", "2"]);
        assert!(!feed.is_fetching());
    }

    #[test]
    fn test_invalidate_supersedes_next_page() {
        let mut feed = loaded(vec![page(Some("c1"), &["1"])]);
        let next = feed.begin_next_page().unwrap();
        let refresh = feed.invalidate().unwrap();

        assert_eq!(feed.complete(&next, Ok(page(None, &["2"]))), Completion::Dropped);
        assert_eq!(
            feed.complete(&refresh, Ok(page(Some("c1"), &["0", "1"]))),
            Completion::Applied
        );
        assert_eq!(ids(&feed), vec!["0", "1"]);
    }

    #[test]
    fn test_invalidate_restarts_running_refresh() {
        let mut feed = loaded(vec![page(Some("c1"), &["1"]), page(None, &["2"])]);
        let first = feed.invalidate().unwrap();
        let restarted = feed.invalidate().unwrap();
        assert_eq!(restarted.cursor(), None);

        assert_eq!(feed.complete(&first, Ok(page(Some("x"), &["old"]))), Completion::Dropped);
        let second = continued(feed.complete(&restarted, Ok(page(Some("n1"), &["new"]))));
        feed.complete(&second, Ok(page(None, &["1", "2"])));
        assert_eq!(ids(&feed), vec!["new", "1", "2"]);
    }

    #[test]
    fn test_invalidate_during_initial_fetch() {
        let mut feed = ImageFeed::new();
        let first = feed.begin_initial().unwrap();
        assert_eq!(feed.invalidate(), None);
        feed.complete(&first, Ok(page(None, &["1"])));
        assert_eq!(feed.images(), vec![image("1")]);
    }
}
