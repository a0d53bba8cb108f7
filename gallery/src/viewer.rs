/// Which image the viewer modal shows.
///
/// Closing keeps the last URL around until another card is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerState {
    url: String,
    open: bool,
}

impl ViewerState {
    pub fn view(&mut self, url: impl Into<String>) {
        self.url = url.into();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
