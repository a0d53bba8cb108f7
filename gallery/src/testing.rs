use crate::api::{ImageApi, ImageHost};
use crate::error::{GalleryError, Result};
use data::{CreateImageData, Image, ImagesPage};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

pub fn image(id: &str) -> Image {
    Image {
        title: format!("title {id}"),
        description: format!("description {id}"),
        url: format!("https://i.ibb.co/{id}.png"),
        timestamp: 1_620_000_000_000_000.0,
        id: id.to_string(),
    }
}

pub fn page(after: Option<&str>, ids: &[&str]) -> ImagesPage {
    ImagesPage {
        after: after.map(str::to_string),
        data: ids.iter().map(|id| image(id)).collect(),
    }
}

/// Answers list requests from a queue and records every call.
#[derive(Default)]
pub struct FakeApi {
    pub pages: RefCell<VecDeque<Result<ImagesPage>>>,
    pub list_calls: RefCell<Vec<Option<String>>>,
    pub created: RefCell<Vec<CreateImageData>>,
    pub fail_create: Cell<bool>,
}

impl FakeApi {
    pub fn with_pages(pages: Vec<Result<ImagesPage>>) -> Self {
        Self {
            pages: RefCell::new(pages.into()),
            ..Default::default()
        }
    }
}

impl ImageApi for FakeApi {
    async fn list_images(&self, after: Option<&str>) -> Result<ImagesPage> {
        self.list_calls.borrow_mut().push(after.map(str::to_string));
        self.pages
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GalleryError::Transport("no more pages queued".into())))
    }

    async fn create_image(&self, image: &CreateImageData) -> Result<()> {
        self.created.borrow_mut().push(image.clone());
        if self.fail_create.get() {
            return Err(GalleryError::Status {
                status: 500,
                url: "/api/images".into(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeHost {
    pub uploads: Cell<usize>,
    pub fail: Cell<bool>,
}

impl ImageHost for FakeHost {
    type File = String;

    async fn upload(&self, file: &String) -> Result<String> {
        self.uploads.set(self.uploads.get() + 1);
        if self.fail.get() {
            return Err(GalleryError::Upload("host rejected the file".into()));
        }
        Ok(format!("https://i.ibb.co/{file}"))
    }
}
