use data::{CreateImageData, HostedUpload, ImagesPage};
use gallery::{ClientConfig, GalleryError, ImageApi, ImageHost, Result};
use gloo_net::http::{Request, Response};
use log::trace;
use std::sync::Arc;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// The external services the gallery talks to, shared through the reactive context.
#[derive(Clone)]
pub struct GalleryServices {
    pub config: Arc<ClientConfig>,
    pub api: HttpImageApi,
    pub host: HttpImageHost,
}

impl GalleryServices {
    pub fn new(config: ClientConfig) -> Self {
        let config = Arc::new(config);
        Self {
            api: HttpImageApi {
                config: config.clone(),
            },
            host: HttpImageHost {
                config: config.clone(),
            },
            config,
        }
    }
}

#[derive(Clone)]
pub struct HttpImageApi {
    config: Arc<ClientConfig>,
}

impl ImageApi for HttpImageApi {
    async fn list_images(&self, after: Option<&str>) -> Result<ImagesPage> {
        let url = self.config.list_images_url(after);
        trace!("GET {url}");
        let response = Request::get(&url).send().await.map_err(transport)?;
        let response = ensure_ok(response, &url)?;
        response.json::<ImagesPage>().await.map_err(decode)
    }

    async fn create_image(&self, image: &CreateImageData) -> Result<()> {
        let url = self.config.images_url();
        trace!("POST {url}");
        let response = Request::post(&url)
            .json(image)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(response, &url)?;
        Ok(())
    }
}

/// Uploads files as multipart form data to an imgbb compatible host.
#[derive(Clone)]
pub struct HttpImageHost {
    config: Arc<ClientConfig>,
}

impl ImageHost for HttpImageHost {
    type File = File;

    async fn upload(&self, file: &File) -> Result<String> {
        let endpoint = self.config.upload_endpoint()?;
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob("image", file).map_err(js_error)?;

        let response = Request::post(&endpoint)
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let response = ensure_ok(response, &self.config.upload_url)?;
        let hosted: HostedUpload = response.json().await.map_err(decode)?;
        Ok(hosted.data.url)
    }
}

fn ensure_ok(response: Response, url: &str) -> Result<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(GalleryError::Status {
            status: response.status(),
            url: url.to_string(),
        })
    }
}

fn transport(err: gloo_net::Error) -> GalleryError {
    GalleryError::Transport(err.to_string())
}

fn decode(err: gloo_net::Error) -> GalleryError {
    GalleryError::Decode(err.to_string())
}

fn js_error(err: JsValue) -> GalleryError {
    GalleryError::Upload(format!("{err:?}"))
}
