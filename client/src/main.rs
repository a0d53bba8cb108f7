mod api;
mod app;
mod file_input;
mod header;
mod image_card;
mod image_feed;
mod image_grid;
mod image_modal;
mod status_views;
mod text_input;
mod toast;
mod upload_form;
mod upload_modal;

use crate::app::App;
use leptos::mount::mount_to_body;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("could not install console logger: {err}");
    }
    mount_to_body(App);
}
