use data::Image;
use leptos::prelude::*;

#[component]
pub fn ImageCard(image: Image, on_view: impl Fn(String) + 'static + Copy) -> impl IntoView {
    let Image {
        title,
        description,
        url,
        ..
    } = image;
    let url_for_click = url.clone();

    view! {
        <div
            style="
                border-radius: 8px;
                background-color: #2d2d33;
                height: 340px;
                display: flex;
                flex-direction: column;
                overflow: hidden;
            "
        >
            <div style="
                height: 250px;
                display: flex;
                align-items: center;
                justify-content: center;
                overflow: hidden;
                cursor: pointer;
                background-color: #161618;
            ">
                <img
                    src=url
                    alt=title.clone()
                    style="
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        display: block;
                    "
                    on:click=move |_| on_view(url_for_click.clone())
                />
            </div>
            <div style="padding: 1rem 1.5rem;">
                <h2 style="margin: 0; font-size: 1.25rem;">{title}</h2>
                <p style="margin: 0.5rem 0 0; color: #bdbdc7;">{description}</p>
            </div>
        </div>
    }
}
