use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{MouseEvent, WheelEvent};

const MIN_SCALE: f64 = 0.5;
const MAX_SCALE: f64 = 5.0;

/// Full screen view of one image. Wheel zooms around the cursor, dragging pans.
#[component]
pub fn ImageModal(image_url: String, on_close: impl Fn() + 'static) -> impl IntoView {
    let (scale, set_scale) = signal(1.0_f64);
    let (offset, set_offset) = signal((0.0_f64, 0.0_f64));
    let container_ref = NodeRef::<Div>::new();
    let is_dragging = RwSignal::new(false);
    let (last_mouse_pos, set_last_mouse_pos) = signal((0.0, 0.0));

    let on_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        let scale_factor: f64 = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };

        if let Some(container) = container_ref.get() {
            let rect = container.get_bounding_client_rect();
            let mouse_x = ev.client_x() as f64 - rect.left();
            let mouse_y = ev.client_y() as f64 - rect.top();

            let old_scale = scale.get();
            let new_scale = (old_scale * scale_factor).clamp(MIN_SCALE, MAX_SCALE);
            // keep the point under the cursor fixed, using the clamped factor
            let applied = new_scale / old_scale;

            let (ox, oy) = offset.get();
            set_offset.set((
                (ox - mouse_x) * applied + mouse_x,
                (oy - mouse_y) * applied + mouse_y,
            ));
            set_scale.set(new_scale);
        }
    };

    let on_mouse_down = move |ev: MouseEvent| {
        ev.prevent_default();
        is_dragging.set(true);
        set_last_mouse_pos.set((ev.client_x() as f64, ev.client_y() as f64));
    };

    let on_mouse_move = move |ev: MouseEvent| {
        if is_dragging.get() {
            let (last_x, last_y) = last_mouse_pos.get();
            let dx = ev.client_x() as f64 - last_x;
            let dy = ev.client_y() as f64 - last_y;
            let (ox, oy) = offset.get();
            set_offset.set((ox + dx, oy + dy));
            set_last_mouse_pos.set((ev.client_x() as f64, ev.client_y() as f64));
        }
    };

    let on_mouse_up = move |_: MouseEvent| {
        is_dragging.set(false);
    };

    view! {
        <div
            style="
                position: fixed;
                top: 0; left: 0; right: 0; bottom: 0;
                background-color: rgba(0,0,0,0.8);
                display: flex;
                flex-direction: column;
                z-index: 1000;
            "
            on:click=move |_| on_close()
        >
            <div
                node_ref=container_ref
                style="flex: 1; position: relative; overflow: hidden; cursor: grab;"
                on:wheel=on_wheel
                on:mousemove=on_mouse_move
                on:mouseup=on_mouse_up
                on:mouseleave=move |_: MouseEvent| is_dragging.set(false)
                on:mousedown=on_mouse_down
                on:click=move |ev: MouseEvent| ev.stop_propagation()
            >
                <img
                    src=image_url.clone()
                    draggable="false"
                    style=move || {
                        let (ox, oy) = offset.get();
                        let s = scale.get();
                        format!(
                            "\
                            transform: translate({}px, {}px) scale({});\
                            transform-origin: 0 0;\
                            user-select: none;\
                            pointer-events: none;\
                            position: absolute;\
                            top: 0; left: 0;\
                            max-width: 900px;\
                            max-height: 600px;\
                            ",
                            ox, oy, s
                        )
                    }
                />
            </div>
            <div
                style="padding: 0.75rem 1rem; background-color: #2d2d33;"
                on:click=move |ev: MouseEvent| ev.stop_propagation()
            >
                <a href=image_url target="_blank" rel="noopener noreferrer" style="color: white;">
                    "Open original"
                </a>
            </div>
        </div>
    }
}
