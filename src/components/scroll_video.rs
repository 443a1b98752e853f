use leptos::html;
use leptos::prelude::*;

/// Hero image sequence scrubbed by page scroll.
///
/// The container is 400vh tall with a sticky canvas inside; scrolling
/// through it walks the frames of [`HERO_SEQUENCE`](crate::scrub::HERO_SEQUENCE).
#[component]
pub fn ScrollVideo() -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let (loaded, set_loaded) = signal(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        match (container_ref.get(), canvas_ref.get()) {
            (Some(container), Some(canvas)) => {
                player::start(container.into(), canvas, set_loaded);
                true
            }
            _ => false,
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = set_loaded;

    view! {
        <div node_ref=container_ref class="scroll-video" style="height: 400vh">
            <div class="scroll-video-stage">
                <Show when=move || !loaded.get()>
                    <div class="scroll-video-loading">
                        <div class="spinner"></div>
                        <span>"Loading"</span>
                    </div>
                </Show>

                <canvas node_ref=canvas_ref class="scroll-video-canvas"></canvas>

                // Fades the last frame into the page background
                <div class="scroll-video-fade"></div>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod player {
    use std::{cell::Cell, rc::Rc};

    use leptos::prelude::*;
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::{
        AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement,
        HtmlImageElement, Window,
    };

    use crate::scrub::{cover_fit, scroll_progress, HERO_SEQUENCE};

    struct Player {
        window: Window,
        container: HtmlElement,
        canvas: HtmlCanvasElement,
        frames: Vec<HtmlImageElement>,
        current: Cell<usize>,
        pending_frame: Cell<Option<i32>>,
    }

    /// Preloads every frame, then wires scroll and resize listeners. The
    /// listeners live as long as the page.
    pub fn start(container: HtmlElement, canvas: HtmlCanvasElement, set_loaded: WriteSignal<bool>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let frames: Vec<HtmlImageElement> = (0..HERO_SEQUENCE.total_frames)
            .filter_map(|_| HtmlImageElement::new().ok())
            .collect();

        let player = Rc::new(Player {
            window,
            container,
            canvas,
            frames,
            current: Cell::new(0),
            pending_frame: Cell::new(None),
        });

        // A frame that fails to load still counts, so the hero never hangs
        // on the spinner.
        let remaining = Rc::new(Cell::new(player.frames.len()));
        let settle: Rc<dyn Fn()> = {
            let player = Rc::clone(&player);
            Rc::new(move || {
                remaining.set(remaining.get().saturating_sub(1));
                if remaining.get() == 0 {
                    set_loaded.set(true);
                    player.draw(0);
                    Player::listen(&player);
                }
            })
        };

        for (index, img) in player.frames.iter().enumerate() {
            for set_handler in [HtmlElement::set_onload, HtmlElement::set_onerror] {
                let settle = Rc::clone(&settle);
                let handler = Closure::<dyn FnMut()>::new(move || settle());
                set_handler(&**img, Some(handler.as_ref().unchecked_ref()));
                handler.forget();
            }
            img.set_src(&HERO_SEQUENCE.frame_src(index));
        }
    }

    impl Player {
        fn viewport(&self) -> (f64, f64) {
            let width = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        }

        fn draw(&self, index: usize) {
            let Some(img) = self.frames.get(index) else {
                return;
            };
            if img.natural_width() == 0 || img.natural_height() == 0 {
                return;
            }
            let Some(ctx) = self
                .canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            else {
                return;
            };

            let dpr = match self.window.device_pixel_ratio() {
                r if r > 0.0 => r,
                _ => 1.0,
            };
            let (width, height) = self.viewport();

            // Resizing the backing store also resets the transform
            self.canvas.set_width((width * dpr) as u32);
            self.canvas.set_height((height * dpr) as u32);
            let style = self.canvas.style();
            let _ = style.set_property("width", &format!("{width}px"));
            let _ = style.set_property("height", &format!("{height}px"));
            let _ = ctx.scale(dpr, dpr);

            let rect = cover_fit(
                img.natural_width() as f64,
                img.natural_height() as f64,
                width,
                height,
            );
            ctx.clear_rect(0.0, 0.0, width, height);
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            );
        }

        fn listen(player: &Rc<Self>) {
            let on_scroll = {
                let player = Rc::clone(player);
                Closure::<dyn FnMut()>::new(move || Player::on_scroll(&player))
            };
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            let _ = player
                .window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    on_scroll.as_ref().unchecked_ref(),
                    &options,
                );
            on_scroll.forget();

            let on_resize = {
                let player = Rc::clone(player);
                Closure::<dyn FnMut()>::new(move || player.draw(player.current.get()))
            };
            let _ = player
                .window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            on_resize.forget();

            Player::on_scroll(player);
        }

        fn on_scroll(player: &Rc<Self>) {
            let rect = player.container.get_bounding_client_rect();
            let (_, viewport_height) = player.viewport();
            let progress = scroll_progress(
                rect.top(),
                player.container.offset_height() as f64,
                viewport_height,
            );
            let index = HERO_SEQUENCE.frame_for_progress(progress);
            if index == player.current.get() {
                return;
            }
            player.current.set(index);

            if let Some(handle) = player.pending_frame.take() {
                let _ = player.window.cancel_animation_frame(handle);
            }
            let next = Rc::clone(player);
            let callback = Closure::once_into_js(move || {
                next.pending_frame.set(None);
                next.draw(index);
            });
            if let Ok(handle) = player
                .window
                .request_animation_frame(callback.unchecked_ref())
            {
                player.pending_frame.set(Some(handle));
            }
        }
    }
}
