use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub fn is_scrolled_past(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

/// Tracks whether the window is scrolled further than `offset` pixels.
#[hook]
pub fn use_scrolled_past(offset: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(is_scrolled_past(scroll_y, offset));
                                }
                            }
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Failed to attach scroll listener: {:?}", e);
                    }
                    // Initial call
                    if let Ok(scroll_y) = window.scroll_y() {
                        scrolled.set(is_scrolled_past(scroll_y, offset));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    *scrolled
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        if let Err(e) = body.style().set_property("overflow", value) {
            log::debug!("Failed to set body overflow: {:?}", e);
        }
    }
}

/// Stops the page behind an open drawer from scrolling. Released when
/// `locked` goes false and on unmount.
#[hook]
pub fn use_body_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked| {
            set_body_overflow(if *locked { "hidden" } else { "unset" });
            || set_body_overflow("unset")
        },
        locked,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_itself_is_not_scrolled() {
        assert!(!is_scrolled_past(0.0, 20.0));
        assert!(!is_scrolled_past(20.0, 20.0));
        assert!(is_scrolled_past(20.5, 20.0));
    }
}
