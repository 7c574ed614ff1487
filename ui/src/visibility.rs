//! Viewport visibility trigger backed by the browser `IntersectionObserver`.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    // Keeps the JS callback alive for as long as the observer is attached.
    _callback:
        wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches the element identified by `target_id` and sends one message on
/// `on_visible` each time it enters the viewport.
///
/// Whenever `target_id` changes, the previous observer is disconnected and a
/// fresh one attaches to the new element — the feed points this at whichever
/// card is currently last, so the trigger follows the tail as the list grows.
/// Observer options stay at their defaults (whole viewport, zero threshold).
///
/// Only does anything on wasm32; on native builds it is a no-op, the same way
/// the rest of the workspace gates its browser APIs.
pub fn use_visibility_trigger(target_id: Memo<Option<String>>, on_visible: Coroutine<()>) {
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let handle: Rc<RefCell<Option<ObserverHandle>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        let attach = handle.clone();
        use_effect(move || {
            // Effects run after the DOM is committed, so the new tail card
            // is already in the document. Dropping the old handle
            // disconnects its observer.
            attach.borrow_mut().take();

            let Some(id) = target_id() else { return };
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(element) = document.get_element_by_id(&id) else {
                tracing::warn!("visibility target #{id} is not in the document");
                return;
            };

            let callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)> =
                Closure::new(move |entries: js_sys::Array, _observer| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            on_visible.send(());
                        }
                    }
                });

            match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(observer) => {
                    observer.observe(&element);
                    *attach.borrow_mut() = Some(ObserverHandle {
                        observer,
                        _callback: callback,
                    });
                }
                Err(err) => {
                    tracing::error!("failed to create IntersectionObserver: {err:?}");
                }
            }
        });

        use_drop(move || {
            handle.borrow_mut().take();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (target_id, on_visible);
}
