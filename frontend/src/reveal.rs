//! "Animate once, on first visibility" for section blocks.

use capable_site::motion::RevealLatch;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use zoon::{eprintln, *};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps the observer and its callback alive; disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    fn start(
        element: &web_sys::Element,
        threshold: f64,
        revealed: Mutable<bool>,
    ) -> Result<Self, JsValue> {
        let mut latch = RevealLatch::new();
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if latch.observe(intersecting) {
                    revealed.set_neq(true);
                    observer.disconnect();
                }
            },
        ));

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Sets `revealed` once the element is at least `threshold` visible.
/// Never flips back.
pub fn observe(
    raw_el: RawHtmlEl<web_sys::HtmlElement>,
    threshold: f64,
    revealed: Mutable<bool>,
) -> RawHtmlEl<web_sys::HtmlElement> {
    let slot = Rc::new(RefCell::new(None::<RevealObserver>));
    raw_el
        .after_insert({
            let slot = slot.clone();
            move |element| match RevealObserver::start(&element, threshold, revealed.clone()) {
                Ok(observer) => *slot.borrow_mut() = Some(observer),
                Err(error) => {
                    eprintln!("[reveal] IntersectionObserver failed, showing content: {error:?}");
                    revealed.set_neq(true);
                }
            }
        })
        .after_remove(move |_| drop(slot.borrow_mut().take()))
}
