use crate::FRAME_MS;
use capable_site::motion::{ScrollTween, WheelDeltaMode, WheelTarget};
use capable_site::navigation::{ScrollRequest, Section};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use zoon::{println, *};

/// Non-passive `wheel` listener on the window, so the native scroll step
/// can be cancelled.
pub struct WindowWheelListener {
    callback: Closure<dyn FnMut(web_sys::WheelEvent)>,
}

impl WindowWheelListener {
    fn new(on_wheel: impl FnMut(web_sys::WheelEvent) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(on_wheel) as Box<dyn FnMut(web_sys::WheelEvent)>);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(Self { callback })
    }
}

impl Drop for WindowWheelListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("wheel", self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Eased window scrolling. Starting a new scroll cancels the one in flight.
#[derive(Clone)]
pub struct SmoothScroll {
    duration_ms: u32,
    tween_task: Rc<RefCell<Option<TaskHandle>>>,
    wheel: Rc<Cell<WheelTarget>>,
}

impl SmoothScroll {
    pub fn new(duration_ms: u32, wheel_multiplier: f64) -> Self {
        Self {
            duration_ms,
            tween_task: Rc::default(),
            wheel: Rc::new(Cell::new(WheelTarget::new(wheel_multiplier))),
        }
    }

    /// Takes over mouse wheel scrolling until the listener is dropped.
    /// Pinch zoom (wheel with ctrl) is left to the browser.
    pub fn listen_to_wheel(&self) -> Option<WindowWheelListener> {
        let this = self.clone();
        WindowWheelListener::new(move |event| {
            if event.ctrl_key() {
                return;
            }
            event.prevent_default();
            let Some(window) = web_sys::window() else {
                return;
            };
            let viewport = viewport_height(&window);
            let delta_px = WheelDeltaMode::from_dom(event.delta_mode()).to_pixels(event.delta_y(), viewport);
            this.wheel_by(&window, delta_px);
        })
    }

    fn wheel_by(&self, window: &web_sys::Window, delta_px: f64) {
        let current = window.scroll_y().unwrap_or_default();
        let mut wheel = self.wheel.get();
        let target = wheel.push(current, delta_px, max_scroll(window));
        self.wheel.set(wheel);
        self.tween_to(target);
    }

    pub fn handle(&self, request: ScrollRequest) -> bool {
        match request {
            ScrollRequest::Section(section) => self.scroll_to_section(section),
            ScrollRequest::Top => {
                self.scroll_to_top();
                true
            }
        }
    }

    /// Returns `false` and leaves the page alone when the section is not
    /// rendered.
    pub fn scroll_to_section(&self, section: Section) -> bool {
        let Some(target_y) = section_offset(section.anchor_id()) else {
            println!("[scroll] No element with id '{}'", section.anchor_id());
            return false;
        };
        self.scroll_to(target_y);
        true
    }

    pub fn scroll_to_top(&self) {
        self.scroll_to(0.0);
    }

    fn scroll_to(&self, target_y: f64) {
        self.reset_wheel();
        self.tween_to(target_y);
    }

    fn reset_wheel(&self) {
        let mut wheel = self.wheel.get();
        wheel.reset();
        self.wheel.set(wheel);
    }

    /// Eases from wherever the page is now, so a retarget never jumps.
    fn tween_to(&self, target_y: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let from = window.scroll_y().unwrap_or_default();
        let tween = ScrollTween::new(from, target_y, self.duration_ms);
        let this = self.clone();
        let task = Task::start_droppable(async move {
            let started = js_sys::Date::now();
            loop {
                Timer::sleep(FRAME_MS).await;
                let elapsed = js_sys::Date::now() - started;
                window.scroll_to_with_x_and_y(0.0, tween.position_at(elapsed));
                if tween.is_finished(elapsed) {
                    this.reset_wheel();
                    break;
                }
            }
        });
        // Dropping the previous handle aborts its tween.
        self.tween_task.replace(Some(task));
    }
}

fn viewport_height(window: &web_sys::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or_default()
}

/// How far the window can scroll before the document runs out.
fn max_scroll(window: &web_sys::Window) -> f64 {
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or_default();
    (document_height - viewport_height(window)).max(0.0)
}

/// Document-relative top of the element with `anchor_id`.
pub fn section_offset(anchor_id: &str) -> Option<f64> {
    let window = web_sys::window()?;
    let element = window.document()?.get_element_by_id(anchor_id)?;
    let scroll_y = window.scroll_y().ok()?;
    Some(element.get_bounding_client_rect().top() + scroll_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_anchor_is_ignored() {
        assert_eq!(section_offset("pricing"), None);
        let scroller = SmoothScroll::new(1200, 1.0);
        assert!(!scroller.scroll_to_section(Section::Contact));
        assert!(scroller.tween_task.borrow().is_none());
    }

    #[wasm_bindgen_test]
    fn new_scroll_replaces_the_running_tween() {
        let scroller = SmoothScroll::new(1200, 1.0);
        scroller.scroll_to_top();
        assert!(scroller.tween_task.borrow().is_some());
        assert!(scroller.handle(ScrollRequest::Top));
        assert!(scroller.tween_task.borrow().is_some());
    }

    #[wasm_bindgen_test]
    fn wheel_steps_retarget_and_section_jumps_reset() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let scroller = SmoothScroll::new(1200, 1.0);
        let listener = scroller.listen_to_wheel();
        assert!(listener.is_some());

        scroller.wheel_by(&window, 100.0);
        scroller.wheel_by(&window, -40.0);
        let max = max_scroll(&window);
        let first = (window.scroll_y().unwrap_or_default() + 100.0).clamp(0.0, max);
        assert_eq!(scroller.wheel.get().target(), Some((first - 40.0).clamp(0.0, max)));
        assert!(scroller.tween_task.borrow().is_some());

        scroller.scroll_to_top();
        assert_eq!(scroller.wheel.get().target(), None);
        drop(listener);
    }
}
