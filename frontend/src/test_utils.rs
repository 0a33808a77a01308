//! Browser test helpers for mounting components into a throwaway root.
//!
//! [`TestRoot`] removes its element from the page when dropped, so a failing
//! test never leaves markup behind for the next one.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, EventTarget, HtmlElement};
use yew::Callback;

pub struct TestRoot {
    element: Element,
}

impl TestRoot {
    pub fn new() -> Self {
        let element = gloo::utils::document()
            .create_element("div")
            .expect("create test root");
        gloo::utils::body()
            .append_child(&element)
            .expect("attach test root");
        Self { element }
    }

    /// Element to hand to `yew::Renderer::with_root_and_props`
    pub fn element(&self) -> Element {
        self.element.clone()
    }

    pub fn find(&self, selector: &str) -> Option<Element> {
        self.element.query_selector(selector).expect("valid selector")
    }

    pub fn count(&self, selector: &str) -> u32 {
        self.element
            .query_selector_all(selector)
            .expect("valid selector")
            .length()
    }

    pub fn text(&self, selector: &str) -> String {
        self.find(selector)
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    }

    /// Clicks the first match the way a user would; disabled buttons swallow it
    pub fn click(&self, selector: &str) {
        let element = self.find(selector).unwrap_or_else(|| panic!("no element matches {selector}"));
        element.unchecked_into::<HtmlElement>().click();
    }

    /// Clicks every match in document order and returns how many there were
    pub fn click_all(&self, selector: &str) -> u32 {
        let nodes = self
            .element
            .query_selector_all(selector)
            .expect("valid selector");
        for index in 0..nodes.length() {
            if let Some(node) = nodes.item(index) {
                node.unchecked_into::<HtmlElement>().click();
            }
        }
        nodes.length()
    }
}

impl Drop for TestRoot {
    fn drop(&mut self) {
        self.element.remove();
    }
}

/// Lets the Yew scheduler finish rendering and running effects
pub async fn settle() {
    TimeoutFuture::new(10).await;
}

/// Dispatches a bubbling `pointerdown` at `target`
pub fn pointer_down(target: &EventTarget) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("pointerdown", &init).expect("create pointerdown");
    target.dispatch_event(&event).expect("dispatch pointerdown");
}

/// Callback that records every value it receives
pub fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, Callback<T>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let callback = {
        let calls = calls.clone();
        Callback::from(move |value: T| calls.borrow_mut().push(value))
    };
    (calls, callback)
}
