use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, Window};

use crate::error::{EnhanceError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(EnhanceError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(EnhanceError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(EnhanceError::NoBody)
}

/// All matches for `selector` that cast to `T`, in document order.
/// An invalid selector yields nothing.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query_one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// An intersection observer together with the closure it calls back into.
/// Disconnects on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, callback: F) -> Result<Self>
    where
        F: FnMut(js_sys::Array, IntersectionObserver) + 'static,
    {
        let callback =
            Closure::wrap(Box::new(callback) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&threshold.into());
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Iterates the entries handed to an intersection callback.
pub fn intersection_entries(entries: &js_sys::Array) -> impl Iterator<Item = web_sys::IntersectionObserverEntry> + '_ {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
}
