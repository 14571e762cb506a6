use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Keeps an `IntersectionObserver` and its JS callback alive together.
/// Dropping it disconnects the observer.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WatchOptions {
    pub threshold: Option<f64>,
    pub root_margin: Option<&'static str>,
}

impl ViewportWatch {
    /// Calls `on_change(is_intersecting, observer)` for every intersection
    /// change of `target`.
    pub fn observe<F>(target: &Element, options: WatchOptions, mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(bool, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(entry.is_intersecting(), &observer);
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        if let Some(threshold) = options.threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
