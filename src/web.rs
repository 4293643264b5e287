//! Browser implementation of the DOM seam and the WASM entry point.
//!
//! Handlers are wrapped in `Closure`s and leaked with `forget`; they live as
//! long as the page, which is the lifetime of every subscription here.

use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlFormElement, HtmlImageElement};

use crate::app;
use crate::config::Config;
use crate::dom::{self, Document, Element, EventKind, Handler, ImageSource};
use crate::error::BindError;
use crate::logging::{self, TARGET};

static BOOTED: AtomicBool = AtomicBool::new(false);

fn js_error(err: JsValue) -> BindError {
    BindError::Dom(format!("{err:?}"))
}

/// `web_sys::Element` behind the [`Element`] seam.
#[derive(Debug, Clone)]
pub struct WebElement(web_sys::Element);

impl Element for WebElement {
    fn toggle_class(&self, class: &str) -> Result<bool, BindError> {
        self.0.class_list().toggle(class).map_err(js_error)
    }

    fn add_class(&self, class: &str) -> Result<(), BindError> {
        self.0.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&self, class: &str) -> Result<(), BindError> {
        self.0.class_list().remove_1(class).map_err(js_error)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn inner_text(&self) -> String {
        match self.0.dyn_ref::<HtmlElement>() {
            Some(html) => html.inner_text(),
            None => self.text_content(),
        }
    }

    fn set_inner_text(&self, text: &str) {
        match self.0.dyn_ref::<HtmlElement>() {
            Some(html) => html.set_inner_text(text),
            None => self.0.set_text_content(Some(text)),
        }
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), BindError> {
        self.0.set_attribute(name, value).map_err(js_error)
    }

    fn remove_attribute(&self, name: &str) -> Result<(), BindError> {
        self.0.remove_attribute(name).map_err(js_error)
    }

    fn image_source(&self) -> Result<ImageSource, BindError> {
        let Some(img) = self.0.dyn_ref::<HtmlImageElement>() else {
            return Err(BindError::Dom(format!("<{}> is not an image", self.0.tag_name().to_lowercase())));
        };
        Ok(ImageSource { src: img.src(), alt: img.alt() })
    }

    fn set_image_source(&self, image: &ImageSource) -> Result<(), BindError> {
        let Some(img) = self.0.dyn_ref::<HtmlImageElement>() else {
            return Err(BindError::Dom(format!("<{}> is not an image", self.0.tag_name().to_lowercase())));
        };
        img.set_src(&image.src);
        img.set_alt(&image.alt);
        Ok(())
    }

    fn check_validity(&self) -> bool {
        self.0.dyn_ref::<HtmlFormElement>().map_or(true, HtmlFormElement::check_validity)
    }

    fn query(&self, selector: &str) -> Option<Self> {
        match self.0.query_selector(selector) {
            Ok(found) => found.map(WebElement),
            Err(err) => {
                log::warn!(target: TARGET, "bad selector {selector}: {err:?}");
                None
            }
        }
    }

    fn listen(&self, event: EventKind, handler: Handler) -> Result<(), BindError> {
        let closure = Closure::<dyn FnMut()>::wrap(handler);
        self.0
            .add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        closure.forget();
        Ok(())
    }
}

/// The live page behind the [`Document`] seam.
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebDocument {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn query(&self, selector: &str) -> Option<WebElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(WebElement),
            Err(err) => {
                log::warn!(target: TARGET, "bad selector {selector}: {err:?}");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!(target: TARGET, "bad selector {selector}: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned())
            .map(WebElement)
            .collect()
    }

    fn scroll_to_top(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Read config, install logging, bind every feature. Runs at most once.
pub fn boot(host: &WebDocument) {
    if BOOTED.swap(true, Ordering::SeqCst) {
        return;
    }
    match Config::from_document(host) {
        Ok(config) => {
            logging::install(config);
            app::init(host, config);
        }
        Err(err) => {
            let config = Config::default();
            logging::install(config);
            log::warn!(target: TARGET, "ignoring page config: {err}");
            app::init(host, config);
        }
    }
}

/// WASM entry point: bind once the structural content has been parsed.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(host) = WebDocument::current() else {
        return;
    };
    if dom::content_ready(&host.document.ready_state()) {
        boot(&host);
        return;
    }
    let target = host.document.clone();
    let on_ready = Closure::once_into_js(move || boot(&host));
    if let Err(err) = target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        web_sys::console::error_1(&format!("[folio] could not wait for DOMContentLoaded: {err:?}").into());
    }
}
