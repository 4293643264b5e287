//! Host DOM seam.
//!
//! Features are written against these traits so the same binding code drives
//! the browser (`crate::web`, behind `hydrate`) and the headless
//! [`memory`] host used by tests.
//!
//! DESIGN
//! ======
//! Element handles are cheap clones of a shared node, the way `web_sys`
//! handles are. Handlers capture the handles they need and live for the rest
//! of the page; there is no unsubscribe.

use crate::error::BindError;

pub mod memory;

/// Input events the features subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
        }
    }
}

/// Source and alternate text of an image element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSource {
    pub src: String,
    pub alt: String,
}

pub type Handler = Box<dyn FnMut()>;

/// Whether a `document.readyState` value means the markup has been parsed.
///
/// Only `"loading"` precedes `DOMContentLoaded`; `"interactive"` and
/// `"complete"` come after it.
pub fn content_ready(ready_state: &str) -> bool {
    ready_state != "loading"
}

pub trait Element: Clone + 'static {
    /// Flip `class`; returns whether it is now present.
    fn toggle_class(&self, class: &str) -> Result<bool, BindError>;
    fn add_class(&self, class: &str) -> Result<(), BindError>;
    fn remove_class(&self, class: &str) -> Result<(), BindError>;
    fn has_class(&self, class: &str) -> bool;

    /// Rendered text (`innerText`).
    fn inner_text(&self) -> String;
    fn set_inner_text(&self, text: &str);
    /// Raw text of the subtree (`textContent`).
    fn text_content(&self) -> String;
    fn inner_html(&self) -> String;
    fn set_inner_html(&self, html: &str);

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), BindError>;
    fn remove_attribute(&self, name: &str) -> Result<(), BindError>;

    /// Fails when the element is not an image.
    fn image_source(&self) -> Result<ImageSource, BindError>;
    fn set_image_source(&self, image: &ImageSource) -> Result<(), BindError>;

    /// Built-in constraint validation. Elements that are not forms are valid.
    fn check_validity(&self) -> bool;

    /// First descendant matching `selector`.
    fn query(&self, selector: &str) -> Option<Self>;

    /// Subscribe `handler` to `event` for the lifetime of the page.
    fn listen(&self, event: EventKind, handler: Handler) -> Result<(), BindError>;
}

pub trait Document: Clone + 'static {
    type Element: Element;

    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// All matches in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// First selector in `selectors` that matches anything wins.
    fn query_first(&self, selectors: &[&str]) -> Option<Self::Element> {
        selectors.iter().find_map(|sel| self.query(sel))
    }

    fn scroll_to_top(&self);
}
