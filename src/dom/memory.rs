//! Headless in-memory DOM.
//!
//! Implements the [`Document`] / [`Element`] seam over a small element tree so
//! features can be bound and driven without a browser. Only what the features
//! observe is modeled: attributes, classes, text and markup, image sources,
//! required/email form validity, event dispatch and viewport scroll resets.
//!
//! Text is stored per element; `inner_text` and `text_content` both return the
//! element's own text followed by its children's, in order.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{Document, Element, EventKind, Handler, ImageSource};
use crate::error::BindError;
use crate::markers;

type SharedHandler = Rc<RefCell<Handler>>;

#[derive(Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    markup: String,
    children: Vec<MemoryElement>,
    handlers: Vec<(EventKind, SharedHandler)>,
}

/// Shared handle to an in-memory element.
#[derive(Clone)]
pub struct MemoryElement {
    node: Rc<RefCell<Node>>,
}

impl std::fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.node.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .field("classes", &node.classes)
            .finish_non_exhaustive()
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        let node = Node { tag: tag.to_owned(), ..Node::default() };
        Self { node: Rc::new(RefCell::new(node)) }
    }

    // --- Builders ---

    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.node.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    /// Add a bare marker attribute such as `[data-sidebar]`.
    #[must_use]
    pub fn with_marker(self, selector: &str) -> Self {
        let name = markers::attribute_of(selector).unwrap_or(selector).to_owned();
        self.with_attr(&name, "")
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.insert_class(class);
        self
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.set_inner_text(text);
        self
    }

    #[must_use]
    pub fn with_html(self, html: &str) -> Self {
        self.set_inner_html(html);
        self
    }

    #[must_use]
    pub fn with_child(self, child: MemoryElement) -> Self {
        self.append(child);
        self
    }

    pub fn append(&self, child: MemoryElement) {
        self.node.borrow_mut().children.push(child);
    }

    // --- Interaction ---

    pub fn tag(&self) -> String {
        self.node.borrow().tag.clone()
    }

    pub fn set_value(&self, value: &str) {
        self.node.borrow_mut().attributes.insert("value".to_owned(), value.to_owned());
    }

    /// Run every handler subscribed to `event`, in subscription order.
    ///
    /// Handlers are collected before running so they may freely mutate this
    /// element, including subscribing further handlers.
    pub fn dispatch(&self, event: EventKind) {
        let handlers: Vec<SharedHandler> = self
            .node
            .borrow()
            .handlers
            .iter()
            .filter(|(kind, _)| *kind == event)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            (handler.borrow_mut())();
        }
    }

    pub fn click(&self) {
        self.dispatch(EventKind::Click);
    }

    /// Set the field value and fire `input`.
    pub fn type_value(&self, value: &str) {
        self.set_value(value);
        self.dispatch(EventKind::Input);
    }

    pub fn listener_count(&self, event: EventKind) -> usize {
        self.node.borrow().handlers.iter().filter(|(kind, _)| *kind == event).count()
    }

    // --- Internals ---

    fn insert_class(&self, class: &str) {
        let mut node = self.node.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_owned());
        }
    }

    fn matches(&self, selector: &str) -> bool {
        markers::attribute_of(selector).is_some_and(|name| self.node.borrow().attributes.contains_key(name))
    }

    fn children(&self) -> Vec<MemoryElement> {
        self.node.borrow().children.clone()
    }

    /// Pre-order walk of the descendants of `self`, excluding `self`.
    fn collect_descendants(&self, selector: &str, out: &mut Vec<MemoryElement>) {
        for child in self.children() {
            if child.matches(selector) {
                out.push(child.clone());
            }
            child.collect_descendants(selector, out);
        }
    }

    fn descendants(&self) -> Vec<MemoryElement> {
        let mut out = Vec::new();
        for child in self.children() {
            out.push(child.clone());
            out.extend(child.descendants());
        }
        out
    }

    fn field_is_valid(&self) -> bool {
        let node = self.node.borrow();
        let value = node.attributes.get("value").map_or("", String::as_str).trim();
        if node.attributes.contains_key("required") && value.is_empty() {
            return false;
        }
        if node.attributes.get("type").is_some_and(|t| t == "email") && !value.is_empty() {
            return is_plausible_email(value);
        }
        true
    }
}

fn is_plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

impl Element for MemoryElement {
    fn toggle_class(&self, class: &str) -> Result<bool, BindError> {
        if self.has_class(class) {
            self.node.borrow_mut().classes.retain(|c| c != class);
            Ok(false)
        } else {
            self.insert_class(class);
            Ok(true)
        }
    }

    fn add_class(&self, class: &str) -> Result<(), BindError> {
        self.insert_class(class);
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), BindError> {
        self.node.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.node.borrow().classes.iter().any(|c| c == class)
    }

    fn inner_text(&self) -> String {
        self.text_content()
    }

    fn set_inner_text(&self, text: &str) {
        let mut node = self.node.borrow_mut();
        node.text = text.to_owned();
        node.markup = escape_text(text);
        node.children.clear();
    }

    fn text_content(&self) -> String {
        let own = self.node.borrow().text.clone();
        self.children().iter().fold(own, |mut acc, child| {
            acc.push_str(&child.text_content());
            acc
        })
    }

    fn inner_html(&self) -> String {
        self.node.borrow().markup.clone()
    }

    fn set_inner_html(&self, html: &str) {
        let mut node = self.node.borrow_mut();
        node.markup = html.to_owned();
        node.text = strip_tags(html);
        node.children.clear();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.node.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), BindError> {
        self.node.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<(), BindError> {
        self.node.borrow_mut().attributes.remove(name);
        Ok(())
    }

    fn image_source(&self) -> Result<ImageSource, BindError> {
        let node = self.node.borrow();
        if node.tag != "img" {
            return Err(BindError::Dom(format!("<{}> is not an image", node.tag)));
        }
        Ok(ImageSource {
            src: node.attributes.get("src").cloned().unwrap_or_default(),
            alt: node.attributes.get("alt").cloned().unwrap_or_default(),
        })
    }

    fn set_image_source(&self, image: &ImageSource) -> Result<(), BindError> {
        if self.node.borrow().tag != "img" {
            return Err(BindError::Dom(format!("<{}> is not an image", self.tag())));
        }
        self.set_attribute("src", &image.src)?;
        self.set_attribute("alt", &image.alt)
    }

    fn check_validity(&self) -> bool {
        if self.node.borrow().tag != "form" {
            return true;
        }
        self.descendants().iter().all(MemoryElement::field_is_valid)
    }

    fn query(&self, selector: &str) -> Option<Self> {
        let mut found = Vec::new();
        self.collect_descendants(selector, &mut found);
        found.into_iter().next()
    }

    fn listen(&self, event: EventKind, handler: Handler) -> Result<(), BindError> {
        self.node.borrow_mut().handlers.push((event, Rc::new(RefCell::new(handler))));
        Ok(())
    }
}

/// In-memory document: an ordered list of root elements.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    roots: Rc<RefCell<Vec<MemoryElement>>>,
    scrolls: Rc<Cell<u32>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, element: MemoryElement) -> MemoryElement {
        self.roots.borrow_mut().push(element.clone());
        element
    }

    /// Number of viewport resets requested so far.
    pub fn scroll_count(&self) -> u32 {
        self.scrolls.get()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn query(&self, selector: &str) -> Option<MemoryElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<MemoryElement> {
        let roots = self.roots.borrow().clone();
        let mut out = Vec::new();
        for root in roots {
            if root.matches(selector) {
                out.push(root.clone());
            }
            root.collect_descendants(selector, &mut out);
        }
        out
    }

    fn scroll_to_top(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;
