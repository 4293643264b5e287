//! Selector and attribute vocabulary of the host markup.
//!
//! Every element the crate touches is located through a `data-*` marker
//! attribute. Selectors are attribute-presence selectors only.

/// Class that carries every "shown / selected / open" state.
pub const ACTIVE_CLASS: &str = "active";

/// Attribute toggled on the contact form's submit control.
pub const DISABLED_ATTR: &str = "disabled";

pub const SIDEBAR: &str = "[data-sidebar]";
pub const SIDEBAR_TOGGLE: &str = "[data-sidebar-btn]";

pub const TESTIMONIALS_ITEM: &str = "[data-testimonials-item]";
pub const TESTIMONIALS_AVATAR: &str = "[data-testimonials-avatar]";
pub const TESTIMONIALS_TITLE: &str = "[data-testimonials-title]";
pub const TESTIMONIALS_TEXT: &str = "[data-testimonials-text]";
pub const MODAL_CONTAINER: &str = "[data-modal-container]";
pub const MODAL_CLOSE: &str = "[data-modal-close-btn]";
pub const OVERLAY: &str = "[data-overlay]";
pub const MODAL_IMG: &str = "[data-modal-img]";
pub const MODAL_TITLE: &str = "[data-modal-title]";
pub const MODAL_TEXT: &str = "[data-modal-text]";

pub const SELECT: &str = "[data-select]";
pub const SELECT_ITEM: &str = "[data-select-item]";
/// Display slot for the current filter value. The misspelled marker ships in
/// existing markup and is looked up first.
pub const SELECT_VALUE_FALLBACKS: &[&str] = &["[data-selecct-value]", SELECT_VALUE];
pub const SELECT_VALUE: &str = "[data-select-value]";
pub const FILTER_BTN: &str = "[data-filter-btn]";
pub const FILTER_ITEM: &str = "[data-filter-item]";
pub const CATEGORY_ATTR: &str = "data-category";

pub const FORM: &str = "[data-form]";
pub const FORM_INPUT: &str = "[data-form-input]";
pub const FORM_BTN: &str = "[data-form-btn]";

pub const NAV_LINK: &str = "[data-nav-link]";
pub const PAGE: &str = "[data-page]";
pub const PAGE_ATTR: &str = "data-page";

/// Optional `<script type="application/json">` block holding [`crate::Config`].
pub const CONFIG: &str = "[data-folio-config]";

/// Attribute name inside a `[name]` presence selector.
pub fn attribute_of(selector: &str) -> Option<&str> {
    let name = selector.strip_prefix('[')?.strip_suffix(']')?.trim();
    if name.is_empty() { None } else { Some(name) }
}

#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;
