//! Category filter driven by a custom select and a row of filter buttons.
//!
//! The select and the buttons both write the chosen label into a shared
//! display slot and apply the same filter. Item visibility after any choice
//! is `category == chosen || chosen == "all"`, compared lower-cased.

use std::rc::Rc;

use crate::dom::{Document, Element, EventKind};
use crate::error::{self, BindError, Feature};
use crate::group::LastActive;
use crate::logging::Diagnostics;
use crate::markers::{
    ACTIVE_CLASS, CATEGORY_ATTR, FILTER_BTN, FILTER_ITEM, SELECT, SELECT_ITEM, SELECT_VALUE, SELECT_VALUE_FALLBACKS,
};

pub const FEATURE: Feature = "filter";

/// Filter value that shows every item.
pub const ALL: &str = "all";

/// Lower-case the requested value, substituting [`ALL`] for an empty one.
pub fn normalize(requested: &str) -> String {
    if requested.is_empty() { ALL.to_owned() } else { requested.to_lowercase() }
}

/// Whether an item tagged `category` stays shown under filter `value`. Case-insensitive.
pub fn is_visible(category: &str, value: &str) -> bool {
    let value = value.to_lowercase();
    value == ALL || category.to_lowercase() == value
}

/// Mark each item visible or hidden for `requested`.
///
/// Returns the normalized value, or `None` when there is nothing to filter.
pub fn apply_filter<E: Element>(items: &[E], requested: &str) -> Result<Option<String>, BindError> {
    if items.is_empty() {
        return Ok(None);
    }
    let value = normalize(requested);
    for item in items {
        let category = item.attribute(CATEGORY_ATTR).unwrap_or_default();
        if is_visible(&category, &value) {
            item.add_class(ACTIVE_CLASS)?;
        } else {
            item.remove_class(ACTIVE_CLASS)?;
        }
    }
    Ok(Some(value))
}

/// Which parts of the filter UI were wired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterBinding {
    pub select_toggle: bool,
    pub select_options: bool,
    pub buttons: bool,
}

impl FilterBinding {
    pub fn any(self) -> bool {
        self.select_toggle || self.select_options || self.buttons
    }
}

struct Shared<E> {
    items: Vec<E>,
    display: Option<E>,
    diag: Diagnostics,
}

impl<E: Element> Shared<E> {
    /// Show `label` in the display slot and filter by it.
    fn choose(&self, label: &str) -> Result<(), BindError> {
        if let Some(display) = &self.display {
            display.set_inner_text(label);
        }
        if let Some(value) = apply_filter(&self.items, &label.to_lowercase())? {
            self.diag.note(format_args!("filter applied: {value}"));
        }
        Ok(())
    }
}

pub fn bind<D: Document>(doc: &D, diag: Diagnostics) -> Result<FilterBinding, BindError> {
    let select = doc.query(SELECT);
    let options = doc.query_all(SELECT_ITEM);
    let buttons = doc.query_all(FILTER_BTN);
    let shared = Rc::new(Shared { items: doc.query_all(FILTER_ITEM), display: doc.query_first(SELECT_VALUE_FALLBACKS), diag });
    let mut binding = FilterBinding::default();

    if let Some(select) = &select {
        let this = select.clone();
        select.listen(
            EventKind::Click,
            Box::new(move || {
                if let Err(err) = this.toggle_class(ACTIVE_CLASS) {
                    diag.error(format_args!("select toggle failed: {err}"));
                }
            }),
        )?;
        binding.select_toggle = true;
    }

    if !options.is_empty() && shared.display.is_some() {
        for option in &options {
            let (this, select, shared) = (option.clone(), select.clone(), Rc::clone(&shared));
            option.listen(
                EventKind::Click,
                Box::new(move || {
                    let label = this.inner_text().trim().to_owned();
                    let closed = match &select {
                        Some(select) => select.remove_class(ACTIVE_CLASS),
                        None => Ok(()),
                    };
                    if let Err(err) = closed.and_then(|()| shared.choose(&label)) {
                        diag.error(format_args!("select option failed: {err}"));
                    }
                }),
            )?;
        }
        binding.select_options = true;
    } else {
        diag.note(format_args!("Select elements missing or selectValue missing"));
    }

    if !buttons.is_empty() {
        let buttons = Rc::new(buttons);
        let last = Rc::new(LastActive::new());
        for (index, button) in buttons.iter().enumerate() {
            let (this, group, last, shared) = (button.clone(), Rc::clone(&buttons), Rc::clone(&last), Rc::clone(&shared));
            button.listen(
                EventKind::Click,
                Box::new(move || {
                    let label = this.inner_text().trim().to_owned();
                    if let Err(err) = shared.choose(&label).and_then(|()| last.move_to(group.as_slice(), index)) {
                        diag.error(format_args!("filter button failed: {err}"));
                    }
                }),
            )?;
        }
        binding.buttons = true;
    }

    if binding.any() {
        diag.note(format_args!("Filter ready: {binding:?}"));
        Ok(binding)
    } else {
        Err(error::missing(
            FEATURE,
            &[
                (SELECT, select.is_some()),
                (SELECT_ITEM, !options.is_empty()),
                (SELECT_VALUE, shared.display.is_some()),
                (FILTER_BTN, false),
            ],
        ))
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
