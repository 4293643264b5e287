//! Testimonial modal.
//!
//! Every testimonial item opens one shared modal. The modal's image, title
//! and text slots are overwritten on each open. A failure while copying one
//! item's content is logged and leaves the modal untouched for that click
//! only. A modal image slot that is not an image is dropped at bind time, the
//! same as a missing one.

use crate::dom::{Document, Element, EventKind};
use crate::error::{self, BindError, Feature};
use crate::logging::Diagnostics;
use crate::markers::{
    ACTIVE_CLASS, MODAL_CLOSE, MODAL_CONTAINER, MODAL_IMG, MODAL_TEXT, MODAL_TITLE, OVERLAY, TESTIMONIALS_AVATAR,
    TESTIMONIALS_ITEM, TESTIMONIALS_TEXT, TESTIMONIALS_TITLE,
};

pub const FEATURE: Feature = "testimonials";

/// Content slots inside the modal. Any of them may be absent from the markup.
#[derive(Debug, Clone)]
pub struct ModalSlots<E> {
    pub image: Option<E>,
    pub title: Option<E>,
    pub text: Option<E>,
}

/// The modal container and its background overlay, shown and hidden together.
#[derive(Debug, Clone)]
pub struct Modal<E> {
    pub container: E,
    pub overlay: E,
}

impl<E: Element> Modal<E> {
    pub fn toggle(&self) -> Result<(), BindError> {
        self.container.toggle_class(ACTIVE_CLASS)?;
        self.overlay.toggle_class(ACTIVE_CLASS)?;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.container.has_class(ACTIVE_CLASS)
    }
}

/// Copy `item`'s avatar, title markup and body markup into the modal slots.
///
/// Sub-elements missing on either side are skipped. An avatar that is present
/// but not an image is an extraction failure.
pub fn populate<E: Element>(item: &E, slots: &ModalSlots<E>) -> Result<(), BindError> {
    if let (Some(avatar), Some(image)) = (item.query(TESTIMONIALS_AVATAR), &slots.image) {
        let source = avatar
            .image_source()
            .map_err(|err| BindError::Extraction { feature: FEATURE, reason: err.to_string() })?;
        image.set_image_source(&source)?;
    }
    if let (Some(title), Some(slot)) = (item.query(TESTIMONIALS_TITLE), &slots.title) {
        slot.set_inner_html(&title.inner_html());
    }
    if let (Some(text), Some(slot)) = (item.query(TESTIMONIALS_TEXT), &slots.text) {
        slot.set_inner_html(&text.inner_html());
    }
    Ok(())
}

/// Populate the modal from `item`, then open it.
pub fn show<E: Element>(item: &E, slots: &ModalSlots<E>, modal: &Modal<E>) -> Result<(), BindError> {
    populate(item, slots)?;
    modal.toggle()
}

pub fn bind<D: Document>(doc: &D, diag: Diagnostics) -> Result<(), BindError> {
    let items = doc.query_all(TESTIMONIALS_ITEM);
    let (container, close, overlay) = match (doc.query(MODAL_CONTAINER), doc.query(MODAL_CLOSE), doc.query(OVERLAY)) {
        (Some(container), Some(close), Some(overlay)) if !items.is_empty() => (container, close, overlay),
        (container, close, overlay) => {
            return Err(error::missing(
                FEATURE,
                &[
                    (TESTIMONIALS_ITEM, !items.is_empty()),
                    (MODAL_CONTAINER, container.is_some()),
                    (MODAL_CLOSE, close.is_some()),
                    (OVERLAY, overlay.is_some()),
                ],
            ));
        }
    };

    let modal = Modal { container, overlay };
    let image = match doc.query(MODAL_IMG) {
        Some(slot) if slot.image_source().is_err() => {
            diag.warn(format_args!("{MODAL_IMG} is not an image; avatars will not be shown"));
            None
        }
        slot => slot,
    };
    let slots = ModalSlots { image, title: doc.query(MODAL_TITLE), text: doc.query(MODAL_TEXT) };

    for item in &items {
        let (this, slots, modal) = (item.clone(), slots.clone(), modal.clone());
        item.listen(
            EventKind::Click,
            Box::new(move || {
                if let Err(err) = show(&this, &slots, &modal) {
                    diag.error(format_args!("Error showing testimonial modal: {err}"));
                }
            }),
        )?;
    }

    for dismiss in [&close, &modal.overlay] {
        let modal = modal.clone();
        dismiss.listen(
            EventKind::Click,
            Box::new(move || {
                if let Err(err) = modal.toggle() {
                    diag.error(format_args!("Error hiding testimonial modal: {err}"));
                }
            }),
        )?;
    }

    diag.note(format_args!("Testimonials modal ready ({} items)", items.len()));
    Ok(())
}

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod testimonials_test;
