//! Contact form submit gate.
//!
//! The submit control is enabled exactly when the form passes built-in
//! constraint validation, re-checked on every input event.

use crate::dom::{Document, Element, EventKind};
use crate::error::{self, BindError, Feature};
use crate::logging::Diagnostics;
use crate::markers::{DISABLED_ATTR, FORM, FORM_BTN, FORM_INPUT};

pub const FEATURE: Feature = "contact";

/// Enable or disable `submit` from `form`'s validity. Returns the validity.
pub fn sync_submit<E: Element>(form: &E, submit: &E) -> Result<bool, BindError> {
    let valid = form.check_validity();
    if valid {
        submit.remove_attribute(DISABLED_ATTR)?;
    } else {
        submit.set_attribute(DISABLED_ATTR, "")?;
    }
    Ok(valid)
}

pub fn bind<D: Document>(doc: &D, diag: Diagnostics) -> Result<(), BindError> {
    let inputs = doc.query_all(FORM_INPUT);
    let (form, submit) = match (doc.query(FORM), doc.query(FORM_BTN)) {
        (Some(form), Some(submit)) if !inputs.is_empty() => (form, submit),
        (form, submit) => {
            return Err(error::missing(
                FEATURE,
                &[(FORM, form.is_some()), (FORM_INPUT, !inputs.is_empty()), (FORM_BTN, submit.is_some())],
            ));
        }
    };

    for input in &inputs {
        let (form, submit) = (form.clone(), submit.clone());
        input.listen(
            EventKind::Input,
            Box::new(move || {
                if let Err(err) = sync_submit(&form, &submit) {
                    diag.error(format_args!("contact form gate failed: {err}"));
                }
            }),
        )?;
    }
    diag.note(format_args!("Contact form validation ready"));
    Ok(())
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;
