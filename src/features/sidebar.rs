//! Sidebar show/hide toggle.

use crate::dom::{Document, Element, EventKind};
use crate::error::{self, BindError, Feature};
use crate::logging::Diagnostics;
use crate::markers::{ACTIVE_CLASS, SIDEBAR, SIDEBAR_TOGGLE};

pub const FEATURE: Feature = "sidebar";

pub fn bind<D: Document>(doc: &D, diag: Diagnostics) -> Result<(), BindError> {
    let (panel, toggle) = match (doc.query(SIDEBAR), doc.query(SIDEBAR_TOGGLE)) {
        (Some(panel), Some(toggle)) => (panel, toggle),
        (panel, toggle) => {
            return Err(error::missing(FEATURE, &[(SIDEBAR, panel.is_some()), (SIDEBAR_TOGGLE, toggle.is_some())]));
        }
    };

    toggle.listen(
        EventKind::Click,
        Box::new(move || {
            if let Err(err) = panel.toggle_class(ACTIVE_CLASS) {
                diag.error(format_args!("sidebar toggle failed: {err}"));
            }
        }),
    )?;
    diag.note(format_args!("Sidebar toggle ready"));
    Ok(())
}

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;
