//! Single-page navigation.
//!
//! Clicking a nav link activates that link and the page section whose
//! `data-page` key equals the link's trimmed, lower-cased text. Matching is
//! by visible text, so renaming a link without its page key breaks it.

use std::rc::Rc;

use crate::dom::{Document, Element, EventKind};
use crate::error::{self, BindError, Feature};
use crate::group;
use crate::logging::Diagnostics;
use crate::markers::{NAV_LINK, PAGE, PAGE_ATTR};

pub const FEATURE: Feature = "navigation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// `pages[page]` is now the only active section.
    Activated { page: usize },
    /// No section carries `target` as its key; all sections are inactive.
    Unmatched { target: String },
}

/// Page key a nav link points at.
pub fn target_key<E: Element>(link: &E) -> String {
    link.text_content().trim().to_lowercase()
}

/// Reset both groups, then activate `links[clicked]` and its page.
///
/// When several sections share a key, the first in document order wins.
pub fn navigate<E: Element>(links: &[E], pages: &[E], clicked: usize) -> Result<NavOutcome, BindError> {
    group::deactivate_all(pages)?;
    group::activate_only(links, clicked)?;

    let target = links.get(clicked).map(target_key).unwrap_or_default();
    let matched = pages.iter().position(|page| page.attribute(PAGE_ATTR).is_some_and(|key| key == target));
    match matched {
        Some(index) => {
            group::activate_only(pages, index)?;
            Ok(NavOutcome::Activated { page: index })
        }
        None => Ok(NavOutcome::Unmatched { target }),
    }
}

pub fn bind<D: Document>(doc: &D, diag: Diagnostics) -> Result<(), BindError> {
    let links = Rc::new(doc.query_all(NAV_LINK));
    let pages = Rc::new(doc.query_all(PAGE));
    if links.is_empty() || pages.is_empty() {
        return Err(error::missing(FEATURE, &[(NAV_LINK, !links.is_empty()), (PAGE, !pages.is_empty())]));
    }

    for (index, link) in links.iter().enumerate() {
        let (host, links, pages) = (doc.clone(), Rc::clone(&links), Rc::clone(&pages));
        link.listen(
            EventKind::Click,
            Box::new(move || match navigate(links.as_slice(), pages.as_slice(), index) {
                Ok(NavOutcome::Activated { .. }) => host.scroll_to_top(),
                Ok(NavOutcome::Unmatched { target }) => {
                    diag.warn(format_args!("{}", BindError::NoPageMatch { target }));
                }
                Err(err) => diag.error(format_args!("navigation failed: {err}")),
            }),
        )?;
    }
    diag.note(format_args!("Page navigation ready"));
    Ok(())
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;
