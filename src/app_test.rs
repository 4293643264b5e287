use super::*;
use crate::dom::memory::{MemoryDocument, MemoryElement};
use crate::markers;

#[test]
fn empty_page_skips_every_feature() {
    let report = init(&MemoryDocument::new(), Config::default());
    assert_eq!(report.entries().len(), 5);
    assert_eq!(report.bound_count(), 0);
    for (_, status) in report.entries() {
        assert!(matches!(status, FeatureStatus::Skipped(err) if err.is_missing()));
    }
}

#[test]
fn features_bind_independently() {
    let doc = MemoryDocument::new();
    doc.append(MemoryElement::new("aside").with_marker(markers::SIDEBAR));
    doc.append(MemoryElement::new("button").with_marker(markers::SIDEBAR_TOGGLE));
    doc.append(MemoryElement::new("button").with_marker(markers::NAV_LINK).with_text("About"));
    doc.append(MemoryElement::new("article").with_attr(markers::PAGE_ATTR, "about"));

    let report = init(&doc, Config { debug: false });
    assert!(report.is_bound(sidebar::FEATURE));
    assert!(report.is_bound(navigation::FEATURE));
    assert!(!report.is_bound(testimonials::FEATURE));
    assert!(!report.is_bound(filter::FEATURE));
    assert!(!report.is_bound(contact::FEATURE));
    assert_eq!(report.bound_count(), 2);
}

#[test]
fn report_keeps_binding_order() {
    let report = init(&MemoryDocument::new(), Config::default());
    let names: Vec<Feature> = report.entries().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["sidebar", "testimonials", "filter", "contact", "navigation"]);
}

#[test]
fn unknown_feature_has_no_status() {
    let report = InitReport::default();
    assert_eq!(report.status("blog"), None);
    assert!(!report.is_bound("blog"));
}

#[test]
fn debug_off_init_is_silent() {
    let records = crate::log_capture::capture(|| {
        init(&MemoryDocument::new(), Config { debug: false });
    });
    assert!(records.is_empty(), "{records:?}");
}

#[test]
fn debug_on_init_reports_each_skipped_feature() {
    let records = crate::log_capture::capture(|| {
        init(&MemoryDocument::new(), Config { debug: true });
    });
    let notes = crate::log_capture::at(&records, log::Level::Info);
    for feature in ["sidebar", "testimonials", "filter", "contact", "navigation"] {
        assert!(notes.iter().any(|n| n.starts_with(&format!("{feature}: elements not found"))), "{notes:?}");
    }
}
